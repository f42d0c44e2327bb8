//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous operation executed against some backend.
///
/// Queries, commands and content store operations are all [`Handler`]s of
/// their argument type, so a single backend type may serve any number of
/// operations distinguished by `Args`.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
