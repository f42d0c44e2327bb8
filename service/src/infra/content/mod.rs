//! [`Content`] store implementations.

pub mod json;
pub mod memory;
pub mod sanity;

use std::io;

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

pub use self::{
    memory::{Memory, Snapshot},
    sanity::Sanity,
};

/// Content store operation.
pub use common::Handler as Content;

/// [`Content`] store error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read a content file.
    #[display("Failed to read content file: {_0}")]
    Io(io::Error),

    /// Content document is not valid.
    #[display("Malformed content JSON: {_0}")]
    Json(serde_json::Error),

    /// Content API request failed.
    #[display("Content API request failed: {_0}")]
    Http(reqwest::Error),

    /// Content API responded with a non-success status.
    #[display("Content API responded with `{_0}` status")]
    Status(#[error(not(source))] reqwest::StatusCode),
}

/// [`Content`] store selected by configuration.
#[derive(Clone, Debug, From)]
pub enum Source {
    /// [`Memory`] snapshot, usually loaded from a [`json`] file.
    Memory(Memory),

    /// [`Sanity`] CMS.
    Sanity(Sanity),
}

impl<W, B> Content<Select<By<W, B>>> for Source
where
    Memory: Content<Select<By<W, B>>, Ok = W, Err = Traced<Error>>,
    Sanity: Content<Select<By<W, B>>, Ok = W, Err = Traced<Error>>,
{
    type Ok = W;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        op: Select<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        match self {
            Self::Memory(m) => m.execute(op).await.map_err(tracerr::wrap!()),
            Self::Sanity(s) => s.execute(op).await.map_err(tracerr::wrap!()),
        }
    }
}
