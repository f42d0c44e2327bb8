//! [`Relay`] implementations forwarding [`Inquiry`]s to the agent.

pub mod disabled;
pub mod google_form;

use common::operations::Perform;
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::domain::lead::Inquiry;

pub use self::{disabled::Disabled, google_form::GoogleForm};

/// Operation delivering an [`Inquiry`] somewhere.
pub use common::Handler as Relay;

/// Outcome of a [`Relay`] operation.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Delivery {
    /// [`Inquiry`] was delivered.
    #[display("sent")]
    Sent,

    /// [`Inquiry`] was accepted, but not delivered anywhere.
    #[display("skipped")]
    Skipped,
}

/// [`Relay`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Request to the endpoint failed.
    #[display("Relay request failed: {_0}")]
    Http(reqwest::Error),

    /// Endpoint responded with a non-success status.
    #[display("Relay endpoint responded with `{_0}` status")]
    Status(#[error(not(source))] reqwest::StatusCode),
}

/// [`Relay`] selected by configuration.
#[derive(Clone, Debug, From)]
pub enum Channel {
    /// [`Disabled`] relay.
    Disabled(Disabled),

    /// [`GoogleForm`] relay.
    GoogleForm(GoogleForm),
}

impl Default for Channel {
    fn default() -> Self {
        Self::Disabled(Disabled)
    }
}

impl Relay<Perform<Inquiry>> for Channel {
    type Ok = Delivery;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        op: Perform<Inquiry>,
    ) -> Result<Self::Ok, Self::Err> {
        match self {
            Self::Disabled(d) => d.execute(op).await.map_err(tracerr::wrap!()),
            Self::GoogleForm(f) => {
                f.execute(op).await.map_err(tracerr::wrap!())
            }
        }
    }
}
