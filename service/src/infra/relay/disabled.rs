//! [`Relay`] delivering nothing.

use common::operations::Perform;
use tracerr::Traced;

use crate::{
    domain::lead::Inquiry,
    infra::{relay, Relay},
};

/// [`Relay`] accepting every [`Inquiry`] without delivering it anywhere.
///
/// Used in demo deployments having no form endpoint configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct Disabled;

impl Relay<Perform<Inquiry>> for Disabled {
    type Ok = relay::Delivery;
    type Err = Traced<relay::Error>;

    async fn execute(
        &self,
        Perform(inquiry): Perform<Inquiry>,
    ) -> Result<Self::Ok, Self::Err> {
        tracing::info!(
            name = %inquiry.name,
            email = %inquiry.email,
            "inquiry accepted, relay is disabled",
        );
        Ok(relay::Delivery::Skipped)
    }
}
