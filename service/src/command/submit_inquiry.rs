//! [`Command`] for submitting a contact form [`Inquiry`].

use common::operations::{By, Perform, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        lead::{Inquiry, InvalidInquiry, WhatsAppLink},
        SiteConfig,
    },
    infra::{content, relay, Content, Relay},
    Service,
};

use super::Command;

/// [`Command`] for submitting a contact form [`Inquiry`].
#[derive(Clone, Debug, Default)]
pub struct SubmitInquiry {
    /// Name of the client.
    pub name: String,

    /// Email of the client.
    pub email: String,

    /// Phone of the client.
    pub phone: Option<String>,

    /// What the client is looking for.
    pub property_interest: Option<String>,

    /// Free-form message.
    pub message: String,
}

/// Result of a [`SubmitInquiry`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// [`relay::Delivery`] of the [`Inquiry`].
    pub delivery: relay::Delivery,

    /// [`WhatsAppLink`] to continue the conversation in a chat, if the
    /// agent's number is known.
    pub whatsapp: Option<WhatsAppLink>,
}

impl<C, R> Command<SubmitInquiry> for Service<C, R>
where
    C: Content<
        Select<By<Option<SiteConfig>, ()>>,
        Ok = Option<SiteConfig>,
        Err = Traced<content::Error>,
    >,
    R: Relay<
        Perform<Inquiry>,
        Ok = relay::Delivery,
        Err = Traced<relay::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SubmitInquiry,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitInquiry {
            name,
            email,
            phone,
            property_interest,
            message,
        } = cmd;

        let inquiry = Inquiry::new(
            &name,
            &email,
            phone.as_deref(),
            property_interest.as_deref(),
            &message,
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        let delivery = self
            .relay()
            .execute(Perform(inquiry))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Delivered inquiry is never failed by the content store.
        let site = self.content().execute(Select(By::new(()))).await;
        let whatsapp = match site {
            Ok(conf) => conf
                .map(|c| c.whatsapp_number)
                .filter(|n| !n.is_empty())
                .map(|n| WhatsAppLink::general(&n)),
            Err(e) => {
                tracing::warn!("failed to load `SiteConfig`: {e}");
                None
            }
        };

        Ok(Output { delivery, whatsapp })
    }
}

/// Error of [`SubmitInquiry`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Inquiry`] is not valid.
    #[display("Invalid inquiry: {_0}")]
    Invalid(InvalidInquiry),

    /// [`Relay`] error.
    #[display("`Relay` operation failed: {_0}")]
    Relay(relay::Error),
}

#[cfg(test)]
mod spec {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use common::operations::Perform;
    use tracerr::Traced;

    use crate::{
        domain::lead::{Inquiry, InvalidInquiry},
        infra::{content::Memory, relay, Relay},
        query::fixture,
        Config, Service,
    };

    use super::{ExecutionError, SubmitInquiry};

    #[derive(Clone, Debug, Default)]
    struct Counting(Arc<AtomicUsize>);

    impl Relay<Perform<Inquiry>> for Counting {
        type Ok = relay::Delivery;
        type Err = Traced<relay::Error>;

        async fn execute(
            &self,
            _: Perform<Inquiry>,
        ) -> Result<Self::Ok, Self::Err> {
            _ = self.0.fetch_add(1, Ordering::SeqCst);
            Ok(relay::Delivery::Sent)
        }
    }

    fn cmd() -> SubmitInquiry {
        SubmitInquiry {
            name: "Omar".into(),
            email: "omar@example.com".into(),
            phone: None,
            property_interest: Some("Penthouse".into()),
            message: "Please call me back".into(),
        }
    }

    #[tokio::test]
    async fn relays_and_links_whatsapp() {
        let relay = Counting::default();
        let svc = Service::new(
            Config::default(),
            fixture::service().content().clone(),
            relay.clone(),
        );

        let out = svc.execute(cmd()).await.unwrap();

        assert_eq!(out.delivery, relay::Delivery::Sent);
        assert_eq!(relay.0.load(Ordering::SeqCst), 1);
        assert!(out
            .whatsapp
            .unwrap()
            .to_string()
            .starts_with("https://wa.me/971501234567?text="));
    }

    #[tokio::test]
    async fn rejects_invalid_inquiry_without_relaying() {
        let relay = Counting::default();
        let svc =
            Service::new(Config::default(), Memory::default(), relay.clone());

        let err = svc
            .execute(SubmitInquiry {
                email: "omar.example.com".into(),
                ..cmd()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::Invalid(InvalidInquiry::InvalidEmail),
        ));
        assert_eq!(relay.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn skips_whatsapp_without_site_config() {
        let svc = Service::new(
            Config::default(),
            Memory::default(),
            relay::Disabled,
        );

        let out = svc.execute(cmd()).await.unwrap();

        assert_eq!(out.delivery, relay::Delivery::Skipped);
        assert!(out.whatsapp.is_none());
    }
}
