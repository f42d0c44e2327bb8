//! Google Forms [`Relay`].

use std::time::Duration;

use common::operations::Perform;
use derive_more::Debug;
use smart_default::SmartDefault;
use tracerr::Traced;

use crate::{
    domain::lead::Inquiry,
    infra::{relay, Relay},
};

/// [`GoogleForm`] configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// URL the form responses are posted to, like
    /// `https://docs.google.com/forms/d/e/{id}/formResponse`.
    pub action_url: String,

    /// [`EntryIds`] of the form fields.
    pub entry_ids: EntryIds,

    /// Timeout of a single request.
    #[default(Duration::from_secs(10))]
    pub timeout: Duration,
}

/// Names of the form fields, like `entry.123456789`.
#[derive(Clone, Debug, Default)]
pub struct EntryIds {
    /// Field of the [`Inquiry::name`].
    pub name: String,

    /// Field of the [`Inquiry::email`].
    pub email: String,

    /// Field of the [`Inquiry::phone`].
    pub phone: String,

    /// Field of the [`Inquiry::property_interest`].
    pub property_interest: String,

    /// Field of the [`Inquiry::message`].
    pub message: String,
}

/// [`Relay`] posting [`Inquiry`]s as Google Form responses.
#[derive(Clone, Debug)]
pub struct GoogleForm {
    /// Underlying HTTP client.
    #[debug(skip)]
    client: reqwest::Client,

    /// URL the form responses are posted to.
    action_url: String,

    /// [`EntryIds`] of the form fields.
    entry_ids: EntryIds,
}

impl GoogleForm {
    /// Creates a new [`GoogleForm`] relay with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the underlying HTTP client cannot be built.
    pub fn new(conf: Config) -> Result<Self, Traced<relay::Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> relay::Error))?;
        Ok(Self {
            client,
            action_url: conf.action_url,
            entry_ids: conf.entry_ids,
        })
    }

    /// Returns the form fields of the provided [`Inquiry`].
    ///
    /// Fields with an empty entry ID are skipped.
    fn fields<'a>(&'a self, inquiry: &'a Inquiry) -> Vec<(&'a str, &'a str)> {
        let ids = &self.entry_ids;
        [
            (ids.name.as_str(), inquiry.name.as_str()),
            (ids.email.as_str(), inquiry.email.as_str()),
            (ids.phone.as_str(), inquiry.phone.as_deref().unwrap_or_default()),
            (
                ids.property_interest.as_str(),
                inquiry.property_interest.as_deref().unwrap_or_default(),
            ),
            (ids.message.as_str(), inquiry.message.as_str()),
        ]
        .into_iter()
        .filter(|(id, _)| !id.is_empty())
        .collect()
    }
}

impl Relay<Perform<Inquiry>> for GoogleForm {
    type Ok = relay::Delivery;
    type Err = Traced<relay::Error>;

    #[tracing::instrument(skip_all, fields(email = %inquiry.email), err(Debug))]
    async fn execute(
        &self,
        Perform(inquiry): Perform<Inquiry>,
    ) -> Result<Self::Ok, Self::Err> {
        let resp = self
            .client
            .post(&self.action_url)
            .form(&self.fields(&inquiry))
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> relay::Error))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(tracerr::new!(relay::Error::Status(status)));
        }

        tracing::info!("inquiry relayed");
        Ok(relay::Delivery::Sent)
    }
}

#[cfg(test)]
mod spec {
    use common::operations::Perform;
    use wiremock::{
        matchers::{body_string_contains, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::{
        domain::lead::Inquiry,
        infra::{relay, Relay},
    };

    use super::{Config, EntryIds, GoogleForm};

    fn relay(server: &MockServer) -> GoogleForm {
        GoogleForm::new(Config {
            action_url: format!("{}/forms/d/e/xyz/formResponse", server.uri()),
            entry_ids: EntryIds {
                name: "entry.1".into(),
                email: "entry.2".into(),
                phone: "entry.3".into(),
                property_interest: String::new(),
                message: "entry.5".into(),
            },
            ..Config::default()
        })
        .unwrap()
    }

    fn inquiry() -> Inquiry {
        Inquiry::new(
            "Jane Doe",
            "jane@example.com",
            Some("+971 50 000 0000"),
            Some("Villa"),
            "Looking for a villa",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn posts_form_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/forms/d/e/xyz/formResponse"))
            .and(body_string_contains("entry.1=Jane+Doe"))
            .and(body_string_contains("entry.2=jane%40example.com"))
            .and(body_string_contains("entry.5=Looking+for+a+villa"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let delivery = relay(&server).execute(Perform(inquiry())).await.unwrap();

        assert_eq!(delivery, relay::Delivery::Sent);
    }

    #[tokio::test]
    async fn reports_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let err = relay(&server)
            .execute(Perform(inquiry()))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), relay::Error::Status(_)));
    }

    #[test]
    fn skips_unmapped_fields() {
        let server_uri = "http://localhost";
        let form = GoogleForm::new(Config {
            action_url: server_uri.into(),
            entry_ids: EntryIds {
                name: "entry.1".into(),
                email: "entry.2".into(),
                ..EntryIds::default()
            },
            ..Config::default()
        })
        .unwrap();
        let inquiry = inquiry();

        assert_eq!(
            form.fields(&inquiry),
            [("entry.1", "Jane Doe"), ("entry.2", "jane@example.com")],
        );
    }
}
