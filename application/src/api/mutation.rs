//! GraphQL [`Mutation`]s definitions.

use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLObject};
use service::{
    command::{self, submit_inquiry},
    domain::lead::InvalidInquiry,
    infra::relay,
    Command as _,
};

use crate::{define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Submits a contact form `Inquiry` to the agent.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_INQUIRY` - the name is blank or the email is malformed;
    /// - `INQUIRY_NOT_DELIVERED` - the `Inquiry` cannot be forwarded to the
    ///                             agent at the moment.
    #[tracing::instrument(
        skip_all,
        fields(
            email = %inquiry.email,
            gql.name = "submitInquiry",
            otel.name = Self::SPAN_NAME,
            property_interest = ?inquiry.property_interest,
        ),
    )]
    pub async fn submit_inquiry(
        inquiry: Inquiry,
        ctx: &Context,
    ) -> Result<InquiryResult, Error> {
        ctx.service()
            .execute(command::SubmitInquiry::from(inquiry))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

/// Contact form `Inquiry` of a client.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct Inquiry {
    /// Name of the client.
    pub name: String,

    /// Email of the client.
    pub email: String,

    /// Phone of the client.
    pub phone: Option<String>,

    /// What the client is looking for, like `3 BR villa`.
    pub property_interest: Option<String>,

    /// Free-form message.
    #[graphql(default)]
    pub message: String,
}

impl From<Inquiry> for command::SubmitInquiry {
    fn from(inquiry: Inquiry) -> Self {
        let Inquiry {
            name,
            email,
            phone,
            property_interest,
            message,
        } = inquiry;
        Self {
            name,
            email,
            phone,
            property_interest,
            message,
        }
    }
}

/// Result of an `Inquiry` submission.
#[derive(Clone, Debug, GraphQLObject)]
pub struct InquiryResult {
    /// Outcome of the `Inquiry` delivery.
    pub delivery: Delivery,

    /// WhatsApp chat URL to continue the conversation, if the agent's number
    /// is known.
    pub whatsapp_url: Option<String>,
}

impl From<submit_inquiry::Output> for InquiryResult {
    fn from(output: submit_inquiry::Output) -> Self {
        let submit_inquiry::Output { delivery, whatsapp } = output;
        Self {
            delivery: delivery.into(),
            whatsapp_url: whatsapp.map(|l| l.to_string()),
        }
    }
}

/// Outcome of an `Inquiry` delivery.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "InquiryDelivery")]
pub enum Delivery {
    /// `Inquiry` was forwarded to the agent.
    Sent,

    /// `Inquiry` was accepted, but no delivery channel is configured.
    Skipped,
}

impl From<relay::Delivery> for Delivery {
    fn from(delivery: relay::Delivery) -> Self {
        match delivery {
            relay::Delivery::Sent => Self::Sent,
            relay::Delivery::Skipped => Self::Skipped,
        }
    }
}

impl AsError for InvalidInquiry {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_INQUIRY"]
                #[status = BAD_REQUEST]
                #[message = "Provided inquiry is not valid"]
                InvalidInquiry,
            }
        }

        let mut err: crate::Error = Error::InvalidInquiry.into();
        err.message = format!("{}: {self}", err.message);
        Some(err)
    }
}

impl AsError for submit_inquiry::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Invalid(e) => e.try_as_error(),
            Self::Relay(e) => e.try_as_error(),
        }
    }
}

#[cfg(test)]
mod spec {
    use juniper::graphql_value;

    use crate::api::fixture;

    #[tokio::test]
    async fn accepts_inquiry_without_relay() {
        let (_, res) = fixture::execute(
            r#"mutation {
                submitInquiry(inquiry: {
                    name: "Omar",
                    email: "omar@example.com",
                    message: "Call me back",
                }) {
                    delivery
                    whatsappUrl
                }
            }"#,
        )
        .await;

        let (data, errs) = res.unwrap();
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            data,
            graphql_value!({
                "submitInquiry": {
                    "delivery": "SKIPPED",
                    "whatsappUrl": "https://wa.me/971501234567?text=\
                        Hello%2C%20I%20am%20interested%20in%20your\
                        %20properties.",
                },
            }),
        );
    }

    #[tokio::test]
    async fn rejects_malformed_email() {
        let (ctx, res) = fixture::execute(
            r#"mutation {
                submitInquiry(inquiry: {name: "Omar", email: "omar"}) {
                    delivery
                }
            }"#,
        )
        .await;

        let (_, errs) = res.unwrap();
        assert_eq!(errs.len(), 1);
        assert_eq!(
            errs[0].error().message(),
            "Provided inquiry is not valid: Email must be a valid email \
             address",
        );
        assert_eq!(ctx.error_status_code(), http::StatusCode::BAD_REQUEST);
    }
}
