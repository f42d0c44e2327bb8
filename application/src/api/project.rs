//! [`Project`]-related definitions.

use common::Price;
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::domain::{self, lead::WhatsAppLink};

use crate::{api, define_error, Context, Error};

/// An off-plan development project.
#[derive(Clone, Debug, From, Into)]
pub struct Project(domain::Project);

/// An off-plan development project.
#[graphql_object(context = Context)]
impl Project {
    /// Unique identifier of this `Project`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.clone().into()
    }

    /// Title of this `Project`.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.0.title
    }

    /// URL slug of this `Project`.
    #[must_use]
    pub fn slug(&self) -> api::neighborhood::Slug {
        self.0.slug.clone().into()
    }

    /// Developer building this `Project`.
    #[must_use]
    pub fn developer(&self) -> Option<&str> {
        self.0.developer.as_deref()
    }

    /// Location of this `Project`.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.0.location.as_deref()
    }

    /// Lowest price of a unit.
    #[must_use]
    pub fn starting_price(&self) -> Option<Price> {
        self.0.starting_price
    }

    /// Lowest price of a unit formatted for cards, like `AED 1.2M`.
    #[must_use]
    pub fn starting_price_label(&self) -> Option<String> {
        self.0.starting_price.map(Price::compact)
    }

    /// Expected completion, like `Q4 2027`.
    #[must_use]
    pub fn completion_date(&self) -> Option<&str> {
        self.0.completion_date.as_deref()
    }

    /// Payment plan, like `60/40`.
    #[must_use]
    pub fn payment_plan(&self) -> Option<&str> {
        self.0.payment_plan.as_deref()
    }

    /// URL of the main image.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.0.image.as_deref()
    }

    /// URLs of the gallery images.
    #[must_use]
    pub fn images(&self) -> Vec<String> {
        self.0.images.clone()
    }

    /// Description of this `Project`.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Selling points of this `Project`.
    #[must_use]
    pub fn highlights(&self) -> Vec<String> {
        self.0.highlights.clone()
    }

    /// Amenities of this `Project`.
    #[must_use]
    pub fn amenities(&self) -> Vec<String> {
        self.0.amenities.clone()
    }

    /// Available unit types, like `2 BR Apartment`.
    #[must_use]
    pub fn unit_types(&self) -> Vec<String> {
        self.0.unit_types.clone()
    }

    /// Construction status of this `Project`.
    #[must_use]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }

    /// Human-readable construction status, like `Under Construction`.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        self.0.status.label()
    }

    /// Indicator whether this `Project` is promoted.
    #[must_use]
    pub fn featured(&self) -> bool {
        self.0.featured
    }

    /// URL of the brochure.
    #[must_use]
    pub fn brochure_url(&self) -> Option<&str> {
        self.0.brochure_url.as_deref()
    }

    /// URL of the developer's website.
    #[must_use]
    pub fn website_url(&self) -> Option<&str> {
        self.0.website_url.as_deref()
    }

    /// WhatsApp chat URL with a message prefilled for this `Project`.
    ///
    /// `null` if the agent's WhatsApp number is not configured.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.whatsappUrl",
            otel.name = api::Query::SPAN_NAME,
            slug = %self.0.slug,
        ),
    )]
    pub async fn whatsapp_url(
        &self,
        ctx: &Context,
    ) -> Result<Option<String>, Error> {
        Ok(api::site::whatsapp_number(ctx)
            .await?
            .map(|n| WhatsAppLink::for_project(&n, &self.0).to_string()))
    }
}

/// Unique identifier of a `Project`.
#[derive(Clone, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::project::Id)]
#[into(domain::project::Id)]
#[graphql(name = "ProjectId", transparent)]
pub struct Id(String);

/// Construction status of a `Project`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ProjectStatus")]
pub enum Status {
    /// Sales just started.
    NewlyLaunched,

    /// Being built.
    UnderConstruction,

    /// Announced, sales not started yet.
    ComingSoon,

    /// Handed over.
    Completed,
}

impl From<domain::project::Status> for Status {
    fn from(status: domain::project::Status) -> Self {
        use domain::project::Status as S;
        match status {
            S::NewlyLaunched => Self::NewlyLaunched,
            S::UnderConstruction => Self::UnderConstruction,
            S::ComingSoon => Self::ComingSoon,
            S::Completed => Self::Completed,
        }
    }
}

impl From<Status> for domain::project::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::NewlyLaunched => Self::NewlyLaunched,
            Status::UnderConstruction => Self::UnderConstruction,
            Status::ComingSoon => Self::ComingSoon,
            Status::Completed => Self::Completed,
        }
    }
}

define_error! {
    enum ProjectError {
        #[code = "PROJECT_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Project` with the specified slug does not exist"]
        NotExists,
    }
}

#[cfg(test)]
mod spec {
    use juniper::graphql_value;

    use crate::api::fixture;

    #[tokio::test]
    async fn lists_projects_by_status() {
        let (_, res) = fixture::execute(
            r#"{
                all: projects { slug status statusLabel }
                launched: projects(status: NEWLY_LAUNCHED) { slug }
                capped: projects(limit: 0) { slug }
            }"#,
        )
        .await;

        let (data, errs) = res.unwrap();
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            data,
            graphql_value!({
                "all": [{
                    "slug": "creek-vista",
                    "status": "UNDER_CONSTRUCTION",
                    "statusLabel": "Under Construction",
                }],
                "launched": [],
                "capped": [],
            }),
        );
    }

    #[tokio::test]
    async fn fails_on_unknown_project() {
        let (ctx, res) =
            fixture::execute(r#"{ project(slug: "nope") { id } }"#).await;

        let (_, errs) = res.unwrap();
        assert_eq!(errs.len(), 1);
        assert_eq!(ctx.error_status_code(), http::StatusCode::NOT_FOUND);
    }
}
