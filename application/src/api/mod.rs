//! GraphQL API definitions.

pub mod listing;
pub mod mortgage;
mod mutation;
pub mod neighborhood;
pub mod project;
mod query;
pub mod scalar;
pub mod site;

use juniper::EmptySubscription;

use crate::Context;

pub use self::{
    listing::Listing,
    mortgage::Mortgage,
    mutation::Mutation,
    neighborhood::Neighborhood,
    project::Project,
    query::Query,
    site::SiteConfig,
};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Creates a new [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

/// Facility located near a `Listing` or inside a `Neighborhood`.
#[derive(Clone, Debug, juniper::GraphQLObject)]
pub struct Facility {
    /// Name of this `Facility`.
    pub name: String,

    /// Human-readable distance to this `Facility`, like `5 min`.
    pub distance: String,

    /// Kind of this `Facility`, like `school` or `mall`.
    #[graphql(name = "type")]
    pub kind: Option<String>,
}

impl From<service::domain::Facility> for Facility {
    fn from(facility: service::domain::Facility) -> Self {
        let service::domain::Facility {
            name,
            distance,
            kind,
        } = facility;
        Self {
            name,
            distance,
            kind,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    //! Shared [`Context`] fixture.

    use juniper::DefaultScalarValue;
    use service::infra::{content, relay};

    use crate::{Context, Service};

    /// Content document the [`context()`] is backed with.
    pub(crate) const DOCUMENT: &str = r#"{
        "properties": [
            {
                "id": "v1",
                "title": "Signature Villa",
                "price": 12500000,
                "location": "Palm Jumeirah",
                "neighborhood": "Palm Jumeirah",
                "type": "villa",
                "bedrooms": 5,
                "bathrooms": 6,
                "area": 7500,
                "featured": true,
                "description": "Beachfront villa"
            },
            {
                "id": "a1",
                "title": "Marina View",
                "price": 1800000,
                "location": "Dubai Marina",
                "neighborhood": "Dubai Marina",
                "type": "apartment",
                "bedrooms": 2,
                "bathrooms": 2,
                "area": 1200,
                "featured": true
            },
            {
                "id": "v2",
                "title": "Garden Villa",
                "price": 4200000,
                "location": "Arabian Ranches",
                "neighborhood": "Arabian Ranches",
                "type": "villa",
                "bedrooms": 4,
                "bathrooms": 4,
                "area": 3900
            }
        ],
        "projects": [
            {
                "id": "pr1",
                "title": "Creek Vista",
                "slug": "creek-vista",
                "status": "under-construction"
            }
        ],
        "neighborhoods": [
            {
                "slug": "palm-jumeirah",
                "name": "Palm Jumeirah",
                "description": "Iconic island"
            }
        ],
        "siteConfig": {
            "siteName": "Dubai Homes",
            "contactPhone": "+971 50 123 4567",
            "contactEmail": "agent@example.com",
            "whatsappNumber": "+971 50 123 4567"
        }
    }"#;

    /// Creates a new [`Context`] backed by the [`DOCUMENT`].
    pub(crate) fn context() -> Context {
        let snapshot = content::json::parse(DOCUMENT).unwrap();
        Context::new(Service::new(
            service::Config::default(),
            content::Memory::from(snapshot).into(),
            relay::Channel::default(),
        ))
    }

    /// Result of a GraphQL operation execution.
    pub(crate) type Response = Result<
        (juniper::Value, Vec<juniper::ExecutionError<DefaultScalarValue>>),
        juniper::GraphQLError,
    >;

    /// Executes the provided GraphQL `query` against a fresh [`context()`].
    pub(crate) async fn execute(query: &str) -> (Context, Response) {
        let ctx = context();
        let res = juniper::execute(
            query,
            None,
            &super::schema(),
            &juniper::Variables::new(),
            &ctx,
        )
        .await;
        (ctx, res)
    }
}
