//! [`Neighborhood`]-related definitions.

use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query, Query as _};

use crate::{
    api::{self, scalar},
    define_error, AsError, Context, Error,
};

/// An area of the city having its own landing page.
#[derive(Clone, Debug, From, Into)]
pub struct Neighborhood(domain::Neighborhood);

/// An area of the city having its own landing page.
#[graphql_object(context = Context)]
impl Neighborhood {
    /// URL slug of this `Neighborhood`.
    #[must_use]
    pub fn slug(&self) -> Slug {
        self.0.slug.clone().into()
    }

    /// Name of this `Neighborhood`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// URL of the main image.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.0.image.as_deref()
    }

    /// Short description for cards.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.0.description
    }

    /// Long description for the landing page.
    #[must_use]
    pub fn full_description(&self) -> Option<&str> {
        self.0.full_description.as_deref()
    }

    /// URLs of the gallery images.
    #[must_use]
    pub fn images(&self) -> Vec<String> {
        self.0.images.clone()
    }

    /// Facilities in this `Neighborhood`.
    #[must_use]
    pub fn facilities(&self) -> Vec<api::Facility> {
        self.0.facilities.iter().cloned().map(Into::into).collect()
    }

    /// Selling points of this `Neighborhood`.
    #[must_use]
    pub fn highlights(&self) -> Vec<String> {
        self.0.highlights.clone()
    }

    /// `Listing`s located in this `Neighborhood`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Neighborhood.listings",
            otel.name = api::Query::SPAN_NAME,
            slug = %self.0.slug,
        ),
    )]
    pub async fn listings(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Listing>, Error> {
        ctx.service()
            .execute(query::neighborhood::Listings { of: self.0.clone() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ls| ls.into_iter().map(Into::into).collect())
    }
}

/// URL slug of a `Neighborhood` or a `Project`.
///
/// Input is normalized, so `Dubai  Marina` is the same as `dubai-marina`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(with = scalar::Via::<domain::neighborhood::Slug>)]
pub struct Slug(domain::neighborhood::Slug);

define_error! {
    enum NeighborhoodError {
        #[code = "NEIGHBORHOOD_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Neighborhood` with the specified slug does not exist"]
        NotExists,
    }
}

#[cfg(test)]
mod spec {
    use juniper::graphql_value;

    use crate::api::fixture;

    #[tokio::test]
    async fn resolves_neighborhood_listings_by_free_text_slug() {
        let (_, res) = fixture::execute(
            r#"{
                neighborhood(slug: "Palm Jumeirah") {
                    slug
                    listings { id }
                }
            }"#,
        )
        .await;

        let (data, errs) = res.unwrap();
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            data,
            graphql_value!({
                "neighborhood": {
                    "slug": "palm-jumeirah",
                    "listings": [{"id": "v1"}],
                },
            }),
        );
    }
}
