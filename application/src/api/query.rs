//! GraphQL [`Query`]s definitions.

use common::{Percent, Price};
use juniper::graphql_object;
use service::{
    query,
    read::{self, listing::list::Params},
    Query as _,
};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns `Listing`s passing the `filter`, ordered by the `sort`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_FILTER` - a `filter` criterion is malformed.
    #[tracing::instrument(
        skip_all,
        fields(
            filter = ?filter,
            gql.name = "listings",
            otel.name = Self::SPAN_NAME,
            sort = ?sort,
        ),
    )]
    pub async fn listings(
        filter: Option<api::listing::list::Filter>,
        sort: Option<api::listing::list::Sort>,
        ctx: &Context,
    ) -> Result<Vec<api::Listing>, Error> {
        let params = Params::from(filter.unwrap_or_default());
        let filter = read::listing::list::Filter::from_params(&params)
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        ctx.service()
            .execute(query::listings::List {
                filter,
                sort: sort.unwrap_or_default().into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ls| ls.into_iter().map(Into::into).collect())
    }

    /// Returns featured `Listing`s, at most `limit` of them.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "featuredListings",
            limit = ?limit,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn featured_listings(
        limit: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<api::Listing>, Error> {
        ctx.service()
            .execute(query::listings::Featured {
                limit: limit.map(|l| usize::try_from(l).unwrap_or_default()),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ls| ls.into_iter().map(Into::into).collect())
    }

    /// Returns the `Listing` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LISTING_NOT_EXISTS` - the `Listing` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "listing",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn listing(
        id: api::listing::Id,
        ctx: &Context,
    ) -> Result<api::Listing, Error> {
        ctx.service()
            .execute(query::listing::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::listing::ListingError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns `Project`s, optionally of the specified `status` only and at
    /// most `limit` of them.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "projects",
            limit = ?limit,
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn projects(
        status: Option<api::project::Status>,
        limit: Option<i32>,
        ctx: &Context,
    ) -> Result<Vec<api::Project>, Error> {
        let filter = read::project::list::Filter {
            status: status.map(Into::into),
            limit: limit.map(|l| usize::try_from(l).unwrap_or_default()),
        };
        ctx.service()
            .execute(query::projects::List::by(filter))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ps| ps.into_iter().map(Into::into).collect())
    }

    /// Returns the `Project` with the specified slug.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified slug does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "project",
            otel.name = Self::SPAN_NAME,
            slug = %slug,
        ),
    )]
    pub async fn project(
        slug: api::neighborhood::Slug,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        ctx.service()
            .execute(query::project::BySlug::by(slug.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::project::ProjectError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns all the `Neighborhood`s, ordered by name.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "neighborhoods",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn neighborhoods(
        ctx: &Context,
    ) -> Result<Vec<api::Neighborhood>, Error> {
        ctx.service()
            .execute(query::neighborhoods::List::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|ns| ns.into_iter().map(Into::into).collect())
    }

    /// Returns the `Neighborhood` with the specified slug.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEIGHBORHOOD_NOT_EXISTS` - the `Neighborhood` with the specified
    ///                               slug does not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "neighborhood",
            otel.name = Self::SPAN_NAME,
            slug = %slug,
        ),
    )]
    pub async fn neighborhood(
        slug: api::neighborhood::Slug,
        ctx: &Context,
    ) -> Result<api::Neighborhood, Error> {
        ctx.service()
            .execute(query::neighborhood::BySlug::by(slug.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| {
                api::neighborhood::NeighborhoodError::NotExists.into()
            })
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the agency-wide `SiteConfig`, if authored.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "siteConfig",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn site_config(
        ctx: &Context,
    ) -> Result<Option<api::SiteConfig>, Error> {
        ctx.service()
            .execute(query::site::Config::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|c| c.map(Into::into))
    }

    /// Calculates a `Mortgage` for a property of the specified `price`.
    ///
    /// Omitted parameters take their default values.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_LOAN_PARAMETERS` - the provided parameters cannot describe
    ///                               a loan.
    #[tracing::instrument(
        skip_all,
        fields(
            down_payment = ?down_payment,
            gql.name = "mortgage",
            interest_rate = ?interest_rate,
            loan_term = ?loan_term,
            otel.name = Self::SPAN_NAME,
            price = %price,
        ),
    )]
    pub fn mortgage(
        price: Price,
        down_payment: Option<Percent>,
        interest_rate: Option<Percent>,
        loan_term: Option<i32>,
        ctx: &Context,
    ) -> Result<api::Mortgage, Error> {
        api::Mortgage::calculate(price, down_payment, interest_rate, loan_term)
            .map_err(ctx.error())
    }

    /// Returns defaults and suggested ranges of the `Mortgage` calculator
    /// inputs.
    #[must_use]
    pub fn mortgage_settings() -> api::mortgage::MortgageSettings {
        api::mortgage::MortgageSettings::current()
    }
}

#[cfg(test)]
mod spec {
    use juniper::graphql_value;

    use crate::api::fixture;

    #[tokio::test]
    async fn returns_featured_listings_in_order() {
        let (_, res) =
            fixture::execute("{ featuredListings(limit: 5) { id } }").await;

        let (data, errs) = res.unwrap();
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            data,
            graphql_value!({"featuredListings": [{"id": "v1"}, {"id": "a1"}]}),
        );
    }

    #[tokio::test]
    async fn calculates_mortgage() {
        let (_, res) = fixture::execute(
            r#"{
                mortgage(price: "2,000,000", downPayment: 25, loanTerm: 25) {
                    loanAmount
                    numberOfPayments
                }
            }"#,
        )
        .await;

        let (data, errs) = res.unwrap();
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            data,
            graphql_value!({
                "mortgage": {"loanAmount": 1_500_000.0, "numberOfPayments": 300},
            }),
        );
    }

    #[tokio::test]
    async fn rejects_zero_loan_term() {
        let (ctx, res) = fixture::execute(
            "{ mortgage(price: 2000000, loanTerm: 0) { monthlyPayment } }",
        )
        .await;

        let (_, errs) = res.unwrap();
        assert_eq!(errs.len(), 1);
        assert_eq!(ctx.error_status_code(), http::StatusCode::BAD_REQUEST);
    }
}
