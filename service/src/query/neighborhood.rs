//! [`Query`] collection related to a single [`Neighborhood`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{neighborhood::Slug, Listing, Neighborhood},
    infra::{content, Content},
    read, Service,
};

use super::{ContentQuery, Query};

/// Queries a [`Neighborhood`] by its [`Slug`].
pub type BySlug = ContentQuery<By<Option<Neighborhood>, Slug>>;

/// Queries [`Listing`]s located in a [`Neighborhood`].
#[derive(Clone, Debug)]
pub struct Listings {
    /// [`Neighborhood`] to query [`Listing`]s in.
    pub of: Neighborhood,
}

impl<C, R> Query<Listings> for Service<C, R>
where
    C: Content<
        Select<By<Vec<Listing>, ()>>,
        Ok = Vec<Listing>,
        Err = Traced<content::Error>,
    >,
{
    type Ok = Vec<Listing>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Listings { of }: Listings,
    ) -> Result<Self::Ok, Self::Err> {
        let listings = self
            .content()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::neighborhood::listings_in(&listings, &of)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod spec {
    use crate::{domain::neighborhood::Slug, query::fixture, Query as _};

    use super::{BySlug, Listings};

    #[tokio::test]
    async fn lists_neighborhood_listings() {
        let svc = fixture::service();
        let palm = svc
            .execute(BySlug::by(Slug::new("Palm Jumeirah")))
            .await
            .unwrap()
            .unwrap();

        let listings = svc.execute(Listings { of: palm }).await.unwrap();

        let ids = listings
            .iter()
            .map(|l| l.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["v1", "v3"]);
    }
}
