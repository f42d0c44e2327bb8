//! [`Query`] collection related to a single [`Listing`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    infra::{content, Content},
    read, Service,
};

use super::{ContentQuery, Query};

/// Queries a [`Listing`] by its [`listing::Id`].
pub type ById = ContentQuery<By<Option<Listing>, listing::Id>>;

/// Queries [`Listing`]s of the same type as the provided one.
#[derive(Clone, Debug)]
pub struct Similar {
    /// [`Listing`] to find similar ones to.
    pub to: Listing,

    /// Maximum number of [`Listing`]s to return.
    ///
    /// [`Config::similar_limit`] is used if [`None`].
    ///
    /// [`Config::similar_limit`]: crate::Config::similar_limit
    pub limit: Option<usize>,
}

impl<C, R> Query<Similar> for Service<C, R>
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
        Similar { to, limit }: Similar,
    ) -> Result<Self::Ok, Self::Err> {
        let listings = self
            .content()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let limit = limit.unwrap_or(self.config().similar_limit);
        Ok(read::listing::similar(&listings, &to, limit)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod spec {
    use crate::{domain::listing, query::fixture, Query as _};

    use super::{ById, Similar};

    #[tokio::test]
    async fn finds_by_id() {
        let svc = fixture::service();

        let found = svc
            .execute(ById::by(listing::Id::from("a2")))
            .await
            .unwrap();
        assert_eq!(found.map(|l| l.title).as_deref(), Some("Apartment a2"));

        let missing = svc
            .execute(ById::by(listing::Id::from("nope")))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn finds_similar() {
        let svc = fixture::service();
        let villa = svc
            .execute(ById::by(listing::Id::from("v2")))
            .await
            .unwrap()
            .unwrap();

        let similar = svc
            .execute(Similar {
                to: villa,
                limit: None,
            })
            .await
            .unwrap();

        let ids = similar
            .iter()
            .map(|l| l.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["v1", "v3"]);
    }
}
