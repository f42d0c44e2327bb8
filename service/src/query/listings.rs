//! [`Query`] collection related to multiple [`Listing`]s.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::Listing,
    infra::{content, Content},
    read::{
        self,
        listing::list::{Filter, Sort},
    },
    Service,
};

use super::Query;

/// Queries [`Listing`]s passing the [`Filter`], ordered by the [`Sort`].
#[derive(Clone, Debug, Default)]
pub struct List {
    /// [`Filter`] to apply.
    pub filter: Filter,

    /// [`Sort`] to order by.
    pub sort: Sort,
}

impl<C, R> Query<List> for Service<C, R>
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
        List { filter, sort }: List,
    ) -> Result<Self::Ok, Self::Err> {
        let listings = self
            .content()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(read::listing::list::filter_and_sort(&listings, &filter, sort)
            .into_iter()
            .cloned()
            .collect())
    }
}

/// Queries featured [`Listing`]s.
#[derive(Clone, Copy, Debug)]
pub struct Featured {
    /// Maximum number of [`Listing`]s to return.
    ///
    /// [`Config::featured_limit`] is used if [`None`].
    ///
    /// [`Config::featured_limit`]: crate::Config::featured_limit
    pub limit: Option<usize>,
}

impl<C, R> Query<Featured> for Service<C, R>
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
        Featured { limit }: Featured,
    ) -> Result<Self::Ok, Self::Err> {
        let listings = self
            .content()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let limit = limit.unwrap_or(self.config().featured_limit);
        Ok(read::listing::featured(&listings, limit)
            .into_iter()
            .cloned()
            .collect())
    }
}
