//! In-memory [`Content`] store.

use std::sync::Arc;

use common::operations::{By, Select};
use derive_more::Deref;
use serde::Deserialize;
use tracerr::Traced;

use crate::{
    domain::{
        listing, neighborhood::Slug, Listing, Neighborhood, Project,
        SiteConfig,
    },
    infra::{content, Content},
    read,
};

/// Whole content of the site at some moment.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    /// [`Listing`]s, newest first.
    pub properties: Vec<Listing>,

    /// [`Project`]s, newest first.
    pub projects: Vec<Project>,

    /// [`Neighborhood`]s.
    pub neighborhoods: Vec<Neighborhood>,

    /// [`SiteConfig`], if authored.
    pub site_config: Option<SiteConfig>,
}

/// [`Content`] store serving an immutable [`Snapshot`].
#[derive(Clone, Debug, Default, Deref)]
pub struct Memory(Arc<Snapshot>);

impl From<Snapshot> for Memory {
    fn from(snapshot: Snapshot) -> Self {
        Self(Arc::new(snapshot))
    }
}

impl Content<Select<By<Vec<Listing>, ()>>> for Memory {
    type Ok = Vec<Listing>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Listing>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.properties.clone())
    }
}

impl Content<Select<By<Option<Listing>, listing::Id>>> for Memory {
    type Ok = Option<Listing>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.properties.iter().find(|l| l.id == id).cloned())
    }
}

impl Content<Select<By<Vec<Project>, read::project::list::Filter>>>
    for Memory
{
    type Ok = Vec<Project>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Project>, read::project::list::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(by
            .inner()
            .apply(&self.projects)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl Content<Select<By<Option<Project>, Slug>>> for Memory {
    type Ok = Option<Project>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Project>, Slug>>,
    ) -> Result<Self::Ok, Self::Err> {
        let slug = by.into_inner();
        Ok(self.projects.iter().find(|p| p.slug == slug).cloned())
    }
}

impl Content<Select<By<Vec<Neighborhood>, ()>>> for Memory {
    type Ok = Vec<Neighborhood>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Neighborhood>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut neighborhoods = self.neighborhoods.clone();
        neighborhoods.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(neighborhoods)
    }
}

impl Content<Select<By<Option<Neighborhood>, Slug>>> for Memory {
    type Ok = Option<Neighborhood>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Neighborhood>, Slug>>,
    ) -> Result<Self::Ok, Self::Err> {
        let slug = by.into_inner();
        Ok(self.neighborhoods.iter().find(|n| n.slug == slug).cloned())
    }
}

impl Content<Select<By<Option<SiteConfig>, ()>>> for Memory {
    type Ok = Option<SiteConfig>;
    type Err = Traced<content::Error>;

    async fn execute(
        &self,
        _: Select<By<Option<SiteConfig>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.site_config.clone())
    }
}
