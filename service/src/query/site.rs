//! [`Query`] collection related to the [`SiteConfig`].

use common::operations::By;

use crate::domain::SiteConfig;
#[cfg(doc)]
use crate::Query;

use super::ContentQuery;

/// Queries the [`SiteConfig`], if authored.
pub type Config = ContentQuery<By<Option<SiteConfig>, ()>>;
