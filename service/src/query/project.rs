//! [`Query`] collection related to a single [`Project`].

use common::operations::By;

use crate::domain::{neighborhood::Slug, Project};
#[cfg(doc)]
use crate::Query;

use super::ContentQuery;

/// Queries a [`Project`] by its [`Slug`].
pub type BySlug = ContentQuery<By<Option<Project>, Slug>>;
