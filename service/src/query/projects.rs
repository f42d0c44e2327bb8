//! [`Query`] collection related to multiple [`Project`]s.

use common::operations::By;

use crate::{domain::Project, read};
#[cfg(doc)]
use crate::{domain::project::Status, Query};

use super::ContentQuery;

/// Queries a list of [`Project`]s, optionally of a single [`Status`] and
/// capped by a limit.
pub type List = ContentQuery<By<Vec<Project>, read::project::list::Filter>>;
