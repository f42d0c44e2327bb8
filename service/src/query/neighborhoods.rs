//! [`Query`] collection related to multiple [`Neighborhood`]s.

use common::operations::By;

use crate::domain::Neighborhood;
#[cfg(doc)]
use crate::Query;

use super::ContentQuery;

/// Queries all [`Neighborhood`]s, ordered by name.
pub type List = ContentQuery<By<Vec<Neighborhood>, ()>>;
