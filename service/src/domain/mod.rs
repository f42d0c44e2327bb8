//! Domain definitions.

pub mod lead;
pub mod listing;
pub mod mortgage;
pub mod neighborhood;
pub mod project;
pub mod site;

use serde::{Deserialize, Deserializer};

pub use self::{
    listing::Listing, neighborhood::Neighborhood, project::Project,
    site::SiteConfig,
};

/// Facility located near a [`Listing`] or inside a [`Neighborhood`].
#[derive(Clone, Debug, Deserialize, PartialEq, serde::Serialize)]
pub struct Facility {
    /// Name of this [`Facility`].
    pub name: String,

    /// Free-form distance, like `5 min walk` or `2 km`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: String,

    /// Category of this [`Facility`], like `School` or `Metro`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Deserializes an explicit `null` as the [`Default`] value.
///
/// The content API projects absent fields as `null` rather than omitting
/// them.
pub(crate) fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}
