//! [`Neighborhood`] definitions.

use std::{convert::Infallible, str::FromStr, sync::LazyLock};

use derive_more::{AsRef, Display};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{null_as_default, Facility, Listing};

/// Area of the city having its own landing page.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    /// URL [`Slug`] of this [`Neighborhood`].
    pub slug: Slug,

    /// Display name, like `Palm Jumeirah`.
    pub name: String,

    /// URL of the main image.
    #[serde(default)]
    pub image: Option<String>,

    /// Short description for cards.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Long description for the landing page.
    #[serde(default)]
    pub full_description: Option<String>,

    /// URLs of the gallery images.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// [`Facility`]s in this [`Neighborhood`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub facilities: Vec<Facility>,

    /// Selling points.
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

impl Neighborhood {
    /// Checks whether the provided [`Listing`] belongs to this
    /// [`Neighborhood`] by either its neighborhood or its location.
    #[must_use]
    pub fn contains(&self, listing: &Listing) -> bool {
        listing.neighborhood == self.name || listing.location == self.name
    }
}

/// Normalized location key: lower-cased, with whitespace runs replaced by a
/// single hyphen.
///
/// `"Dubai  Marina"` and `"dubai-marina"` produce the same [`Slug`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Normalizes the provided `name` into a [`Slug`].
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        static WHITESPACE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

        let name = name.as_ref().trim().to_lowercase();
        Self(WHITESPACE.replace_all(&name, "-").into_owned())
    }

    /// Checks whether the provided free-text `name` normalizes into this
    /// [`Slug`].
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        Self::new(name) == *self
    }
}

impl From<&str> for Slug {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl FromStr for Slug {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(d).map(Self::new)
    }
}

#[cfg(test)]
mod spec {
    use super::Slug;

    #[test]
    fn normalizes_whitespace_and_case() {
        assert_eq!(Slug::new("Dubai Marina").to_string(), "dubai-marina");
        assert_eq!(Slug::new("Palm   Jumeirah").to_string(), "palm-jumeirah");
        assert_eq!(Slug::new(" JBR ").to_string(), "jbr");
        assert_eq!(Slug::new("Downtown\tDubai").to_string(), "downtown-dubai");
        assert_eq!(Slug::new("business-bay").to_string(), "business-bay");
    }

    #[test]
    fn matches_free_text() {
        let slug = Slug::new("arabian-ranches");

        assert!(slug.matches("Arabian Ranches"));
        assert!(slug.matches("ARABIAN  RANCHES"));
        assert!(!slug.matches("Arabian Ranches 2"));
    }
}
