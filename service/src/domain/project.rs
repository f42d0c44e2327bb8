//! [`Project`] definitions.

use common::{define_kind, Price};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Deserializer, Serialize};

use super::{neighborhood::Slug, null_as_default};

/// Development project sold off-plan by a developer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// ID of this [`Project`].
    pub id: Id,

    /// Name of this [`Project`], like `Bugatti Residences`.
    pub title: String,

    /// URL [`Slug`] of this [`Project`].
    pub slug: Slug,

    /// Developer building this [`Project`].
    #[serde(default)]
    pub developer: Option<String>,

    /// Area this [`Project`] is located in.
    #[serde(default)]
    pub location: Option<String>,

    /// Minimum unit [`Price`].
    #[serde(default)]
    pub starting_price: Option<Price>,

    /// Free-form expected completion, like `Q4 2027`.
    #[serde(default)]
    pub completion_date: Option<String>,

    /// Free-form payment plan, like `60/40`.
    #[serde(default)]
    pub payment_plan: Option<String>,

    /// URL of the cover image.
    #[serde(default)]
    pub image: Option<String>,

    /// URLs of the gallery images.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// Full description.
    #[serde(default)]
    pub description: Option<String>,

    /// Selling points.
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,

    /// Amenities.
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,

    /// Available unit types, like `Studio` or `2 Bedrooms`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_types: Vec<String>,

    /// Construction [`Status`] of this [`Project`].
    #[serde(default = "Status::initial", deserialize_with = "status_or_initial")]
    pub status: Status,

    /// Indicator whether this [`Project`] is promoted on the home page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    /// URL of the PDF brochure.
    #[serde(default)]
    pub brochure_url: Option<String>,

    /// URL of the official website.
    #[serde(default)]
    pub website_url: Option<String>,
}

/// ID of a [`Project`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Id(String);

define_kind! {
    #[doc = "Construction status of a [`Project`]."]
    enum Status {
        #[doc = "Sales just started."]
        NewlyLaunched = 1,

        #[doc = "Being built."]
        UnderConstruction = 2,

        #[doc = "Announced, sales not started yet."]
        ComingSoon = 3,

        #[doc = "Handed over."]
        Completed = 4,
    }
}

impl Status {
    /// [`Status`] assumed when the content store has none.
    #[must_use]
    pub const fn initial() -> Self {
        Self::NewlyLaunched
    }

    /// Returns the human-readable label of this [`Status`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewlyLaunched => "Newly Launched",
            Self::UnderConstruction => "Under Construction",
            Self::ComingSoon => "Coming Soon",
            Self::Completed => "Completed",
        }
    }
}

/// Deserializes a [`Status`], falling back to [`Status::initial()`] for
/// `null` and unknown values.
fn status_or_initial<'de, D>(d: D) -> Result<Status, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(Status::initial))
}

#[cfg(test)]
mod spec {
    use serde_json::json;

    use super::{Project, Status};

    #[test]
    fn falls_back_to_initial_status() {
        let base = json!({
            "id": "p1",
            "title": "Vincitore Wellness Estate",
            "slug": "vincitore-wellness-estate",
        });

        let project: Project = serde_json::from_value(base.clone()).unwrap();
        assert_eq!(project.status, Status::NewlyLaunched);

        let mut unknown = base.clone();
        unknown["status"] = json!("sold-out");
        let project: Project = serde_json::from_value(unknown).unwrap();
        assert_eq!(project.status, Status::NewlyLaunched);

        let mut known = base;
        known["status"] = json!("under-construction");
        let project: Project = serde_json::from_value(known).unwrap();
        assert_eq!(project.status, Status::UnderConstruction);
    }

    #[test]
    fn status_labels() {
        assert_eq!(Status::ComingSoon.label(), "Coming Soon");
        assert_eq!(Status::ComingSoon.as_str(), "coming-soon");
    }
}
