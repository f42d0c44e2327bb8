//! [`Listing`] definitions.

use common::{define_kind, Price};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

use super::{null_as_default, Facility};

/// Property listed for sale.
///
/// A [`Listing`] is a read-only snapshot of the content store record: nothing
/// in this crate mutates it after deserialization.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// Headline of this [`Listing`].
    pub title: String,

    /// Asking [`Price`] of this [`Listing`].
    pub price: Price,

    /// Broad location, like `Dubai Marina`.
    pub location: String,

    /// Neighborhood within the [`Listing::location`].
    pub neighborhood: String,

    /// [`PropertyType`] of this [`Listing`].
    #[serde(rename = "type")]
    pub kind: PropertyType,

    /// Number of bedrooms.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bedrooms: Rooms,

    /// Number of bathrooms.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bathrooms: Rooms,

    /// Floor [`Area`] of this [`Listing`].
    pub area: Area,

    /// Indicator whether this [`Listing`] is promoted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    /// Indicator whether this [`Listing`] was listed recently.
    #[serde(default, rename = "new", deserialize_with = "null_as_default")]
    pub is_new: bool,

    /// Indicator whether this [`Listing`] is not built yet.
    #[serde(default, deserialize_with = "null_as_default")]
    pub off_plan: bool,

    /// URL of the main image.
    #[serde(default)]
    pub image: Option<String>,

    /// URLs of the gallery images.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// Full description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Amenities, like `Swimming Pool` or `Gym`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<String>,

    /// [`Facility`]s nearby.
    #[serde(default, deserialize_with = "null_as_default")]
    pub nearby_facilities: Vec<Facility>,

    /// Map [`Coordinates`], if known.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

/// ID of a [`Listing`].
///
/// Opaque string assigned by the content store.
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

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Number of rooms of some kind in a [`Listing`].
pub type Rooms = u16;

define_kind! {
    #[doc = "Type of a [`Listing`] property."]
    enum PropertyType {
        #[doc = "Standalone villa."]
        Villa = 1,

        #[doc = "Apartment in a building."]
        Apartment = 2,

        #[doc = "Top-floor apartment."]
        Penthouse = 3,

        #[doc = "Townhouse in a row or community."]
        Townhouse = 4,
    }
}

/// Floor area of a [`Listing`] in square feet.
#[derive(Clone, Copy, Debug, Display, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Area(f64);

impl Area {
    /// Creates a new [`Area`] if the provided square feet value is finite and
    /// positive.
    #[must_use]
    pub fn new(sq_ft: f64) -> Option<Self> {
        (sq_ft.is_finite() && sq_ft > 0.0).then_some(Self(sq_ft))
    }

    /// Returns this [`Area`] in square feet.
    #[must_use]
    pub fn sq_ft(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Area {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        let sq_ft = f64::deserialize(d)?;
        Self::new(sq_ft).ok_or_else(|| {
            D::Error::custom(format!("`Area` must be positive, got: {sq_ft}"))
        })
    }
}

/// GPS coordinates of a [`Listing`].
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,

    /// Longitude.
    pub lng: f64,
}

#[cfg(test)]
mod spec {
    use common::Price;
    use serde_json::json;

    use super::{Listing, PropertyType};

    #[test]
    fn deserializes_content_record() {
        let listing: Listing = serde_json::from_value(json!({
            "id": "prop-1",
            "title": "Marina View Apartment",
            "price": 2_500_000,
            "location": "Dubai Marina",
            "neighborhood": "Dubai Marina",
            "type": "Apartment",
            "bedrooms": 2,
            "bathrooms": 3,
            "area": 1450,
            "featured": true,
            "new": null,
            "images": null,
            "nearbyFacilities": [
                {"name": "Marina Mall", "distance": "5 min walk", "type": "Mall"},
            ],
        }))
        .unwrap();

        assert_eq!(listing.id.to_string(), "prop-1");
        assert_eq!(listing.price, Price::from(2_500_000));
        assert_eq!(listing.kind, PropertyType::Apartment);
        assert_eq!(listing.area.sq_ft(), 1450.0);
        assert!(listing.featured);
        assert!(!listing.is_new);
        assert!(!listing.off_plan);
        assert!(listing.images.is_empty());
        assert_eq!(listing.nearby_facilities[0].kind.as_deref(), Some("Mall"));
    }

    #[test]
    fn rejects_non_positive_area() {
        let res = serde_json::from_value::<Listing>(json!({
            "id": "prop-1",
            "title": "Broken",
            "price": 1,
            "location": "JBR",
            "neighborhood": "JBR",
            "type": "Villa",
            "area": 0,
        }));

        assert!(res.is_err());
    }

    #[test]
    fn property_type_is_case_insensitive() {
        assert_eq!("villa".parse::<PropertyType>().unwrap(), PropertyType::Villa);
        assert_eq!(
            "TOWNHOUSE".parse::<PropertyType>().unwrap(),
            PropertyType::Townhouse,
        );
        assert_eq!(PropertyType::Penthouse.as_str(), "penthouse");
        assert!("castle".parse::<PropertyType>().is_err());
    }
}
