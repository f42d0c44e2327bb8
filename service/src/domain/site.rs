//! [`SiteConfig`] definitions.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Agent contact data and site-wide details edited in the content store.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Name of the site, like `Dubai Prime Estates`.
    #[serde(deserialize_with = "null_as_default")]
    pub site_name: String,

    /// Short tagline under the name.
    #[serde(deserialize_with = "null_as_default")]
    pub site_tagline: String,

    /// Description for the footer and meta tags.
    #[serde(deserialize_with = "null_as_default")]
    pub site_description: String,

    /// Phone number for display, like `+971 50 123 4567`.
    #[serde(deserialize_with = "null_as_default")]
    pub contact_phone: String,

    /// Phone number for `tel:` links, like `+971501234567`.
    #[serde(deserialize_with = "null_as_default")]
    pub contact_phone_raw: String,

    /// Primary contact email.
    #[serde(deserialize_with = "null_as_default")]
    pub contact_email: String,

    /// Secondary contact email.
    pub contact_secondary_email: Option<String>,

    /// WhatsApp number in international format.
    #[serde(deserialize_with = "null_as_default")]
    pub whatsapp_number: String,

    /// Office [`Address`].
    #[serde(deserialize_with = "null_as_default")]
    pub office_address: Address,

    /// URL of the office location on a map.
    pub contact_map_url: Option<String>,

    /// [`SocialMedia`] profiles.
    #[serde(deserialize_with = "null_as_default")]
    pub social_media: SocialMedia,

    /// Office [`WorkingHours`].
    #[serde(deserialize_with = "null_as_default")]
    pub working_hours: WorkingHours,

    /// Short name of the agent.
    #[serde(deserialize_with = "null_as_default")]
    pub agent_name: String,

    /// Full name of the agent.
    #[serde(deserialize_with = "null_as_default")]
    pub agent_full_name: String,

    /// Job title of the agent.
    #[serde(deserialize_with = "null_as_default")]
    pub agent_title: String,

    /// URL of the agent photo.
    pub agent_image: Option<String>,

    /// Biography paragraphs.
    #[serde(deserialize_with = "null_as_default")]
    pub agent_bio: Vec<String>,
}

/// Two-line postal address.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Address {
    /// First line.
    #[serde(deserialize_with = "null_as_default")]
    pub line1: String,

    /// Second line.
    #[serde(deserialize_with = "null_as_default")]
    pub line2: String,
}

/// Social media profile URLs.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SocialMedia {
    /// Facebook profile URL.
    pub facebook: Option<String>,

    /// Instagram profile URL.
    pub instagram: Option<String>,

    /// LinkedIn profile URL.
    pub linkedin: Option<String>,
}

/// Office working hours.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct WorkingHours {
    /// Hours on weekdays.
    pub weekdays: Option<Hours>,

    /// Hours on Saturday.
    pub saturday: Option<Hours>,

    /// Hours on Sunday.
    pub sunday: Option<Hours>,
}

/// Working hours for a range of days.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Hours {
    /// Days, like `Monday - Friday`.
    pub days: String,

    /// Hours, like `9:00 AM - 7:00 PM`.
    pub hours: String,
}
