//! [`SiteConfig`]-related definitions.

use derive_more::{From, Into};
use juniper::{graphql_object, GraphQLObject};
use service::{
    domain::{self, lead},
    query, Query as _,
};

use crate::{AsError, Context, Error};

/// Agency-wide settings of the website.
#[derive(Clone, Debug, From, Into)]
pub struct SiteConfig(domain::SiteConfig);

/// Agency-wide settings of the website.
#[graphql_object(context = Context)]
impl SiteConfig {
    /// Name of the agency.
    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.0.site_name
    }

    /// Tagline shown under the agency name.
    #[must_use]
    pub fn site_tagline(&self) -> &str {
        &self.0.site_tagline
    }

    /// Description for search engines.
    #[must_use]
    pub fn site_description(&self) -> &str {
        &self.0.site_description
    }

    /// Contact phone formatted for display.
    #[must_use]
    pub fn contact_phone(&self) -> &str {
        &self.0.contact_phone
    }

    /// `tel:` link of the contact phone.
    #[must_use]
    pub fn phone_url(&self) -> Option<String> {
        let phone = if self.0.contact_phone_raw.is_empty() {
            &self.0.contact_phone
        } else {
            &self.0.contact_phone_raw
        };
        (!phone.is_empty()).then(|| lead::tel_link(phone))
    }

    /// Contact email.
    #[must_use]
    pub fn contact_email(&self) -> &str {
        &self.0.contact_email
    }

    /// `mailto:` link of the contact email.
    #[must_use]
    pub fn email_url(&self) -> Option<String> {
        (!self.0.contact_email.is_empty())
            .then(|| lead::mailto_link(&self.0.contact_email))
    }

    /// Secondary contact email.
    #[must_use]
    pub fn contact_secondary_email(&self) -> Option<&str> {
        self.0.contact_secondary_email.as_deref()
    }

    /// WhatsApp number of the agent.
    #[must_use]
    pub fn whatsapp_number(&self) -> &str {
        &self.0.whatsapp_number
    }

    /// WhatsApp chat URL with a general greeting prefilled.
    #[must_use]
    pub fn whatsapp_url(&self) -> Option<String> {
        (!self.0.whatsapp_number.is_empty()).then(|| {
            lead::WhatsAppLink::general(&self.0.whatsapp_number).to_string()
        })
    }

    /// Address of the office.
    #[must_use]
    pub fn office_address(&self) -> Address {
        self.0.office_address.clone().into()
    }

    /// URL of the office location on a map.
    #[must_use]
    pub fn contact_map_url(&self) -> Option<&str> {
        self.0.contact_map_url.as_deref()
    }

    /// Social media profiles of the agency.
    #[must_use]
    pub fn social_media(&self) -> SocialMedia {
        self.0.social_media.clone().into()
    }

    /// Working hours of the office.
    #[must_use]
    pub fn working_hours(&self) -> WorkingHours {
        self.0.working_hours.clone().into()
    }

    /// Short name of the agent.
    #[must_use]
    pub fn agent_name(&self) -> &str {
        &self.0.agent_name
    }

    /// Full name of the agent.
    #[must_use]
    pub fn agent_full_name(&self) -> &str {
        &self.0.agent_full_name
    }

    /// Job title of the agent.
    #[must_use]
    pub fn agent_title(&self) -> &str {
        &self.0.agent_title
    }

    /// URL of the agent's photo.
    #[must_use]
    pub fn agent_image(&self) -> Option<&str> {
        self.0.agent_image.as_deref()
    }

    /// Paragraphs of the agent's biography.
    #[must_use]
    pub fn agent_bio(&self) -> Vec<String> {
        self.0.agent_bio.clone()
    }
}

/// Address of the office.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "OfficeAddress")]
pub struct Address {
    /// First line, like a building.
    pub line1: String,

    /// Second line, like a district and city.
    pub line2: String,
}

impl From<domain::site::Address> for Address {
    fn from(a: domain::site::Address) -> Self {
        Self {
            line1: a.line1,
            line2: a.line2,
        }
    }
}

/// Social media profiles of the agency.
#[derive(Clone, Debug, GraphQLObject)]
pub struct SocialMedia {
    /// Facebook page URL.
    pub facebook: Option<String>,

    /// Instagram profile URL.
    pub instagram: Option<String>,

    /// LinkedIn profile URL.
    pub linkedin: Option<String>,
}

impl From<domain::site::SocialMedia> for SocialMedia {
    fn from(s: domain::site::SocialMedia) -> Self {
        let domain::site::SocialMedia {
            facebook,
            instagram,
            linkedin,
        } = s;
        Self {
            facebook,
            instagram,
            linkedin,
        }
    }
}

/// Working hours of the office.
#[derive(Clone, Debug, GraphQLObject)]
pub struct WorkingHours {
    /// Hours on weekdays.
    pub weekdays: Option<Hours>,

    /// Hours on Saturday.
    pub saturday: Option<Hours>,

    /// Hours on Sunday.
    pub sunday: Option<Hours>,
}

impl From<domain::site::WorkingHours> for WorkingHours {
    fn from(w: domain::site::WorkingHours) -> Self {
        Self {
            weekdays: w.weekdays.map(Into::into),
            saturday: w.saturday.map(Into::into),
            sunday: w.sunday.map(Into::into),
        }
    }
}

/// Opening hours on some days.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "WorkingHoursEntry")]
pub struct Hours {
    /// Days, like `Mon - Fri`.
    pub days: String,

    /// Hours, like `9:00 AM - 6:00 PM`.
    pub hours: String,
}

impl From<domain::site::Hours> for Hours {
    fn from(h: domain::site::Hours) -> Self {
        Self {
            days: h.days,
            hours: h.hours,
        }
    }
}

/// Returns the agent's WhatsApp number, if configured.
///
/// # Errors
///
/// If the content store fails.
pub(crate) async fn whatsapp_number(
    ctx: &Context,
) -> Result<Option<String>, Error> {
    ctx.service()
        .execute(query::site::Config::by(()))
        .await
        .map_err(AsError::into_error)
        .map_err(ctx.error())
        .map(|conf| {
            conf.map(|c| c.whatsapp_number).filter(|n| !n.is_empty())
        })
}

#[cfg(test)]
mod spec {
    use juniper::graphql_value;

    use crate::api::fixture;

    #[tokio::test]
    async fn resolves_contact_links() {
        let (_, res) = fixture::execute(
            r#"{
                siteConfig {
                    siteName
                    phoneUrl
                    emailUrl
                    whatsappUrl
                    workingHours { weekdays { days } }
                }
            }"#,
        )
        .await;

        let (data, errs) = res.unwrap();
        assert!(errs.is_empty(), "{errs:?}");
        assert_eq!(
            data,
            graphql_value!({
                "siteConfig": {
                    "siteName": "Dubai Homes",
                    "phoneUrl": "tel:+971501234567",
                    "emailUrl": "mailto:agent@example.com",
                    "whatsappUrl": "https://wa.me/971501234567?text=\
                        Hello%2C%20I%20am%20interested%20in%20your\
                        %20properties.",
                    "workingHours": {"weekdays": null},
                },
            }),
        );
    }
}
