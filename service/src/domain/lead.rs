//! Lead capture definitions.

use std::fmt;

use derive_more::{Display, Error};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{Listing, Project};

/// Characters escaped in a URL query component.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Deep link opening a WhatsApp chat with a prefilled message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhatsAppLink {
    /// Digits of the international phone number.
    number: String,

    /// Prefilled message.
    message: String,
}

impl WhatsAppLink {
    /// Creates a new [`WhatsAppLink`] to the provided `number`.
    ///
    /// Any non-digit characters are stripped from the `number`.
    #[must_use]
    pub fn new(number: &str, message: impl Into<String>) -> Self {
        Self {
            number: digits(number),
            message: message.into(),
        }
    }

    /// Creates a new [`WhatsAppLink`] with a general greeting.
    #[must_use]
    pub fn general(number: &str) -> Self {
        Self::new(number, "Hello, I am interested in your properties.")
    }

    /// Creates a new [`WhatsAppLink`] asking about the provided [`Listing`].
    #[must_use]
    pub fn for_listing(number: &str, listing: &Listing) -> Self {
        Self::new(
            number,
            format!(
                "Hi, I'm interested in {} ({})",
                listing.title, listing.location,
            ),
        )
    }

    /// Creates a new [`WhatsAppLink`] asking about the provided [`Project`].
    #[must_use]
    pub fn for_project(number: &str, project: &Project) -> Self {
        let message = match &project.developer {
            Some(dev) => {
                format!("Hi, I'm interested in {} by {dev}", project.title)
            }
            None => format!("Hi, I'm interested in {}", project.title),
        };
        Self::new(number, message)
    }

    /// Returns the prefilled message of this [`WhatsAppLink`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for WhatsAppLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "https://wa.me/{}?text={}",
            self.number,
            utf8_percent_encode(&self.message, COMPONENT),
        )
    }
}

/// Builds a `tel:` link from a phone number, keeping a leading `+`.
#[must_use]
pub fn tel_link(phone: &str) -> String {
    let phone = phone.trim();
    let plus = if phone.starts_with('+') { "+" } else { "" };
    format!("tel:{plus}{}", digits(phone))
}

/// Builds a `mailto:` link from an email address.
#[must_use]
pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Strips everything except ASCII digits.
fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Contact form submission of a prospective client.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Inquiry {
    /// Name of the client.
    pub name: String,

    /// Email of the client.
    pub email: String,

    /// Phone of the client, if provided.
    pub phone: Option<String>,

    /// What the client is looking for, like `Buy a villa`.
    pub property_interest: Option<String>,

    /// Free-form message.
    pub message: String,
}

impl Inquiry {
    /// Validates and creates a new [`Inquiry`].
    ///
    /// Blank optional fields are dropped.
    ///
    /// # Errors
    ///
    /// - If the `name` is blank.
    /// - If the `email` doesn't look like an email address.
    pub fn new(
        name: &str,
        email: &str,
        phone: Option<&str>,
        property_interest: Option<&str>,
        message: &str,
    ) -> Result<Self, InvalidInquiry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidInquiry::EmptyName);
        }
        let email = email.trim();
        let is_email = email.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.is_empty()
        });
        if !is_email {
            return Err(InvalidInquiry::InvalidEmail);
        }

        let non_blank = |s: Option<&str>| {
            s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
        };
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: non_blank(phone),
            property_interest: non_blank(property_interest),
            message: message.trim().to_owned(),
        })
    }
}

/// Error of creating an [`Inquiry`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum InvalidInquiry {
    /// Name is blank.
    #[display("Name must not be empty")]
    EmptyName,

    /// Email is not an email address.
    #[display("Email must be a valid email address")]
    InvalidEmail,
}

#[cfg(test)]
mod spec {
    use super::{mailto_link, tel_link, Inquiry, InvalidInquiry, WhatsAppLink};

    #[test]
    fn encodes_message_like_uri_component() {
        let link = WhatsAppLink::new(
            "+971 50 123-4567",
            "Hi, I'm interested in Marina View (Dubai Marina)",
        );

        assert_eq!(
            link.to_string(),
            "https://wa.me/971501234567?text=\
             Hi%2C%20I'm%20interested%20in%20Marina%20View%20(Dubai%20Marina)",
        );
    }

    #[test]
    fn general_greeting() {
        assert_eq!(
            WhatsAppLink::general("971501234567").to_string(),
            "https://wa.me/971501234567?text=\
             Hello%2C%20I%20am%20interested%20in%20your%20properties.",
        );
    }

    #[test]
    fn builds_contact_links() {
        assert_eq!(tel_link("+971 50 123 4567"), "tel:+971501234567");
        assert_eq!(tel_link("050-123-4567"), "tel:0501234567");
        assert_eq!(mailto_link(" info@example.com "), "mailto:info@example.com");
    }

    #[test]
    fn validates_inquiry() {
        assert_eq!(
            Inquiry::new(" ", "a@b.c", None, None, ""),
            Err(InvalidInquiry::EmptyName),
        );
        assert_eq!(
            Inquiry::new("Ann", "not-an-email", None, None, ""),
            Err(InvalidInquiry::InvalidEmail),
        );
        assert_eq!(
            Inquiry::new("Ann", "@example.com", None, None, ""),
            Err(InvalidInquiry::InvalidEmail),
        );

        let inquiry = Inquiry::new(
            " Ann ",
            "ann@example.com",
            Some(" "),
            Some("Villa"),
            "Call me",
        )
        .unwrap();
        assert_eq!(inquiry.name, "Ann");
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.property_interest.as_deref(), Some("Villa"));
    }
}
