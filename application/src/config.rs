//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::infra::{content::sanity, relay::google_form};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Content store configuration.
    pub content: Content,

    /// Inquiry relay configuration.
    pub relay: Relay,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// Indicator whether to serve GraphiQL IDE on `/`.
    #[default(true)]
    pub graphiql: bool,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Number of featured listings returned when no limit is requested.
    #[default(service::read::listing::FEATURED_LIMIT)]
    pub featured_limit: usize,

    /// Number of similar listings returned when no limit is requested.
    #[default(service::read::listing::SIMILAR_LIMIT)]
    pub similar_limit: usize,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            featured_limit,
            similar_limit,
        } = value;
        Self {
            featured_limit,
            similar_limit,
        }
    }
}

/// Content store configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Kind of the content store to use.
    pub source: ContentSource,

    /// JSON file content store configuration.
    pub json: Json,

    /// Sanity CMS content store configuration.
    pub sanity: Sanity,
}

/// Kind of the content store.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Content is loaded once from a JSON file.
    #[default]
    Json,

    /// Content is queried from Sanity CMS on each request.
    Sanity,
}

/// JSON file content store configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Json {
    /// Path to the JSON file.
    #[default(PathBuf::from("content/site.json"))]
    pub path: PathBuf,
}

/// Sanity CMS content store configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Sanity {
    /// ID of the Sanity project.
    pub project_id: String,

    /// Dataset to query.
    #[default("production".to_owned())]
    pub dataset: String,

    /// Dated version of the query API.
    #[default("2024-01-01".to_owned())]
    pub api_version: String,

    /// Indicator whether to query the cached CDN API.
    #[default(true)]
    pub use_cdn: bool,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Sanity> for sanity::Config {
    fn from(value: Sanity) -> Self {
        let Sanity {
            project_id,
            dataset,
            api_version,
            use_cdn,
            timeout,
        } = value;
        Self {
            project_id,
            dataset,
            api_version,
            use_cdn,
            timeout,
            base_url: None,
        }
    }
}

/// Inquiry relay configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Relay {
    /// Google Form to post inquiries to.
    ///
    /// Inquiries are accepted, but not delivered anywhere, if it's not
    /// configured.
    pub google_form: Option<GoogleForm>,
}

/// Google Form relay configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct GoogleForm {
    /// URL the form responses are posted to.
    pub action_url: String,

    /// Names of the form fields, like `entry.123456789`.
    pub entry_ids: EntryIds,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

/// Names of the Google Form fields.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EntryIds {
    /// Field of the client's name.
    pub name: String,

    /// Field of the client's email.
    pub email: String,

    /// Field of the client's phone.
    pub phone: String,

    /// Field of the client's property interest.
    pub property_interest: String,

    /// Field of the client's message.
    pub message: String,
}

impl From<GoogleForm> for google_form::Config {
    fn from(value: GoogleForm) -> Self {
        let GoogleForm {
            action_url,
            entry_ids:
                EntryIds {
                    name,
                    email,
                    phone,
                    property_interest,
                    message,
                },
            timeout,
        } = value;
        Self {
            action_url,
            entry_ids: google_form::EntryIds {
                name,
                email,
                phone,
                property_interest,
                message,
            },
            timeout,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::{Config, ContentSource};

    #[test]
    fn defaults_to_json_content_without_relay() {
        let conf = Config::new("non-existent.toml").unwrap();

        assert_eq!(conf.server.port, 8080);
        assert_eq!(conf.content.source, ContentSource::Json);
        assert_eq!(conf.content.json.path.to_str(), Some("content/site.json"));
        assert_eq!(conf.content.sanity.timeout, Duration::from_secs(10));
        assert!(conf.relay.google_form.is_none());
        assert_eq!(
            conf.service.featured_limit,
            service::read::listing::FEATURED_LIMIT,
        );
    }
}
