//! Service contains the business logic of the application.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use smart_default::SmartDefault;

#[cfg(doc)]
use infra::{Content, Relay};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Number of [`query::listings::Featured`] listings returned by default.
    #[default(read::listing::FEATURED_LIMIT)]
    pub featured_limit: usize,

    /// Number of [`query::listing::Similar`] listings returned by default.
    #[default(read::listing::SIMILAR_LIMIT)]
    pub similar_limit: usize,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<C, R> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Content`] store of this [`Service`].
    content: C,

    /// [`Relay`] of this [`Service`].
    relay: R,
}

impl<C, R> Service<C, R> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, content: C, relay: R) -> Self {
        Self {
            config,
            content,
            relay,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Content`] store of this [`Service`].
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Returns [`Relay`] of this [`Service`].
    #[must_use]
    pub fn relay(&self) -> &R {
        &self.relay
    }
}
