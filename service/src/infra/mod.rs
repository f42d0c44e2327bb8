//! Infrastructure layer.

pub mod content;
pub mod relay;

pub use self::{content::Content, relay::Relay};
