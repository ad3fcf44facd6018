//! Contract surface of the Courier service bus.
//!
//! This crate defines the boundary a serializer plugin compiles against:
//!
//! - **[`headers`]** — well-known header keys
//! - **[`Message`] / [`TransportMessage`]** — logical and wire-level units
//! - **[`Serializer`]** — the two-method plugin seam
//! - **[`SerializerError`]** — the error taxonomy serializers report through
//! - **[`StandardConfigurer`]** — the registration extension point
//!
//! Pipeline, transport, and routing live in the host bus, not here.

pub mod config;
pub mod error;
pub mod headers;
pub mod message;
pub mod serializer;

pub use config::{ConfigError, StandardConfigurer};
pub use error::SerializerError;
pub use message::{Headers, Message, TransportMessage};
pub use serializer::Serializer;
