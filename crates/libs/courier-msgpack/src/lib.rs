//! MessagePack serializer plugin for the Courier service bus.
//!
//! Encodes logical messages into `application/x-msgpack` transport payloads
//! and back, stamping the content-type and message-type headers the decode
//! side keys on. Message bodies are encoded in struct-map mode, so field
//! names travel with the payload and no positional schema is shared ahead of
//! time.
//!
//! Because Rust has no runtime reflection, the host application registers its
//! message types with a [`MessageTypeRegistry`] at startup and hands that
//! registry to the serializer:
//!
//! ```
//! use std::sync::Arc;
//! use courier_core::{Message, Serializer, StandardConfigurer};
//! use courier_msgpack::{use_msg_pack, MessageTypeRegistry};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct OrderPlaced {
//!     order_id: String,
//! }
//!
//! let mut registry = MessageTypeRegistry::new();
//! registry.register::<OrderPlaced>();
//!
//! let mut configurer: StandardConfigurer<dyn Serializer> = StandardConfigurer::new();
//! use_msg_pack(&mut configurer, Arc::new(registry));
//!
//! let serializer = configurer.resolve().expect("serializer registered");
//! let transport = serializer
//!     .serialize(&Message::with_body(OrderPlaced {
//!         order_id: "order-1".to_owned(),
//!     }))
//!     .expect("encode should succeed");
//! let decoded = serializer.deserialize(&transport).expect("decode should succeed");
//! assert!(decoded.body_is::<OrderPlaced>());
//! ```

pub mod config;
pub mod registry;
pub mod serializer;

mod type_cache;

pub use config::use_msg_pack;
pub use registry::{short_qualified_name, MessageTypeDescriptor, MessageTypeRegistry};
pub use serializer::{MsgPackSerializer, MSG_PACK_CONTENT_TYPE};
