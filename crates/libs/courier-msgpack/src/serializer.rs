use std::sync::Arc;

use courier_core::{headers, Message, Serializer, SerializerError, TransportMessage};

use crate::registry::MessageTypeRegistry;
use crate::type_cache::TypeCache;

/// The content type stamped on encode and required, exactly, on decode.
pub const MSG_PACK_CONTENT_TYPE: &str = "application/x-msgpack";

/// [`Serializer`] implementation that encodes message bodies as MessagePack.
///
/// Encode stamps [`headers::CONTENT_TYPE`] with
/// [`MSG_PACK_CONTENT_TYPE`] and [`headers::MESSAGE_TYPE`] with the body
/// type's short qualified name; decode requires both and resolves the type
/// through a per-instance cache before touching the body bytes.
pub struct MsgPackSerializer {
    registry: Arc<MessageTypeRegistry>,
    type_cache: TypeCache,
}

impl MsgPackSerializer {
    pub fn new(registry: Arc<MessageTypeRegistry>) -> Self {
        Self {
            registry,
            type_cache: TypeCache::new(),
        }
    }

    pub fn registry(&self) -> &MessageTypeRegistry {
        &self.registry
    }
}

impl Serializer for MsgPackSerializer {
    fn serialize(&self, message: &Message) -> Result<TransportMessage, SerializerError> {
        let descriptor = self
            .registry
            .descriptor_of(message.body().type_id())
            .ok_or(SerializerError::UnregisteredBodyType {
                type_name: message.body_type_name(),
            })?;

        let mut headers = message.headers().clone();
        headers.insert(
            headers::CONTENT_TYPE.to_owned(),
            MSG_PACK_CONTENT_TYPE.to_owned(),
        );
        headers.insert(
            headers::MESSAGE_TYPE.to_owned(),
            descriptor.qualified_name().to_owned(),
        );

        let body = descriptor.encode(message.body())?;
        log::trace!(
            "encoded '{}' body to {} bytes",
            descriptor.qualified_name(),
            body.len()
        );
        Ok(TransportMessage::new(headers, body))
    }

    fn deserialize(
        &self,
        transport_message: &TransportMessage,
    ) -> Result<Message, SerializerError> {
        let incoming = transport_message.headers();

        let content_type = incoming
            .get(headers::CONTENT_TYPE)
            .map(String::as_str)
            .unwrap_or_default();
        if content_type != MSG_PACK_CONTENT_TYPE {
            return Err(SerializerError::ContentTypeMismatch {
                actual: content_type.to_owned(),
                expected: MSG_PACK_CONTENT_TYPE,
            });
        }

        let type_name = incoming
            .get(headers::MESSAGE_TYPE)
            .ok_or(SerializerError::MissingHeader {
                key: headers::MESSAGE_TYPE,
            })?;

        // The type is resolved before any byte is decoded, so a returned
        // message never carries a body of the wrong runtime type.
        let descriptor = self
            .type_cache
            .get_or_resolve(type_name, || {
                log::debug!("resolving message type '{type_name}'");
                self.registry.resolve(type_name)
            })
            .ok_or_else(|| SerializerError::UnresolvedType {
                type_name: type_name.clone(),
            })?;

        let body = descriptor.decode(transport_message.body())?;
        Ok(Message::from_boxed(
            incoming.clone(),
            body,
            descriptor.rust_type_name(),
        ))
    }
}
