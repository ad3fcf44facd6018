use std::sync::Arc;

use courier_core::{Serializer, StandardConfigurer};

use crate::registry::MessageTypeRegistry;
use crate::serializer::MsgPackSerializer;

/// Configures the bus to serialize messages with MessagePack.
///
/// `registry` holds the message types the host application handles; every
/// serializer instance the factory produces shares it.
pub fn use_msg_pack(
    configurer: &mut StandardConfigurer<dyn Serializer>,
    registry: Arc<MessageTypeRegistry>,
) {
    configurer.register(move || -> Arc<dyn Serializer> {
        Arc::new(MsgPackSerializer::new(registry.clone()))
    });
}
