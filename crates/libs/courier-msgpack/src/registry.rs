//! Startup-time registry of message types.
//!
//! The registry stands in for runtime reflection: each registered type gets a
//! descriptor carrying its identifier string and a pair of MessagePack
//! encode/decode closures. The encode path looks descriptors up by `TypeId`,
//! the decode path by the identifier string carried in the message-type
//! header.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::error::Error as StdError;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

type BoxedBody = Box<dyn Any + Send + Sync>;
type BoxedError = Box<dyn StdError + Send + Sync>;
type EncodeFn = Box<dyn Fn(&(dyn Any + Send + Sync)) -> Result<Vec<u8>, BoxedError> + Send + Sync>;
type DecodeFn = Box<dyn Fn(&[u8]) -> Result<BoxedBody, BoxedError> + Send + Sync>;

/// The identifier a registered type travels under: its bare name (generic
/// arguments included) plus the defining module path, `"Name, path"`.
///
/// Stable across builds of the same source tree; the exact spelling only has
/// to round-trip within one deployment's registered set.
pub fn short_qualified_name<T: 'static>() -> String {
    let full = type_name::<T>();
    let (path, generics) = match full.find('<') {
        Some(split_at) => full.split_at(split_at),
        None => (full, ""),
    };
    match path.rsplit_once("::") {
        Some((module, name)) => format!("{name}{generics}, {module}"),
        None => full.to_owned(),
    }
}

/// One registered message type: identifier, `TypeId`, and codec closures.
pub struct MessageTypeDescriptor {
    qualified_name: String,
    rust_type_name: &'static str,
    type_id: TypeId,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl MessageTypeDescriptor {
    pub(crate) fn of<T>() -> Self
    where
        T: Serialize + DeserializeOwned + Any + Send + Sync,
    {
        Self {
            qualified_name: short_qualified_name::<T>(),
            rust_type_name: type_name::<T>(),
            type_id: TypeId::of::<T>(),
            encode: Box::new(|body| {
                let value = body.downcast_ref::<T>().ok_or_else(|| -> BoxedError {
                    format!(
                        "body does not downcast to the registered type {}",
                        type_name::<T>()
                    )
                    .into()
                })?;
                let mut out = Vec::new();
                let mut serializer = rmp_serde::Serializer::new(&mut out).with_struct_map();
                value
                    .serialize(&mut serializer)
                    .map_err(|e| Box::new(e) as BoxedError)?;
                Ok(out)
            }),
            decode: Box::new(|bytes| {
                let value: T =
                    rmp_serde::from_slice(bytes).map_err(|e| Box::new(e) as BoxedError)?;
                Ok(Box::new(value) as BoxedBody)
            }),
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn rust_type_name(&self) -> &'static str {
        self.rust_type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub(crate) fn encode(&self, body: &(dyn Any + Send + Sync)) -> Result<Vec<u8>, BoxedError> {
        (self.encode)(body)
    }

    pub(crate) fn decode(&self, bytes: &[u8]) -> Result<BoxedBody, BoxedError> {
        (self.decode)(bytes)
    }
}

/// All message types a host application handles, registered once at startup
/// and shared read-only with every serializer instance afterwards.
#[derive(Default)]
pub struct MessageTypeRegistry {
    by_name: HashMap<String, Arc<MessageTypeDescriptor>>,
    by_type_id: HashMap<TypeId, Arc<MessageTypeDescriptor>>,
}

impl MessageTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under its short qualified name. Re-registering the same
    /// type is idempotent.
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: Serialize + DeserializeOwned + Any + Send + Sync,
    {
        let descriptor = Arc::new(MessageTypeDescriptor::of::<T>());
        self.by_name
            .insert(descriptor.qualified_name.clone(), descriptor.clone());
        self.by_type_id.insert(descriptor.type_id, descriptor);
        self
    }

    /// Non-throwing lookup by identifier string, the decode-side entry point.
    pub fn resolve(&self, qualified_name: &str) -> Option<Arc<MessageTypeDescriptor>> {
        self.by_name.get(qualified_name).cloned()
    }

    /// Lookup by the body's runtime `TypeId`, the encode-side entry point.
    pub fn descriptor_of(&self, type_id: TypeId) -> Option<Arc<MessageTypeDescriptor>> {
        self.by_type_id.get(&type_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
