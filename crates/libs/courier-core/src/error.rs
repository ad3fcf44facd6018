use std::error::Error as StdError;

/// Errors reported by [`Serializer`](crate::Serializer) implementations.
///
/// All variants abort the single encode/decode call; retry, dead-lettering,
/// and logging policy belong to the host pipeline.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SerializerError {
    /// Decode saw a content type other than the one this serializer produces.
    #[error("unknown content type: '{actual}' - must be '{expected}' for this serializer to work")]
    ContentTypeMismatch {
        actual: String,
        expected: &'static str,
    },

    /// A header the serializer requires was absent from the transport message.
    #[error("could not find the '{key}' header on the incoming message")]
    MissingHeader { key: &'static str },

    /// The type header's value matched no registered message type.
    #[error(
        "could not find a message type matching '{type_name}' - please be sure that the crate \
         defining the message type registers it with the serializer before messages are handled"
    )]
    UnresolvedType { type_name: String },

    /// Encode was handed a body whose type was never registered.
    #[error("the message body type '{type_name}' has not been registered with the serializer")]
    UnregisteredBodyType { type_name: &'static str },

    /// An underlying codec failure, passed through unwrapped.
    #[error(transparent)]
    Codec(#[from] Box<dyn StdError + Send + Sync>),
}
