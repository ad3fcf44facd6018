use crate::error::SerializerError;
use crate::message::{Message, TransportMessage};

/// The serializer plugin seam: bidirectional conversion between logical and
/// wire-level messages for one content type.
///
/// Implementations are invoked concurrently from multiple pipeline workers
/// handling independent messages; both methods take `&self` and must be
/// thread-safe. The contract is synchronous — serializers do no I/O, and a
/// host with an async pipeline wraps calls at its own boundary.
pub trait Serializer: Send + Sync {
    /// Encodes a logical message into a transport message, stamping the
    /// headers the matching [`deserialize`](Serializer::deserialize) needs.
    /// Must not mutate the input.
    fn serialize(&self, message: &Message) -> Result<TransportMessage, SerializerError>;

    /// Decodes a transport message back into a logical message with a typed
    /// body. Must not mutate the input.
    fn deserialize(&self, transport_message: &TransportMessage)
        -> Result<Message, SerializerError>;
}
