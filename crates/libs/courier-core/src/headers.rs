//! Well-known header keys stamped and read by serializers.

/// Names the wire format of the transport message body.
pub const CONTENT_TYPE: &str = "courier-content-type";

/// Names the logical type of the message body, in short qualified form.
pub const MESSAGE_TYPE: &str = "courier-msg-type";
