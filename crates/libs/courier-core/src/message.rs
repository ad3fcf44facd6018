use std::any::{self, Any};
use std::collections::HashMap;
use std::fmt;

/// Message headers: string keys to string values, insertion order irrelevant.
pub type Headers = HashMap<String, String>;

/// A logical application-level message: headers plus a body whose concrete
/// type is known only at runtime.
///
/// Messages are transient, created per send/receive operation and owned by the
/// pipeline step handling them. A serializer never retains one after the call
/// returns.
pub struct Message {
    headers: Headers,
    body: Box<dyn Any + Send + Sync>,
    body_type_name: &'static str,
}

impl Message {
    pub fn new<T>(headers: Headers, body: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            headers,
            body: Box::new(body),
            body_type_name: any::type_name::<T>(),
        }
    }

    pub fn with_body<T>(body: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::new(Headers::new(), body)
    }

    /// Rebuilds a message from an already-boxed body, as a deserializer does
    /// after decoding. `body_type_name` must describe the boxed value's
    /// concrete type.
    pub fn from_boxed(
        headers: Headers,
        body: Box<dyn Any + Send + Sync>,
        body_type_name: &'static str,
    ) -> Self {
        Self {
            headers,
            body,
            body_type_name,
        }
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &(dyn Any + Send + Sync) {
        self.body.as_ref()
    }

    /// The Rust path of the body's concrete type, captured at construction.
    pub fn body_type_name(&self) -> &'static str {
        self.body_type_name
    }

    pub fn body_is<T: Any>(&self) -> bool {
        self.body.as_ref().is::<T>()
    }

    pub fn body_as<T: Any>(&self) -> Option<&T> {
        self.body.as_ref().downcast_ref::<T>()
    }

    pub fn into_body(self) -> Box<dyn Any + Send + Sync> {
        self.body
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("headers", &self.headers)
            .field("body", &self.body_type_name)
            .finish()
    }
}

/// A wire-level message: the same header shape as [`Message`] with the body
/// encoded to bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportMessage {
    headers: Headers,
    body: Vec<u8>,
}

impl TransportMessage {
    pub fn new(headers: Headers, body: Vec<u8>) -> Self {
        Self { headers, body }
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_parts(self) -> (Headers, Vec<u8>) {
        (self.headers, self.body)
    }
}
