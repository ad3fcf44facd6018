use std::sync::Arc;

use courier_core::{headers, Headers, Message, Serializer, SerializerError, TransportMessage};
use courier_msgpack::{
    short_qualified_name, MessageTypeRegistry, MsgPackSerializer, MSG_PACK_CONTENT_TYPE,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Ping {
    seq: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Unregistered {
    seq: u32,
}

fn serializer() -> MsgPackSerializer {
    let mut registry = MessageTypeRegistry::new();
    registry.register::<Ping>();
    MsgPackSerializer::new(Arc::new(registry))
}

fn transport_with(content_type: Option<&str>, type_name: Option<&str>) -> TransportMessage {
    let mut headers = Headers::new();
    if let Some(value) = content_type {
        headers.insert(headers::CONTENT_TYPE.to_owned(), value.to_owned());
    }
    if let Some(value) = type_name {
        headers.insert(headers::MESSAGE_TYPE.to_owned(), value.to_owned());
    }
    TransportMessage::new(headers, vec![0xC0])
}

#[test]
fn wrong_content_type_names_the_offending_and_expected_tags() {
    let err = serializer()
        .deserialize(&transport_with(Some("text/plain"), Some("X")))
        .expect_err("mismatched content type must fail");

    assert!(matches!(err, SerializerError::ContentTypeMismatch { .. }));
    let text = err.to_string();
    assert!(text.contains("text/plain"));
    assert!(text.contains(MSG_PACK_CONTENT_TYPE));
}

#[test]
fn missing_content_type_fails_the_same_way() {
    let err = serializer()
        .deserialize(&transport_with(None, Some("X")))
        .expect_err("absent content type must fail");

    assert!(matches!(err, SerializerError::ContentTypeMismatch { .. }));
    assert!(err.to_string().contains(MSG_PACK_CONTENT_TYPE));
}

#[test]
fn content_type_match_is_case_sensitive() {
    let err = serializer()
        .deserialize(&transport_with(Some("Application/X-MsgPack"), Some("X")))
        .expect_err("case-variant content type must fail");

    assert!(matches!(err, SerializerError::ContentTypeMismatch { .. }));
}

#[test]
fn missing_type_header_names_the_key() {
    let err = serializer()
        .deserialize(&transport_with(Some(MSG_PACK_CONTENT_TYPE), None))
        .expect_err("absent type header must fail");

    assert!(matches!(err, SerializerError::MissingHeader { .. }));
    assert!(err.to_string().contains(headers::MESSAGE_TYPE));
}

#[test]
fn unresolvable_type_error_contains_the_literal_string() {
    let err = serializer()
        .deserialize(&transport_with(
            Some(MSG_PACK_CONTENT_TYPE),
            Some("NoSuch.Type, NoSuchModule"),
        ))
        .expect_err("unknown type name must fail");

    assert!(matches!(err, SerializerError::UnresolvedType { .. }));
    assert!(err.to_string().contains("NoSuch.Type, NoSuchModule"));
}

#[test]
fn unregistered_body_type_fails_on_encode_with_the_type_named() {
    let err = serializer()
        .serialize(&Message::with_body(Unregistered { seq: 1 }))
        .expect_err("unregistered body type must fail");

    assert!(matches!(err, SerializerError::UnregisteredBodyType { .. }));
    assert!(err.to_string().contains("Unregistered"));
}

#[test]
fn malformed_body_bytes_surface_the_codec_error_untranslated() {
    let serializer = serializer();
    let mut headers = Headers::new();
    headers.insert(
        headers::CONTENT_TYPE.to_owned(),
        MSG_PACK_CONTENT_TYPE.to_owned(),
    );
    headers.insert(
        headers::MESSAGE_TYPE.to_owned(),
        short_qualified_name::<Ping>(),
    );
    // A map marker with no entries behind it; not a valid Ping.
    let garbage = TransportMessage::new(headers, vec![0x81]);

    let err = serializer
        .deserialize(&garbage)
        .expect_err("garbage bytes must fail");

    assert!(matches!(err, SerializerError::Codec(_)));
}
