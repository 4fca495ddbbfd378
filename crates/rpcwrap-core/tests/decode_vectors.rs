//! Envelope decode vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rpcwrap_core::EnvelopeCodec;

use messages::GetResponse;
use vector_loader::load;

#[test]
fn decode_vectors() {
    let files = [
        "decode_success.json",
        "decode_status_err.json",
        "decode_status_err_detail.json",
        "decode_unknown_err.json",
        "decode_body_and_err.json",
        "decode_empty_body.json",
        "decode_missing_fields.json",
        "decode_unknown_field.json",
        "decode_out_of_range_code.json",
        "decode_detail_no_value.json",
        "decode_null_details.json",
        "decode_null_message.json",
        "decode_not_json.json",
        "decode_truncated.json",
        "decode_bad_base64.json",
        "decode_bad_code_type.json",
        "decode_wrong_message_type.json",
        "decode_truncated_body.json",
    ];
    let codec = EnvelopeCodec::default();

    for f in files {
        let v = load(f);
        let raw = v.frame.decode();
        let res = codec.decode::<GetResponse>(&raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.kind().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let pair = res.expect("expected ok pair");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(pair.message.name, ex["name"].as_str().unwrap(), "vector={}", v.description);

        if ex["status"].is_null() {
            assert!(pair.error.is_none(), "vector={}", v.description);
            continue;
        }
        let st = pair.error.expect("expected status");
        let exs = &ex["status"];
        assert_eq!(st.raw_code() as i64, exs["code"].as_i64().unwrap(), "vector={}", v.description);
        assert_eq!(st.message(), exs["message"].as_str().unwrap(), "vector={}", v.description);
        assert_eq!(st.details().len() as u64, exs["details"].as_u64().unwrap(), "vector={}", v.description);
    }
}

#[test]
fn decode_into_resets_target_when_body_absent() {
    let codec = EnvelopeCodec::default();
    let mut target = messages::get_response("stale");

    let err = codec
        .decode_into(br#"{"Body":null,"Err":{"code":3,"message":"bad input"}}"#, &mut target)
        .unwrap();

    assert_eq!(target, GetResponse::default());
    let err = err.expect("status present");
    assert_eq!(err.code(), rpcwrap_core::Code::InvalidArgument);
    assert_eq!(err.message(), "bad input");
}

#[test]
fn decode_into_replaces_target_fields() {
    let codec = EnvelopeCodec::default();
    let mut target = messages::get_response("stale");

    let err = codec
        .decode_into(br#"{"Body":"CgFY","Err":null}"#, &mut target)
        .unwrap();

    assert!(err.is_none());
    assert_eq!(target.name, "X");
}

#[test]
fn decode_into_leaves_target_on_type_mismatch() {
    let codec = EnvelopeCodec::default();
    let mut target = messages::get_response("kept");

    let e = codec
        .decode_into(br#"{"Body":"CgVh","Err":null}"#, &mut target)
        .unwrap_err();

    assert_eq!(e.kind().as_str(), "TYPE_MISMATCH");
    assert!(e.to_string().contains("GetResponse"));
    assert_eq!(target.name, "kept");
}

#[test]
fn detail_payload_unpacks_to_typed_message() {
    let v = load("decode_status_err_detail.json");
    let pair = EnvelopeCodec::default()
        .decode::<GetResponse>(&v.frame.decode())
        .unwrap();

    let st = pair.error.unwrap();
    let detail: messages::ErrMsg = st.unpack_detail().unwrap().unwrap();
    assert_eq!(detail, messages::err_msg());
}

#[test]
fn out_of_range_code_reads_as_unknown() {
    let v = load("decode_out_of_range_code.json");
    let pair = EnvelopeCodec::default()
        .decode::<GetResponse>(&v.frame.decode())
        .unwrap();

    let st = pair.error.unwrap();
    assert_eq!(st.code(), rpcwrap_core::Code::Unknown);
    assert_eq!(st.raw_code(), 42);
}

#[test]
fn out_of_range_code_reencodes_byte_identical() {
    let codec = EnvelopeCodec::default();
    let raw = load("decode_out_of_range_code.json").frame.decode();
    let pair = codec.decode::<GetResponse>(&raw).unwrap();

    let again = codec
        .encode_status::<GetResponse>(None, pair.error.as_ref())
        .unwrap();
    assert_eq!(again, raw);
}

#[test]
fn empty_detail_payload_survives_and_reencodes_canonically() {
    let codec = EnvelopeCodec::default();
    let raw = load("decode_detail_no_value.json").frame.decode();
    let pair = codec.decode::<GetResponse>(&raw).unwrap();

    let st = pair.error.unwrap();
    assert_eq!(st.details()[0].type_url, "type.googleapis.com/google.protobuf.Empty");
    assert!(st.details()[0].value.is_empty());

    let again = codec.encode_status::<GetResponse>(None, Some(&st)).unwrap();
    assert_eq!(again, raw);
}

#[test]
fn null_status_fields_reencode_without_them() {
    let codec = EnvelopeCodec::default();
    for (file, canonical) in [
        ("decode_null_details.json", r#"{"Body":null,"Err":{"code":3,"message":"x"}}"#),
        ("decode_null_message.json", r#"{"Body":null,"Err":{"code":3}}"#),
    ] {
        let pair = codec
            .decode::<GetResponse>(&load(file).frame.decode())
            .unwrap();
        let again = codec
            .encode_status::<GetResponse>(None, pair.error.as_ref())
            .unwrap();
        assert_eq!(String::from_utf8(again).unwrap(), canonical, "vector={file}");
    }
}

#[test]
fn into_result_prefers_error() {
    let v = load("decode_body_and_err.json");
    let pair = EnvelopeCodec::default()
        .decode::<GetResponse>(&v.frame.decode())
        .unwrap();

    assert_eq!(pair.message.name, "X");
    let err = pair.into_result().unwrap_err();
    assert_eq!(err.code(), rpcwrap_core::Code::NotFound);
}
