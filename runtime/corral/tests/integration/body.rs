use bytes::Bytes;
use corral::{BindError, Bindable, RuleError, from_body};
use http::Request;

fn request(payload: &'static [u8]) -> Request<Bytes> {
    Request::builder()
        .uri("/")
        .body(Bytes::from_static(payload))
        .unwrap()
}

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct Inner {
    #[bind(required)]
    inner: String,
}

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct Outer {
    #[bind(nested)]
    value: Inner,
}

#[test]
fn nested_values_reach_inner_fields() {
    let mut outer = Outer::default();
    from_body(&request(br#"{"value":{"inner":"aoeu"}}"#), &mut outer).unwrap();
    assert_eq!(outer.value.inner, "aoeu");
}

#[test]
fn required_fields_of_nested_values_are_enforced() {
    let mut outer = Outer::default();
    let err = from_body(&request(br#"{"value":{}}"#), &mut outer).unwrap_err();
    assert!(matches!(
        err,
        BindError::Rule(RuleError::MissingField { field: "inner" })
    ));
}

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct MaybeOuter {
    #[bind(nested)]
    value: Option<Inner>,
}

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct RequiredOuter {
    #[bind(required, nested)]
    value: Option<Inner>,
}

#[test]
fn an_absent_optional_nested_value_is_skipped() {
    let mut outer = MaybeOuter::default();
    from_body(&request(br"{}"), &mut outer).unwrap();
    assert!(outer.value.is_none());
}

#[test]
fn a_present_optional_nested_value_is_descended_into() {
    let mut outer = MaybeOuter::default();
    let err = from_body(&request(br#"{"value":{"inner":""}}"#), &mut outer).unwrap_err();
    assert!(matches!(
        err,
        BindError::Rule(RuleError::MissingField { field: "inner" })
    ));
}

#[test]
fn a_required_optional_nested_value_must_be_set() {
    let mut outer = RequiredOuter::default();
    let err = from_body(&request(br"{}"), &mut outer).unwrap_err();
    assert!(matches!(
        err,
        BindError::Rule(RuleError::MissingField { field: "value" })
    ));
}

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct Payload {
    #[bind(required)]
    value: String,
}

#[test]
fn a_malformed_body_is_a_decode_error() {
    let mut payload = Payload::default();
    let err = from_body(&request(b"aoeu"), &mut payload).unwrap_err();
    assert!(matches!(err, BindError::Decode(_)));
}

#[test]
fn an_empty_body_is_a_no_op() {
    let mut payload = Payload {
        value: "untouched".into(),
    };
    from_body(&request(b""), &mut payload).unwrap();
    // No decode, and no validation either: the `required` rule never ran.
    assert_eq!(payload.value, "untouched");
}

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct Toggles {
    #[bind(required)]
    enabled: bool,
    #[bind(required)]
    count: i64,
}

#[test]
fn a_present_false_boolean_satisfies_required() {
    let mut toggles = Toggles::default();
    from_body(&request(br#"{"enabled":false,"count":3}"#), &mut toggles).unwrap();
    assert!(!toggles.enabled);
}

#[test]
fn a_zero_valued_required_scalar_fails() {
    let mut toggles = Toggles::default();
    let err = from_body(&request(br#"{"enabled":true,"count":0}"#), &mut toggles).unwrap_err();
    assert!(matches!(
        err,
        BindError::Rule(RuleError::MissingField { field: "count" })
    ));
}

#[derive(Debug, Default, serde::Deserialize, Bindable)]
#[serde(default)]
struct Identified {
    #[bind(required)]
    id: Option<i64>,
}

#[test]
fn an_unset_required_optional_fails_regardless_of_payload_type() {
    let mut identified = Identified::default();
    let err = from_body(&request(br"{}"), &mut identified).unwrap_err();
    assert!(matches!(
        err,
        BindError::Rule(RuleError::MissingField { field: "id" })
    ));
}

#[test]
fn a_set_optional_counts_as_present_even_at_zero() {
    let mut identified = Identified::default();
    from_body(&request(br#"{"id":0}"#), &mut identified).unwrap();
    assert_eq!(identified.id, Some(0));
}
