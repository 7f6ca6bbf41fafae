use http::Method;
use pretty_assertions::assert_eq;

use super::{init_signer, sign_at, signature_of};

fn pragma<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .trim_start_matches("EXO2-HMAC-SHA256 ")
        .split(',')
        .find_map(|field| field.strip_prefix(name)?.strip_prefix('='))
}

#[test]
fn test_query_order_does_not_matter() {
    let signer = init_signer("K", "S");
    let a = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?zone=ch-dk-2&type=standard.tiny&id=1",
        b"",
    );
    let b = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?id=1&zone=ch-dk-2&type=standard.tiny",
        b"",
    );

    assert_eq!(a, b);
    assert_eq!(pragma(&a, "signed-query-args"), Some("id;type;zone"));
}

#[test]
fn test_multi_valued_params_are_not_signed() {
    let signer = init_signer("K", "S");
    let with = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?a=1&tag=x&tag=y",
        b"",
    );
    let without = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?a=1",
        b"",
    );

    assert_eq!(pragma(&with, "signed-query-args"), Some("a"));
    // Excluded parameters don't reach the string to sign either.
    assert_eq!(signature_of(&with), signature_of(&without));
}

#[test]
fn test_no_signed_params_omits_pragma() {
    let signer = init_signer("K", "S");
    let header = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?tag=x&tag=y",
        b"",
    );

    assert_eq!(pragma(&header, "signed-query-args"), None);
    assert!(header.starts_with("EXO2-HMAC-SHA256 credential=K,expires=1700000000,signature="));
}

#[test]
fn test_malformed_params_are_not_signed() {
    let signer = init_signer("K", "S");
    let with = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?bad=%zz&a=1;b=2&zone=ch-gva-2",
        b"",
    );
    let without = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?zone=ch-gva-2",
        b"",
    );

    assert_eq!(pragma(&with, "signed-query-args"), Some("zone"));
    assert_eq!(signature_of(&with), signature_of(&without));
}

#[test]
fn test_flag_param_is_signed_with_empty_value() {
    let signer = init_signer("K", "S");
    let header = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?verbose",
        b"",
    );
    let bare = sign_at(&signer, Method::GET, "https://api.exoscale.com/v2/instance", b"");

    assert_eq!(pragma(&header, "signed-query-args"), Some("verbose"));
    // The empty value adds nothing to the values line.
    assert_eq!(signature_of(&header), signature_of(&bare));
}

#[test]
fn test_changing_a_signed_value_changes_signature() {
    let signer = init_signer("K", "S");
    let a = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?zone=ch-gva-2",
        b"",
    );
    let b = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?zone=ch-gva-3",
        b"",
    );

    assert_ne!(signature_of(&a), signature_of(&b));
}

#[test]
fn test_header_field_order() {
    let signer = init_signer("K", "S");
    let header = sign_at(
        &signer,
        Method::GET,
        "https://api.exoscale.com/v2/instance?b=2&a=1",
        b"",
    );

    let fields: Vec<&str> = header
        .trim_start_matches("EXO2-HMAC-SHA256 ")
        .split(',')
        .map(|f| f.split_once('=').map(|(k, _)| k).unwrap_or(f))
        .collect();
    assert_eq!(
        fields,
        vec!["credential", "signed-query-args", "expires", "signature"]
    );
    assert_eq!(pragma(&header, "signed-query-args"), Some("a;b"));
}
