use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;
use storsign_azure_storage::{
    canonicalize_resource, shared_key, string_to_sign, AuthVariant, RequestSigner,
};
use storsign_core::{ErrorKind, Signer};

use super::{credential, example_headers, headers, DATE, URL};

const RESOURCE: &str = "/acct/container/blob\ncomp:metadata\nrestype:container";
const AUTHORIZATION_VALUE: &str = "SharedKey acct:uOVNRnntrWvjCxoOyqd0Mf/PtxPwrTGy9yR+dEjwo7k=";

#[test]
fn test_example_request() {
    let resource = canonicalize_resource(URL, "acct", AuthVariant::SharedKey).unwrap();
    assert_eq!(resource, RESOURCE);

    let sts = string_to_sign("GET", &example_headers(), &resource, AuthVariant::SharedKey).unwrap();
    let fields: Vec<&str> = sts.split('\n').collect();
    // Content-Length of "0" is signed as an empty field.
    assert_eq!(fields[3], "");
    assert!(sts.ends_with(&format!("\nx-ms-version:2018-03-28\n{RESOURCE}")));

    assert_eq!(
        shared_key(
            "GET",
            URL,
            &example_headers(),
            AuthVariant::SharedKey,
            &credential("acct")
        )
        .unwrap(),
        AUTHORIZATION_VALUE
    );
}

#[test]
fn test_secondary_account() {
    assert_eq!(
        shared_key(
            "GET",
            URL,
            &example_headers(),
            AuthVariant::SharedKey,
            &credential("acct-secondary")
        )
        .unwrap(),
        AUTHORIZATION_VALUE
    );
}

#[test]
fn test_query_order_independent() {
    let permuted = "https://acct.service.example/container/blob?restype=container&comp=metadata";

    assert_eq!(
        shared_key(
            "GET",
            permuted,
            &example_headers(),
            AuthVariant::SharedKey,
            &credential("acct")
        )
        .unwrap(),
        AUTHORIZATION_VALUE
    );
}

#[test]
fn test_zero_content_length_same_as_missing() {
    let without_length = headers(&[("Date", DATE), ("x-ms-version", "2018-03-28")]);

    assert_eq!(
        shared_key(
            "GET",
            URL,
            &without_length,
            AuthVariant::SharedKey,
            &credential("acct")
        )
        .unwrap(),
        AUTHORIZATION_VALUE
    );
}

#[test]
fn test_header_casing_does_not_matter() {
    let mixed = headers(&[
        ("CONTENT-LENGTH", "0"),
        ("date", DATE),
        ("X-Ms-Version", "2018-03-28"),
    ]);

    assert_eq!(
        shared_key("GET", URL, &mixed, AuthVariant::SharedKey, &credential("acct")).unwrap(),
        AUTHORIZATION_VALUE
    );
}

#[test]
fn test_signer_on_request_parts() {
    let signer = Signer::new(credential("acct"), RequestSigner::new());

    let mut parts = http::Request::get(URL)
        .header("Content-Length", "0")
        .header("Date", DATE)
        .header("x-ms-version", "2018-03-28")
        .body(())
        .unwrap()
        .into_parts()
        .0;
    signer.sign(&mut parts).unwrap();

    assert_eq!(parts.headers[AUTHORIZATION], AUTHORIZATION_VALUE);
    assert!(parts.headers[AUTHORIZATION].is_sensitive());
}

#[test]
fn test_malformed_url() {
    let err = shared_key(
        "GET",
        "https://acct.service.example/con tainer",
        &example_headers(),
        AuthVariant::SharedKey,
        &credential("acct"),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedUrl);
}
