use http::header::AUTHORIZATION;
use pretty_assertions::assert_eq;
use storsign_azure_storage::{add_authorization_header, AuthVariant, Config, RequestSigner};
use storsign_core::SignRequest;

use super::{credential, headers, ACCOUNT_KEY, DATE};

const URL: &str = "https://acct.blob.example/c/b?comp=block&blockid=AAAA";
const AUTHORIZATION_VALUE: &str =
    "SharedKeyLite acct:hjLPdrWCNgDRaGiHtugCrpzlcdoJVza7GoNZoNRhmC4=";

fn put_block_headers() -> http::HeaderMap {
    headers(&[
        ("Content-Type", "text/plain"),
        // Replaced by x-ms-date, must not be signed.
        ("Date", "Wed, 02 Jan 2019 00:00:00 GMT"),
        ("x-ms-date", DATE),
        ("x-ms-version", "2018-03-28"),
        ("Content-Length", "4"),
    ])
}

#[test]
fn test_put_block() {
    let mut h = put_block_headers();
    add_authorization_header(
        "PUT",
        URL,
        &mut h,
        AuthVariant::SharedKeyLite,
        &credential("acct"),
    )
    .unwrap();

    assert_eq!(h[AUTHORIZATION], AUTHORIZATION_VALUE);
}

#[test]
fn test_put_block_from_config() {
    let config = Config::default()
        .with_account_name("acct")
        .with_account_key(ACCOUNT_KEY)
        .with_auth_variant(AuthVariant::SharedKeyLite);

    let mut parts = http::Request::put(URL)
        .body(())
        .unwrap()
        .into_parts()
        .0;
    parts.headers = put_block_headers();

    config
        .request_signer()
        .sign_request(&mut parts, Some(&config.credential().unwrap()))
        .unwrap();

    assert_eq!(parts.headers[AUTHORIZATION], AUTHORIZATION_VALUE);
}

#[test]
fn test_non_metadata_headers_are_not_signed() {
    let mut with_extra = put_block_headers();
    with_extra.insert("x-amz-meta-name", "value".parse().unwrap());
    with_extra.insert("user-agent", "storsign".parse().unwrap());

    let signer = RequestSigner::new().with_variant(AuthVariant::SharedKeyLite);
    let mut parts = http::Request::put(URL)
        .body(())
        .unwrap()
        .into_parts()
        .0;
    parts.headers = with_extra;
    signer
        .sign_request(&mut parts, Some(&credential("acct")))
        .unwrap();

    assert_eq!(parts.headers[AUTHORIZATION], AUTHORIZATION_VALUE);
}
