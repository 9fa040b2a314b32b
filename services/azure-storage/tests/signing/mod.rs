//! Fixed vectors checked against the documented string to sign layouts.

mod shared_key;
mod shared_key_lite;
mod table;

use http::HeaderMap;
use storsign_azure_storage::Credential;

/// The well known development storage key.
pub const ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

pub const DATE: &str = "Tue, 01 Jan 2019 00:00:00 GMT";

pub const URL: &str =
    "https://acct.service.example/container/blob?comp=metadata&restype=container";

pub fn credential(account_name: &str) -> Credential {
    Credential::with_shared_key(account_name, ACCOUNT_KEY).expect("key must be valid")
}

pub fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut h = HeaderMap::new();
    for (k, v) in pairs {
        h.insert(
            http::HeaderName::from_bytes(k.as_bytes()).expect("header name must be valid"),
            v.parse().expect("header value must be valid"),
        );
    }
    h
}

/// The headers used by the worked examples.
pub fn example_headers() -> HeaderMap {
    headers(&[
        ("Content-Length", "0"),
        ("Date", DATE),
        ("x-ms-version", "2018-03-28"),
    ])
}
