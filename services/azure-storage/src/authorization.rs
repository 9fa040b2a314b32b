use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, Uri};
use storsign_core::hash::base64_hmac_sha256;
use storsign_core::{Error, Result};

use crate::resource::{canonicalize_resource, canonicalize_uri};
use crate::string_to_sign::string_to_sign;
use crate::{AuthVariant, Credential};

/// Sign the string to sign and format the authorization header value.
///
/// ```text
/// <SharedKey|SharedKeyLite> <canonical account name>:<base64 signature>
/// ```
pub fn authorization_header(
    string_to_sign: &str,
    credential: &Credential,
    variant: AuthVariant,
) -> String {
    let signature = base64_hmac_sha256(credential.account_key(), string_to_sign.as_bytes());

    format!(
        "{} {}:{}",
        variant.scheme(),
        credential.canonical_account_name(),
        signature
    )
}

/// Compute the authorization header value of a request.
pub fn shared_key(
    verb: &str,
    uri: &str,
    headers: &HeaderMap,
    variant: AuthVariant,
    credential: &Credential,
) -> Result<String> {
    let canonicalized_resource = canonicalize_resource(uri, credential.account_name(), variant)?;

    sign_resource(verb, headers, &canonicalized_resource, variant, credential)
}

pub(crate) fn shared_key_for_uri(
    verb: &str,
    uri: &Uri,
    headers: &HeaderMap,
    variant: AuthVariant,
    credential: &Credential,
) -> Result<String> {
    let canonicalized_resource = canonicalize_uri(uri, credential.account_name(), variant)?;

    sign_resource(verb, headers, &canonicalized_resource, variant, credential)
}

fn sign_resource(
    verb: &str,
    headers: &HeaderMap,
    canonicalized_resource: &str,
    variant: AuthVariant,
    credential: &Credential,
) -> Result<String> {
    let string_to_sign = string_to_sign(verb, headers, canonicalized_resource, variant)?;

    Ok(authorization_header(&string_to_sign, credential, variant))
}

/// Compute the authorization header of a request and insert it into `headers`.
///
/// `headers` is left untouched if signing fails.
pub fn add_authorization_header(
    verb: &str,
    uri: &str,
    headers: &mut HeaderMap,
    variant: AuthVariant,
    credential: &Credential,
) -> Result<()> {
    let value = shared_key(verb, uri, headers, variant, credential)?;
    headers.insert(AUTHORIZATION, sensitive_header_value(&value)?);

    Ok(())
}

pub(crate) fn sensitive_header_value(value: &str) -> Result<HeaderValue> {
    let mut value: HeaderValue = value.parse().map_err(|e| {
        Error::request_invalid("failed to parse authorization header").with_source(e)
    })?;
    value.set_sensitive(true);

    Ok(value)
}
