use http::HeaderMap;
use log::debug;
use storsign_core::{Result, SigningRequest};

use crate::constants::*;
use crate::AuthVariant;

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// // SharedKey
/// VERB + "\n" +
/// Content-Encoding + "\n" +
/// Content-Language + "\n" +
/// Content-Length + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// If-Modified-Since + "\n" +
/// If-Match + "\n" +
/// If-None-Match + "\n" +
/// If-Unmodified-Since + "\n" +
/// Range + "\n" +
/// CanonicalizedHeaders + "\n" +
/// CanonicalizedResource;
///
/// // SharedKeyForTable
/// VERB + "\n" + Content-MD5 + "\n" + Content-Type + "\n" + Date + "\n" +
/// CanonicalizedResource;
///
/// // SharedKeyLite
/// VERB + "\n" + Content-MD5 + "\n" + Content-Type + "\n" + Date + "\n" +
/// CanonicalizedHeaders + "\n" +
/// CanonicalizedResource;
///
/// // SharedKeyLiteForTable
/// Date + "\n" + CanonicalizedResource;
/// ```
///
/// Missing headers are written as empty fields, so the number of lines only
/// depends on the variant.
///
/// ## Reference
///
/// - [Blob, Queue, and File Services (Shared Key authorization)](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#blob-queue-and-file-services-shared-key-authorization)
/// - [Table service (Shared Key authorization)](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#table-service-shared-key-authorization)
/// - [Shared Key Lite and Table service (Shared Key Lite authorization)](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#shared-key-lite-and-table-service-shared-key-lite-authorization)
pub fn string_to_sign(
    verb: &str,
    headers: &HeaderMap,
    canonicalized_resource: &str,
    variant: AuthVariant,
) -> Result<String> {
    let header = |name: &str| SigningRequest::header_get_or_default(headers, name);

    let content_length = match header(CONTENT_LENGTH)? {
        "0" => "",
        v => v,
    };
    let date = resolve_date(
        header(DATE)?,
        SigningRequest::header_get(headers, X_MS_DATE)?,
        variant,
    );

    let canonicalized_headers = if variant.is_table() {
        String::new()
    } else {
        canonicalize_headers(headers)?
    };

    let fields = match variant {
        AuthVariant::SharedKey => [
            verb,
            header(CONTENT_ENCODING)?,
            header(CONTENT_LANGUAGE)?,
            content_length,
            header(CONTENT_MD5)?,
            header(CONTENT_TYPE)?,
            date,
            header(IF_MODIFIED_SINCE)?,
            header(IF_MATCH)?,
            header(IF_NONE_MATCH)?,
            header(IF_UNMODIFIED_SINCE)?,
            header(RANGE)?,
            canonicalized_headers.as_str(),
            canonicalized_resource,
        ]
        .join("\n"),
        AuthVariant::SharedKeyForTable => [
            verb,
            header(CONTENT_MD5)?,
            header(CONTENT_TYPE)?,
            date,
            canonicalized_resource,
        ]
        .join("\n"),
        AuthVariant::SharedKeyLite => [
            verb,
            header(CONTENT_MD5)?,
            header(CONTENT_TYPE)?,
            date,
            canonicalized_headers.as_str(),
            canonicalized_resource,
        ]
        .join("\n"),
        AuthVariant::SharedKeyLiteForTable => [date, canonicalized_resource].join("\n"),
    };

    debug!("string to sign: {}", &fields);

    Ok(fields)
}

/// Pick the date field of the string to sign.
///
/// `x-ms-date` replaces the standard `Date` header. The table variants sign
/// its value in the date field, the others sign it as part of the
/// canonicalized headers and leave the date field empty.
pub fn resolve_date<'a>(
    date: &'a str,
    x_ms_date: Option<&'a str>,
    variant: AuthVariant,
) -> &'a str {
    match (x_ms_date, variant) {
        (None, _) => date,
        (Some(_), AuthVariant::SharedKey | AuthVariant::SharedKeyLite) => "",
        (Some(v), AuthVariant::SharedKeyForTable | AuthVariant::SharedKeyLiteForTable) => v,
    }
}

/// Build the canonicalized headers string.
///
/// All `x-ms-` headers sorted by their lowercase name and rendered as
/// `name:value`, one per line. Values are kept verbatim.
///
/// ## Reference
///
/// - [Constructing the canonicalized headers string](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-headers-string)
pub fn canonicalize_headers(headers: &HeaderMap) -> Result<String> {
    Ok(SigningRequest::header_to_string(
        SigningRequest::header_to_vec_with_prefix(headers, X_MS_PREFIX)?,
        ":",
        "\n",
    ))
}
