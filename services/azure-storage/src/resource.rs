use std::collections::BTreeMap;

use http::Uri;
use log::debug;
use percent_encoding::percent_decode_str;
use storsign_core::{Error, Result};

use crate::constants::COMP;
use crate::credential::canonical_account_name;
use crate::AuthVariant;

/// Build the canonicalized resource of the request uri.
///
/// ## Format
///
/// ```text
/// "/" + canonical account name + escaped path
///
/// // SharedKey: every query parameter, sorted by name
/// + "\n" + name + ":" + sorted values joined by ","
///
/// // Other variants: only the first `comp` value
/// + "?comp=" + value
/// ```
///
/// A url without any path after the authority, like `https://acct.example`
/// or `https://acct.example?comp=list`, has an empty path.
///
/// ## Reference
///
/// - [Constructing the canonicalized resource string](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key#constructing-the-canonicalized-resource-string)
pub fn canonicalize_resource(
    uri: &str,
    account_name: &str,
    variant: AuthVariant,
) -> Result<String> {
    let raw = uri;
    let uri = raw.parse::<Uri>().map_err(|e| {
        Error::malformed_url(format!("failed to parse request url {raw}")).with_source(e)
    })?;

    let (path, query) = split_path_and_query(&uri);
    // http::Uri turns a missing path into "/" unless a query follows.
    let path = if has_empty_path(raw, &uri) { "" } else { path };

    build_resource(path, query, account_name, variant)
}

/// Same as [`canonicalize_resource`] for an already parsed uri.
///
/// `http::Uri` has already normalized a missing path to `/` when no query
/// follows, so `https://acct.example` canonicalizes to `/acct/` here.
pub fn canonicalize_uri(uri: &Uri, account_name: &str, variant: AuthVariant) -> Result<String> {
    let (path, query) = split_path_and_query(uri);

    build_resource(path, query, account_name, variant)
}

fn build_resource(
    path: &str,
    query: &str,
    account_name: &str,
    variant: AuthVariant,
) -> Result<String> {
    let params = parse_query(query)?;

    let mut s = String::with_capacity(1 + account_name.len() + path.len() + query.len());
    s.push('/');
    s.push_str(canonical_account_name(account_name));
    // The path must be kept exactly as escaped in the uri, the service
    // recomputes the signature from the request line.
    s.push_str(path);

    match variant {
        AuthVariant::SharedKey => {
            if !params.is_empty() {
                s.push('\n');
                for (idx, (name, mut values)) in params.into_iter().enumerate() {
                    if idx != 0 {
                        s.push('\n');
                    }
                    values.sort();

                    s.push_str(&name);
                    s.push(':');
                    s.push_str(&values.join(","));
                }
            }
        }
        AuthVariant::SharedKeyForTable
        | AuthVariant::SharedKeyLite
        | AuthVariant::SharedKeyLiteForTable => {
            if let Some(comp) = params.get(COMP).and_then(|values| values.first()) {
                s.push_str("?comp=");
                s.push_str(comp);
            }
        }
    }

    debug!("canonicalized resource: {}", &s);

    Ok(s)
}

/// Split the raw path and query of the uri without decoding them.
fn split_path_and_query(uri: &Uri) -> (&str, &str) {
    let Some(paq) = uri.path_and_query() else {
        return ("", "");
    };

    paq.as_str().split_once('?').unwrap_or((paq.as_str(), ""))
}

/// Whether nothing follows the authority of an absolute url before its
/// query or its end.
fn has_empty_path(raw: &str, uri: &Uri) -> bool {
    let Some(authority) = uri.authority() else {
        return false;
    };

    raw.split_once("://")
        .and_then(|(_, rest)| rest.strip_prefix(authority.as_str()))
        .is_some_and(|rest| !rest.starts_with('/'))
}

/// Parse query into a map from decoded name to all of its decoded values,
/// kept in the order they appear.
fn parse_query(query: &str) -> Result<BTreeMap<String, Vec<String>>> {
    if query.contains(';') {
        return Err(Error::malformed_query(format!(
            "invalid semicolon separator in query {query}"
        )));
    }
    validate_percent_escapes(query)?;

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        params
            .entry(decode_query_component(k)?)
            .or_default()
            .push(decode_query_component(v)?);
    }

    Ok(params)
}

/// Decode `+` as space and percent escapes, which must form valid UTF-8.
fn decode_query_component(s: &str) -> Result<String> {
    let s = s.replace('+', " ");
    let decoded = percent_decode_str(&s).decode_utf8().map_err(|e| {
        Error::malformed_query(format!("query component {s} is not valid utf-8")).with_source(e)
    })?;

    Ok(decoded.into_owned())
}

/// Every `%` must start a two hex digits escape.
fn validate_percent_escapes(query: &str) -> Result<()> {
    let bs = query.as_bytes();
    for (idx, b) in bs.iter().enumerate() {
        if *b != b'%' {
            continue;
        }

        let escape = bs.get(idx + 1..idx + 3);
        if !escape.is_some_and(|e| e.iter().all(u8::is_ascii_hexdigit)) {
            let end = (idx + 3).min(bs.len());
            return Err(Error::malformed_query(format!(
                "invalid percent escape {:?} in query {query}",
                String::from_utf8_lossy(&bs[idx..end])
            )));
        }
    }

    Ok(())
}
