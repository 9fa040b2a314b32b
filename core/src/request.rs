use std::mem;

use http::request::Parts;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::Result;

/// Signing context for request.
///
/// Headers are taken out of the request while signing and returned back by
/// [`SigningRequest::apply`], so signing never copies the header map.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP uri, including scheme, authority, path and query.
    pub uri: Uri,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut Parts) -> Result<Self> {
        Ok(SigningRequest {
            method: parts.method.clone(),
            uri: mem::take(&mut parts.uri),
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut Parts) -> Result<()> {
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = self.uri;

        Ok(())
    }

    /// Normalize a header name for lookups and canonicalization.
    ///
    /// Header names are case-insensitive, canonical output always uses the
    /// trimmed lowercase form.
    #[inline]
    pub fn normalize_header_name(name: &str) -> String {
        name.trim().to_ascii_lowercase()
    }

    /// Get header value by name.
    ///
    /// Only the first value is returned if the header has been set multiple times.
    pub fn header_get<'a>(headers: &'a HeaderMap, key: &str) -> Result<Option<&'a str>> {
        match headers.get(Self::normalize_header_name(key).as_str()) {
            Some(v) => Ok(Some(v.to_str()?)),
            None => Ok(None),
        }
    }

    /// Get header value by name.
    ///
    /// Returns empty string if header not found.
    #[inline]
    pub fn header_get_or_default<'a>(headers: &'a HeaderMap, key: &str) -> Result<&'a str> {
        Ok(Self::header_get(headers, key)?.unwrap_or_default())
    }

    /// Get headers whose normalized name starts with prefix.
    ///
    /// Names are returned normalized, values are kept verbatim.
    pub fn header_to_vec_with_prefix(
        headers: &HeaderMap,
        prefix: &str,
    ) -> Result<Vec<(String, String)>> {
        let mut h = Vec::new();
        for name in headers.keys() {
            let name = Self::normalize_header_name(name.as_str());
            if !name.starts_with(prefix) {
                continue;
            }
            let value = Self::header_get_or_default(headers, &name)?.to_string();
            h.push((name, value));
        }

        Ok(h)
    }

    /// Convert sorted headers to string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a:b\nc:d"
    /// ```
    pub fn header_to_string(mut headers: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        // Sort via header name.
        headers.sort();

        for (idx, (k, v)) in headers.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            s.push_str(sep);
            s.push_str(&v);
        }

        s
    }
}
