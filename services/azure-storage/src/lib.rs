//! Storage Shared Key signer
//!
//! This crate signs requests for the blob, queue, file and table services
//! with the Shared Key and Shared Key Lite schemes:
//!
//! 1. [`canonicalize_resource`] turns the request url into the canonicalized resource.
//! 2. [`string_to_sign`] lays out the verb, headers and resource for the chosen [`AuthVariant`].
//! 3. [`authorization_header`] signs it with HMAC-SHA256 and formats the header value.
//!
//! Signing is a pure function of its inputs. The caller is responsible for
//! placing a `Date` or `x-ms-date` header on the request.
//!
//! # Example
//!
//! ```rust
//! use http::HeaderMap;
//! use storsign_azure_storage::{add_authorization_header, AuthVariant, Credential};
//!
//! # fn main() -> storsign_core::Result<()> {
//! let cred = Credential::with_shared_key("acct", "c2VjcmV0")?;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("x-ms-date", "Tue, 01 Jan 2019 00:00:00 GMT".parse()?);
//! headers.insert("x-ms-version", "2018-03-28".parse()?);
//!
//! add_authorization_header(
//!     "GET",
//!     "https://acct.blob.core.windows.net/container/blob?comp=metadata",
//!     &mut headers,
//!     AuthVariant::SharedKey,
//!     &cred,
//! )?;
//! assert!(headers.contains_key("authorization"));
//! # Ok(())
//! # }
//! ```
//!
//! Requests built with `http` can be signed in place through
//! [`storsign_core::Signer`]:
//!
//! ```rust
//! use storsign_azure_storage::{AuthVariant, Config};
//!
//! # fn main() -> storsign_core::Result<()> {
//! let signer = Config::default()
//!     .with_account_name("acct")
//!     .with_account_key("c2VjcmV0")
//!     .with_auth_variant(AuthVariant::SharedKeyLite)
//!     .signer()?;
//!
//! let mut parts = http::Request::get("https://acct.queue.core.windows.net/myqueue/messages")
//!     .header("x-ms-date", "Tue, 01 Jan 2019 00:00:00 GMT")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts)?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod variant;
pub use variant::AuthVariant;

mod credential;
pub use credential::{canonical_account_name, Credential};

mod config;
pub use config::Config;

mod resource;
pub use resource::{canonicalize_resource, canonicalize_uri};

mod string_to_sign;
pub use string_to_sign::{canonicalize_headers, resolve_date, string_to_sign};

mod authorization;
pub use authorization::{add_authorization_header, authorization_header, shared_key};

mod sign_request;
pub use sign_request::RequestSigner;
