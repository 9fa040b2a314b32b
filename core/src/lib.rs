//! Core components for signing storage service requests.
//!
//! This crate provides the foundational types and traits shared by the
//! storsign service crates.
//!
//! ## Overview
//!
//! - **Traits**: [`SignRequest`] signs an `http::request::Parts` in place,
//!   [`SigningCredential`] validates the key material it needs.
//! - **Signer**: [`Signer`] pairs a credential with a request builder.
//! - **SigningRequest**: [`SigningRequest`] takes the request apart for
//!   signing and owns the header-name normalization used by every builder.
//!
//! Signing is synchronous and side-effect free: no I/O, no clock reads, no
//! shared mutable state.
//!
//! ## Example
//!
//! ```
//! use storsign_core::{Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     token: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.token.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         req: &mut http::request::Parts,
//!         credential: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let Some(cred) = credential else {
//!             return Err(storsign_core::Error::request_invalid("credential is required"));
//!         };
//!         req.headers
//!             .insert("authorization", format!("Token {}", cred.token).parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(
//!     MyCredential {
//!         token: "my-token".to_string(),
//!     },
//!     MyBuilder,
//! );
//!
//! let mut parts = http::Request::get("https://example.com")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Keyed signing primitives (HMAC-SHA256, base64)
//! - [`utils`]: Redaction of secrets in debug output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
