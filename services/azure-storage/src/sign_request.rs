use http::header::AUTHORIZATION;
use http::request::Parts;
use storsign_core::{Error, Result, SignRequest, SigningRequest};

use crate::authorization::{sensitive_header_value, shared_key_for_uri};
use crate::{AuthVariant, Credential};

/// RequestSigner that implement Storage Shared Key Authorization.
///
/// The request must already carry every header that takes part in the
/// signature, including `Date` or `x-ms-date`. The signer never reads the
/// clock.
///
/// - [Authorize with Shared Key](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSigner {
    variant: AuthVariant,
}

impl RequestSigner {
    /// Create a new signer using [`AuthVariant::SharedKey`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the auth variant used to sign requests.
    pub fn with_variant(mut self, variant: AuthVariant) -> Self {
        self.variant = variant;
        self
    }

    /// The auth variant used to sign requests.
    pub fn variant(&self) -> AuthVariant {
        self.variant
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &mut Parts, credential: Option<&Self::Credential>) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::request_invalid("credential is required"));
        };

        let mut ctx = SigningRequest::build(req)?;

        let value = shared_key_for_uri(
            ctx.method.as_str(),
            &ctx.uri,
            &ctx.headers,
            self.variant,
            cred,
        )
        .and_then(|v| sensitive_header_value(&v));

        match value {
            Ok(value) => {
                ctx.headers.insert(AUTHORIZATION, value);
                ctx.apply(req)
            }
            Err(err) => {
                // Hand the untouched request back before reporting.
                ctx.apply(req)?;
                Err(err)
            }
        }
    }
}
