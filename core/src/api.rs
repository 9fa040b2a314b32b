use crate::Result;
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing key.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential can be used to sign requests.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// SignRequest is the trait used by signer to sign the request in place.
///
/// Signing is a pure computation over the request, implementations must not
/// perform I/O or read the clock.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the credential required by the signer
    /// to sign the request. Implementations should return a
    /// [`crate::ErrorKind::RequestInvalid`] error if it's missing.
    ///
    /// On error the request must be left without any authorization material.
    fn sign_request(
        &self,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
