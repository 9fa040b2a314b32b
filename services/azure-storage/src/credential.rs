use std::fmt::{Debug, Formatter};

use storsign_core::hash::base64_decode;
use storsign_core::utils::Redact;
use storsign_core::{Error, Result, SigningCredential};

use crate::constants::SECONDARY_SUFFIX;

/// Credential that holds the storage account name and its decoded key.
///
/// The account key is decoded when the credential is built, so an
/// undecodable key is reported here instead of while signing.
#[derive(Clone)]
pub struct Credential {
    account_name: String,
    account_key: Vec<u8>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.account_name.is_empty() && !self.account_key.is_empty()
    }
}

impl Credential {
    /// Create a new credential with a base64 encoded account key.
    pub fn with_shared_key(
        account_name: impl Into<String>,
        account_key: impl AsRef<str>,
    ) -> Result<Self> {
        let account_name = account_name.into();
        let account_key = base64_decode(account_key.as_ref()).map_err(|e| {
            Error::config_invalid(format!(
                "account key of {account_name} is not valid base64"
            ))
            .with_source(e)
        })?;

        Ok(Self::with_decoded_key(account_name, account_key))
    }

    /// Create a new credential with an already decoded account key.
    pub fn with_decoded_key(
        account_name: impl Into<String>,
        account_key: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            account_key: account_key.into(),
        }
    }

    /// The account name as configured.
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// The decoded account key.
    pub fn account_key(&self) -> &[u8] {
        &self.account_key
    }

    /// The account name used in the canonicalized resource and the
    /// authorization header.
    pub fn canonical_account_name(&self) -> &str {
        canonical_account_name(&self.account_name)
    }
}

/// Strip the `-secondary` suffix used to address the secondary endpoint
/// of a geo-replicated account.
pub fn canonical_account_name(account_name: &str) -> &str {
    account_name
        .strip_suffix(SECONDARY_SUFFIX)
        .unwrap_or(account_name)
}
