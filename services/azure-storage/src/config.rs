use std::collections::HashMap;
use std::env;
use std::fmt::{Debug, Formatter};

use storsign_core::utils::Redact;
use storsign_core::{Error, Result, Signer};

use crate::constants::*;
use crate::{AuthVariant, Credential, RequestSigner};

/// Config carries all the configuration for Shared Key signing.
#[derive(Clone, Default)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    /// `account_name` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_ACCOUNT_NAME`]
    pub account_name: Option<String>,
    /// `account_key` is the base64 encoded account key, it will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_ACCOUNT_KEY`]
    pub account_key: Option<String>,
    /// `auth_variant` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_AUTH_VARIANT`], either the short tag
    ///   (`sharedKeyLite`) or the full name (`SharedKeyLite`)
    ///
    /// Defaults to [`AuthVariant::SharedKey`].
    pub auth_variant: Option<AuthVariant>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .field("auth_variant", &self.auth_variant)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Fields that are already set are kept. An unknown auth variant tag is
    /// reported instead of silently falling back to the default.
    pub fn from_env(mut self) -> Result<Self> {
        let envs = env::vars().collect::<HashMap<_, _>>();

        if self.account_name.is_none() {
            self.account_name = envs.get(AZURE_STORAGE_ACCOUNT_NAME).cloned();
        }

        if self.account_key.is_none() {
            self.account_key = envs.get(AZURE_STORAGE_ACCOUNT_KEY).cloned();
        }

        if self.auth_variant.is_none() {
            if let Some(v) = envs.get(AZURE_STORAGE_AUTH_VARIANT) {
                self.auth_variant = Some(v.parse()?);
            }
        }

        Ok(self)
    }

    /// Set the account name.
    pub fn with_account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = Some(account_name.into());
        self
    }

    /// Set the base64 encoded account key.
    pub fn with_account_key(mut self, account_key: impl Into<String>) -> Self {
        self.account_key = Some(account_key.into());
        self
    }

    /// Set the auth variant.
    pub fn with_auth_variant(mut self, auth_variant: AuthVariant) -> Self {
        self.auth_variant = Some(auth_variant);
        self
    }

    /// Build the credential described by this config.
    pub fn credential(&self) -> Result<Credential> {
        let Some(account_name) = self.account_name.as_deref().filter(|v| !v.is_empty()) else {
            return Err(Error::config_invalid("account name is missing"));
        };
        let Some(account_key) = self.account_key.as_deref().filter(|v| !v.is_empty()) else {
            return Err(Error::config_invalid(format!(
                "account key of {account_name} is missing"
            )));
        };

        Credential::with_shared_key(account_name, account_key)
    }

    /// Build the request signer described by this config.
    pub fn request_signer(&self) -> RequestSigner {
        RequestSigner::new().with_variant(self.auth_variant.unwrap_or_default())
    }

    /// Build a [`Signer`] that signs requests with this config.
    pub fn signer(&self) -> Result<Signer<Credential>> {
        Ok(Signer::new(self.credential()?, self.request_signer()))
    }
}
