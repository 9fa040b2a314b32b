use std::fmt::{Display, Formatter};
use std::str::FromStr;

use storsign_core::Error;

/// AuthVariant selects the layout of the string to sign and the scheme
/// label of the authorization header.
///
/// - [Authorize with Shared Key](https://learn.microsoft.com/en-us/rest/api/storageservices/authorize-with-shared-key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthVariant {
    /// Shared Key for the blob, queue and file services.
    #[default]
    SharedKey,
    /// Shared Key for the table service.
    SharedKeyForTable,
    /// Shared Key Lite for the blob, queue and file services.
    SharedKeyLite,
    /// Shared Key Lite for the table service.
    SharedKeyLiteForTable,
}

impl AuthVariant {
    /// All known variants.
    pub const ALL: [AuthVariant; 4] = [
        AuthVariant::SharedKey,
        AuthVariant::SharedKeyForTable,
        AuthVariant::SharedKeyLite,
        AuthVariant::SharedKeyLiteForTable,
    ];

    /// Scheme label used in the authorization header.
    pub fn scheme(&self) -> &'static str {
        match self {
            AuthVariant::SharedKey | AuthVariant::SharedKeyForTable => "SharedKey",
            AuthVariant::SharedKeyLite | AuthVariant::SharedKeyLiteForTable => "SharedKeyLite",
        }
    }

    /// Whether this variant targets the table service.
    pub fn is_table(&self) -> bool {
        matches!(
            self,
            AuthVariant::SharedKeyForTable | AuthVariant::SharedKeyLiteForTable
        )
    }

    /// Short tag of this variant, accepted by [`AuthVariant::from_str`].
    pub fn tag(&self) -> &'static str {
        match self {
            AuthVariant::SharedKey => "sharedKey",
            AuthVariant::SharedKeyForTable => "sharedKeyTable",
            AuthVariant::SharedKeyLite => "sharedKeyLite",
            AuthVariant::SharedKeyLiteForTable => "sharedKeyLiteTable",
        }
    }
}

impl Display for AuthVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthVariant::SharedKey => "SharedKey",
            AuthVariant::SharedKeyForTable => "SharedKeyForTable",
            AuthVariant::SharedKeyLite => "SharedKeyLite",
            AuthVariant::SharedKeyLiteForTable => "SharedKeyLiteForTable",
        };
        f.write_str(name)
    }
}

/// Parse a variant from its short tag (`sharedKeyTable`) or its full
/// name (`SharedKeyForTable`).
///
/// Unknown tags are rejected with [`storsign_core::ErrorKind::UnsupportedAuthVariant`].
impl FromStr for AuthVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthVariant::ALL
            .into_iter()
            .find(|v| v.tag() == s || v.to_string() == s)
            .ok_or_else(|| Error::unsupported_auth_variant(s))
    }
}

impl TryFrom<&str> for AuthVariant {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
