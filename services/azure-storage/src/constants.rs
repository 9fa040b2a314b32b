// Headers used in the string to sign.
pub const CONTENT_ENCODING: &str = "content-encoding";
pub const CONTENT_LANGUAGE: &str = "content-language";
pub const CONTENT_LENGTH: &str = "content-length";
pub const CONTENT_MD5: &str = "content-md5";
pub const CONTENT_TYPE: &str = "content-type";
pub const DATE: &str = "date";
pub const IF_MODIFIED_SINCE: &str = "if-modified-since";
pub const IF_MATCH: &str = "if-match";
pub const IF_NONE_MATCH: &str = "if-none-match";
pub const IF_UNMODIFIED_SINCE: &str = "if-unmodified-since";
pub const RANGE: &str = "range";
pub const X_MS_DATE: &str = "x-ms-date";

/// Prefix of the service specific headers that take part in the canonicalized headers.
pub const X_MS_PREFIX: &str = "x-ms-";

/// Suffix of the account name used to address the geo-replicated secondary endpoint.
pub const SECONDARY_SUFFIX: &str = "-secondary";

/// The only query parameter kept in the canonicalized resource of table and lite variants.
pub const COMP: &str = "comp";

// Env values used by Config.
pub const AZURE_STORAGE_ACCOUNT_NAME: &str = "AZURE_STORAGE_ACCOUNT_NAME";
pub const AZURE_STORAGE_ACCOUNT_KEY: &str = "AZURE_STORAGE_ACCOUNT_KEY";
pub const AZURE_STORAGE_AUTH_VARIANT: &str = "AZURE_STORAGE_AUTH_VARIANT";
