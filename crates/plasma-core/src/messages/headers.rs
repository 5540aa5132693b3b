//! Core header names. All of them live in the `DS` namespace.

pub const DESTINATION_CLIENT_ID: &str = "DSDstClientId";

pub const ENDPOINT: &str = "DSEndpoint";

/// Identifies a client connection (as opposed to `clientId`, which
/// identifies a single message agent on that connection).
pub const FLEX_CLIENT_ID: &str = "DSId";

pub const PRIORITY: &str = "DSPriority";

pub const REMOTE_CREDENTIALS: &str = "DSRemoteCredentials";

pub const REMOTE_CREDENTIALS_CHARSET: &str = "DSRemoteCredentialsCharset";

pub const REQUEST_TIMEOUT: &str = "DSRequestTimeout";

pub const STATUS: &str = "DSStatusCode";

pub const VALIDATE_ENDPOINT: &str = "DSValidateEndpoint";

pub const SUBTOPIC: &str = "DSSubtopic";

pub const ERROR_HINT: &str = "DSErrorHint";

pub const RETRYABLE_ERROR_HINT: &str = "DSRetryableErrorHint";

pub const SELECTOR: &str = "DSSelector";
