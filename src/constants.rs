/// Fixed endpoints and names the mirror operates on.
/// These are compiled in; the binary never reads them from the environment.

/// ZIP-code lookup the handler mirrors on every invocation
pub const SOURCE_URL: &str = "https://viacep.com.br/ws/14010090/json/";

/// Destination bucket for mirrored payloads
pub const BUCKET: &str = "testebucket-hlvls";

/// Region forced onto the storage client regardless of ambient config
pub const REGION: &str = "us-east-1";

/// Suffix appended to the millisecond timestamp to form the object key
pub const KEY_SUFFIX: &str = ".json";

/// Name of the span wrapped around object key construction
pub const PUT_OBJECT_SPAN: &str = "build_put_object";

// Environment variables read by the ambient stack
pub const LOG_FORMAT_ENV: &str = "MIRROR_LOG_FORMAT";
pub const LOG_DIR_ENV: &str = "MIRROR_LOG_DIR";
pub const LAMBDA_FUNCTION_ENV: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Default filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "cep_mirror=info,info";

/// Build the object key for a given upload instant
pub fn object_key(unix_millis: i64) -> String {
    format!("{}{}", unix_millis, KEY_SUFFIX)
}
