// Env values used in exoscale v2 services.
pub const EXOSCALE_API_KEY: &str = "EXOSCALE_API_KEY";
pub const EXOSCALE_API_SECRET: &str = "EXOSCALE_API_SECRET";
pub const EXOSCALE_API_SIGNATURE_EXPIRES: &str = "EXOSCALE_API_SIGNATURE_EXPIRES";

// Authorization header pragmas.
pub const SCHEME: &str = "EXO2-HMAC-SHA256";
pub const PRAGMA_CREDENTIAL: &str = "credential";
pub const PRAGMA_SIGNED_QUERY_ARGS: &str = "signed-query-args";
pub const PRAGMA_EXPIRES: &str = "expires";
pub const PRAGMA_SIGNATURE: &str = "signature";
