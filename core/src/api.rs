use std::fmt::Debug;

use crate::time::DateTime;
use crate::{Result, SigningRequest};

/// SignRequest is the trait used by signer to sign the request.
///
/// Implementations hold their credential and must be pure: the same
/// request and `expires_at` always produce the same headers.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Sign the request in place.
    ///
    /// ## Expires At
    ///
    /// The `expires_at` parameter is the absolute instant after which the
    /// signature must be rejected by the server. It's computed once by
    /// [`crate::Signer`] from the wall clock and the configured validity.
    fn sign_request(&self, req: &mut SigningRequest, expires_at: DateTime) -> Result<()>;
}
