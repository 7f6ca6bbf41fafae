//! Exoscale API V2 request signer.
use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::debug;

use exosign_core::hash::base64_hmac_sha256;
use exosign_core::time::{format_timestamp, DateTime};
use exosign_core::{Result, SignRequest, SigningRequest};

use crate::canonical::canonicalize;
use crate::constants::*;
use crate::{Config, Credential};

/// RequestSigner that implement the exoscale `EXO2-HMAC-SHA256` authorization.
///
/// The credential is shared read-only: cloning a signer, or cloning the
/// [`exosign_core::Signer`] that wraps it, never copies the secret.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Arc<Credential>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential: Arc::new(credential),
        }
    }

    /// Create a new signer from a shared credential.
    pub fn from_shared(credential: Arc<Credential>) -> Self {
        Self { credential }
    }

    /// Create a new signer from config.
    ///
    /// Returns a config error if the API key or secret is missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.credential()?))
    }

    /// Get the credential used by this signer.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}

impl SignRequest for RequestSigner {
    fn sign_request(&self, req: &mut SigningRequest, expires_at: DateTime) -> Result<()> {
        let cred = &self.credential;

        let canonical = canonicalize(
            req.method.as_str(),
            &req.path_percent_decoded(),
            &req.body,
            &req.query_multimap(),
            expires_at,
        );
        debug!("string to sign: {}", canonical.string_to_sign_lossy());

        let signature =
            base64_hmac_sha256(cred.api_secret().as_bytes(), &canonical.string_to_sign);

        req.headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = build_header(
                cred.api_key(),
                &canonical.signed_query_args,
                expires_at,
                &signature,
            )
            .parse()?;
            value.set_sensitive(true);

            value
        });

        Ok(())
    }
}

/// Build the authorization header value.
///
/// ## Format
///
/// ```text
/// EXO2-HMAC-SHA256 credential=<api_key>[,signed-query-args=<n1>;<n2>...],expires=<unix>,signature=<base64>
/// ```
///
/// `signed-query-args` is omitted when no parameter is signed.
pub fn build_header(
    api_key: &str,
    signed_query_args: &[String],
    expires_at: DateTime,
    signature: &str,
) -> String {
    let mut parts = Vec::with_capacity(4);
    parts.push(format!("{SCHEME} {PRAGMA_CREDENTIAL}={api_key}"));
    if !signed_query_args.is_empty() {
        parts.push(format!(
            "{PRAGMA_SIGNED_QUERY_ARGS}={}",
            signed_query_args.join(";")
        ));
    }
    parts.push(format!(
        "{PRAGMA_EXPIRES}={}",
        format_timestamp(expires_at)
    ));
    parts.push(format!("{PRAGMA_SIGNATURE}={signature}"));

    parts.join(",")
}
