use std::fmt::{Debug, Formatter};
use std::time::Duration;

use exosign_core::utils::Redact;
use exosign_core::{Env, Result, Signer};
use log::warn;

use crate::constants::*;
use crate::{Credential, RequestSigner};

/// Config carries all the configuration for exoscale API V2 signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXOSCALE_API_KEY`]
    pub api_key: Option<String>,
    /// `api_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXOSCALE_API_SECRET`]
    pub api_secret: Option<String>,
    /// `expires_in` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`EXOSCALE_API_SIGNATURE_EXPIRES`], in whole seconds
    /// - [`exosign_core::DEFAULT_EXPIRES_IN`] otherwise
    pub expires_in: Option<Duration>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set api_secret
    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Set expires_in
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    /// Load config from env.
    ///
    /// Fields already set are kept.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        if let Some(v) = env.var(EXOSCALE_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = env.var(EXOSCALE_API_SECRET) {
            self.api_secret.get_or_insert(v);
        }
        if let Some(v) = env.var(EXOSCALE_API_SIGNATURE_EXPIRES) {
            match v.trim().parse::<u64>() {
                Ok(secs) => {
                    self.expires_in.get_or_insert(Duration::from_secs(secs));
                }
                Err(e) => warn!("ignore invalid {EXOSCALE_API_SIGNATURE_EXPIRES} {v:?}: {e}"),
            }
        }

        self
    }

    /// Build a validated credential from this config.
    pub fn credential(&self) -> Result<Credential> {
        Credential::new(
            self.api_key.clone().unwrap_or_default(),
            self.api_secret.clone().unwrap_or_default(),
        )
    }

    /// Build a signer from this config.
    pub fn into_signer(self) -> Result<Signer<RequestSigner>> {
        let signer = Signer::new(RequestSigner::from_config(&self)?);

        Ok(match self.expires_in {
            Some(d) => signer.with_expires_in(d),
            None => signer,
        })
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
