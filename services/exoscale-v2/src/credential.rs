// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use exosign_core::utils::Redact;
use exosign_core::{Error, Result};

/// Credential for exoscale API V2.
///
/// A credential is validated once at construction and never changes
/// afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
    api_secret: String,
}

impl Credential {
    /// Create a new credential.
    ///
    /// Returns a config error naming the missing field if either the key or
    /// the secret is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let (api_key, api_secret) = (api_key.into(), api_secret.into());

        if api_key.is_empty() {
            return Err(Error::config_invalid("missing API key"));
        }
        if api_secret.is_empty() {
            return Err(Error::config_invalid("missing API secret"));
        }

        Ok(Self {
            api_key,
            api_secret,
        })
    }

    /// API key, sent in clear as the `credential` pragma.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// API secret, only ever used as the HMAC key.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &Redact::from(&self.api_key))
            .field("api_secret", &Redact::from(&self.api_secret))
            .finish()
    }
}
