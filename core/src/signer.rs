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

use std::mem;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http_body::Body;
use http_body_util::BodyExt;
use log::debug;

use crate::time::{add_duration, format_timestamp, now, DateTime};
use crate::{Error, Result, SignRequest, SigningRequest};

/// Default validity of a signature: 10 minutes.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(10 * 60);

/// Signer is the main struct used to sign the request.
///
/// It holds no per request state and can be shared across tasks: clone it
/// or put it behind a reference.
#[derive(Debug)]
pub struct Signer<S: SignRequest> {
    builder: Arc<S>,
    expires_in: Duration,
}

impl<S: SignRequest> Clone for Signer<S> {
    fn clone(&self) -> Self {
        Self {
            builder: self.builder.clone(),
            expires_in: self.expires_in,
        }
    }
}

impl<S: SignRequest> Signer<S> {
    /// Create a new signer with [`DEFAULT_EXPIRES_IN`] validity.
    pub fn new(builder: S) -> Self {
        Self {
            builder: Arc::new(builder),
            expires_in: DEFAULT_EXPIRES_IN,
        }
    }

    /// Set the validity of every signature produced by this signer.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Get the validity of signatures produced by this signer.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Get the request signer.
    pub fn builder(&self) -> &S {
        &self.builder
    }

    /// Signing request.
    ///
    /// The body is buffered in memory, signed, and put back so the next
    /// stage observes the same bytes. If buffering fails the request is left
    /// without signature and [`crate::ErrorKind::BodyRead`] is returned.
    ///
    /// Dropping the returned future cancels the buffering; nothing is signed
    /// in that case.
    pub async fn sign<B>(&self, req: &mut http::Request<B>) -> Result<()>
    where
        B: Body + From<Bytes>,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let expires_at = add_duration(now(), self.expires_in)?;

        let body = mem::replace(req.body_mut(), B::from(Bytes::new()));
        let body = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(err) => {
                let err: Box<dyn std::error::Error + Send + Sync> = err.into();
                return Err(Error::body_read("failed to buffer request body for signing")
                    .with_source(anyhow::anyhow!(err)));
            }
        };
        *req.body_mut() = B::from(body.clone());

        let mut headers = mem::take(req.headers_mut());
        let signed = self.sign_with(req.method(), req.uri(), &mut headers, body, expires_at);
        *req.headers_mut() = headers;
        signed
    }

    /// Signing request parts with an already buffered body.
    pub fn sign_parts(&self, parts: &mut http::request::Parts, body: Bytes) -> Result<()> {
        let expires_at = add_duration(now(), self.expires_in)?;
        self.sign_parts_at(parts, body, expires_at)
    }

    /// Signing request parts with an explicit expiration instant.
    ///
    /// This doesn't read the clock: the result only depends on its inputs.
    pub fn sign_parts_at(
        &self,
        parts: &mut http::request::Parts,
        body: Bytes,
        expires_at: DateTime,
    ) -> Result<()> {
        self.sign_with(&parts.method, &parts.uri, &mut parts.headers, body, expires_at)
    }

    fn sign_with(
        &self,
        method: &http::Method,
        uri: &http::Uri,
        headers: &mut http::HeaderMap,
        body: Bytes,
        expires_at: DateTime,
    ) -> Result<()> {
        debug!(
            "signing request {method} {} expires at {}",
            uri.path(),
            format_timestamp(expires_at)
        );

        let mut ctx = SigningRequest::build_with(method, uri, headers, body);
        let signed = self.builder.sign_request(&mut ctx, expires_at);
        // Headers go back even if signing failed.
        ctx.apply_headers(headers);
        signed
    }
}
