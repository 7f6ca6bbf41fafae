//! Core components for signing API requests.
//!
//! This crate provides the foundational types and traits for the exosign ecosystem.
//!
//! ## Overview
//!
//! The crate is built around a few concepts:
//!
//! - **SigningRequest**: the signable view of one outbound request (method, path, query, body, headers)
//! - **SignRequest**: the trait a service implements to turn a `SigningRequest` into signed headers
//! - **Signer**: the per request entry point, computes the expiration, buffers the body and drives `SignRequest`
//!
//! ## Example
//!
//! ```no_run
//! use exosign_core::time::DateTime;
//! use exosign_core::{Result, SignRequest, Signer, SigningRequest};
//! use http::header::AUTHORIZATION;
//!
//! #[derive(Debug)]
//! struct MySigner {
//!     key: String,
//! }
//!
//! impl SignRequest for MySigner {
//!     fn sign_request(&self, req: &mut SigningRequest, expires_at: DateTime) -> Result<()> {
//!         let value = format!("{},expires={}", self.key, expires_at.timestamp());
//!         req.headers.insert(AUTHORIZATION, value.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> anyhow::Result<()> {
//! let signer = Signer::new(MySigner { key: "my-key".to_string() });
//!
//! let mut req = http::Request::get("https://example.com")
//!     .body(http_body_util::Full::new(bytes::Bytes::new()))?;
//! signer.sign(&mut req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::SignRequest;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::{Signer, DEFAULT_EXPIRES_IN};
