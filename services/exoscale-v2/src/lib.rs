//! Signers for exoscale API V2.
//!
//! Every request is signed with `EXO2-HMAC-SHA256`: an HMAC over the
//! method, path, body, single valued query parameters and an expiration
//! instant, carried in the `Authorization` header.
//!
//! ```no_run
//! use exosign_exoscale_v2::{Credential, RequestSigner};
//! use exosign_core::Signer;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let signer = Signer::new(RequestSigner::new(Credential::new("EXOkey", "secret")?));
//!
//! let mut req = http::Request::get("https://api-ch-gva-2.exoscale.com/v2/zone")
//!     .body(reqwest::Body::from(""))?;
//! signer.sign(&mut req).await?;
//!
//! let _resp = reqwest::Client::new()
//!     .execute(reqwest::Request::try_from(req)?)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod canonical;
pub use canonical::{canonicalize, CanonicalRequest};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{build_header, RequestSigner};

mod constants;
