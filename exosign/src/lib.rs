#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use exosign_core::*;

#[cfg(feature = "exoscale")]
pub mod exoscale {
    pub use exosign_exoscale_v2::*;
}
