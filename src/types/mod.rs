//! Common types used across the CLOB auth library.

pub mod common;

pub use common::{AssetType, SignatureType};
