//! This module contains identifiers for the Move resources blobmint calls.
//! Also exports some helper functions to cut down on boilerplate code
//! especially when creating Move resources from string.
//!
//! # Example
//!
//! ```
//! use blobmint_sdk::{idents::move_std, sui};
//!
//! let mut tx = sui::ProgrammableTransactionBuilder::new();
//! let uri = move_std::Utf8::utf8_string_from_str(&mut tx, "https://example.com");
//!
//! assert!(matches!(uri, Ok(sui::Argument::Result(_))));
//! ```

pub mod move_std;
pub mod nft;

use crate::sui;

/// This struct is used to define Move resources as `const`s.
pub struct ModuleAndNameIdent {
    pub module: &'static sui::MoveIdentStr,
    pub name: &'static sui::MoveIdentStr,
}
