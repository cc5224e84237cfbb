//! Maps encoding labels such as `utf-8` or `microsoft-cp1251` to numeric
//! code page identifiers.
//!
//! Resolution never fails: labels that are not in the table resolve to code
//! page 1252 (Western European).

pub mod codepage;
pub mod decode;
pub mod label;

pub use crate::codepage::CodePageId;
pub use crate::decode::{decode, Decoded};
pub use crate::label::{lookup, resolve, resolve_bytes, DEFAULT_CODE_PAGE};
