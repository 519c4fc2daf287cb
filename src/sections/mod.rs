//! Password evaluation sections
//!
//! Each section checks one criterion in isolation. Sections never fail and do
//! not depend on each other, so the evaluator may run them in any order.

mod length;
mod symbols;
mod variety;

use secrecy::SecretString;

pub use length::length_section;
pub use symbols::{PUNCTUATION, symbols_section};
pub use variety::{digits_section, lowercase_section, uppercase_section};

/// Signature shared by every section: `true` when the criterion is met.
pub type Section = fn(&SecretString) -> bool;
