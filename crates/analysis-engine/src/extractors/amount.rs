//! Principal contract amount: the numerically largest monetary mention.
//!
//! Not gated by category at extraction time; visibility gating happens at
//! result assembly.

use crate::money;

pub fn extract(text: &str) -> Option<String> {
    money::principal_amount(text)
}
