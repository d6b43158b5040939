//! Link-options bitflag decoding.

use serde::{Deserialize, Serialize};

/// Bit 0 of the link options: set means the link is disabled.
pub const LINK_DISABLED_BIT: u32 = 0x1;
/// Bit 1 of the link options: set means the link is enforced.
pub const LINK_ENFORCED_BIT: u32 = 0x2;

/// Decoded link state. Immutable once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkFlags {
    pub enabled: bool,
    pub enforced: bool,
}

/// Decode a raw link-options value.
///
/// Any value is valid input; bits beyond the low two are reserved and
/// ignored.
pub fn decode(options: u32) -> LinkFlags {
    LinkFlags {
        enabled: options & LINK_DISABLED_BIT == 0,
        enforced: options & LINK_ENFORCED_BIT != 0,
    }
}
