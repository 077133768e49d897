//! Character pool assembly.
//!
//! Categories contribute in a fixed order: lowercase, uppercase, digits,
//! special. All pools are ASCII bytes.

use super::config::Config;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?/\\";

/// Enabled category pools in fixed category order. The special category is
/// skipped when its symbol set is empty.
pub fn pools(config: &Config) -> Vec<&[u8]> {
    let mut pools: Vec<&[u8]> = Vec::with_capacity(4);
    if config.lowercase {
        pools.push(LOWERCASE);
    }
    if config.uppercase {
        pools.push(UPPERCASE);
    }
    if config.digits {
        pools.push(DIGITS);
    }
    if config.special && !config.special_chars.is_empty() {
        pools.push(&config.special_chars);
    }
    pools
}

/// Build the flat character pool from the enabled categories.
pub fn build(config: &Config) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::new();
    for pool in pools(config) {
        chars.extend_from_slice(pool);
    }
    chars
}

/// Flat pool size (counting repeats if a custom special set overlaps a
/// built-in category, matching the concatenation semantics of `build`).
pub fn size(config: &Config) -> usize {
    pools(config).iter().map(|p| p.len()).sum()
}

/// Number of distinct symbols in the pool.
pub fn distinct_size(config: &Config) -> usize {
    let mut seen = [false; 256];
    let mut count = 0;
    for pool in pools(config) {
        for &c in pool {
            if !seen[c as usize] {
                seen[c as usize] = true;
                count += 1;
            }
        }
    }
    count
}
