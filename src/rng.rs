//! Cryptographically secure randomness.
//!
//! All draws and shuffles go through an injected generator; this is the one
//! place the source is chosen. `OsRng` pulls from the operating system's
//! entropy pool and treats failure as fatal, which is the required behavior
//! (never mask with a weaker source).

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

/// Default cryptographically secure RNG.
pub fn csprng() -> impl Rng + CryptoRng {
    OsRng
}
