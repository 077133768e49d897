//! Password generation.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use super::charset;
use super::config::{Config, ConfigError};

/// Generate a single password.
///
/// Validation happens before the first random draw; on error no partial
/// password exists. The draw order is fixed: seed one symbol per enabled
/// category (when `require_each`), fill with rejection of adjacent repeats,
/// then shuffle the whole sequence so seeded symbols are not predictably
/// positioned.
pub fn generate<R: Rng + CryptoRng>(config: &Config, rng: &mut R) -> Result<String, ConfigError> {
    config.validate()?;

    let pools = charset::pools(config);
    let flat = charset::build(config);

    // Category seeds can collide when a custom special set overlaps another
    // enabled category; redraw the whole sequence in that (rare) case rather
    // than shuffling a multiset that admits no repeat-free arrangement.
    let mut bytes = loop {
        let bytes = draw_sequence(config, &pools, &flat, rng);
        if max_multiplicity(&bytes) <= bytes.len().div_ceil(2) {
            break bytes;
        }
    };

    shuffle_without_adjacent_repeats(&mut bytes, rng);

    // Safety: every pool is ASCII
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

fn draw_sequence<R: Rng + CryptoRng>(
    config: &Config,
    pools: &[&[u8]],
    flat: &[u8],
    rng: &mut R,
) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::with_capacity(config.length);

    if config.require_each {
        // One symbol from each category's own pool, in category order.
        for pool in pools {
            bytes.push(pool[rng.gen_range(0..pool.len())]);
        }
    }

    // Rejection sampling: redraw any candidate equal to the last accepted
    // symbol. Terminates because validate() rejected one-symbol pools.
    while bytes.len() < config.length {
        let candidate = flat[rng.gen_range(0..flat.len())];
        if bytes.last() != Some(&candidate) {
            bytes.push(candidate);
        }
    }

    bytes
}

fn max_multiplicity(bytes: &[u8]) -> usize {
    let mut counts = [0usize; 256];
    let mut max = 0;
    for &c in bytes {
        counts[c as usize] += 1;
        max = max.max(counts[c as usize]);
    }
    max
}

/// Uniform shuffle, retried until no two adjacent symbols are equal.
///
/// The caller guarantees no symbol exceeds ceil(len/2) of the sequence, so
/// an arrangement without adjacent repeats exists and the retry loop
/// terminates with probability 1.
fn shuffle_without_adjacent_repeats<R: Rng + CryptoRng>(bytes: &mut [u8], rng: &mut R) {
    loop {
        bytes.shuffle(rng);
        if !has_adjacent_repeat(bytes) {
            return;
        }
    }
}

fn has_adjacent_repeat(bytes: &[u8]) -> bool {
    bytes.windows(2).any(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::csprng;

    fn count_from(pool: &[u8], password: &str) -> usize {
        password.bytes().filter(|b| pool.contains(b)).count()
    }

    #[test]
    fn exact_length_and_pool_membership() {
        let mut rng = csprng();
        for length in [1, 2, 4, 16, 74, 128] {
            let config = Config {
                length,
                ..Default::default()
            };
            let flat = charset::build(&config);
            let password = generate(&config, &mut rng).unwrap();
            assert_eq!(password.len(), length);
            assert!(password.bytes().all(|b| flat.contains(&b)));
        }
    }

    #[test]
    fn no_adjacent_repeats() {
        let mut rng = csprng();
        let config = Config {
            length: 32,
            lowercase: false,
            uppercase: false,
            digits: true,
            special: false,
            ..Default::default()
        };
        // Small pool makes accidental repeats likely without the constraint.
        for _ in 0..200 {
            let password = generate(&config, &mut rng).unwrap();
            assert!(!has_adjacent_repeat(password.as_bytes()), "{password:?}");
        }
    }

    #[test]
    fn require_each_covers_every_enabled_category() {
        let mut rng = csprng();
        let config = Config {
            length: 4,
            require_each: true,
            ..Default::default()
        };
        for _ in 0..200 {
            let password = generate(&config, &mut rng).unwrap();
            assert_eq!(count_from(charset::LOWERCASE, &password), 1);
            assert_eq!(count_from(charset::UPPERCASE, &password), 1);
            assert_eq!(count_from(charset::DIGITS, &password), 1);
            assert_eq!(count_from(charset::SPECIAL, &password), 1);
        }
    }

    #[test]
    fn invalid_configs_fail_before_generation() {
        let mut rng = csprng();

        let none = Config {
            length: 20,
            lowercase: false,
            uppercase: false,
            digits: false,
            special: false,
            ..Default::default()
        };
        assert_eq!(generate(&none, &mut rng), Err(ConfigError::NoCategories));

        let short = Config {
            length: 3,
            require_each: true,
            ..Default::default()
        };
        assert_eq!(
            generate(&short, &mut rng),
            Err(ConfigError::LengthTooShort {
                length: 3,
                categories: 4
            })
        );
    }

    #[test]
    fn single_symbol_pool_fails_fast_rather_than_looping() {
        let mut rng = csprng();
        let config = Config {
            length: 2,
            lowercase: false,
            uppercase: false,
            digits: false,
            special: true,
            special_chars: vec![b'!'],
            ..Default::default()
        };
        assert_eq!(
            generate(&config, &mut rng),
            Err(ConfigError::SingleSymbolPool)
        );

        // Length 1 from the same pool is fine.
        let config = Config { length: 1, ..config };
        assert_eq!(generate(&config, &mut rng).unwrap(), "!");
    }

    #[test]
    fn overlapping_custom_special_still_terminates() {
        let mut rng = csprng();
        // Special set is a subset of lowercase; seeds can collide and force
        // a redraw, but generation must still finish and satisfy both
        // constraints.
        let config = Config {
            length: 2,
            lowercase: true,
            uppercase: false,
            digits: false,
            special: true,
            special_chars: vec![b'a'],
            require_each: true,
        };
        for _ in 0..100 {
            let password = generate(&config, &mut rng).unwrap();
            assert_eq!(password.len(), 2);
            assert!(password.contains('a'));
            assert!(!has_adjacent_repeat(password.as_bytes()));
        }
    }

    #[test]
    fn repeated_generation_differs() {
        let mut rng = csprng();
        let config = Config::default();
        let first = generate(&config, &mut rng).unwrap();
        // 90^16 outcomes; 50 collisions in a row is not a thing.
        let any_different = (0..50).any(|_| generate(&config, &mut rng).unwrap() != first);
        assert!(any_different);
    }

    #[test]
    fn two_symbol_pool_alternates() {
        let mut rng = csprng();
        let config = Config {
            length: 9,
            lowercase: false,
            uppercase: false,
            digits: false,
            special: true,
            special_chars: vec![b'a', b'b'],
            ..Default::default()
        };
        // Only "ababababa" or "babababab" satisfy the constraint at this
        // length; the shuffle retry must still terminate.
        for _ in 0..20 {
            let password = generate(&config, &mut rng).unwrap();
            assert!(!has_adjacent_repeat(password.as_bytes()), "{password:?}");
        }
    }
}
