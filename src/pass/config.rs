//! Generation configuration and validation.

use thiserror::Error;

use super::charset;

/// Default brute-force guess rate: one trillion guesses per second.
pub const DEFAULT_GUESSES_PER_SECOND: f64 = 1e12;

/// Invalid generation configuration. No partial password is ever produced;
/// validation runs before the first random draw.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("password length must be at least 1")]
    ZeroLength,
    #[error("no character categories selected; enable at least one")]
    NoCategories,
    #[error(
        "length {length} is too short to include one character from each of the {categories} selected categories"
    )]
    LengthTooShort { length: usize, categories: usize },
    #[error("character pool has a single symbol; a password of length 2+ without adjacent repeats is impossible")]
    SingleSymbolPool,
}

/// Password generation configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
    /// Require at least one symbol from every enabled category.
    pub require_each: bool,
    /// Symbols used by the special category. Defaults to [`charset::SPECIAL`].
    pub special_chars: Vec<u8>,
}

impl Config {
    /// Number of enabled categories that contribute symbols. The special
    /// category counts only when its symbol set is non-empty.
    pub fn enabled_categories(&self) -> usize {
        [
            self.lowercase,
            self.uppercase,
            self.digits,
            self.special && !self.special_chars.is_empty(),
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }

    /// Validate the configuration against the pool it would produce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length < 1 {
            return Err(ConfigError::ZeroLength);
        }

        let categories = self.enabled_categories();
        if categories == 0 {
            return Err(ConfigError::NoCategories);
        }

        if self.require_each && self.length < categories {
            return Err(ConfigError::LengthTooShort {
                length: self.length,
                categories,
            });
        }

        // A one-symbol pool cannot satisfy the adjacent-repeat constraint.
        if self.length >= 2 && charset::distinct_size(self) == 1 {
            return Err(ConfigError::SingleSymbolPool);
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            special: true,
            require_each: false,
            special_chars: charset::SPECIAL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn zero_length_rejected() {
        let config = Config {
            length: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroLength));
    }

    #[test]
    fn no_categories_rejected_regardless_of_length() {
        for length in [1, 8, 64] {
            let config = Config {
                length,
                lowercase: false,
                uppercase: false,
                digits: false,
                special: false,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::NoCategories));
        }
    }

    #[test]
    fn require_each_needs_length_at_least_category_count() {
        let config = Config {
            length: 3,
            require_each: true,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::LengthTooShort {
                length: 3,
                categories: 4
            })
        );

        // length == category count is the boundary and is fine
        let config = Config {
            length: 4,
            require_each: true,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let config = Config {
            length: 5,
            require_each: true,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn single_symbol_pool_rejected_for_length_two_plus() {
        let config = Config {
            length: 2,
            lowercase: false,
            uppercase: false,
            digits: false,
            special: true,
            special_chars: vec![b'#'],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SingleSymbolPool));

        // length 1 has no adjacency constraint to violate
        let config = Config {
            length: 1,
            ..config
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_custom_special_set_counts_as_no_categories() {
        let config = Config {
            length: 8,
            lowercase: false,
            uppercase: false,
            digits: false,
            special: true,
            special_chars: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoCategories));
    }
}
