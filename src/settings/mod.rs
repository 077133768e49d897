//! Saved default configuration.
//!
//! Only configuration is persisted; generated passwords never touch disk.

mod file;

use crate::pass::{self, Config};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
    pub require_each: bool,
    pub special_chars: Vec<u8>,
    pub guesses_per_second: f64,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    /// The generation config these settings describe.
    pub fn config(&self) -> Config {
        Config {
            length: self.length,
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            digits: self.digits,
            special: self.special,
            require_each: self.require_each,
            special_chars: self.special_chars.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            length: config.length,
            lowercase: config.lowercase,
            uppercase: config.uppercase,
            digits: config.digits,
            special: config.special,
            require_each: config.require_each,
            special_chars: config.special_chars,
            guesses_per_second: pass::DEFAULT_GUESSES_PER_SECOND,
        }
    }
}
