//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::metrics;
use crate::pass::{self, charset};
use crate::rng;
use crate::settings::Settings;
use crate::terminal::metrics_panel;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.handle_save();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passgauge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if self.flags.require_each {
            self.settings.require_each = true;
        }

        // Category flags: categories default to enabled, flags disable.
        if self.flags.no_lower {
            self.settings.lowercase = false;
        }
        if self.flags.no_upper {
            self.settings.uppercase = false;
        }
        if self.flags.no_digits {
            self.settings.digits = false;
        }
        if self.flags.no_special {
            self.settings.special = false;
        }
        if let Some(ref chars) = self.flags.special {
            self.settings.special_chars = chars.bytes().collect();
        }

        if let Some(guesses) = self.flags.guesses {
            self.settings.guesses_per_second = guesses;
        }

        // Handle clipboard
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    fn handle_save(&self) {
        if self.flags.save {
            if let Err(e) = self.settings.save_to_file() {
                prompts::warn(&format!("Failed to save defaults: {}", e));
            } else {
                prompts::defaults_saved();
            }
        }
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) -> Result<(), Done> {
        let config = self.settings.config();
        let count = self.flags.number.unwrap_or(1).max(1);
        let pool_size = charset::size(&config);
        let mut rng = rng::csprng();

        let mut passwords = String::new();
        let mut last_metrics = None;

        for _ in 0..count {
            let mut password = match pass::generate(&config, &mut rng) {
                Ok(p) => p,
                Err(e) => {
                    prompts::error(&format!("Error: {}", e));
                    return Err(Done);
                }
            };

            // Strength panel only for single-password runs; batches stay bare.
            if count == 1 && !quiet::enabled() {
                last_metrics = Some(metrics::compute(
                    &password,
                    pool_size,
                    self.settings.guesses_per_second,
                ));
            }

            if self.clipboard.is_some() {
                passwords.push_str(&password);
                passwords.push('\n');
            } else {
                println!("{}", password);
            }
            password.zeroize();
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            match ctx.set_contents(passwords.clone()) {
                Ok(_) => prompts::clipboard_copied(),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            passwords.zeroize();
        }

        if let Some(metrics) = last_metrics {
            metrics_panel(&metrics, pool_size, self.settings.guesses_per_second);
        }

        Ok(())
    }
}
