//! Interactive session.
//!
//! Prompt for a configuration, then generate-and-gauge in a loop.

mod input;
mod text;

pub use input::{SessionKey, get_bool_input, get_numeric_input, get_session_key};
pub use text::{print_banner, print_help};

use zeroize::Zeroize;

use crate::cli::prompts;
use crate::metrics;
use crate::pass::{self, charset};
use crate::rng;
use crate::settings::Settings;
use crate::terminal::{
    box_bottom, box_line, box_top, clear, metrics_panel, print_error, reset_terminal,
};

/// Run TUI interactive mode.
pub fn run() {
    reset_terminal();
    clear();
    print_banner();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });

    if !configure(&mut settings) {
        reset_terminal();
        return;
    }

    let mut rng = rng::csprng();

    loop {
        generate_and_show(&settings, &mut rng);

        println!("[Enter] again   [c] configure   [s] save defaults   [q] quit");
        match get_session_key() {
            SessionKey::Again => {}
            SessionKey::Configure => {
                println!();
                if !configure(&mut settings) {
                    break;
                }
            }
            SessionKey::Save => {
                if let Err(e) = settings.save_to_file() {
                    prompts::warn(&format!("Failed to save defaults: {}", e));
                } else {
                    prompts::defaults_saved();
                }
            }
            SessionKey::Quit => break,
        }
        println!();
    }

    reset_terminal();
}

/// Prompt for a full configuration. Returns false if the user cancelled.
/// Loops until the configuration validates.
fn configure(settings: &mut Settings) -> bool {
    loop {
        let length = match get_numeric_input("Password length", settings.length) {
            Some(n) => n,
            None => return false,
        };
        let lowercase = match get_bool_input("Include lowercase (a-z)?", settings.lowercase) {
            Some(v) => v,
            None => return false,
        };
        let uppercase = match get_bool_input("Include uppercase (A-Z)?", settings.uppercase) {
            Some(v) => v,
            None => return false,
        };
        let digits = match get_bool_input("Include digits (0-9)?", settings.digits) {
            Some(v) => v,
            None => return false,
        };
        let special = match get_bool_input("Include special characters?", settings.special) {
            Some(v) => v,
            None => return false,
        };
        let require_each = match get_bool_input(
            "Require one of each chosen category?",
            settings.require_each,
        ) {
            Some(v) => v,
            None => return false,
        };

        settings.length = length;
        settings.lowercase = lowercase;
        settings.uppercase = uppercase;
        settings.digits = digits;
        settings.special = special;
        settings.require_each = require_each;

        match settings.config().validate() {
            Ok(()) => return true,
            Err(e) => {
                println!();
                print_error(&format!("Error: {}", e));
                println!();
            }
        }
    }
}

fn generate_and_show<R: rand::Rng + rand::CryptoRng>(settings: &Settings, rng: &mut R) {
    let config = settings.config();
    let mut password = match pass::generate(&config, rng) {
        Ok(p) => p,
        Err(e) => {
            // configure() validated, so this is unreachable in practice
            print_error(&format!("Error: {}", e));
            return;
        }
    };

    let pool_size = charset::size(&config);
    let metrics = metrics::compute(&password, pool_size, settings.guesses_per_second);

    println!();
    box_top("Password");
    box_line(&password);
    box_bottom();
    metrics_panel(&metrics, pool_size, settings.guesses_per_second);
    println!();

    password.zeroize();
}
