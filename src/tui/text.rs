//! Static text: banner and help screen.

use crate::terminal::{box_bottom, box_line, box_opt, box_top};

pub fn print_banner() {
    box_top("passgauge");
    box_line("Generate a password, gauge its strength.");
    box_line(&format!(
        "v{} • entropy, search space, brute-force estimate",
        env!("CARGO_PKG_VERSION")
    ));
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("passgauge - usage");
    box_line("passgauge [OPTIONS]");
    box_line("");
    box_line("Run with no arguments for the interactive session.");
    box_line("");
    box_opt("-l, --length N", "Password length (default 16)");
    box_opt("-n, --number N", "Generate N passwords");
    box_opt("-r, --require-each", "At least one symbol from every enabled category");
    box_opt("    --no-lower", "Disable lowercase letters");
    box_opt("    --no-upper", "Disable uppercase letters");
    box_opt("    --no-digits", "Disable digits");
    box_opt("    --no-special", "Disable special characters");
    box_opt("    --special CHARS", "Replace the special character set");
    box_opt("-g, --guesses N", "Guess rate for the brute-force estimate (default 1e12 per second)");
    box_opt("-b, --board", "Copy output to clipboard instead of printing");
    box_opt("-q, --quiet", "Passwords only; no metrics, no warnings");
    box_opt("    --save", "Persist the current options as defaults");
    box_opt("-s, --saved", "Start from saved defaults");
    box_opt("-h, --help", "Show this help");
    box_opt("-v, --version", "Show version");
    box_bottom();
    println!();
}
