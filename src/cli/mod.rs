//! CLI argument surface.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode.
pub fn run(args: &[String]) {
    match Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(msg) => {
            prompts::error(&msg);
            std::process::exit(2);
        }
    }
}
