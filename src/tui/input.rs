//! Raw-mode input primitives for the interactive session.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, format_number, reset_terminal};

fn is_ctrl_c(code: KeyCode, modifiers: KeyModifiers) -> bool {
    code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL)
}

/// Get numeric input with live comma formatting. Enter on an empty field
/// accepts the initial value; Esc cancels.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    let mut digits = String::new();
    let mut cancelled = false;

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial),
    };

    print!("{} [{}]: ", prompt, format_number(initial));
    flush();

    let mut last_len = 0;

    loop {
        match read() {
            Ok(Event::Key(key)) => {
                match key.code {
                    code if is_ctrl_c(code, key.modifiers) => {
                        // process::exit skips destructors; restore first
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        digits.pop();
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => digits.push(c),
                    _ => {}
                }

                let formatted = if digits.is_empty() {
                    String::new()
                } else {
                    format_number(digits.parse().unwrap_or(0))
                };
                print!(
                    "\r{} [{}]: {}",
                    prompt,
                    format_number(initial),
                    " ".repeat(last_len + 1)
                );
                print!("\r{} [{}]: {}", prompt, format_number(initial), formatted);
                flush();
                last_len = formatted.len();
            }
            Err(_) => break,
            _ => {}
        }
    }

    drop(_guard);
    println!();

    if cancelled {
        None
    } else if digits.is_empty() {
        Some(initial)
    } else {
        digits.parse().ok()
    }
}

/// Single-key y/n prompt. Enter accepts the default; Esc cancels.
pub fn get_bool_input(prompt: &str, default: bool) -> Option<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(default),
    };

    print!("{} {}: ", prompt, hint);
    flush();

    let answer = loop {
        match read() {
            Ok(Event::Key(key)) => match key.code {
                code if is_ctrl_c(code, key.modifiers) => {
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Esc => break None,
                KeyCode::Enter => break Some(default),
                KeyCode::Char('y') | KeyCode::Char('Y') => break Some(true),
                KeyCode::Char('n') | KeyCode::Char('N') => break Some(false),
                _ => {}
            },
            Err(_) => break Some(default),
            _ => {}
        }
    };

    drop(_guard);
    match answer {
        Some(v) => {
            println!("{}", if v { "y" } else { "n" });
            Some(v)
        }
        None => {
            println!();
            None
        }
    }
}

/// Wait for one of the session keys. Enter regenerates, c reconfigures,
/// s saves defaults, q/Esc quits.
pub enum SessionKey {
    Again,
    Configure,
    Save,
    Quit,
}

pub fn get_session_key() -> SessionKey {
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return SessionKey::Quit,
    };

    loop {
        match read() {
            Ok(Event::Key(key)) => match key.code {
                code if is_ctrl_c(code, key.modifiers) => {
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
                KeyCode::Enter => return SessionKey::Again,
                KeyCode::Char('c') => return SessionKey::Configure,
                KeyCode::Char('s') => return SessionKey::Save,
                KeyCode::Char('q') | KeyCode::Esc => return SessionKey::Quit,
                _ => {}
            },
            Err(_) => return SessionKey::Quit,
            _ => {}
        }
    }
}
