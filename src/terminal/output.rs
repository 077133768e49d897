//! Terminal output utilities.
//!
//! Box drawing, number formatting, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::metrics::Metrics;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Number Formatting
// ============================================================================

/// Insert comma grouping separators into a string of decimal digits.
pub fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn format_number(num: usize) -> String {
    group_digits(&num.to_string())
}

/// Format a guess rate as a grouped integer, e.g. 1e12 -> "1,000,000,000,000".
pub fn format_rate(guesses_per_second: f64) -> String {
    group_digits(&format!("{:.0}", guesses_per_second))
}

/// Format a crack-time estimate: grouped with two decimals, or "N/A" when
/// the search space is empty, or "> 1e308" past f64 range.
pub fn format_years(years: Option<f64>) -> String {
    match years {
        None => "N/A".to_string(),
        Some(y) if !y.is_finite() => "> 1e308".to_string(),
        Some(y) => {
            let s = format!("{:.2}", y);
            match s.split_once('.') {
                Some((int, frac)) => format!("{}.{}", group_digits(int), frac),
                None => group_digits(&s),
            }
        }
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let words: Vec<&str> = desc.split_whitespace().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in words {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if let Some(first) = lines.first() {
        let padding = desc_col.saturating_sub(first.len());
        println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
    } else {
        let padding = desc_col;
        println!("│ {}{} │", flag_padded, " ".repeat(padding));
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Metrics Panel
// ============================================================================

/// Print the strength panel for one generated password.
pub fn metrics_panel(metrics: &Metrics, pool_size: usize, guesses_per_second: f64) {
    let inner_width = BOX_WIDTH - 4;

    box_top("Strength");
    box_line(&format!(
        "Entropy: {:.2} bits (observed symbol distribution)",
        metrics.entropy_bits
    ));
    box_line(&format!("Pool: {} symbols", pool_size));

    let space = group_digits(&metrics.search_space.to_string());
    if space.chars().count() <= inner_width - "Search space: ".len() {
        box_line(&format!("Search space: {}", space));
    } else {
        // 94^64-class numbers run past the box; wrap the digit groups.
        box_line("Search space:");
        let chars: Vec<char> = space.chars().collect();
        for chunk in chars.chunks(inner_width - 2) {
            box_line(&format!("  {}", chunk.iter().collect::<String>()));
        }
    }

    box_line(&format!(
        "Brute force at {} guesses/s: {} years",
        format_rate(guesses_per_second),
        format_years(metrics.brute_force_years)
    ));
    box_bottom();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_inserts_separators_every_three_digits() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(group_digits("1000000000000"), "1,000,000,000,000");
    }

    #[test]
    fn rate_formats_as_grouped_integer() {
        assert_eq!(format_rate(1e12), "1,000,000,000,000");
        assert_eq!(format_rate(2500.0), "2,500");
    }

    #[test]
    fn years_formatting() {
        assert_eq!(format_years(None), "N/A");
        assert_eq!(format_years(Some(f64::INFINITY)), "> 1e308");
        assert_eq!(format_years(Some(0.0)), "0.00");
        assert_eq!(format_years(Some(3.17e-8)), "0.00");
        assert_eq!(format_years(Some(6437.25)), "6,437.25");
        assert_eq!(format_years(Some(1234567.891)), "1,234,567.89");
    }
}
