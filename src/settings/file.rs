//! Settings file persistence.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

const FIELD_COUNT: usize = 8;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.length,
        settings.lowercase,
        settings.uppercase,
        settings.digits,
        settings.special,
        settings.require_each,
        escape(&settings.special_chars),
        settings.guesses_per_second,
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists() {
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts = split_escaped(line.trim(), ',');
    if parts.len() != FIELD_COUNT {
        // Stale or corrupt file: rewrite with current defaults.
        return save(settings);
    }

    settings.length = parts[0].parse().unwrap_or(settings.length);
    settings.lowercase = parts[1].parse().unwrap_or(settings.lowercase);
    settings.uppercase = parts[2].parse().unwrap_or(settings.uppercase);
    settings.digits = parts[3].parse().unwrap_or(settings.digits);
    settings.special = parts[4].parse().unwrap_or(settings.special);
    settings.require_each = parts[5].parse().unwrap_or(settings.require_each);
    settings.special_chars = parts[6].bytes().collect();
    settings.guesses_per_second = parts[7].parse().unwrap_or(settings.guesses_per_second);

    Ok(())
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passgauge/settings", home)
}

/// Escape the field delimiter and the escape character itself.
fn escape(chars: &[u8]) -> String {
    chars
        .iter()
        .map(|&c| match c {
            b',' => "|,".to_string(),
            b'|' => "||".to_string(),
            _ => (c as char).to_string(),
        })
        .collect()
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_round_trips_through_split() {
        let special = b"!@#,|.<>".to_vec();
        let escaped = escape(&special);
        let line = format!("16,true,{},false", escaped);
        let parts = split_escaped(&line, ',');
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[2].as_bytes(), special.as_slice());
    }

    #[test]
    fn split_preserves_empty_fields() {
        let parts = split_escaped("1,,3", ',');
        assert_eq!(parts, vec!["1", "", "3"]);
    }
}
