use super::CliFlags;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-r" | "--require-each" => flags.require_each = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-special" => flags.no_special = true,
            "--save" => flags.save = true,
            "-s" | "--saved" => flags.saved = true,
            "-l" | "--length" => {
                flags.length = Some(next_value(args, &mut i)?.parse().map_err(|_| {
                    ParseError::InvalidNumber(args[i].clone())
                })?);
            }
            "-n" | "--number" => {
                flags.number = Some(next_value(args, &mut i)?.parse().map_err(|_| {
                    ParseError::InvalidNumber(args[i].clone())
                })?);
            }
            "-g" | "--guesses" => {
                flags.guesses = Some(next_value(args, &mut i)?.parse().map_err(|_| {
                    ParseError::InvalidNumber(args[i].clone())
                })?);
            }
            "--special" => {
                flags.special = Some(next_value(args, &mut i)?.to_string());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn next_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    *i += 1;
    if *i < args.len() {
        Ok(&args[*i])
    } else {
        Err(ParseError::MissingValue(args[*i - 1].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgauge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_documented_flags() {
        let flags = parse(&args(&[
            "-l", "20", "-n", "3", "-r", "--no-special", "-g", "1e9", "-b", "-q",
        ]))
        .unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.require_each);
        assert!(flags.no_special);
        assert_eq!(flags.guesses, Some(1e9));
        assert!(flags.clipboard);
        assert!(flags.quiet);
    }

    #[test]
    fn parses_custom_special_set() {
        let flags = parse(&args(&["--special", "!@#"])).unwrap();
        assert_eq!(flags.special.as_deref(), Some("!@#"));
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".to_string()))
        );
    }

    #[test]
    fn missing_value_is_an_error() {
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".to_string()))
        );
    }

    #[test]
    fn invalid_number_is_an_error() {
        assert_eq!(
            parse(&args(&["-l", "abc"])),
            Err(ParseError::InvalidNumber("abc".to_string()))
        );
    }
}
