#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub require_each: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub save: bool,
    pub saved: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub guesses: Option<f64>,
    pub special: Option<String>,
}
