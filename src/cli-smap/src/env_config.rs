use std::env::VarError;
use std::num::ParseIntError;

/// Environment variable overriding the default number of URLs per sitemap file.
pub const MAX_URLS_VAR: &str = "SITEMAP_MAX_URLS";

/// Environment variable overriding the default number of URLs buffered between appends.
pub const BUFFER_SIZE_VAR: &str = "SITEMAP_BUFFER_SIZE";

/// Reads a positive threshold from the environment. `Ok(None)` when the variable is unset.
pub fn threshold_from_env(var_name: &'static str) -> Result<Option<usize>, ThresholdError> {
    match std::env::var(var_name) {
        Ok(raw) => parse_threshold(var_name, &raw).map(Some),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ThresholdError::NotUnicode(var_name)),
    }
}

/// Parses a threshold value: surrounding whitespace is ignored, zero is rejected.
pub fn parse_threshold(var_name: &'static str, raw: &str) -> Result<usize, ThresholdError> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ThresholdError::ParseIntError(var_name, e))?;
    if value == 0 {
        return Err(ThresholdError::NonPositive(var_name));
    }
    Ok(value)
}

#[derive(Debug)]
pub enum ThresholdError {
    ParseIntError(&'static str, ParseIntError),
    NonPositive(&'static str),
    NotUnicode(&'static str),
}

impl std::error::Error for ThresholdError {}

impl std::fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::ParseIntError(var, e) => write!(f, "Failed to parse {} as an integer: {}", var, e),
            Self::NonPositive(var) => write!(f, "{} must be a positive number", var),
            Self::NotUnicode(var) => write!(f, "{} is not valid unicode", var),
        }
    }
}
