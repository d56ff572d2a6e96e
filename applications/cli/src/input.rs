//! Parsing of numeric menu input

use tapedeck_core::TapedeckError;

/// A numbered menu pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `0` or blank input
    Cancel,

    /// 0-based index translated from the 1-based number the user typed
    Index(usize),
}

/// Parse a 1-based item number
///
/// # Errors
/// `TapedeckError::Validation` if the input is not a non-negative integer
pub fn parse_selection(input: &str) -> Result<Selection, TapedeckError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Selection::Cancel);
    }

    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TapedeckError::validation("Invalid input."));
    }

    match input.parse::<usize>() {
        Ok(0) => Ok(Selection::Cancel),
        Ok(number) => Ok(Selection::Index(number - 1)),
        Err(_) => Err(TapedeckError::validation("Invalid input.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_numbers_become_indices() {
        assert_eq!(parse_selection("1").unwrap(), Selection::Index(0));
        assert_eq!(parse_selection(" 12\n").unwrap(), Selection::Index(11));
    }

    #[test]
    fn zero_and_blank_cancel() {
        assert_eq!(parse_selection("0").unwrap(), Selection::Cancel);
        assert_eq!(parse_selection("").unwrap(), Selection::Cancel);
        assert_eq!(parse_selection("   ").unwrap(), Selection::Cancel);
    }

    #[test]
    fn non_numbers_are_validation_errors() {
        for bad in ["abc", "-1", "+2", "1.5", "99999999999999999999999999"] {
            let err = parse_selection(bad).unwrap_err();
            assert!(matches!(err, TapedeckError::Validation(_)), "{}", bad);
            assert_eq!(err.to_string(), "Invalid input.");
        }
    }
}
