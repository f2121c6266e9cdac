//! Pre-flight argument checks.
//!
//! Every check here runs before a request is built; a failure means no
//! network call is made.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{NrkError, Result};

/// Maximum number of characters accepted in a search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 30;

/// Program ids: 4 word characters, 8 digits, optionally 4 more word characters
/// (e.g. `KOIF75001319`, `MSUS08000119AA01`). ASCII only.
#[allow(clippy::expect_used)]
static PROGRAM_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{4}[0-9]{8}(?:[A-Za-z0-9_]{4})?$")
        .expect("failed to compile program id regex")
});

/// Series ids: word characters in dash-separated groups (e.g. `side-om-side`).
#[allow(clippy::expect_used)]
static SERIES_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+(?:-[A-Za-z0-9_]+)*$").expect("failed to compile series id regex")
});

/// Checks a program id.
///
/// # Errors
///
/// Returns [`NrkError::InvalidIdentifier`] if the id does not match.
pub fn validate_program_id(program_id: &str) -> Result<()> {
    if PROGRAM_ID_RE.is_match(program_id) {
        Ok(())
    } else {
        Err(NrkError::InvalidIdentifier(String::from("Invalid Program Id")))
    }
}

/// Checks a series id.
///
/// # Errors
///
/// Returns [`NrkError::InvalidIdentifier`] if the id does not match.
pub fn validate_series_id(series_id: &str) -> Result<()> {
    if SERIES_ID_RE.is_match(series_id) {
        Ok(())
    } else {
        Err(NrkError::InvalidIdentifier(String::from("Invalid Series Id")))
    }
}

/// Checks the length of a search query, counted in characters.
///
/// # Errors
///
/// Returns [`NrkError::QueryTooLong`] above [`MAX_SEARCH_QUERY_LEN`].
pub fn validate_search_query(q: &str) -> Result<()> {
    if q.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(NrkError::QueryTooLong(format!(
            "Query too long, max {MAX_SEARCH_QUERY_LEN} characters"
        )));
    }
    Ok(())
}

/// Checks that an index letter is at most one character.
///
/// # Errors
///
/// Returns [`NrkError::InvalidArgument`] for longer input.
pub fn validate_index_letter(letter: &str) -> Result<()> {
    if letter.chars().count() > 1 {
        return Err(NrkError::InvalidArgument(String::from(
            "Letter must be a single character",
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_program_id_accepts_base_form() {
        // Arrange & Act & Assert
        assert!(validate_program_id("KOIF75001319").is_ok());
        assert!(validate_program_id("MSUS08000119").is_ok());
        assert!(validate_program_id("ab_c12345678").is_ok());
    }

    #[test]
    fn test_program_id_accepts_suffixed_form() {
        // Arrange & Act & Assert
        assert!(validate_program_id("MSUS08000119AA01").is_ok());
    }

    #[test]
    fn test_program_id_rejects_other_shapes() {
        // Arrange
        let bad = [
            "",
            "KOIF7500131",
            "KOIF750013190",
            "KOIF75001319A",
            "KOIF75001319ABCDE",
            "KOI-75001319",
            "KOIF7500131X",
            "ÆØÅK75001319",
            "KOIF75001319\n",
        ];

        // Act & Assert
        for id in bad {
            let err = validate_program_id(id).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidIdentifier, "{id:?}");
            assert_eq!(err.to_string(), "Invalid Program Id");
        }
    }

    #[test]
    fn test_series_id() {
        // Arrange & Act & Assert
        assert!(validate_series_id("supernytt").is_ok());
        assert!(validate_series_id("side-om-side").is_ok());
        assert!(validate_series_id("team_2").is_ok());
        assert!(validate_series_id("").is_err());
        assert!(validate_series_id("-lead").is_err());
        assert!(validate_series_id("trail-").is_err());
        assert!(validate_series_id("double--dash").is_err());
        assert!(validate_series_id("with space").is_err());
        assert!(validate_series_id("../etc").is_err());
    }

    #[test]
    fn test_search_query_length_limit() {
        // Arrange
        let at_limit = "a".repeat(MAX_SEARCH_QUERY_LEN);
        let over_limit = "a".repeat(MAX_SEARCH_QUERY_LEN + 1);

        // Act & Assert
        assert!(validate_search_query(&at_limit).is_ok());
        let err = validate_search_query(&over_limit).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::QueryTooLong);
        assert_eq!(err.to_string(), "Query too long, max 30 characters");
    }

    #[test]
    fn test_search_query_counts_characters_not_bytes() {
        // Arrange: 30 characters, 60 bytes
        let q = "ø".repeat(MAX_SEARCH_QUERY_LEN);

        // Act & Assert
        assert!(validate_search_query(&q).is_ok());
    }

    #[test]
    fn test_index_letter() {
        // Arrange & Act & Assert
        assert!(validate_index_letter("a").is_ok());
        assert!(validate_index_letter("å").is_ok());
        assert!(validate_index_letter("").is_ok());
        assert_eq!(
            validate_index_letter("ab").unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
