//! Input validation applied when a search or filter change is committed.
//!
//! Free-text fields (the search term and the tutor name) are optional, but when
//! present they must look like something a person would actually search for.
//! Rules are checked in order and the first failing one is reported:
//!
//! 1. Empty or whitespace-only input is valid.
//! 2. A single character repeated (`"aaaa"`) is rejected.
//! 3. Digits only (`"12345"`) is rejected.
//! 4. Symbols only (`"##$$"`) is rejected.
//! 5. Fewer than two characters is rejected.
//! 6. Four or more consecutive symbols anywhere is rejected.
//!
//! Rules 2-5 look at the trimmed value, rule 6 at the raw value. "Symbol" means
//! anything outside ASCII `[a-zA-Z0-9]` that is not whitespace.
//!
//! Validation runs only at commit time. Editing a field clears its previous error
//! right away (see [`FieldErrors::clear`]).

use crate::filters::FilterState;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static SYMBOLS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^a-zA-Z0-9\s]+$").unwrap());
static SYMBOL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]{4,}").unwrap());

/// Minimum number of characters of a trimmed free-text value.
pub const MIN_TEXT_LEN: usize = 2;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputValidationError {
    #[error("repeated characters only")]
    RepeatedCharacters,
    #[error("digits only")]
    DigitsOnly,
    #[error("symbols only")]
    SymbolsOnly,
    #[error("too short")]
    TooShort,
    #[error("too many consecutive special characters")]
    TooManySpecialCharacters,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalityError {
    #[error("must select at least one modality")]
    NoneSelected,
}

/// Validates one free-text field.
///
/// # Examples
/// ```
/// use tesis::validation::{validate_free_text, InputValidationError};
///
/// assert!(validate_free_text("").is_ok());
/// assert!(validate_free_text("ok").is_ok());
/// assert_eq!(validate_free_text("aaaa"), Err(InputValidationError::RepeatedCharacters));
/// assert_eq!(validate_free_text("12345"), Err(InputValidationError::DigitsOnly));
/// assert_eq!(validate_free_text("##$$"), Err(InputValidationError::SymbolsOnly));
/// assert_eq!(validate_free_text("a"), Err(InputValidationError::TooShort));
/// ```
pub fn validate_free_text(value: &str) -> Result<(), InputValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    if is_single_repeated_char(trimmed) {
        return Err(InputValidationError::RepeatedCharacters);
    }

    if DIGITS_ONLY.is_match(trimmed) {
        return Err(InputValidationError::DigitsOnly);
    }

    if SYMBOLS_ONLY.is_match(trimmed) {
        return Err(InputValidationError::SymbolsOnly);
    }

    if trimmed.chars().count() < MIN_TEXT_LEN {
        return Err(InputValidationError::TooShort);
    }

    if SYMBOL_RUN.is_match(value) {
        return Err(InputValidationError::TooManySpecialCharacters);
    }

    Ok(())
}

/// At least two characters, all equal, compared as Unicode scalars. The regex
/// crate has no backreferences, so this is checked by hand.
fn is_single_repeated_char(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let mut rest = chars.peekable();
    rest.peek().is_some() && rest.all(|c| c == first)
}

pub fn validate_modalities(state: &FilterState) -> Result<(), ModalityError> {
    if state.selected_modalities.is_empty() {
        return Err(ModalityError::NoneSelected);
    }
    Ok(())
}

/// Validates everything a commit checks. All fields are checked, so every
/// failing field gets its own error.
pub fn validate_filters(state: &FilterState) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
        search_term: validate_free_text(&state.search_term).err(),
        tutor_name: validate_free_text(&state.tutor_name).err(),
        modalities: validate_modalities(state).err(),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SearchTerm,
    TutorName,
    Modalities,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::SearchTerm => "search term",
            Field::TutorName => "tutor",
            Field::Modalities => "modalities",
        }
    }
}

/// Field-scoped validation errors of one commit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub search_term: Option<InputValidationError>,
    pub tutor_name: Option<InputValidationError>,
    pub modalities: Option<ModalityError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_none() && self.tutor_name.is_none() && self.modalities.is_none()
    }

    /// Drops the error of a field that is being edited.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::SearchTerm => self.search_term = None,
            Field::TutorName => self.tutor_name = None,
            Field::Modalities => self.modalities = None,
        }
    }

    /// `(field, message)` pairs for every error present.
    pub fn messages(&self) -> Vec<(Field, String)> {
        let mut out = Vec::new();
        if let Some(err) = self.search_term {
            out.push((Field::SearchTerm, err.to_string()));
        }
        if let Some(err) = self.tutor_name {
            out.push((Field::TutorName, err.to_string()));
        }
        if let Some(err) = self.modalities {
            out.push((Field::Modalities, err.to_string()));
        }
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .messages()
            .into_iter()
            .map(|(field, msg)| format!("{}: {}", field.name(), msg))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Modality;

    #[test]
    fn empty_and_whitespace_are_valid() {
        assert_eq!(validate_free_text(""), Ok(()));
        assert_eq!(validate_free_text("   \t"), Ok(()));
    }

    #[test]
    fn repeated_characters() {
        assert_eq!(
            validate_free_text("aaaa"),
            Err(InputValidationError::RepeatedCharacters)
        );
        assert_eq!(
            validate_free_text("  xx  "),
            Err(InputValidationError::RepeatedCharacters)
        );
        // repetition wins over the digits rule
        assert_eq!(
            validate_free_text("1111"),
            Err(InputValidationError::RepeatedCharacters)
        );
        assert_eq!(
            validate_free_text("!!!!!!"),
            Err(InputValidationError::RepeatedCharacters)
        );
    }

    #[test]
    fn repetition_is_counted_per_character_not_per_byte() {
        assert_eq!(
            validate_free_text("ññ"),
            Err(InputValidationError::RepeatedCharacters)
        );
        assert_eq!(
            validate_free_text("🙂🙂"),
            Err(InputValidationError::RepeatedCharacters)
        );
        assert_eq!(
            validate_free_text("🙂🎉"),
            Err(InputValidationError::SymbolsOnly)
        );
    }

    #[test]
    fn digits_only() {
        assert_eq!(
            validate_free_text("12345"),
            Err(InputValidationError::DigitsOnly)
        );
        // a lone digit is "digits only" before it is "too short"
        assert_eq!(validate_free_text("7"), Err(InputValidationError::DigitsOnly));
    }

    #[test]
    fn symbols_only() {
        assert_eq!(
            validate_free_text("##$$"),
            Err(InputValidationError::SymbolsOnly)
        );
        assert_eq!(validate_free_text("?"), Err(InputValidationError::SymbolsOnly));
        // whitespace breaks up both the "only" rule and the run rule
        assert_eq!(validate_free_text("#$ %&"), Ok(()));
    }

    #[test]
    fn too_short() {
        assert_eq!(validate_free_text("a"), Err(InputValidationError::TooShort));
        assert_eq!(validate_free_text(" b "), Err(InputValidationError::TooShort));
    }

    #[test]
    fn consecutive_special_characters() {
        assert_eq!(
            validate_free_text("redes####"),
            Err(InputValidationError::TooManySpecialCharacters)
        );
        assert_eq!(validate_free_text("c++ y c#"), Ok(()));
        assert_eq!(validate_free_text("a!!!b"), Ok(()));
    }

    #[test]
    fn ordinary_terms_pass() {
        assert_eq!(validate_free_text("ok"), Ok(()));
        assert_eq!(validate_free_text("Machine Learning"), Ok(()));
        assert_eq!(validate_free_text("Ingeniería Informática"), Ok(()));
        assert_eq!(validate_free_text("IA 2024"), Ok(()));
    }

    #[test]
    fn validate_filters_reports_each_field() {
        let mut state = FilterState::new();
        state.search_term = "aaaa".into();
        state.tutor_name = "9".into();
        state.selected_modalities.clear();

        let errors = validate_filters(&state).unwrap_err();
        assert_eq!(
            errors.search_term,
            Some(InputValidationError::RepeatedCharacters)
        );
        assert_eq!(errors.tutor_name, Some(InputValidationError::DigitsOnly));
        assert_eq!(errors.modalities, Some(ModalityError::NoneSelected));
        assert_eq!(
            errors.to_string(),
            "search term: repeated characters only; tutor: digits only; modalities: must select at least one modality"
        );
    }

    #[test]
    fn validate_filters_accepts_default_state() {
        assert_eq!(validate_filters(&FilterState::default()), Ok(()));

        let mut state = FilterState::new();
        state.selected_modalities = [Modality::Tesina].into_iter().collect();
        state.search_term = "redes".into();
        assert_eq!(validate_filters(&state), Ok(()));
    }

    #[test]
    fn clear_drops_a_single_field_error() {
        let mut errors = FieldErrors {
            search_term: Some(InputValidationError::TooShort),
            tutor_name: Some(InputValidationError::SymbolsOnly),
            modalities: None,
        };
        errors.clear(Field::SearchTerm);
        assert_eq!(errors.search_term, None);
        assert_eq!(errors.tutor_name, Some(InputValidationError::SymbolsOnly));
        errors.clear(Field::TutorName);
        assert!(errors.is_empty());
    }
}
