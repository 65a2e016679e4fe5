use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module validates the target language of a dictionary and turns
/// ISO 639-1 (2-letter) or ISO 639-3 (3-letter) codes into display names.
/// Language code type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code
    Part3,
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        2 if Language::from_639_1(&normalized_code).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&normalized_code).is_some() => Ok(LanguageCodeType::Part3),
        _ => Err(anyhow!("Invalid language code: {}", code)),
    }
}

fn lookup(code: &str) -> Result<Language> {
    let normalized_code = code.trim().to_lowercase();
    let language = match validate_language_code(&normalized_code)? {
        LanguageCodeType::Part1 => Language::from_639_1(&normalized_code),
        LanguageCodeType::Part3 => Language::from_639_3(&normalized_code),
    };
    language.ok_or_else(|| anyhow!("Failed to get language from code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    Ok(lookup(code)?.to_name().to_string())
}

/// Get the language's own name for itself, falling back to the English name
pub fn get_local_name(code: &str) -> Result<String> {
    let language = lookup(code)?;
    Ok(language
        .to_autonym()
        .unwrap_or_else(|| language.to_name())
        .to_string())
}
