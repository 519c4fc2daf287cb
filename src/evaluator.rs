//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    Section, digits_section, length_section, lowercase_section, symbols_section,
    uppercase_section,
};
use crate::types::{CriteriaResult, Criterion};

/// Evaluates a password against the five criteria.
///
/// Pure and infallible: the empty password yields all criteria unmet and a
/// score of 0. The score is always the number of met criteria.
///
/// # Returns
/// A `(score, criteria)` pair.
pub fn evaluate_password_strength(password: &SecretString) -> (u8, CriteriaResult) {
    // Orchestrator: every section runs, none short-circuits
    let sections: [(Criterion, Section); 5] = [
        (Criterion::Length, length_section),
        (Criterion::Uppercase, uppercase_section),
        (Criterion::Lowercase, lowercase_section),
        (Criterion::Digits, digits_section),
        (Criterion::Symbols, symbols_section),
    ];

    let criteria = sections
        .iter()
        .fold(CriteriaResult::default(), |acc, (criterion, section_fn)| {
            acc.with(*criterion, section_fn(password))
        });

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = criteria.score(),
        strength = %criteria.strength(),
        "password evaluated"
    );

    (criteria.score(), criteria)
}
