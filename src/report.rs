//! Side-by-side comparison of two passwords.

use secrecy::SecretString;

use crate::breach::{BreachChecker, RangeTransport};
use crate::evaluator::evaluate_password_strength;
use crate::types::{BreachStatus, CriteriaResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    FirstStronger,
    SecondStronger,
    Equal,
}

/// Compares two evaluations by score.
pub fn compare(first: &CriteriaResult, second: &CriteriaResult) -> Comparison {
    match first.score().cmp(&second.score()) {
        std::cmp::Ordering::Greater => Comparison::FirstStronger,
        std::cmp::Ordering::Less => Comparison::SecondStronger,
        std::cmp::Ordering::Equal => Comparison::Equal,
    }
}

/// Everything a front end needs to render one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReport {
    pub first: CriteriaResult,
    pub second: CriteriaResult,
    pub comparison: Comparison,
    pub first_breach: BreachStatus,
    pub second_breach: BreachStatus,
}

impl PairReport {
    /// Evaluates both passwords, then runs one breach lookup per password.
    ///
    /// Lookup failures become `BreachStatus::Unknown`; they do not abort the
    /// report.
    pub fn build<T: RangeTransport>(
        first: &SecretString,
        second: &SecretString,
        checker: &BreachChecker<T>,
    ) -> Self {
        let (_, first_criteria) = evaluate_password_strength(first);
        let (_, second_criteria) = evaluate_password_strength(second);

        Self {
            first: first_criteria,
            second: second_criteria,
            comparison: compare(&first_criteria, &second_criteria),
            first_breach: lookup(checker, first),
            second_breach: lookup(checker, second),
        }
    }
}

fn lookup<T: RangeTransport>(checker: &BreachChecker<T>, password: &SecretString) -> BreachStatus {
    let result = checker.is_breached(password);

    #[cfg(feature = "tracing")]
    {
        if let Err(ref e) = result {
            tracing::warn!("Breach status unknown: {}", e);
        }
    }

    BreachStatus::from(result)
}
