//! Result types shared by the evaluator, the breach checker and the report.

use std::fmt;

/// One boolean strength check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl Criterion {
    /// All criteria in display order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digits,
        Criterion::Symbols,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Criterion::Length => "Length",
            Criterion::Uppercase => "Uppercase",
            Criterion::Lowercase => "Lowercase",
            Criterion::Digits => "Digits",
            Criterion::Symbols => "Symbols",
        }
    }

    /// Human readable reason shown when the criterion is not met.
    pub fn reason(self) -> &'static str {
        match self {
            Criterion::Length => "at least 12 characters",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Digits => "digits",
            Criterion::Symbols => "symbols",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of every criterion for a single password.
///
/// All five keys are always present. The score is derived from the flags
/// and cannot drift from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CriteriaResult {
    met: [bool; 5],
}

impl CriteriaResult {
    pub(crate) fn with(mut self, criterion: Criterion, met: bool) -> Self {
        self.met[criterion.index()] = met;
        self
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        self.met[criterion.index()]
    }

    /// Number of criteria met, 0 to 5.
    pub fn score(&self) -> u8 {
        self.met.iter().filter(|&&m| m).count() as u8
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.is_met(c)))
    }

    /// Criteria that failed, in display order.
    pub fn missing(&self) -> Vec<Criterion> {
        self.iter().filter(|(_, met)| !met).map(|(c, _)| c).collect()
    }

    /// `(name, 0|1)` pairs for a met / not met bar chart.
    pub fn as_series(&self) -> Vec<(&'static str, u8)> {
        self.iter().map(|(c, met)| (c.name(), met as u8)).collect()
    }
}

/// Display band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3 => PasswordStrength::Moderate,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-state breach outcome for display.
///
/// `Unknown` means the lookup failed; it is never folded into `Clean`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreachStatus {
    Clean,
    Breached,
    Unknown(String),
}

impl BreachStatus {
    pub fn is_breached(&self) -> bool {
        matches!(self, BreachStatus::Breached)
    }
}

impl<E: std::error::Error> From<Result<bool, E>> for BreachStatus {
    fn from(result: Result<bool, E>) -> Self {
        match result {
            Ok(true) => BreachStatus::Breached,
            Ok(false) => BreachStatus::Clean,
            Err(e) => BreachStatus::Unknown(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_bands() {
        assert_eq!(PasswordStrength::from_score(0), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(2), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(3), PasswordStrength::Moderate);
        assert_eq!(PasswordStrength::from_score(4), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(5), PasswordStrength::Strong);
    }

    #[test]
    fn test_default_criteria_all_false() {
        let criteria = CriteriaResult::default();
        assert_eq!(criteria.score(), 0);
        assert_eq!(criteria.missing(), Criterion::ALL.to_vec());
    }

    #[test]
    fn test_series_keeps_display_order() {
        let criteria = CriteriaResult::default()
            .with(Criterion::Lowercase, true)
            .with(Criterion::Symbols, true);
        assert_eq!(
            criteria.as_series(),
            vec![
                ("Length", 0),
                ("Uppercase", 0),
                ("Lowercase", 1),
                ("Digits", 0),
                ("Symbols", 1),
            ]
        );
        assert_eq!(criteria.score(), 2);
    }

    #[test]
    fn test_breach_status_from_result() {
        let ok: Result<bool, std::fmt::Error> = Ok(true);
        assert_eq!(BreachStatus::from(ok), BreachStatus::Breached);

        let ok: Result<bool, std::fmt::Error> = Ok(false);
        assert_eq!(BreachStatus::from(ok), BreachStatus::Clean);

        let err: Result<bool, std::fmt::Error> = Err(std::fmt::Error);
        assert!(matches!(BreachStatus::from(err), BreachStatus::Unknown(_)));
    }
}
