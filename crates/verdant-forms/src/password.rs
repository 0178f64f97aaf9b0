#![forbid(unsafe_code)]

//! Password strength scoring for the auth modal.
//!
//! Point-based heuristic, one point per satisfied criterion:
//! length >= 8, an uppercase letter, a digit, a symbol. Sign-up requires a
//! score of at least 3; the meter itself is advisory UI.

/// Strength bucket for a scored password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    /// Score 0: none of the criteria met.
    VeryWeak,
    /// Score 1.
    Weak,
    /// Score 2.
    Fair,
    /// Score 3.
    Good,
    /// Score 4: all criteria met.
    Strong,
}

impl PasswordStrength {
    /// Numeric score in `0..=4`.
    #[must_use]
    pub fn score(self) -> u8 {
        match self {
            Self::VeryWeak => 0,
            Self::Weak => 1,
            Self::Fair => 2,
            Self::Good => 3,
            Self::Strong => 4,
        }
    }

    /// Meter label shown beside the strength bar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Whether sign-up accepts this password (score >= 3).
    #[must_use]
    pub fn meets_signup_minimum(self) -> bool {
        self.score() >= 3
    }
}

/// Score a password.
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0u8;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    match score {
        0 => PasswordStrength::VeryWeak,
        1 => PasswordStrength::Weak,
        2 => PasswordStrength::Fair,
        3 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::{PasswordStrength, password_strength};

    #[test]
    fn empty_password_scores_zero() {
        assert_eq!(password_strength(""), PasswordStrength::VeryWeak);
    }

    #[test]
    fn each_criterion_adds_one_point() {
        assert_eq!(password_strength("aaaaaaaa").score(), 1); // length only
        assert_eq!(password_strength("Aaaaaaaa").score(), 2); // + uppercase
        assert_eq!(password_strength("Aaaaaaa1").score(), 3); // + digit
        assert_eq!(password_strength("Aaaaaa1!").score(), 4); // + symbol
    }

    #[test]
    fn short_but_varied_can_still_score() {
        // Under 8 chars misses the length point only.
        assert_eq!(password_strength("A1!").score(), 3);
    }

    #[test]
    fn signup_gate_is_score_three() {
        assert!(!password_strength("aaaaaaaa").meets_signup_minimum());
        assert!(password_strength("Aaaaaaa1").meets_signup_minimum());
        assert!(password_strength("A1!").meets_signup_minimum());
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        // 'é' is neither ascii-alphanumeric nor a digit/uppercase.
        assert_eq!(password_strength("é").score(), 1);
    }
}
