use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Informational strength feedback for the registration form. This never
/// gates a submission; `validate_registration` applies the pass/fail rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub strength: PasswordStrength,
    pub label: &'static str,
    pub percentage: u8,
}

/// Scores a candidate password over six independent signals and buckets the
/// total: 0-2 weak, 3-4 medium, 5-6 strong. Total function; the empty string
/// scores zero and classifies as weak.
pub fn classify_password(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let signals = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = signals.iter().filter(|signal| **signal).count();

    match score {
        0..=2 => StrengthReport {
            strength: PasswordStrength::Weak,
            label: "Weak",
            percentage: 33,
        },
        3..=4 => StrengthReport {
            strength: PasswordStrength::Medium,
            label: "Medium",
            percentage: 66,
        },
        _ => StrengthReport {
            strength: PasswordStrength::Strong,
            label: "Strong",
            percentage: 100,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_weak() {
        let report = classify_password("");
        assert_eq!(report.strength, PasswordStrength::Weak);
        assert_eq!(report.percentage, 33);
    }

    #[test]
    fn lowercase_only_is_weak() {
        // Two signals: length >= 8 and lowercase presence.
        let report = classify_password("abcdefgh");
        assert_eq!(report.strength, PasswordStrength::Weak);
        assert_eq!(report.percentage, 33);
    }

    #[test]
    fn mixed_classes_without_symbol_is_medium() {
        // Length >= 8, uppercase, lowercase, digit: four signals.
        let report = classify_password("Abcdefg1");
        assert_eq!(report.strength, PasswordStrength::Medium);
        assert_eq!(report.percentage, 66);
    }

    #[test]
    fn all_classes_with_symbol_is_strong() {
        let report = classify_password("Abcdefgh1!");
        assert_eq!(report.strength, PasswordStrength::Strong);
        assert_eq!(report.percentage, 100);
        assert_eq!(report.label, "Strong");
    }
}
