use serde::Serialize;
use std::fmt;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";
const COMMON_PATTERNS: [&str; 5] = ["123456", "password", "qwerty", "abc123", "admin"];
const SEQUENCES: [&str; 3] = ["123", "abc", "qwe"];
const MAX_FEEDBACK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    fn from_score(score: u32) -> Self {
        match score {
            0..=29 => PasswordStrength::Weak,
            30..=49 => PasswordStrength::Fair,
            50..=69 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Fair => "fair",
            PasswordStrength::Good => "good",
            PasswordStrength::Strong => "strong",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrengthReport {
    pub strength: PasswordStrength,
    /// 0..=100
    pub score: u32,
    pub feedback: Vec<&'static str>,
}

/// Scores a candidate password for the change-password form. Advisory only;
/// the backend owns the actual password policy.
pub fn evaluate_password(password: &str) -> PasswordStrengthReport {
    if password.is_empty() {
        return PasswordStrengthReport {
            strength: PasswordStrength::Weak,
            score: 0,
            feedback: Vec::new(),
        };
    }

    let mut score: u32 = 0;
    let mut feedback = Vec::new();
    // UTF-16 code units, matching how the browser form counts length.
    let length = password.encode_utf16().count();

    if length >= 6 {
        score += 10;
    } else {
        feedback.push("use at least 6 characters");
    }
    if length >= 8 {
        score += 10;
    } else if length >= 6 {
        feedback.push("8 or more characters recommended");
    }
    if length >= 12 {
        score += 10;
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    let classes = [
        (has_lower, 10, "add lowercase letters"),
        (has_upper, 10, "add uppercase letters"),
        (has_digit, 15, "add digits"),
        (has_special, 15, "add special characters"),
    ];
    for (present, points, hint) in classes {
        if present {
            score += points;
        } else {
            feedback.push(hint);
        }
    }

    let variety = [has_lower, has_upper, has_digit, has_special]
        .iter()
        .filter(|present| **present)
        .count();
    if variety >= 3 {
        score += 10;
    }

    let lowered = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        score = score.saturating_sub(20);
        feedback.push("avoid common passwords");
    }
    if has_triple_repeat(password) {
        score = score.saturating_sub(10);
        feedback.push("avoid repeated characters");
    }
    if SEQUENCES.iter().any(|s| lowered.contains(s)) {
        score = score.saturating_sub(10);
        feedback.push("avoid sequential characters");
    }

    let strength = PasswordStrength::from_score(score);
    feedback.truncate(MAX_FEEDBACK);

    PasswordStrengthReport {
        strength,
        score: score.min(100),
        feedback,
    }
}

fn has_triple_repeat(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}
