//! Password strength classification.
//!
//! The policy is total and deterministic: every string, including the
//! empty string, maps to exactly one [`Strength`]. Rules are applied in
//! order and the first match wins:
//!
//! | Rule                                         | Result   |
//! |----------------------------------------------|----------|
//! | empty                                        | `Weak`   |
//! | common password (case-insensitive)           | `Weak`   |
//! | fewer than 8 characters                      | `Weak`   |
//! | a single character class                     | `Weak`   |
//! | at least 12 characters and 3+ classes        | `Strong` |
//! | anything else                                | `Medium` |
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use serde::{Deserialize, Serialize};

use crate::common::is_common_password;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Passwords shorter than this are always weak.
pub const MIN_LENGTH: usize = 8;

/// Minimum length for a strong password.
pub const STRONG_LENGTH: usize = 12;

/// Minimum number of character classes for a strong password.
pub const STRONG_CLASSES: u32 = 3;

// ---------------------------------------------------------------------------
// Strength tiers
// ---------------------------------------------------------------------------

/// Strength bucket. The three buckets partition every batch exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Lowercase letters, plus letters from scripts without case.
    Lower,
    Upper,
    /// Any Unicode numeric character.
    Digit,
    /// Everything else: punctuation, whitespace, emoji.
    Symbol,
}

impl CharClass {
    /// Classify a single character.
    #[must_use]
    pub fn of(c: char) -> Self {
        if c.is_uppercase() {
            Self::Upper
        } else if c.is_lowercase() || c.is_alphabetic() {
            Self::Lower
        } else if c.is_numeric() {
            Self::Digit
        } else {
            Self::Symbol
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Lower => 0b0001,
            Self::Upper => 0b0010,
            Self::Digit => 0b0100,
            Self::Symbol => 0b1000,
        }
    }
}

/// Set of character classes present in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses(u8);

impl CharClasses {
    #[must_use]
    pub const fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Number of distinct classes present (0–4).
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    const fn with(self, class: CharClass) -> Self {
        Self(self.0 | class.bit())
    }
}

/// Collect the character classes used by `secret`.
#[must_use]
pub fn char_classes(secret: &str) -> CharClasses {
    secret
        .chars()
        .fold(CharClasses::default(), |acc, c| acc.with(CharClass::of(c)))
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Classify the strength of `secret`.
#[must_use]
pub fn classify_strength(secret: &str) -> Strength {
    if secret.is_empty() || is_common_password(secret) {
        return Strength::Weak;
    }

    let length = secret.chars().count();
    if length < MIN_LENGTH {
        return Strength::Weak;
    }

    let classes = char_classes(secret).count();
    if classes <= 1 {
        return Strength::Weak;
    }

    if length >= STRONG_LENGTH && classes >= STRONG_CLASSES {
        Strength::Strong
    } else {
        Strength::Medium
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Weak --

    #[test]
    fn empty_password_is_weak() {
        assert_eq!(classify_strength(""), Strength::Weak);
    }

    #[test]
    fn short_password_is_weak_even_with_all_classes() {
        // 7 chars, 4 classes
        assert_eq!(classify_strength("Ab1!xY2"), Strength::Weak);
    }

    #[test]
    fn common_password_is_weak() {
        assert_eq!(classify_strength("password"), Strength::Weak);
        assert_eq!(classify_strength("P@ssw0rd"), Strength::Weak);
    }

    #[test]
    fn all_lowercase_is_weak() {
        assert_eq!(classify_strength("abcdefghijklmnop"), Strength::Weak);
    }

    #[test]
    fn all_digits_is_weak() {
        assert_eq!(classify_strength("908172635443"), Strength::Weak);
    }

    #[test]
    fn all_uppercase_is_weak() {
        assert_eq!(classify_strength("ABCDEFGHIJKL"), Strength::Weak);
    }

    #[test]
    fn symbols_only_is_weak() {
        assert_eq!(classify_strength("!@#$%^&*()_+"), Strength::Weak);
    }

    #[test]
    fn emoji_only_is_single_symbol_class() {
        assert_eq!(classify_strength("🔒🔑🔒🔑🔒🔑🔒🔑"), Strength::Weak);
    }

    #[test]
    fn caseless_script_counts_as_lowercase() {
        // 8 CJK letters, one class
        assert_eq!(classify_strength("密码密码密码密码"), Strength::Weak);
    }

    // -- Medium --

    #[test]
    fn eight_chars_two_classes_is_medium() {
        assert_eq!(classify_strength("abcdEFGH"), Strength::Medium);
    }

    #[test]
    fn eleven_chars_four_classes_is_medium() {
        assert_eq!(classify_strength("Abcdefgh1!x"), Strength::Medium);
    }

    #[test]
    fn twelve_chars_two_classes_is_medium() {
        assert_eq!(classify_strength("abcdefghijk1"), Strength::Medium);
    }

    #[test]
    fn lowercase_passphrase_is_medium() {
        // lowercase + space (symbol): only two classes
        assert_eq!(
            classify_strength("correct horse battery staple"),
            Strength::Medium
        );
    }

    // -- Strong --

    #[test]
    fn classic_example_is_strong() {
        assert_eq!(classify_strength("Tr0ub4dor&3xyz"), Strength::Strong);
    }

    #[test]
    fn twelve_chars_three_classes_is_strong() {
        assert_eq!(classify_strength("Abcdefghijk1"), Strength::Strong);
    }

    #[test]
    fn cyrillic_lowercase_counts_toward_classes() {
        // 6 Cyrillic lowercase + 4 digits + 2 Latin uppercase = 12 chars, 3 classes
        assert_eq!(classify_strength("пароль1234AB"), Strength::Strong);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 11 chars (>12 bytes), 3 classes → Medium
        assert_eq!(classify_strength("密码密码密码1234!"), Strength::Medium);
        // 12 chars → Strong
        assert_eq!(classify_strength("密码密码密码1234!!"), Strength::Strong);
    }

    // -- Character classes --

    #[test]
    fn char_class_boundaries() {
        assert_eq!(CharClass::of('a'), CharClass::Lower);
        assert_eq!(CharClass::of('ß'), CharClass::Lower);
        assert_eq!(CharClass::of('密'), CharClass::Lower);
        assert_eq!(CharClass::of('Z'), CharClass::Upper);
        assert_eq!(CharClass::of('É'), CharClass::Upper);
        assert_eq!(CharClass::of('7'), CharClass::Digit);
        assert_eq!(CharClass::of('٣'), CharClass::Digit);
        assert_eq!(CharClass::of(' '), CharClass::Symbol);
        assert_eq!(CharClass::of('-'), CharClass::Symbol);
        assert_eq!(CharClass::of('🔒'), CharClass::Symbol);
    }

    #[test]
    fn char_classes_counts_distinct() {
        let classes = char_classes("aaBB11!!");
        assert_eq!(classes.count(), 4);
        assert!(classes.contains(CharClass::Symbol));
        assert_eq!(char_classes("").count(), 0);
    }

    #[test]
    fn strength_labels() {
        assert_eq!(Strength::Weak.as_str(), "weak");
        assert_eq!(Strength::Medium.as_str(), "medium");
        assert_eq!(Strength::Strong.as_str(), "strong");
    }
}
