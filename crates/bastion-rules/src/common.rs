//! Built-in corpus of the most common passwords.
//!
//! Any secret matching one of these (case-insensitively) is classified as
//! weak regardless of its length or character variety. The same list seeds
//! the default local breach corpus in `bastion-audit`.

/// Most frequently leaked passwords, lowercase.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "123456789",
    "12345678",
    "12345",
    "1234567",
    "1234567890",
    "111111",
    "000000",
    "123123",
    "654321",
    "password",
    "password1",
    "password123",
    "passw0rd",
    "p@ssw0rd",
    "p@ssword",
    "qwerty",
    "qwerty123",
    "qwertyuiop",
    "1q2w3e4r",
    "1qaz2wsx",
    "asdfghjkl",
    "zxcvbnm",
    "abc123",
    "abcd1234",
    "iloveyou",
    "admin",
    "admin123",
    "welcome",
    "welcome1",
    "letmein",
    "monkey",
    "dragon",
    "football",
    "baseball",
    "sunshine",
    "princess",
    "master",
    "shadow",
    "superman",
    "trustno1",
    "starwars",
    "whatever",
    "freedom",
    "login",
    "changeme",
    "secret",
    "default",
    "guest",
    "test123",
];

/// Returns `true` if `secret` is in [`COMMON_PASSWORDS`], ignoring case.
#[must_use]
pub fn is_common_password(secret: &str) -> bool {
    let lowered = secret.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| *common == lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_common() {
        assert!(is_common_password("password"));
        assert!(is_common_password("123456"));
    }

    #[test]
    fn match_ignores_case() {
        assert!(is_common_password("PassWord123"));
        assert!(is_common_password("QWERTY"));
    }

    #[test]
    fn near_miss_is_not_common() {
        assert!(!is_common_password("password!"));
        assert!(!is_common_password(""));
    }

    #[test]
    fn corpus_is_stored_lowercase() {
        for common in COMMON_PASSWORDS {
            assert_eq!(*common, common.to_lowercase());
        }
    }
}
