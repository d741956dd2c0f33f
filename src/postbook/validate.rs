//! Field validators for record entry and load-time admission.
//!
//! Each predicate takes the raw string form of a field and returns a plain
//! `bool`. They never panic and never allocate; callers decide what a
//! rejection means (skip the row on load, abort the request on entry).

/// An age is valid when it is all decimal digits and falls in 1..=120.
pub fn valid_age(age: &str) -> bool {
    if age.is_empty() || !age.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(age.parse::<u32>(), Ok(n) if (1..=120).contains(&n))
}

/// Deliberately permissive: an email only needs an `@` and a `.` somewhere.
pub fn valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// A phone number is valid when it is all decimal digits and at least 10 long.
pub fn valid_phone(phone: &str) -> bool {
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit()) && phone.len() >= 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_accepts_bounds() {
        assert!(valid_age("1"));
        assert!(valid_age("30"));
        assert!(valid_age("120"));
    }

    #[test]
    fn age_rejects_out_of_range_and_non_numeric() {
        assert!(!valid_age("0"));
        assert!(!valid_age("121"));
        assert!(!valid_age("abc"));
        assert!(!valid_age("-5"));
        assert!(!valid_age(""));
        assert!(!valid_age("3.5"));
        // digits only, but far beyond any integer width
        assert!(!valid_age("99999999999999999999"));
    }

    #[test]
    fn email_needs_at_and_dot() {
        assert!(valid_email("ss@gmail.com"));
        assert!(valid_email("a.b@c"));
        assert!(!valid_email("no-at.example"));
        assert!(!valid_email("no-dot@example"));
        assert!(!valid_email(""));
    }

    #[test]
    fn phone_needs_ten_digits() {
        assert!(valid_phone("1234567890"));
        assert!(valid_phone("004412345678901"));
        assert!(!valid_phone("12345"));
        assert!(!valid_phone("12345abcde"));
        assert!(!valid_phone("12 3456789"));
        assert!(!valid_phone(""));
    }
}
