//! Integer-shaped string checks

/// Whether `input` is a base-10 integer string: an optional sign followed by
/// at least one ASCII digit. Leading zeros are allowed, surrounding
/// whitespace is not.
pub fn is_int(input: &str) -> bool {
    let digits = input
        .strip_prefix('+')
        .or_else(|| input.strip_prefix('-'))
        .unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `input` is integer-shaped and exactly `length` characters long,
/// the shape of booking numbers and agency ids
pub fn is_fixed_length_int(input: &str, length: usize) -> bool {
    is_int(input) && input.chars().count() == length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_int() {
        for valid in ["0", "23", "007", "-5", "+42", "123456"] {
            assert!(is_int(valid), "'{}' should be an integer", valid);
        }
        for invalid in ["", "+", "-", "test", "123t", "1.5", " 1", "1 ", "1e3"] {
            assert!(!is_int(invalid), "'{}' should not be an integer", invalid);
        }
    }

    #[test]
    fn test_is_fixed_length_int() {
        assert!(is_fixed_length_int("123456", 6));
        assert!(is_fixed_length_int("012345", 6));
        assert!(!is_fixed_length_int("123", 6));
        assert!(!is_fixed_length_int("1234567", 6));
        assert!(!is_fixed_length_int("12345a", 6));
    }
}
