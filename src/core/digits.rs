/// Checks whether a decimal rendering reads the same forward and backward.
/// Empty and single-character strings are trivially palindromic.
pub fn is_palindrome(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let len = bytes.len();
    (0..len / 2).all(|i| bytes[i] == bytes[len - i - 1])
}

/// Reverses the character order exactly, keeping any leading zeros the
/// reversal produces: reversing "120" yields "021".
pub fn reverse_digits(digits: &str) -> String {
    digits.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("1221"));
        assert!(is_palindrome("12321"));
        assert!(is_palindrome("0"));
        assert!(!is_palindrome("12"));
        assert!(!is_palindrome("120"));
    }

    #[test]
    fn test_is_palindrome_trivial_strings() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("7"));
        assert!(is_palindrome("x"));
    }

    #[test]
    fn test_reverse_digits() {
        assert_eq!(reverse_digits("59"), "95");
        assert_eq!(reverse_digits("120"), "021");
        assert_eq!(reverse_digits("7"), "7");
        assert_eq!(reverse_digits(""), "");
    }

    #[test]
    fn test_reverse_digits_involution() {
        for digits in ["0", "120", "987650", "1000000001", ""] {
            assert_eq!(reverse_digits(&reverse_digits(digits)), digits);
        }
    }

    #[test]
    fn test_palindrome_invariant_under_reversal() {
        for digits in ["1221", "12321", "59", "120", "10", ""] {
            assert_eq!(is_palindrome(digits), is_palindrome(&reverse_digits(digits)));
        }
    }
}
