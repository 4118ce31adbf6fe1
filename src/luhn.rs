//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a digit sequence using the Luhn algorithm.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9) representing the card number.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// An empty slice sums to zero and therefore passes.
///
/// # Example
///
/// ```
/// use card_brand::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    compute_checksum(digits) % 10 == 0
}

/// Runs the Luhn check over a string of ASCII digits.
///
/// Any byte outside `0`-`9` makes the check fail.
///
/// # Example
///
/// ```
/// use card_brand::luhn::luhn_check;
///
/// assert!(luhn_check("378282246310005"));
/// assert!(!luhn_check("378282246310006"));
/// assert!(!luhn_check("3782 8224"));
/// ```
pub fn luhn_check(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    if !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let mut sum: u32 = 0;
    let mut double = false;
    for &b in bytes.iter().rev() {
        sum += luhn_term(b - b'0', double);
        double = !double;
    }

    sum % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// Values above 9 are reduced modulo 10 first.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    let mut double = false;

    for &digit in digits.iter().rev() {
        sum += luhn_term(digit % 10, double);
        double = !double;
    }

    sum
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use card_brand::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // The check digit will sit at position 0 from the right, so the current
    // last digit is the first one doubled.
    let mut sum: u32 = 0;
    let mut double = true;

    for &digit in digits.iter().rev() {
        sum += luhn_term(digit % 10, double);
        double = !double;
    }

    ((10 - (sum % 10)) % 10) as u8
}

#[inline]
fn luhn_term(digit: u8, double: bool) -> u32 {
    if double {
        DOUBLE_TABLE[digit as usize] as u32
    } else {
        digit as u32
    }
}
