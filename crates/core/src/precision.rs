use thiserror::Error;

/// Errors that can occur when creating a [`Precision`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionError {
    #[error("precision must be at most {max} digits, got {digits}")]
    TooManyDigits { digits: u32, max: u32 },
}

/// A number of decimal digits that solver values are rounded to.
///
/// Rounding works on the exact decimal expansion of the binary value and
/// resolves ties away from zero, so `4.03125` rounds to `4.0313` at four
/// digits while `1.005` (stored as `1.00499…`) rounds to `1.0` at two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    digits: u32,
}

impl Precision {
    /// Largest supported digit count.
    pub const MAX_DIGITS: u32 = 100;

    /// Creates a precision of `digits` decimal places.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` exceeds [`Precision::MAX_DIGITS`].
    pub fn new(digits: u32) -> Result<Self, PrecisionError> {
        if digits > Self::MAX_DIGITS {
            return Err(PrecisionError::TooManyDigits {
                digits,
                max: Self::MAX_DIGITS,
            });
        }
        Ok(Self { digits })
    }

    /// Returns the number of decimal digits.
    #[must_use]
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Rounds `value` to this many decimal digits.
    ///
    /// Non-finite values are returned unchanged and a result of zero is
    /// always positive zero. Rounding a rounded value returns it unchanged.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }

        let digits = self.digits as usize;
        // Formatting with fewer digits than the expansion holds would round
        // ties to even before the digit below is inspected.
        let shown = fraction_digits(value).max(digits + 1);
        let exact = format!("{:.*}", shown, value.abs());
        let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

        let mut kept: Vec<char> = whole.chars().chain(fraction.chars().take(digits)).collect();
        if fraction.chars().nth(digits).is_some_and(|next| next >= '5') {
            increment(&mut kept);
        }

        let split = kept.len() - digits;
        let mut text = String::with_capacity(kept.len() + 2);
        if value < 0.0 {
            text.push('-');
        }
        text.extend(&kept[..split]);
        if digits > 0 {
            text.push('.');
            text.extend(&kept[split..]);
        }

        // The text holds only a sign, ASCII digits, and one decimal point.
        let rounded: f64 = text.parse().unwrap_or(value);
        if rounded == 0.0 { 0.0 } else { rounded }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self { digits: 4 }
    }
}

/// Returns how many fractional digits the exact decimal expansion of a
/// finite `value` has.
///
/// A finite `f64` is `m * 2^p` for an integer `m`. Once `m` is odd, the
/// expansion ends after `-p` digits when `p < 0` and has none otherwise.
fn fraction_digits(value: f64) -> usize {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let mantissa = bits & ((1_u64 << 52) - 1);

    let (significand, power) = if biased == 0 {
        (mantissa, -1074)
    } else {
        (mantissa | (1_u64 << 52), biased - 1075)
    };
    if significand == 0 {
        return 0;
    }

    let power = power + significand.trailing_zeros() as i32;
    usize::try_from(-power).unwrap_or(0)
}

/// Adds one unit in the last place to a string of decimal digits.
fn increment(digits: &mut Vec<char>) {
    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}
