use num_format::{Locale, ToFormattedString};

use super::FormatError;

/// Digit grouping and decimal point used for LKR amounts.
const LOCALE: Locale = Locale::en;

/// Cent counts below this fit in `u128`.
const MAX_GROUPED_CENTS: f64 = 1e36;

/// Formats `amount` with exactly two decimals and thousands separators,
/// e.g. `74400.0` becomes `74,400.00`.
///
/// Rounds half away from zero to the nearest cent. An amount that rounds to
/// zero is printed without a sign.
pub fn format_currency(amount: f64) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::InvalidAmount(amount));
    }

    let cents = (amount.abs() * 100.0).round();
    let negative = amount.is_sign_negative() && cents > 0.0;

    let unsigned = if cents < MAX_GROUPED_CENTS {
        layout(cents as u128)
    } else {
        // Beyond u128 range: fall back to the exact decimal expansion
        let fixed = format!("{:.2}", amount.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{}{}{}", group_digits(whole), LOCALE.decimal(), fraction)
    };

    Ok(with_sign(unsigned, negative))
}

/// Formats an exact amount of cents the same way as [`format_currency`].
pub fn format_cents(cents: i64) -> String {
    with_sign(layout(cents.unsigned_abs() as u128), cents < 0)
}

fn layout(cents: u128) -> String {
    format!(
        "{}{}{:02}",
        (cents / 100).to_formatted_string(&LOCALE),
        LOCALE.decimal(),
        cents % 100
    )
}

fn with_sign(unsigned: String, negative: bool) -> String {
    if negative {
        format!("{}{}", LOCALE.minus_sign(), unsigned)
    } else {
        unsigned
    }
}

fn group_digits(digits: &str) -> String {
    let separator = LOCALE.separator();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}
