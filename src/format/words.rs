use super::FormatError;

/// Largest value the thousands/hundreds decomposition can spell out.
pub const MAX_WORDS_VALUE: i64 = 999_999;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spells out `n` in English, e.g. `74400` becomes
/// `Seventy Four Thousand Four Hundred`.
///
/// Only `0..=999_999` is supported; anything else is a
/// [`FormatError::DomainError`].
pub fn number_to_words(n: i64) -> Result<String, FormatError> {
    if n < 0 {
        return Err(FormatError::domain(n, "value is negative"));
    }
    if n > MAX_WORDS_VALUE {
        return Err(FormatError::domain(n, "value exceeds 999,999"));
    }
    if n == 0 {
        return Ok(String::from("Zero"));
    }

    let n = n as usize;
    let mut words: Vec<&'static str> = Vec::new();

    let thousands = n / 1000;
    if thousands > 0 {
        push_below_thousand(thousands, &mut words);
        words.push("Thousand");
    }
    push_below_thousand(n % 1000, &mut words);

    Ok(words.join(" "))
}

/// Same as [`number_to_words`] for callers holding a real number. The value
/// must be finite and integral.
pub fn real_to_words(n: f64) -> Result<String, FormatError> {
    if !n.is_finite() {
        return Err(FormatError::domain(n, "value is not finite"));
    }
    if n.fract() != 0.0 {
        return Err(FormatError::domain(n, "value is not an integer"));
    }
    if n < 0.0 {
        return Err(FormatError::domain(n, "value is negative"));
    }
    if n > MAX_WORDS_VALUE as f64 {
        return Err(FormatError::domain(n, "value exceeds 999,999"));
    }

    number_to_words(n as i64)
}

/// Renders a net pay of `cents` as `Rupees .. & Cents .. Only.`
pub fn amount_in_words(cents: i64) -> Result<String, FormatError> {
    if cents < 0 {
        return Err(FormatError::domain(
            super::currency::format_cents(cents),
            "amount is negative",
        ));
    }

    let rupees = number_to_words(cents / 100)?;
    let cents = number_to_words(cents % 100)?;

    Ok(format!("Rupees {rupees} & Cents {cents} Only."))
}

/// Rounds a real rupee amount to whole cents, half away from zero.
pub fn rupees_to_cents(amount: f64) -> Result<i64, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::InvalidAmount(amount));
    }

    let cents = (amount * 100.0).round();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if cents >= i64::MAX as f64 || cents < i64::MIN as f64 {
        return Err(FormatError::domain(amount, "amount does not fit in cents"));
    }
    Ok(cents as i64)
}

/// [`amount_in_words`] for a real rupee amount such as `74400.5`.
pub fn rupees_in_words(amount: f64) -> Result<String, FormatError> {
    amount_in_words(rupees_to_cents(amount)?)
}

// Zero contributes nothing here so that e.g. 100 reads "One Hundred"
fn push_below_thousand(n: usize, words: &mut Vec<&'static str>) {
    let hundreds = n / 100;
    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push("Hundred");
    }

    match n % 100 {
        0 => {}
        rest @ 1..=9 => words.push(ONES[rest]),
        rest @ 10..=19 => words.push(TEENS[rest - 10]),
        rest => {
            words.push(TENS[rest / 10]);
            if rest % 10 != 0 {
                words.push(ONES[rest % 10]);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_number_to_words_small() {
        assert_eq!("Zero", number_to_words(0).unwrap());
        assert_eq!("One", number_to_words(1).unwrap());
        assert_eq!("Five", number_to_words(5).unwrap());
        assert_eq!("Ten", number_to_words(10).unwrap());
        assert_eq!("Fifteen", number_to_words(15).unwrap());
        assert_eq!("Nineteen", number_to_words(19).unwrap());
        assert_eq!("Twenty", number_to_words(20).unwrap());
        assert_eq!("Forty Two", number_to_words(42).unwrap());
        assert_eq!("Ninety Nine", number_to_words(99).unwrap());
    }

    #[test]
    fn test_number_to_words_hundreds() {
        assert_eq!("One Hundred", number_to_words(100).unwrap());
        assert_eq!("One Hundred Five", number_to_words(105).unwrap());
        assert_eq!("One Hundred Twelve", number_to_words(112).unwrap());
        assert_eq!("Nine Hundred Ninety Nine", number_to_words(999).unwrap());
    }

    #[test]
    fn test_number_to_words_thousands() {
        assert_eq!("One Thousand", number_to_words(1000).unwrap());
        assert_eq!("One Thousand One", number_to_words(1001).unwrap());
        assert_eq!(
            "Seventy Four Thousand Four Hundred",
            number_to_words(74400).unwrap()
        );
        assert_eq!(
            "One Hundred Thousand",
            number_to_words(100_000).unwrap()
        );
        assert_eq!(
            "Nine Hundred Ninety Nine Thousand Nine Hundred Ninety Nine",
            number_to_words(999_999).unwrap()
        );
    }

    #[test]
    fn test_number_to_words_out_of_domain() {
        assert!(matches!(
            number_to_words(-1),
            Err(FormatError::DomainError { .. })
        ));
        assert!(matches!(
            number_to_words(1_000_000),
            Err(FormatError::DomainError { .. })
        ));
    }

    #[test]
    fn test_number_to_words_spacing() {
        for n in 0..=MAX_WORDS_VALUE {
            let words = number_to_words(n).unwrap();
            assert!(!words.is_empty(), "{n} produced no words");
            assert!(!words.contains("  "), "{n} -> {words:?}");
            assert_eq!(words.trim(), words, "{n} -> {words:?}");
        }
    }

    #[test]
    fn test_real_to_words() {
        assert_eq!("Forty Two", real_to_words(42.0).unwrap());
        assert_eq!("Zero", real_to_words(-0.0).unwrap());

        for bad in [-1.0, 1.5, f64::NAN, f64::INFINITY, 1e6] {
            assert!(
                matches!(real_to_words(bad), Err(FormatError::DomainError { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_amount_in_words() {
        assert_eq!(
            "Rupees Seventy Four Thousand Four Hundred & Cents Zero Only.",
            amount_in_words(7_440_000).unwrap()
        );
        assert_eq!(
            "Rupees Twelve & Cents Fifty Only.",
            amount_in_words(1250).unwrap()
        );
        assert_eq!(
            "Rupees Zero & Cents Five Only.",
            amount_in_words(5).unwrap()
        );
        assert!(matches!(
            amount_in_words(-100),
            Err(FormatError::DomainError { .. })
        ));
        assert!(amount_in_words(100_000_000).is_err());
    }

    #[test]
    fn test_rupees_to_cents() {
        assert_eq!(Ok(7_440_000), rupees_to_cents(74400.0));
        assert_eq!(Ok(1_235), rupees_to_cents(12.345_1));
        assert_eq!(Ok(-150), rupees_to_cents(-1.5));
        assert_eq!(Ok(0), rupees_to_cents(0.004));
        assert_eq!(
            Err(FormatError::InvalidAmount(f64::INFINITY)),
            rupees_to_cents(f64::INFINITY)
        );
        assert!(matches!(
            rupees_to_cents(f64::NAN),
            Err(FormatError::InvalidAmount(_))
        ));
        assert!(matches!(
            rupees_to_cents(1e17),
            Err(FormatError::DomainError { .. })
        ));
        assert!(matches!(
            rupees_to_cents(-1e17),
            Err(FormatError::DomainError { .. })
        ));
    }

    #[test]
    fn test_rupees_in_words() {
        assert_eq!(
            "Rupees Seventy Four Thousand Four Hundred & Cents Fifty Only.",
            rupees_in_words(74400.5).unwrap()
        );
        assert_eq!(
            "Rupees Zero & Cents One Only.",
            rupees_in_words(0.01).unwrap()
        );
        assert!(matches!(
            rupees_in_words(-2.0),
            Err(FormatError::DomainError { .. })
        ));
        assert!(matches!(
            rupees_in_words(1e300),
            Err(FormatError::DomainError { .. })
        ));
    }
}
