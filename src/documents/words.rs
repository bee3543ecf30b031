//! Amount formatter - currency amounts as Indian-system words
//!
//! Converts a non-negative pay amount into its words representation with
//! currency framing, e.g. `36000` becomes "Thirty Six Thousand Rupees Only".
//! Grouping follows the Indian numbering system (hundred, thousand, lakh,
//! crore). Stateless; one transform per call.

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Format a non-negative amount as currency words
///
/// Returns an empty string for a zero amount: a zero net pay renders no
/// words line. Fractions are treated as paise and rounded to two places.
pub fn amount_in_words(amount: f64) -> String {
    if amount <= 0.0 {
        return String::new();
    }

    // Work in whole paise to avoid float comparisons on the split
    let total_paise = (amount * 100.0).round() as u64;
    let rupees = total_paise / 100;
    let paise = total_paise % 100;

    if total_paise == 0 {
        return String::new();
    }

    let mut parts = Vec::new();
    if rupees > 0 {
        let unit = if rupees == 1 { "Rupee" } else { "Rupees" };
        parts.push(format!("{} {}", integer_words(rupees), unit));
    }
    if paise > 0 {
        parts.push(format!("{} Paise", integer_words(paise)));
    }

    format!("{} Only", parts.join(" And "))
}

/// Words for a positive integer in Indian grouping
fn integer_words(n: u64) -> String {
    debug_assert!(n > 0);

    let mut words = Vec::new();

    let crore = n / 10_000_000;
    if crore > 0 {
        // Amounts of 100 crore and above recurse on the crore count
        words.push(integer_words(crore));
        words.push("Crore".to_string());
    }
    push_group(&mut words, n / 100_000 % 100, "Lakh");
    push_group(&mut words, n / 1_000 % 100, "Thousand");
    push_group(&mut words, n % 1_000, "");

    words.join(" ")
}

fn push_group(words: &mut Vec<String>, value: u64, scale: &str) {
    if value > 0 {
        words.push(below_thousand(value));
        if !scale.is_empty() {
            words.push(scale.to_string());
        }
    }
}

fn below_thousand(n: u64) -> String {
    debug_assert!(n > 0 && n < 1000);

    let mut words = Vec::new();
    if n >= 100 {
        words.push(format!("{} Hundred", ONES[(n / 100) as usize]));
    }
    let rest = n % 100;
    if rest >= 20 {
        let ten = TENS[(rest / 10) as usize];
        match rest % 10 {
            0 => words.push(ten.to_string()),
            one => words.push(format!("{} {}", ten, ONES[one as usize])),
        }
    } else if rest > 0 {
        words.push(ONES[rest as usize].to_string());
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(amount_in_words(0.0), "");
    }

    #[test]
    fn test_negative_is_empty() {
        // Net pay is clamped upstream; anything negative renders nothing
        assert_eq!(amount_in_words(-5.0), "");
    }

    #[test]
    fn test_one_rupee_is_singular() {
        assert_eq!(amount_in_words(1.0), "One Rupee Only");
    }

    #[test]
    fn test_round_thousands() {
        assert_eq!(amount_in_words(36000.0), "Thirty Six Thousand Rupees Only");
    }

    #[test]
    fn test_teens_and_tens() {
        assert_eq!(amount_in_words(19.0), "Nineteen Rupees Only");
        assert_eq!(amount_in_words(40.0), "Forty Rupees Only");
        assert_eq!(amount_in_words(87.0), "Eighty Seven Rupees Only");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(
            amount_in_words(37000.0),
            "Thirty Seven Thousand Rupees Only"
        );
        assert_eq!(
            amount_in_words(999.0),
            "Nine Hundred Ninety Nine Rupees Only"
        );
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(
            amount_in_words(150000.0),
            "One Lakh Fifty Thousand Rupees Only"
        );
        assert_eq!(
            amount_in_words(12_345_678.0),
            "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees Only"
        );
        assert_eq!(
            amount_in_words(1_000_000_000.0),
            "One Hundred Crore Rupees Only"
        );
    }

    #[test]
    fn test_paise() {
        assert_eq!(
            amount_in_words(1234.56),
            "One Thousand Two Hundred Thirty Four Rupees And Fifty Six Paise Only"
        );
        assert_eq!(amount_in_words(0.50), "Fifty Paise Only");
    }

    #[test]
    fn test_paise_rounding_carries() {
        // 0.999 rounds to 1.00, not 99.9 paise
        assert_eq!(amount_in_words(0.999), "One Rupee Only");
    }
}
