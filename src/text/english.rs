//! English cheque-text rendering with thousand (3-digit) grouping.
//!
//! The dollar and pound variants share the algorithm and differ only in
//! their unit words.

use crate::Amount;

const ONES: [&str; 20] = [
    "",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
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

const SCALES: [&str; 4] = ["", "Thousand", "Million", "Billion"];

/// Unit words for one English currency variant.
pub(crate) struct EnglishLexicon {
    /// Major unit, always pluralized ("Dollars", "Pounds").
    major: &'static str,
    /// Minor unit, always pluralized ("Cents", "Pence").
    minor: &'static str,
}

pub(crate) const DOLLARS: EnglishLexicon = EnglishLexicon {
    major: "Dollars",
    minor: "Cents",
};

pub(crate) const POUNDS: EnglishLexicon = EnglishLexicon {
    major: "Pounds",
    minor: "Pence",
};

/// Render a validated amount in English words.
pub(crate) fn render(amount: Amount, lex: &EnglishLexicon) -> String {
    // Fixed zero literal, never routed through the grouping code.
    if amount.is_zero() {
        return format!("Zero {} Only", lex.major);
    }

    let mut out = whole_number(amount.whole());
    out.push(' ');
    out.push_str(lex.major);

    if amount.cents() > 0 {
        out.push_str(" and ");
        out.push_str(&under_hundred(amount.cents() as u64));
        out.push(' ');
        out.push_str(lex.minor);
    }

    out.push_str(" Only");
    out
}

/// Render a whole number, grouped by thousands.
fn whole_number(mut n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    // Four groups cover the full range; groups[0] is the lowest order.
    let mut groups = [0u16; 4];
    let mut count = 0;
    while n > 0 {
        groups[count] = (n % 1000) as u16;
        n /= 1000;
        count += 1;
    }

    let mut parts = Vec::new();
    for i in (0..count).rev() {
        let group = groups[i];
        if group == 0 {
            continue;
        }
        let text = under_thousand(group as u64);
        if SCALES[i].is_empty() {
            parts.push(text);
        } else {
            parts.push(format!("{text} {}", SCALES[i]));
        }
    }

    parts.join(" ")
}

/// Render 1..=999 as words.
fn under_thousand(n: u64) -> String {
    let hundreds = n / 100;
    let remainder = n % 100;

    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(ONES[hundreds as usize]);
        out.push_str(" Hundred");
    }
    if remainder > 0 {
        if hundreds > 0 {
            out.push(' ');
        }
        out.push_str(&under_hundred(remainder));
    }
    out
}

/// Render 1..=99 as words, hyphenating compound tens.
fn under_hundred(n: u64) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = n / 10;
    let ones = n % 10;
    if ones == 0 {
        TENS[tens as usize].to_string()
    } else {
        format!("{}-{}", TENS[tens as usize], ONES[ones as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(value: f64) -> String {
        render(Amount::from_f64(value).unwrap(), &DOLLARS)
    }

    fn pounds(value: f64) -> String {
        render(Amount::from_f64(value).unwrap(), &POUNDS)
    }

    #[test]
    fn zero_literal() {
        assert_eq!(dollars(0.0), "Zero Dollars Only");
        assert_eq!(pounds(0.0), "Zero Pounds Only");
    }

    #[test]
    fn single_digits() {
        assert_eq!(dollars(1.0), "One Dollars Only");
        assert_eq!(dollars(5.0), "Five Dollars Only");
        assert_eq!(dollars(9.0), "Nine Dollars Only");
    }

    #[test]
    fn teens() {
        assert_eq!(dollars(10.0), "Ten Dollars Only");
        assert_eq!(dollars(11.0), "Eleven Dollars Only");
        assert_eq!(dollars(15.0), "Fifteen Dollars Only");
        assert_eq!(dollars(19.0), "Nineteen Dollars Only");
    }

    #[test]
    fn tens() {
        assert_eq!(dollars(20.0), "Twenty Dollars Only");
        assert_eq!(dollars(30.0), "Thirty Dollars Only");
        assert_eq!(dollars(90.0), "Ninety Dollars Only");
    }

    #[test]
    fn compound_tens_hyphenated() {
        assert_eq!(dollars(21.0), "Twenty-One Dollars Only");
        assert_eq!(dollars(45.0), "Forty-Five Dollars Only");
        assert_eq!(dollars(99.0), "Ninety-Nine Dollars Only");
    }

    #[test]
    fn hundreds() {
        assert_eq!(dollars(100.0), "One Hundred Dollars Only");
        assert_eq!(dollars(101.0), "One Hundred One Dollars Only");
        assert_eq!(dollars(110.0), "One Hundred Ten Dollars Only");
        assert_eq!(dollars(999.0), "Nine Hundred Ninety-Nine Dollars Only");
    }

    #[test]
    fn thousands() {
        assert_eq!(dollars(1000.0), "One Thousand Dollars Only");
        assert_eq!(dollars(10_000.0), "Ten Thousand Dollars Only");
        assert_eq!(dollars(100_000.0), "One Hundred Thousand Dollars Only");
    }

    #[test]
    fn zero_groups_are_skipped() {
        assert_eq!(dollars(1_000_001.0), "One Million One Dollars Only");
        assert_eq!(
            dollars(1_000_000_010.0),
            "One Billion Ten Dollars Only"
        );
    }

    #[test]
    fn cents_only() {
        assert_eq!(dollars(0.50), "Zero Dollars and Fifty Cents Only");
        assert_eq!(dollars(0.01), "Zero Dollars and One Cents Only");
        assert_eq!(dollars(0.99), "Zero Dollars and Ninety-Nine Cents Only");
    }

    #[test]
    fn dollars_and_cents() {
        assert_eq!(dollars(1.50), "One Dollars and Fifty Cents Only");
        assert_eq!(dollars(10.25), "Ten Dollars and Twenty-Five Cents Only");
        assert_eq!(dollars(100.01), "One Hundred Dollars and One Cents Only");
        assert_eq!(
            dollars(10_000.30),
            "Ten Thousand Dollars and Thirty Cents Only"
        );
        assert_eq!(
            dollars(10_000.31),
            "Ten Thousand Dollars and Thirty-One Cents Only"
        );
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(dollars(1.005), "One Dollars Only");
        assert_eq!(dollars(0.1 + 0.2), "Zero Dollars and Thirty Cents Only");
    }

    #[test]
    fn large_amounts() {
        assert_eq!(dollars(1_000_000.0), "One Million Dollars Only");
        assert_eq!(dollars(10_000_000.0), "Ten Million Dollars Only");
        assert_eq!(dollars(100_000_000.0), "One Hundred Million Dollars Only");
        assert_eq!(dollars(1_000_000_000.0), "One Billion Dollars Only");
    }

    #[test]
    fn maximum_amount() {
        assert_eq!(
            dollars(99_999_999_999.99),
            "Ninety-Nine Billion Nine Hundred Ninety-Nine Million \
             Nine Hundred Ninety-Nine Thousand Nine Hundred Ninety-Nine \
             Dollars and Ninety-Nine Cents Only"
        );
    }

    #[test]
    fn pound_variant_is_lexical_only() {
        assert_eq!(pounds(100.0), "One Hundred Pounds Only");
        assert_eq!(pounds(1.50), "One Pounds and Fifty Pence Only");
        assert_eq!(pounds(0.01), "Zero Pounds and One Pence Only");
    }
}
