//! # Currency Formatting
//!
//! Amounts are shown in kronor. With Swedish locale data the output uses
//! space-grouped thousands and a decimal comma (`1 234,50 kr`); any other
//! locale gets the plain fallback (`1234.50 kr`).

/// How amounts are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurrencyFormat {
    #[default]
    Swedish,
    Plain,
}

impl CurrencyFormat {
    /// Pick a format from a locale name such as `sv_SE.UTF-8`.
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['_', '-', '.'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        if language == "sv" {
            CurrencyFormat::Swedish
        } else {
            CurrencyFormat::Plain
        }
    }

    pub fn format(self, amount: f64) -> String {
        match self {
            CurrencyFormat::Plain => format!("{amount:.2} kr"),
            CurrencyFormat::Swedish => {
                let fixed = format!("{:.2}", amount.abs());
                let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
                let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
                format!("{sign}{},{fraction} kr", group_thousands(whole))
            }
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swedish_grouping() {
        let f = CurrencyFormat::Swedish;
        assert_eq!(f.format(0.0), "0,00 kr");
        assert_eq!(f.format(999.5), "999,50 kr");
        assert_eq!(f.format(1234.5), "1 234,50 kr");
        assert_eq!(f.format(1234567.891), "1 234 567,89 kr");
        assert_eq!(f.format(-1500.0), "-1 500,00 kr");
    }

    #[test]
    fn test_plain_fallback() {
        assert_eq!(CurrencyFormat::Plain.format(1234.5), "1234.50 kr");
    }

    #[test]
    fn test_for_locale() {
        assert_eq!(CurrencyFormat::for_locale("sv_SE.UTF-8"), CurrencyFormat::Swedish);
        assert_eq!(CurrencyFormat::for_locale("sv-FI"), CurrencyFormat::Swedish);
        assert_eq!(CurrencyFormat::for_locale("en_US"), CurrencyFormat::Plain);
        assert_eq!(CurrencyFormat::for_locale("C"), CurrencyFormat::Plain);
        assert_eq!(CurrencyFormat::for_locale(""), CurrencyFormat::Plain);
    }
}
