use serde::{Deserialize, Serialize};

/// Renders amounts as `$1,234.50`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatter {
    #[serde(default = "default_symbol")]
    pub symbol: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Format `amount` with two decimals and thousands separators
    ///
    /// NaN and infinities render as zero.
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return format!("{}0.00", self.symbol);
        }

        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        // Amounts that round to zero lose their sign
        let negative = amount < 0.0 && fixed != "0.00";
        let sign = if negative { "-" } else { "" };

        format!("{}{}{}.{}", sign, self.symbol, group_thousands(whole), cents)
    }

    /// Like [`format`](Self::format) but drops `.00` on whole amounts, for labels such as limits
    pub fn format_label(&self, amount: f64) -> String {
        let full = self.format(amount);
        match full.strip_suffix(".00") {
            Some(whole) => whole.to_string(),
            None => full,
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format `amount` as US dollars
pub fn format_currency(amount: f64) -> String {
    CurrencyFormatter::default().format(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(11.0), "$11.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(2.5), "$2.50");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(999.99), "$999.99");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(100000.0), "$100,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-1234.5), "-$1,234.50");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
    }

    #[test]
    fn test_non_finite_falls_back_to_zero() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$0.00");
    }

    #[test]
    fn test_format_label_drops_whole_cents() {
        let formatter = CurrencyFormatter::default();
        assert_eq!(formatter.format_label(5000.0), "$5,000");
        assert_eq!(formatter.format_label(12.5), "$12.50");
        assert_eq!(formatter.format_label(f64::NAN), "$0");
    }

    #[test]
    fn test_custom_symbol() {
        let formatter = CurrencyFormatter::new("€");
        assert_eq!(formatter.format(1500.0), "€1,500.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
