//! Utility functions and helpers

/// Format a number with thousands separators.
///
/// The integer part is grouped in threes using `sep`; the fractional part
/// (if any) follows after a decimal point. Negative values keep their
/// minus sign.
pub fn format_number(value: f64, sep: &str, decimal_places: u32) -> String {
    let formatted = format!("{:.*}", decimal_places as usize, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(sep);
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format an amount for display with a currency symbol, e.g. "Rp 5.000".
pub fn format_currency(value: f64, symbol: &str, sep: &str, decimal_places: u32) -> String {
    format!("{} {}", symbol, format_number(value, sep, decimal_places))
}

/// Escape user-supplied text for embedding in HTML fragments.
pub fn escape_html(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(5000.0, ".", 0), "5.000");
        assert_eq!(format_number(1234567.0, ",", 0), "1,234,567");
        assert_eq!(format_number(999.0, ".", 0), "999");
        assert_eq!(format_number(0.0, ".", 0), "0");
    }

    #[test]
    fn test_format_number_decimals() {
        assert_eq!(format_number(1234.5, ",", 2), "1,234.50");
        assert_eq!(format_number(0.25, ",", 2), "0.25");
    }

    #[test]
    fn test_format_number_keeps_sign() {
        assert_eq!(format_number(-500.0, ".", 0), "-500");
        assert_eq!(format_number(-1234567.0, ".", 0), "-1.234.567");
        assert_eq!(format_number(-1234.5, ",", 2), "-1,234.50");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(50000.0, "Rp", ".", 0), "Rp 50.000");
    }

    // expense > income leaves the balance negative; the card must show it
    #[test]
    fn test_format_currency_negative_balance() {
        assert_eq!(format_currency(-500.0, "Rp", ".", 0), "Rp -500");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("plain"), "plain");
    }
}
