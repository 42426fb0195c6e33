//! Amount formatting for summaries and CLI output.

/// Symbol for the currency codes the tracker displays.
pub fn symbol_for(code: &str) -> String {
    match code {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        _ => code.into(),
    }
}

/// Formats an amount with its currency symbol, e.g. `₹12,34,567.5`.
///
/// `en-IN` groups the integer part as thousands then pairs; other locales
/// group in threes. Up to two fraction digits are kept, trailing zeros
/// dropped. Negative values get a leading minus.
pub fn format_amount(amount: f64, currency: &str, locale: &str) -> String {
    let body = format_number(amount.abs(), locale);
    let is_zero = !body.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{}{}", sign, symbol_for(currency), body)
}

pub fn format_number(value: f64, locale: &str) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let grouped = if locale.eq_ignore_ascii_case("en-IN") {
        group_indian(int_part)
    } else {
        group_digits(int_part)
    };
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    for (count, ch) in head.chars().rev().enumerate() {
        if count != 0 && count % 2 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    format!("{},{}", grouped, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping_uses_pairs_after_thousands() {
        assert_eq!(format_number(1234567.0, "en-IN"), "12,34,567");
        assert_eq!(format_number(100000.0, "en-IN"), "1,00,000");
        assert_eq!(format_number(999.0, "en-IN"), "999");
        assert_eq!(format_number(1000.5, "en-IN"), "1,000.5");
    }

    #[test]
    fn western_grouping_uses_threes() {
        assert_eq!(format_number(1234567.25, "en-US"), "1,234,567.25");
    }

    #[test]
    fn amount_carries_symbol_and_sign() {
        assert_eq!(format_amount(50000.0, "INR", "en-IN"), "₹50,000");
        assert_eq!(format_amount(-60.0, "INR", "en-IN"), "-₹60");
        assert_eq!(format_amount(-0.001, "USD", "en-US"), "$0");
    }
}
