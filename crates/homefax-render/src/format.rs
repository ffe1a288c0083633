//! Number formatting for document text.

/// Whole dollars with thousands separators, e.g. `$1,250,000`.
pub fn currency(amount: u64) -> String {
    format!("${}", thousands(amount))
}

/// Dollars and cents with thousands separators, e.g. `$1,733.33`.
pub fn money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        thousands(cents / 100),
        cents % 100
    )
}

/// Fraction as a percentage with `decimals` places, e.g. `0.02` → `2%`.
pub fn percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, fraction * 100.0)
}

/// Integer with thousands separators, e.g. `2,450`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(0), "$0");
        assert_eq!(currency(500), "$500");
        assert_eq!(currency(1_500), "$1,500");
        assert_eq!(currency(1_200_000), "$1,200,000");
    }

    #[test]
    fn money_keeps_cents() {
        assert_eq!(money(1_733.333), "$1,733.33");
        assert_eq!(money(7.5), "$7.50");
        assert_eq!(money(-30.0), "-$30.00");
    }

    #[test]
    fn percent_formats_fractions() {
        assert_eq!(percent(0.02, 0), "2%");
        assert_eq!(percent(0.0435, 3), "4.350%");
    }
}
