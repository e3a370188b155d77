pub const CURRENCY: &str = "KRW";

/// `2,052,000 KRW`
pub fn won(amount: i64) -> String {
    format!("{} {CURRENCY}", money(amount))
}

/// Formats whole currency units with comma thousands separators: `-1,252,000`.
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_grouping() {
        assert_eq!(money(0), "0");
        assert_eq!(money(999), "999");
        assert_eq!(money(1_000), "1,000");
        assert_eq!(money(2_052_000), "2,052,000");
        assert_eq!(money(-1_252_000), "-1,252,000");
        assert_eq!(money(-12), "-12");
    }

    #[test]
    fn test_won_appends_currency() {
        assert_eq!(won(54_000), "54,000 KRW");
    }
}
