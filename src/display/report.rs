//! Report formatting utilities for terminal output

use crate::models::Money;

/// Format a money amount with the configured currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Bar of `width` cells, filled in proportion to `value / max`
pub fn format_bar(value: Money, max: Money, width: usize) -> String {
    if !max.is_positive() || !value.is_positive() {
        return "░".repeat(width);
    }

    let ratio = value.cents() as f64 / max.cents() as f64;
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Left-align text in a field of given width, counting characters
pub fn left_align(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Money::from_cents(123456), "R$"), "R$ 1234.56");
        assert_eq!(format_money(Money::from_units(-5), "$"), "-$ 5.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(66.666), "67%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(Money::from_units(50), Money::from_units(100), 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);

        let empty = format_bar(Money::zero(), Money::zero(), 4);
        assert_eq!(empty, "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Alimentação", 8), "Alime...");
    }

    #[test]
    fn test_left_align_counts_chars() {
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(left_align("Saúde", 7), "Saúde  ");
    }
}
