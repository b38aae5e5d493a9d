//! Rupee display formatting.
//!
//! Matches `Intl.NumberFormat("en-IN", { currency: "INR" })` with zero
//! fraction digits: the last three digits form one group, every group
//! above that has two digits.

pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return format!("₹{}", value);
    }
    let negative = value < 0.0;
    let rounded = value.abs().round() as u128;
    let grouped = group_indian(&rounded.to_string());
    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    let head_chars: Vec<char> = head.chars().collect();
    for (i, ch) in head_chars.iter().enumerate() {
        if i > 0 && (head_chars.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_have_no_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(7.0), "₹7");
        assert_eq!(format_inr(999.0), "₹999");
    }

    #[test]
    fn indian_grouping_splits_after_thousands() {
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(100_000.0), "₹1,00,000");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
        assert_eq!(format_inr(1_234_567_890.0), "₹1,23,45,67,890");
    }

    #[test]
    fn negatives_carry_the_sign_before_the_symbol() {
        assert_eq!(format_inr(-50.0), "-₹50");
        assert_eq!(format_inr(-1_00_000.0), "-₹1,00,000");
    }

    #[test]
    fn fractions_round_half_away_from_zero() {
        assert_eq!(format_inr(999.5), "₹1,000");
        assert_eq!(format_inr(999.4), "₹999");
        assert_eq!(format_inr(-0.5), "-₹1");
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(format_inr(f64::NAN), "₹NaN");
        assert_eq!(format_inr(f64::INFINITY), "₹inf");
    }

    #[test]
    fn percent_keeps_two_decimals() {
        assert_eq!(format_percent(50.0), "50.00%");
        assert_eq!(format_percent(-10.0), "-10.00%");
        assert_eq!(format_percent(33.3333), "33.33%");
    }
}
