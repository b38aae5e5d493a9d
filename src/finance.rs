//! Calculator math. Every function is pure and returns `None` on
//! unusable input (non-finite numbers, non-positive durations); the UI
//! keeps its last good output in that case rather than reporting an
//! error.
//!
//! All compounding is monthly except the lumpsum formula, which
//! compounds annually.

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GrowthBreakdown {
    pub invested: f64,
    pub returns: f64,
    pub total: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LoanBreakdown {
    pub emi: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TradeOutcome {
    pub amount: f64,
    pub percent: f64,
}

impl TradeOutcome {
    /// Break-even counts as a gain for display purposes.
    pub fn is_gain(&self) -> bool {
        self.amount >= 0.0
    }
}

fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / MONTHS_PER_YEAR / 100.0
}

fn usable(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Future value of a fixed monthly contribution:
/// `A·((1+i)^n − 1)/i·(1+i)`. At zero rate the limit is `A·n`.
pub fn sip_future_value(monthly: f64, annual_rate_pct: f64, years: f64) -> Option<GrowthBreakdown> {
    if !usable(&[monthly, annual_rate_pct, years]) || years <= 0.0 {
        return None;
    }
    let months = years * MONTHS_PER_YEAR;
    let invested = monthly * months;
    let i = monthly_rate(annual_rate_pct);
    let total = if i == 0.0 {
        invested
    } else {
        monthly * (((1.0 + i).powf(months) - 1.0) / i) * (1.0 + i)
    };
    Some(GrowthBreakdown {
        invested,
        returns: total - invested,
        total,
    })
}

/// Future value of a single upfront investment: `A·(1+R/100)^Y`.
pub fn lumpsum_future_value(
    principal: f64,
    annual_rate_pct: f64,
    years: f64,
) -> Option<GrowthBreakdown> {
    if !usable(&[principal, annual_rate_pct, years]) || years <= 0.0 {
        return None;
    }
    let total = principal * (1.0 + annual_rate_pct / 100.0).powf(years);
    Some(GrowthBreakdown {
        invested: principal,
        returns: total - principal,
        total,
    })
}

/// Equated monthly installment: `P·r·(1+r)^n / ((1+r)^n − 1)`. At zero
/// rate the repayment is simply the principal split over the tenure.
pub fn loan_emi(principal: f64, annual_rate_pct: f64, years: f64) -> Option<LoanBreakdown> {
    if !usable(&[principal, annual_rate_pct, years]) || years <= 0.0 {
        return None;
    }
    let months = years * MONTHS_PER_YEAR;
    let r = monthly_rate(annual_rate_pct);
    let emi = if r == 0.0 {
        principal / months
    } else {
        let compounded = (1.0 + r).powf(months);
        principal * r * compounded / (compounded - 1.0)
    };
    let total_payment = emi * months;
    Some(LoanBreakdown {
        emi,
        total_interest: total_payment - principal,
        total_payment,
    })
}

/// Absolute and relative profit on a closed trade. A zero buy price
/// would divide by zero, so the percentage substitutes 0.
pub fn profit_loss(buy: f64, sell: f64, quantity: f64) -> Option<TradeOutcome> {
    if !usable(&[buy, sell, quantity]) {
        return None;
    }
    let amount = (sell - buy) * quantity;
    let percent = if buy > 0.0 {
        (sell - buy) / buy * 100.0
    } else {
        0.0
    };
    Some(TradeOutcome { amount, percent })
}

/// The SIP formula inverted: the monthly contribution that reaches
/// `target` after `years` at the given rate.
pub fn required_sip(target: f64, annual_rate_pct: f64, years: f64) -> Option<f64> {
    if !usable(&[target, annual_rate_pct, years]) || years <= 0.0 {
        return None;
    }
    let months = years * MONTHS_PER_YEAR;
    let i = monthly_rate(annual_rate_pct);
    if i == 0.0 {
        Some(target / months)
    } else {
        Some(target * i / (((1.0 + i).powf(months) - 1.0) * (1.0 + i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sip_invested_is_exact_and_slices_sum() {
        let b = sip_future_value(5000.0, 12.0, 10.0).unwrap();
        assert_eq!(b.invested, 5000.0 * 120.0);
        assert_close(b.invested + b.returns, b.total);
        assert!(b.returns > 0.0);
    }

    #[test]
    fn sip_zero_rate_grows_nothing() {
        let b = sip_future_value(2000.0, 0.0, 5.0).unwrap();
        assert_eq!(b.total, 2000.0 * 60.0);
        assert_eq!(b.returns, 0.0);
    }

    #[test]
    fn sip_rejects_unusable_input() {
        assert!(sip_future_value(5000.0, 12.0, 0.0).is_none());
        assert!(sip_future_value(5000.0, 12.0, -3.0).is_none());
        assert!(sip_future_value(f64::NAN, 12.0, 10.0).is_none());
        assert!(sip_future_value(5000.0, f64::INFINITY, 10.0).is_none());
    }

    #[test]
    fn lumpsum_matches_closed_form() {
        let b = lumpsum_future_value(100_000.0, 12.0, 10.0).unwrap();
        assert_close(b.total, 100_000.0 * 1.12f64.powi(10));
        assert_close(b.invested + b.returns, b.total);
    }

    #[test]
    fn lumpsum_rejects_bad_duration() {
        assert!(lumpsum_future_value(100_000.0, 12.0, 0.0).is_none());
    }

    #[test]
    fn emi_totals_are_consistent() {
        let b = loan_emi(1_000_000.0, 8.5, 20.0).unwrap();
        let months = 240.0;
        assert_close(b.total_payment, b.emi * months);
        assert_close(b.total_interest, b.total_payment - 1_000_000.0);
        // positive rate means each installment exceeds the even split
        assert!(b.emi > 1_000_000.0 / months);
    }

    #[test]
    fn emi_zero_rate_splits_evenly() {
        let b = loan_emi(120_000.0, 0.0, 1.0).unwrap();
        assert_eq!(b.emi, 10_000.0);
        assert_eq!(b.total_interest, 0.0);
    }

    #[test]
    fn trade_profit_case() {
        let t = profit_loss(100.0, 150.0, 10.0).unwrap();
        assert_eq!(t.amount, 500.0);
        assert_close(t.percent, 50.0);
        assert!(t.is_gain());
    }

    #[test]
    fn trade_loss_case() {
        let t = profit_loss(100.0, 90.0, 5.0).unwrap();
        assert_eq!(t.amount, -50.0);
        assert_close(t.percent, -10.0);
        assert!(!t.is_gain());
    }

    #[test]
    fn trade_zero_buy_price_guards_the_percentage() {
        let t = profit_loss(0.0, 150.0, 10.0).unwrap();
        assert_eq!(t.percent, 0.0);
        assert_eq!(t.amount, 1500.0);
    }

    #[test]
    fn trade_break_even_counts_as_gain() {
        let t = profit_loss(100.0, 100.0, 10.0).unwrap();
        assert_eq!(t.amount, 0.0);
        assert!(t.is_gain());
    }

    #[test]
    fn goal_round_trips_through_sip() {
        let target = 1_000_000.0;
        let monthly = required_sip(target, 12.0, 10.0).unwrap();
        let forward = sip_future_value(monthly, 12.0, 10.0).unwrap();
        assert_close(forward.total, target);
    }

    #[test]
    fn goal_zero_rate_is_even_contribution() {
        let monthly = required_sip(120_000.0, 0.0, 1.0).unwrap();
        assert_eq!(monthly, 10_000.0);
    }
}
