//! Closed-form compound growth
//!
//! Used by every projection: a lump sum grown at the periodic rate plus the
//! future value of an ordinary annuity on the monthly contribution.

/// Growth factor `(1 + r/n)^periods` for a fractional annual rate
pub fn growth_factor(annual_rate: f64, compounds_per_year: u32, periods: u64) -> f64 {
    let periodic_rate = annual_rate / compounds_per_year as f64;
    (1.0 + periodic_rate).powf(periods as f64)
}

/// Annuity factor `(g - 1) / (r/n)`
///
/// Returns `periods` at a zero rate, the limit of the factor as the rate goes to zero.
pub fn annuity_factor(annual_rate: f64, compounds_per_year: u32, periods: u64) -> f64 {
    if annual_rate == 0.0 {
        return periods as f64;
    }
    let periodic_rate = annual_rate / compounds_per_year as f64;
    (growth_factor(annual_rate, compounds_per_year, periods) - 1.0) / periodic_rate
}

/// Balance after `periods` compounding periods
///
/// The monthly contribution is multiplied by the per-period annuity factor as
/// is, without conversion to the compounding cadence. Reference values depend
/// on this.
pub fn balance_after(
    principal: f64,
    monthly_contribution: f64,
    annual_rate: f64,
    compounds_per_year: u32,
    periods: u64,
) -> f64 {
    if periods == 0 {
        return principal;
    }
    if annual_rate == 0.0 {
        return principal + monthly_contribution * periods as f64;
    }

    let g = growth_factor(annual_rate, compounds_per_year, periods);
    principal * g + monthly_contribution * annuity_factor(annual_rate, compounds_per_year, periods)
}

/// Principal plus every monthly deposit made over `years`
pub fn contributions_after(principal: f64, monthly_contribution: f64, years: u32) -> f64 {
    principal + monthly_contribution * 12.0 * years as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_growth_factor() {
        // 7% monthly for 10 years
        assert_relative_eq!(growth_factor(0.07, 12, 120), 2.009661, epsilon = 1e-6);
        assert_eq!(growth_factor(0.07, 12, 0), 1.0);
        assert_relative_eq!(growth_factor(0.10, 1, 2), 1.21, epsilon = 1e-12);
    }

    #[test]
    fn test_annuity_factor() {
        // Three annual deposits at 10%: 1 + 1.1 + 1.21
        assert_relative_eq!(annuity_factor(0.10, 1, 3), 3.31, epsilon = 1e-12);
        assert_eq!(annuity_factor(0.0, 12, 60), 60.0);
    }

    #[test]
    fn test_balance_zero_periods() {
        assert_eq!(balance_after(10_000.0, 500.0, 0.07, 12, 0), 10_000.0);
        assert_eq!(balance_after(10_000.0, 500.0, 0.0, 12, 0), 10_000.0);
    }

    #[test]
    fn test_balance_zero_rate() {
        assert_eq!(balance_after(2_000.0, 100.0, 0.0, 12, 60), 8_000.0);
        assert_eq!(balance_after(2_000.0, 100.0, 0.0, 4, 20), 4_000.0);
    }

    #[test]
    fn test_balance_lump_sum_only() {
        assert_relative_eq!(balance_after(10_000.0, 0.0, 0.07, 1, 10), 19_671.513573, epsilon = 1e-6);
    }

    #[test]
    fn test_withdrawal_equal_to_interest_holds_balance() {
        // 6% monthly on 10000 earns 50 a period; withdrawing 50 a period keeps it flat
        assert_relative_eq!(balance_after(10_000.0, -50.0, 0.06, 12, 60), 10_000.0, epsilon = 1e-8);
    }

    #[test]
    fn test_contributions_after() {
        assert_eq!(contributions_after(10_000.0, 500.0, 10), 70_000.0);
        assert_eq!(contributions_after(10_000.0, 500.0, 0), 10_000.0);
        assert_eq!(contributions_after(1_000.0, -25.0, 2), 400.0);
    }
}
