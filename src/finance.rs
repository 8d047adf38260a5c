//! General functions related to finance.
use crate::units::{Dimensionless, Money, MoneyPerYear, PerYear, Year};

/// Calculates the capital recovery factor (CRF) for a given lifetime and interest rate.
///
/// The CRF is used to annualise a one-time investment over the lifetime of an asset.
pub fn capital_recovery_factor(lifetime: u32, interest_rate: Dimensionless) -> PerYear {
    if lifetime == 0 {
        return PerYear(0.0);
    }
    if interest_rate == Dimensionless(0.0) {
        return Dimensionless(1.0) / Year(lifetime as f64);
    }
    let factor = (Dimensionless(1.0) + interest_rate).powi(lifetime as i32);
    (interest_rate * factor) / (factor - Dimensionless(1.0)) / Year(1.0)
}

/// Converts a one-time investment cost into an equivalent annual cost.
pub fn annualise(investment: Money, lifetime: u32, interest_rate: Dimensionless) -> MoneyPerYear {
    investment * capital_recovery_factor(lifetime, interest_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0.05, 0.0)] // Edge case: lifetime==0
    #[case(10, 0.0, 0.1)] // Other edge case: interest_rate==0
    #[case(10, 0.05, 0.1295045749654567)]
    #[case(5, 0.03, 0.2183545714005762)]
    #[case(25, 0.05, 0.0709524572992296)]
    fn test_capital_recovery_factor(
        #[case] lifetime: u32,
        #[case] interest_rate: f64,
        #[case] expected: f64,
    ) {
        let result = capital_recovery_factor(lifetime, Dimensionless(interest_rate));
        assert_approx_eq!(f64, result.0, expected, epsilon = 1e-10);
    }

    #[rstest]
    #[case(1000.0, 10, 0.05, 129.5045749654567)]
    #[case(500.0, 5, 0.03, 109.17728570028798)]
    #[case(1000.0, 0, 0.05, 0.0)] // Zero lifetime
    #[case(2000.0, 20, 0.0, 100.0)] // Zero interest rate
    fn test_annualise(
        #[case] investment: f64,
        #[case] lifetime: u32,
        #[case] interest_rate: f64,
        #[case] expected: f64,
    ) {
        let result = annualise(Money(investment), lifetime, Dimensionless(interest_rate));
        assert_approx_eq!(f64, result.value(), expected, epsilon = 1e-8);
    }
}
