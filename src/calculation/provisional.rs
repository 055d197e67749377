//! Provisional-period helpers.
//!
//! A month is provisional when only one of its two semi-monthly payroll
//! runs has been processed. The statutory schemes are defined on full
//! months, so a provisional salary is doubled to estimate the monthly
//! equivalent, the contribution is computed on that estimate, and the
//! shares are halved back to the current half-period.

use rust_decimal::Decimal;

/// Scales a salary to its full-month equivalent.
///
/// For a provisional period the given salary represents the one processed
/// half-month and is doubled; otherwise it is already a monthly figure.
/// Negative inputs clamp to zero so every downstream calculator stays
/// non-negative.
pub fn monthly_equivalent(salary: Decimal, provisional: bool) -> Decimal {
    let salary = salary.max(Decimal::ZERO);
    if provisional {
        salary * Decimal::TWO
    } else {
        salary
    }
}

/// Returns the divisor that scales a full-month share back to the period:
/// 2 for a provisional half-month, 1 otherwise.
pub fn period_divisor(provisional: bool) -> Decimal {
    if provisional {
        Decimal::TWO
    } else {
        Decimal::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PV-001: provisional salary doubles
    #[test]
    fn test_provisional_salary_doubles() {
        assert_eq!(monthly_equivalent(dec("12500"), true), dec("25000"));
    }

    /// PV-002: full month passes through
    #[test]
    fn test_full_month_passes_through() {
        assert_eq!(monthly_equivalent(dec("25000"), false), dec("25000"));
    }

    /// PV-003: negative salary clamps to zero
    #[test]
    fn test_negative_salary_clamps_to_zero() {
        assert_eq!(monthly_equivalent(dec("-100"), false), Decimal::ZERO);
        assert_eq!(monthly_equivalent(dec("-100"), true), Decimal::ZERO);
    }

    #[test]
    fn test_period_divisor() {
        assert_eq!(period_divisor(true), dec("2"));
        assert_eq!(period_divisor(false), dec("1"));
    }
}
