//! Monthly Salary Credit (MSC) bracket resolver.
//!
//! SSS contributions are not computed against actual gross salary but
//! against the MSC, a bracketed salary base: the monthly equivalent is
//! clamped to the mandated band and then snapped to the nearest credit
//! step. The step rounding is shared here so other tiered schemes can
//! reuse it.

use rust_decimal::Decimal;

/// Returns the minimum Monthly Salary Credit (4,000 pesos).
///
/// Salaries below this floor, including zero, still attract the minimum
/// contribution mandated for the lowest bracket.
pub fn msc_floor() -> Decimal {
    Decimal::from(4_000)
}

/// Returns the maximum Monthly Salary Credit (30,000 pesos).
pub fn msc_ceiling() -> Decimal {
    Decimal::from(30_000)
}

/// Returns the MSC bracket width (500 pesos).
pub fn msc_step() -> Decimal {
    Decimal::from(500)
}

/// Rounds a non-negative amount to the nearest multiple of `step`.
///
/// A remainder of at least half the step rounds up to the next multiple;
/// anything less rounds down.
///
/// # Example
///
/// ```
/// use contribution_engine::calculation::round_to_credit_step;
/// use rust_decimal::Decimal;
///
/// let step = Decimal::from(500);
/// assert_eq!(round_to_credit_step(Decimal::from(12_249), step), Decimal::from(12_000));
/// assert_eq!(round_to_credit_step(Decimal::from(12_250), step), Decimal::from(12_500));
/// ```
pub fn round_to_credit_step(amount: Decimal, step: Decimal) -> Decimal {
    let remainder = amount % step;
    if remainder >= step / Decimal::TWO {
        amount - remainder + step
    } else {
        amount - remainder
    }
}

/// Resolves a monthly-equivalent salary to its Monthly Salary Credit.
///
/// The amount is capped at the MSC ceiling, floored at the MSC minimum,
/// and, while below the ceiling, snapped to the nearest 500-peso bracket
/// with ties (remainder exactly 250) rounding up.
///
/// # Example
///
/// ```
/// use contribution_engine::calculation::monthly_salary_credit;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_salary_credit(Decimal::ZERO), Decimal::from(4_000));
/// assert_eq!(monthly_salary_credit(Decimal::from(12_250)), Decimal::from(12_500));
/// assert_eq!(monthly_salary_credit(Decimal::from(95_000)), Decimal::from(30_000));
/// ```
pub fn monthly_salary_credit(monthly: Decimal) -> Decimal {
    let mut msc = monthly.min(msc_ceiling());
    if msc < msc_floor() {
        msc = msc_floor();
    }
    if msc < msc_ceiling() {
        msc = round_to_credit_step(msc, msc_step());
    }
    msc
}
