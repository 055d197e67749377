//! BIR withholding tax calculation.
//!
//! A progressive bracket table over semi-monthly taxable compensation.
//! Unlike the share-based schemes there is no provisional mode: the table
//! is defined directly on semi-monthly amounts.
//!
//! The bracket boundaries and their 1-peso gaps reproduce the published
//! BIR semi-monthly table verbatim; the gaps are part of the regulation,
//! not an approximation to smooth over.
//!
//! | Taxable (semi-monthly)  | Tax                                 |
//! |-------------------------|-------------------------------------|
//! | up to 10,417            | 0                                   |
//! | 10,418 – 16,666         | 15% of excess over 10,417           |
//! | 16,667 – 33,332         | 937.50 + 20% of excess over 16,667  |
//! | 33,333 – 83,332         | 4,270.70 + 25% of excess over 33,333|
//! | 83,333 – 333,332        | 16,770.70 + 30% of excess over 83,333|
//! | above 333,332           | 91,770.70 + 35% of excess over 333,333|

use rust_decimal::Decimal;

/// Calculates withholding tax on a semi-monthly taxable amount.
///
/// The result is floored at zero: amounts just past a bracket's lower edge
/// can produce a negative excess term against the next bracket's base, and
/// negative inputs fall into the zero bracket.
///
/// # Example
///
/// ```
/// use contribution_engine::calculation::calculate_withholding_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(calculate_withholding_tax(Decimal::from(10_417)), Decimal::ZERO);
/// assert_eq!(
///     calculate_withholding_tax(Decimal::from(16_667)),
///     Decimal::from_str("937.50").unwrap()
/// );
/// ```
pub fn calculate_withholding_tax(taxable: Decimal) -> Decimal {
    let tax = if taxable <= Decimal::from(10_417) {
        Decimal::ZERO
    } else if taxable <= Decimal::from(16_666) {
        (taxable - Decimal::from(10_417)) * Decimal::new(15, 2)
    } else if taxable <= Decimal::from(33_332) {
        Decimal::new(937_50, 2) + (taxable - Decimal::from(16_667)) * Decimal::new(20, 2)
    } else if taxable <= Decimal::from(83_332) {
        Decimal::new(4_270_70, 2) + (taxable - Decimal::from(33_333)) * Decimal::new(25, 2)
    } else if taxable <= Decimal::from(333_332) {
        Decimal::new(16_770_70, 2) + (taxable - Decimal::from(83_333)) * Decimal::new(30, 2)
    } else {
        Decimal::new(91_770_70, 2) + (taxable - Decimal::from(333_333)) * Decimal::new(35, 2)
    };

    tax.max(Decimal::ZERO)
}
