//! Income aggregation.
//!
//! Totals are computed from the supplied income fields only. Values already
//! sitting under derived keys such as `total_income` are never summed, so
//! re-validating an enriched record produces the same totals.

use crate::models::{Amount, IncomeAggregates, IncomeBreakdown, IncomeField};

/// Months in a year, used to annualise recurring income.
pub const ANNUALISATION_FACTOR: u64 = 12;

/// Computes the income totals for a breakdown.
///
/// # Example
///
/// ```
/// use salary_input::models::{Amount, IncomeBreakdown, IncomeField};
/// use salary_input::validation::compute_income_aggregates;
///
/// let income = IncomeBreakdown::new()
///     .with(IncomeField::BasicSalary, Amount::Integer(5000))
///     .with(IncomeField::Bonus, Amount::Integer(1000));
///
/// let totals = compute_income_aggregates(&income);
/// assert_eq!(totals.total_income, Amount::Integer(6000));
/// assert_eq!(totals.projected_annual_income, Amount::Integer(60000));
/// assert_eq!(totals.projected_annual_income_plus_bonus_leave, Amount::Integer(61000));
/// ```
pub fn compute_income_aggregates(income: &IncomeBreakdown) -> IncomeAggregates {
    let total_income: Amount = income.present().map(|(_, amount)| amount).sum();

    let total_income_excluding_commission: Amount = income
        .present()
        .filter(|(field, _)| *field != IncomeField::Commission)
        .map(|(_, amount)| amount)
        .sum();

    let recurring: Amount = income
        .present()
        .filter(|(field, _)| field.is_recurring())
        .map(|(_, amount)| amount)
        .sum();
    let projected_annual_income = recurring * ANNUALISATION_FACTOR;

    let projected_annual_income_plus_bonus_leave = projected_annual_income
        + income.amount_or_zero(IncomeField::Bonus)
        + income.amount_or_zero(IncomeField::LeavePay);

    IncomeAggregates {
        total_income,
        total_income_excluding_commission,
        projected_annual_income,
        projected_annual_income_plus_bonus_leave,
    }
}
