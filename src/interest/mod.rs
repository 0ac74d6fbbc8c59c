use rust_decimal::{Decimal, MathematicalOps};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::types::TimeUnit;

/// interest accrued on `principal` over `years` with continuous compounding:
/// `principal * (e^(rate * years) - 1)`
pub fn continuous_interest(principal: Money, annual_rate: Rate, years: Decimal) -> Result<Money> {
    let exponent = annual_rate
        .as_decimal()
        .checked_mul(years)
        .ok_or_else(|| LedgerError::Calculation {
            message: format!("{annual_rate} over {years} years overflows"),
        })?;
    let growth = exponent
        .checked_exp()
        .ok_or_else(|| LedgerError::Calculation {
            message: format!("e^{exponent} overflows"),
        })?;
    let interest = principal
        .as_decimal()
        .checked_mul(growth - Decimal::ONE)
        .ok_or_else(|| LedgerError::Calculation {
            message: format!("interest on {principal} at growth {growth} overflows"),
        })?;

    Ok(Money::from_decimal(interest))
}

/// elapsed time expressed as fractional years
pub fn elapsed_years(amount_of_time: Decimal, unit: TimeUnit) -> Result<Decimal> {
    if amount_of_time < Decimal::ZERO {
        return Err(LedgerError::Validation {
            message: format!("elapsed time {amount_of_time} {unit} is negative"),
        });
    }
    Ok(unit.to_years(amount_of_time))
}
