//! Fee and interest engine.
//!
//! All amounts are token units; rates and fees are scaled so that `PRECISION`
//! is the unit on the `/ PRECISION` axis (an annual rate of `100_000` accrues
//! 10% a year through `/ 100 / PRECISION`). Intermediate values are 18-decimal
//! fixed point and every division truncates, so the order of operations below
//! is part of the contract.

use soroban_sdk::{contracttype, Env};

use crate::config::Config;
use crate::error::LoanError;
use crate::math::{Decimal, PRECISION, SECONDS_IN_YEAR};
use crate::registry::Loan;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    /// Everything the paying party hands over.
    pub total_payable: i128,
    /// Principal plus interest at the loan's own rate.
    pub lender_payable: i128,
    /// `total_payable - lender_payable`, plus the late surcharge on repayment.
    pub platform_fee: i128,
}

/// Interest owed on `principal` after `elapsed` seconds of a `duration`
/// second loan.
///
/// `elapsed` is clamped to `duration`: lateness is charged by the grace fee,
/// never through the rate. The unused share of the term is charged on top of
/// the accrued base, `base * (duration - elapsed) / duration`, so settling
/// early costs more than the pro-rata interest. Lenders get a predictable
/// yield for capital returned before maturity.
pub fn accrued_debt(
    e: &Env,
    principal: i128,
    annual_rate: u32,
    duration: u64,
    elapsed: u64,
) -> Result<i128, LoanError> {
    if duration == 0 {
        return Err(LoanError::InvalidDuration);
    }
    let elapsed = elapsed.min(duration);

    let base = Decimal::from_amount(e, principal)?
        .mul_int(annual_rate as u128)?
        .mul_int(elapsed as u128)?
        .div_int(SECONDS_IN_YEAR as u128)?
        .div_int(100)?
        .div_int(PRECISION as u128)?;
    let penalty = Decimal::from_u128(e, (duration - elapsed) as u128)
        .div(&Decimal::from_u128(e, duration as u128))?;

    base.add(&base.mul(&penalty)?)?.floor()
}

/// Origination fee on `amount`, tiered by `config.origination_thresholds`.
///
/// Every threshold met multiplies the running fee by
/// `PRECISION / fee_reduction_factor`; the walk stops at the first threshold
/// not met.
pub fn origination_fee(e: &Env, config: &Config, amount: i128) -> Result<i128, LoanError> {
    let step = Decimal::from_u128(e, PRECISION as u128)
        .div(&Decimal::from_u128(e, config.fee_reduction_factor as u128))?;

    let mut fee = Decimal::from_u128(e, config.base_origination_fee as u128);
    for threshold in config.origination_thresholds.iter() {
        if amount < threshold {
            break;
        }
        fee = fee.mul(&step)?;
    }

    Decimal::from_amount(e, amount)?
        .mul(&fee)?
        .div_int(100)?
        .div_int(PRECISION as u128)?
        .floor()
}

pub fn liquidation_fee(config: &Config, amount: i128) -> Result<i128, LoanError> {
    amount
        .checked_mul(config.liquidation_fee as i128)
        .map(|scaled| scaled / PRECISION as i128)
        .ok_or(LoanError::MathOverflow)
}

fn elapsed_since_start(loan: &Loan, now: u64) -> Result<u64, LoanError> {
    now.checked_sub(loan.start_time)
        .ok_or(LoanError::MathOverflow)
}

/// Principal plus interest at the loan rate and at the rate including the
/// protocol fee.
fn lender_and_borrower_debt(
    e: &Env,
    config: &Config,
    loan: &Loan,
    now: u64,
) -> Result<(i128, i128), LoanError> {
    let elapsed = elapsed_since_start(loan, now)?;
    let borrower_rate = loan
        .interest_rate
        .checked_add(config.protocol_fee)
        .ok_or(LoanError::MathOverflow)?;

    let lender_debt = loan
        .amount
        .checked_add(accrued_debt(e, loan.amount, loan.interest_rate, loan.duration, elapsed)?)
        .ok_or(LoanError::MathOverflow)?;
    let borrower_debt = loan
        .amount
        .checked_add(accrued_debt(e, loan.amount, borrower_rate, loan.duration, elapsed)?)
        .ok_or(LoanError::MathOverflow)?;
    Ok((lender_debt, borrower_debt))
}

pub fn repayment_quote(
    e: &Env,
    config: &Config,
    loan: &Loan,
    now: u64,
) -> Result<Settlement, LoanError> {
    let (lender_payable, borrower_debt) = lender_and_borrower_debt(e, config, loan, now)?;
    let total_payable = borrower_debt
        .checked_add(origination_fee(e, config, loan.amount)?)
        .ok_or(LoanError::MathOverflow)?;

    let mut platform_fee = total_payable
        .checked_sub(lender_payable)
        .ok_or(LoanError::MathOverflow)?;
    let maturity = loan
        .start_time
        .checked_add(loan.duration)
        .ok_or(LoanError::MathOverflow)?;
    if now > maturity {
        let surcharge = total_payable
            .checked_mul(config.repay_grace_fee as i128)
            .ok_or(LoanError::MathOverflow)?
            / PRECISION as i128;
        platform_fee = platform_fee
            .checked_add(surcharge)
            .ok_or(LoanError::MathOverflow)?;
    }

    Ok(Settlement {
        total_payable,
        lender_payable,
        platform_fee,
    })
}

pub fn liquidation_quote(
    e: &Env,
    config: &Config,
    loan: &Loan,
    now: u64,
) -> Result<Settlement, LoanError> {
    let (lender_payable, borrower_debt) = lender_and_borrower_debt(e, config, loan, now)?;
    let fees = origination_fee(e, config, loan.amount)?
        .checked_add(liquidation_fee(config, loan.amount)?)
        .ok_or(LoanError::MathOverflow)?;
    let total_payable = borrower_debt
        .checked_add(fees)
        .ok_or(LoanError::MathOverflow)?;

    Ok(Settlement {
        total_payable,
        lender_payable,
        platform_fee: total_payable
            .checked_sub(lender_payable)
            .ok_or(LoanError::MathOverflow)?,
    })
}
