//! Loan state machine.
//!
//! `Requested` moves to `Cancelled` or `Accepted`; `Accepted` moves to `Paid`
//! through a repayment, a collateral claim or a liquidation. Every other
//! state is terminal. Each operation validates everything before the first
//! write, then persists the record, then moves funds and collateral.

use soroban_sdk::{Address, Env};

use crate::admin::require_actor;
use crate::config::{is_token_allowed, read_config, Config};
use crate::error::LoanError;
use crate::event;
use crate::fees::{liquidation_quote, repayment_quote, Settlement};
use crate::interfaces::{fetch_valuation, release_collateral, take_custody, transfer_funds};
use crate::registry::{self, Lender, Loan};

pub struct LoanRequest {
    pub token: Address,
    pub amount: i128,
    pub collection: Address,
    pub collateral_id: u64,
    pub duration: u64,
    pub deadline: u64,
}

fn now(e: &Env) -> u64 {
    e.ledger().timestamp()
}

/// First instant at which the borrower can no longer repay.
fn repay_window_close(config: &Config, loan: &Loan) -> Result<u64, LoanError> {
    loan.start_time
        .checked_add(loan.duration)
        .and_then(|maturity| maturity.checked_add(config.repay_grace_period))
        .ok_or(LoanError::MathOverflow)
}

fn lender_of(loan: &Loan) -> Result<Address, LoanError> {
    loan.lender().ok_or(LoanError::LoanNotAccepted)
}

/// Loads a funded, still open loan.
fn read_open(e: &Env, loan_id: u64) -> Result<(Loan, Address), LoanError> {
    let loan = registry::read(e, loan_id)?;
    let lender = lender_of(&loan)?;
    if loan.paid {
        return Err(LoanError::LoanAlreadyPaid);
    }
    Ok((loan, lender))
}

pub fn request_loan(e: &Env, borrower: Address, request: LoanRequest) -> Result<u64, LoanError> {
    borrower.require_auth();
    let config = read_config(e)?;

    if !is_token_allowed(e, &request.token) {
        return Err(LoanError::TokenNotAllowed);
    }
    let interest_rate = config
        .duration_rates
        .get(request.duration)
        .ok_or(LoanError::InvalidDuration)?;
    if request.amount <= 0 {
        return Err(LoanError::NonPositiveAmount);
    }
    if request.deadline <= now(e) {
        return Err(LoanError::DeadlineInPast);
    }

    let valuation = fetch_valuation(
        e,
        &config.oracle,
        &request.collection,
        request.collateral_id,
    )?;
    let max_amount = valuation
        .price
        .checked_mul(valuation.ltv as i128)
        .ok_or(LoanError::MathOverflow)?
        / 100;
    if request.amount > max_amount {
        log::debug!(
            "requested {} over the {} allowed against the collateral",
            request.amount,
            max_amount
        );
        return Err(LoanError::AmountExceedsValuation);
    }

    let loan = registry::create(
        e,
        Loan {
            id: 0,
            borrower,
            lender: Lender::Unset,
            token: request.token,
            amount: request.amount,
            collection: request.collection,
            collateral_id: request.collateral_id,
            duration: request.duration,
            interest_rate,
            collateral_value: valuation.price,
            deadline: request.deadline,
            start_time: 0,
            paid: false,
            cancelled: false,
        },
    )?;
    log::debug!("loan {} requested", loan.id);
    event::emit_loan_created(e, &loan);
    Ok(loan.id)
}

pub fn cancel_loan(e: &Env, caller: Address, loan_id: u64) -> Result<(), LoanError> {
    caller.require_auth();
    let mut loan = registry::read(e, loan_id)?;

    require_actor(&caller, &loan.borrower)?;
    if loan.is_accepted() {
        return Err(LoanError::LoanAlreadyAccepted);
    }
    if loan.cancelled {
        return Err(LoanError::LoanAlreadyCancelled);
    }

    loan.cancelled = true;
    registry::write(e, &loan);
    log::debug!("loan {} cancelled", loan_id);
    event::emit_loan_cancelled(e, loan_id, &loan.borrower);
    Ok(())
}

pub fn accept_loan(e: &Env, lender: Address, loan_id: u64) -> Result<(), LoanError> {
    lender.require_auth();
    let mut loan = registry::read(e, loan_id)?;

    if loan.cancelled {
        return Err(LoanError::LoanAlreadyCancelled);
    }
    if loan.is_accepted() {
        return Err(LoanError::LoanAlreadyAccepted);
    }
    let now = now(e);
    if now >= loan.deadline {
        return Err(LoanError::AcceptanceDeadlinePassed);
    }

    loan.lender = Lender::Set(lender.clone());
    loan.start_time = now;
    registry::write(e, &loan);

    transfer_funds(e, &loan.token, &lender, &loan.borrower, loan.amount);
    take_custody(e, &loan);

    log::debug!("loan {} accepted at {}", loan_id, now);
    event::emit_loan_accepted(e, loan_id, &lender, &loan.borrower, now);
    Ok(())
}

/// Settles the loan for its borrower. Anyone may pay; the collateral always
/// goes back to the borrower.
pub fn repay_loan(e: &Env, payer: Address, loan_id: u64) -> Result<Settlement, LoanError> {
    payer.require_auth();
    let config = read_config(e)?;
    let (mut loan, lender) = read_open(e, loan_id)?;

    let now = now(e);
    if now >= repay_window_close(&config, &loan)? {
        return Err(LoanError::TooLate);
    }
    let settlement = repayment_quote(e, &config, &loan, now)?;

    loan.paid = true;
    registry::write(e, &loan);

    transfer_funds(e, &loan.token, &payer, &lender, settlement.lender_payable);
    transfer_funds(e, &loan.token, &payer, &config.treasury, settlement.platform_fee);
    release_collateral(e, &loan, &loan.borrower);

    log::debug!(
        "loan {} repaid: {} to lender, {} to treasury",
        loan_id,
        settlement.lender_payable,
        settlement.platform_fee
    );
    event::emit_loan_repaid(e, loan_id, &payer, &lender, &settlement);
    Ok(settlement)
}

pub fn claim_nft(e: &Env, caller: Address, loan_id: u64) -> Result<(), LoanError> {
    caller.require_auth();
    let config = read_config(e)?;
    let (mut loan, lender) = read_open(e, loan_id)?;

    if now(e) < repay_window_close(&config, &loan)? {
        return Err(LoanError::TooEarly);
    }
    require_actor(&caller, &lender)?;

    loan.paid = true;
    registry::write(e, &loan);
    release_collateral(e, &loan, &lender);

    log::debug!("collateral of loan {} claimed by its lender", loan_id);
    event::emit_nft_claimed(e, &loan, &lender);
    Ok(())
}

/// Settles a defaulted loan on behalf of its lender. The liquidator pays the
/// full debt plus the liquidation fee and receives the collateral.
pub fn liquidate_loan(
    e: &Env,
    liquidator: Address,
    loan_id: u64,
) -> Result<Settlement, LoanError> {
    liquidator.require_auth();
    let config = read_config(e)?;
    let (mut loan, lender) = read_open(e, loan_id)?;

    let now = now(e);
    if now < repay_window_close(&config, &loan)? {
        return Err(LoanError::TooEarly);
    }
    let settlement = liquidation_quote(e, &config, &loan, now)?;

    loan.paid = true;
    registry::write(e, &loan);

    transfer_funds(e, &loan.token, &liquidator, &lender, settlement.lender_payable);
    transfer_funds(
        e,
        &loan.token,
        &liquidator,
        &config.treasury,
        settlement.platform_fee,
    );
    release_collateral(e, &loan, &liquidator);

    log::debug!("loan {} liquidated", loan_id);
    event::emit_loan_liquidated(e, loan_id, &liquidator, &lender, &settlement);
    Ok(settlement)
}

pub fn quote_repayment(e: &Env, loan_id: u64) -> Result<Settlement, LoanError> {
    let config = read_config(e)?;
    let (loan, _) = read_open(e, loan_id)?;
    repayment_quote(e, &config, &loan, now(e))
}

pub fn quote_liquidation(e: &Env, loan_id: u64) -> Result<Settlement, LoanError> {
    let config = read_config(e)?;
    let (loan, _) = read_open(e, loan_id)?;
    liquidation_quote(e, &config, &loan, now(e))
}
