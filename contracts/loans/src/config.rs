//! Protocol parameters. One versioned `Config` lives in instance storage and
//! is read once per lifecycle operation; the token allow-list lives in
//! persistent storage, one entry per token.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Map, Vec};

use crate::error::LoanError;
use crate::event::emit_config_updated;
use crate::interfaces::supports_valuation;
use crate::math::PRECISION;
use crate::storage_types::{
    DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT,
    LOAN_LIFETIME_THRESHOLD,
};

pub const MAX_PROTOCOL_FEE: u32 = 4 * PRECISION;
pub const MAX_LIQUIDATION_FEE: u32 = 15 * PRECISION;
pub const MAX_ORIGINATION_FEE: u32 = 3 * PRECISION;
pub const MAX_GRACE_FEE: u32 = 4 * PRECISION;
pub const MAX_INTEREST_RATE: u32 = 20 * PRECISION;

const DAY: u64 = 86_400;
/// Inclusive lower bound of the repay grace period.
pub const MIN_GRACE_PERIOD: u64 = 2 * DAY;
/// Exclusive upper bound of the repay grace period.
pub const MAX_GRACE_PERIOD: u64 = 15 * DAY;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Bumped by every successful write; callers' value is ignored.
    pub version: u32,
    pub treasury: Address,
    pub oracle: Address,
    pub protocol_fee: u32,
    pub liquidation_fee: u32,
    pub base_origination_fee: u32,
    pub fee_reduction_factor: u32,
    /// Ascending principal thresholds of the origination fee tiers.
    pub origination_thresholds: Vec<i128>,
    pub repay_grace_period: u64,
    pub repay_grace_fee: u32,
    /// Loan duration in seconds to annual interest rate.
    pub duration_rates: Map<u64, u32>,
}

impl Config {
    pub fn validate(&self, e: &Env) -> Result<(), LoanError> {
        check_protocol_fee(self.protocol_fee)?;
        check_liquidation_fee(self.liquidation_fee)?;
        check_origination_fee(self.base_origination_fee)?;
        check_reduction_factor(self.fee_reduction_factor)?;
        check_thresholds(&self.origination_thresholds)?;
        check_grace_period(self.repay_grace_period)?;
        check_grace_fee(self.repay_grace_fee)?;
        for (duration, rate) in self.duration_rates.iter() {
            check_duration_rate(duration, rate)?;
        }
        check_treasury(e, &self.treasury)?;
        check_oracle(e, &self.oracle)
    }
}

fn check_protocol_fee(fee: u32) -> Result<(), LoanError> {
    if fee > MAX_PROTOCOL_FEE {
        return Err(LoanError::ProtocolFeeTooHigh);
    }
    Ok(())
}

fn check_liquidation_fee(fee: u32) -> Result<(), LoanError> {
    if fee > MAX_LIQUIDATION_FEE {
        return Err(LoanError::LiquidationFeeTooHigh);
    }
    Ok(())
}

fn check_origination_fee(fee: u32) -> Result<(), LoanError> {
    if fee > MAX_ORIGINATION_FEE {
        return Err(LoanError::OriginationFeeTooHigh);
    }
    Ok(())
}

fn check_grace_fee(fee: u32) -> Result<(), LoanError> {
    if fee > MAX_GRACE_FEE {
        return Err(LoanError::GraceFeeTooHigh);
    }
    Ok(())
}

fn check_reduction_factor(factor: u32) -> Result<(), LoanError> {
    if factor == 0 || factor > PRECISION {
        return Err(LoanError::InvalidReductionFactor);
    }
    Ok(())
}

fn check_grace_period(period: u64) -> Result<(), LoanError> {
    if !(MIN_GRACE_PERIOD..MAX_GRACE_PERIOD).contains(&period) {
        return Err(LoanError::GracePeriodOutOfRange);
    }
    Ok(())
}

fn check_thresholds(thresholds: &Vec<i128>) -> Result<(), LoanError> {
    let mut previous = 0i128;
    for threshold in thresholds.iter() {
        if threshold <= previous {
            return Err(LoanError::ThresholdsNotAscending);
        }
        previous = threshold;
    }
    Ok(())
}

fn check_duration_rate(duration: u64, rate: u32) -> Result<(), LoanError> {
    if duration == 0 {
        return Err(LoanError::InvalidDuration);
    }
    if rate > MAX_INTEREST_RATE {
        return Err(LoanError::InterestRateTooHigh);
    }
    Ok(())
}

// Soroban has no zero address; the ledger's own address is the only sink
// that can never be a valid counterparty.
fn check_treasury(e: &Env, treasury: &Address) -> Result<(), LoanError> {
    if *treasury == e.current_contract_address() {
        return Err(LoanError::InvalidAddress);
    }
    Ok(())
}

fn check_oracle(e: &Env, oracle: &Address) -> Result<(), LoanError> {
    if *oracle == e.current_contract_address() {
        return Err(LoanError::InvalidAddress);
    }
    if !supports_valuation(e, oracle) {
        return Err(LoanError::UnsupportedOracle);
    }
    Ok(())
}

pub fn read_config(e: &Env) -> Result<Config, LoanError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LoanError::NotInitialized)
}

/// Persists `config` with a new version. Rewriting identical values is a
/// no-op, so repeated setter calls leave the store unchanged.
fn commit(e: &Env, mut config: Config) -> Result<Config, LoanError> {
    if let Ok(stored) = read_config(e) {
        if stored == config {
            return Ok(stored);
        }
    }
    config.version = config
        .version
        .checked_add(1)
        .ok_or(LoanError::MathOverflow)?;
    e.storage().instance().set(&DataKey::Config, &config);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    Ok(config)
}

pub fn write_initial_config(e: &Env, config: Config) -> Result<Config, LoanError> {
    config.validate(e)?;
    commit(e, Config { version: 0, ..config })
}

pub fn set_protocol_fee(e: &Env, fee: u32) -> Result<(), LoanError> {
    check_protocol_fee(fee)?;
    let config = read_config(e)?;
    commit(e, Config { protocol_fee: fee, ..config })?;
    emit_config_updated(e, symbol_short!("prot_fee"), fee);
    Ok(())
}

pub fn set_liquidation_fee(e: &Env, fee: u32) -> Result<(), LoanError> {
    check_liquidation_fee(fee)?;
    let config = read_config(e)?;
    commit(e, Config { liquidation_fee: fee, ..config })?;
    emit_config_updated(e, symbol_short!("liq_fee"), fee);
    Ok(())
}

pub fn set_base_origination_fee(e: &Env, fee: u32) -> Result<(), LoanError> {
    check_origination_fee(fee)?;
    let config = read_config(e)?;
    commit(
        e,
        Config {
            base_origination_fee: fee,
            ..config
        },
    )?;
    emit_config_updated(e, symbol_short!("orig_fee"), fee);
    Ok(())
}

pub fn set_fee_reduction_factor(e: &Env, factor: u32) -> Result<(), LoanError> {
    check_reduction_factor(factor)?;
    let config = read_config(e)?;
    commit(
        e,
        Config {
            fee_reduction_factor: factor,
            ..config
        },
    )?;
    emit_config_updated(e, symbol_short!("red_fact"), factor);
    Ok(())
}

pub fn set_origination_thresholds(e: &Env, thresholds: Vec<i128>) -> Result<(), LoanError> {
    check_thresholds(&thresholds)?;
    let config = read_config(e)?;
    commit(
        e,
        Config {
            origination_thresholds: thresholds.clone(),
            ..config
        },
    )?;
    emit_config_updated(e, symbol_short!("thresh"), thresholds);
    Ok(())
}

pub fn set_repay_grace_period(e: &Env, period: u64) -> Result<(), LoanError> {
    check_grace_period(period)?;
    let config = read_config(e)?;
    commit(
        e,
        Config {
            repay_grace_period: period,
            ..config
        },
    )?;
    emit_config_updated(e, symbol_short!("grace_per"), period);
    Ok(())
}

pub fn set_repay_grace_fee(e: &Env, fee: u32) -> Result<(), LoanError> {
    check_grace_fee(fee)?;
    let config = read_config(e)?;
    commit(
        e,
        Config {
            repay_grace_fee: fee,
            ..config
        },
    )?;
    emit_config_updated(e, symbol_short!("grace_fee"), fee);
    Ok(())
}

pub fn set_duration_rates(e: &Env, durations: Vec<u64>, rates: Vec<u32>) -> Result<(), LoanError> {
    if durations.len() != rates.len() {
        return Err(LoanError::LengthMismatch);
    }
    let mut config = read_config(e)?;
    for (duration, rate) in durations.iter().zip(rates.iter()) {
        check_duration_rate(duration, rate)?;
        config.duration_rates.set(duration, rate);
    }
    commit(e, config)?;
    emit_config_updated(e, symbol_short!("dur_set"), (durations, rates));
    Ok(())
}

pub fn unset_duration(e: &Env, duration: u64) -> Result<(), LoanError> {
    let mut config = read_config(e)?;
    config.duration_rates.remove(duration);
    commit(e, config)?;
    emit_config_updated(e, symbol_short!("dur_unset"), duration);
    Ok(())
}

pub fn set_treasury(e: &Env, treasury: Address) -> Result<(), LoanError> {
    check_treasury(e, &treasury)?;
    let config = read_config(e)?;
    commit(
        e,
        Config {
            treasury: treasury.clone(),
            ..config
        },
    )?;
    emit_config_updated(e, symbol_short!("treasury"), treasury);
    Ok(())
}

pub fn set_oracle(e: &Env, oracle: Address) -> Result<(), LoanError> {
    check_oracle(e, &oracle)?;
    let config = read_config(e)?;
    commit(
        e,
        Config {
            oracle: oracle.clone(),
            ..config
        },
    )?;
    emit_config_updated(e, symbol_short!("oracle"), oracle);
    Ok(())
}

pub fn is_token_allowed(e: &Env, token: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::AllowedToken(token.clone()))
        .unwrap_or(false)
}

pub fn allow_token(e: &Env, token: Address) {
    let key = DataKey::AllowedToken(token.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
    emit_config_updated(e, symbol_short!("tok_allow"), token);
}

pub fn disallow_token(e: &Env, token: Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::AllowedToken(token.clone()));
    emit_config_updated(e, symbol_short!("tok_deny"), token);
}
