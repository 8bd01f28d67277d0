//! Contracts the loan ledger talks to: the valuation oracle, the collateral
//! collection and the fungible token being lent.

use soroban_sdk::{contractclient, contracttype, token, Address, Env};

use crate::error::LoanError;
use crate::registry::Loan;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Valuation {
    /// Appraised value of the collateral, in units of the lent token.
    pub price: i128,
    /// Maximum borrowable share of `price`, in percent.
    pub ltv: u32,
}

#[contractclient(name = "OracleClient")]
pub trait ValuationOracle {
    fn get_valuation(env: Env, collection: Address, token_id: u64) -> Valuation;

    /// Capability check answered by every valuation oracle.
    fn supports_valuation(env: Env) -> bool;
}

#[contractclient(name = "CollateralClient")]
pub trait CollateralCollection {
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}

pub fn supports_valuation(e: &Env, oracle: &Address) -> bool {
    matches!(
        OracleClient::new(e, oracle).try_supports_valuation(),
        Ok(Ok(true))
    )
}

pub fn fetch_valuation(
    e: &Env,
    oracle: &Address,
    collection: &Address,
    token_id: u64,
) -> Result<Valuation, LoanError> {
    match OracleClient::new(e, oracle).try_get_valuation(collection, &token_id) {
        Ok(Ok(valuation)) => Ok(valuation),
        _ => {
            log::warn!("oracle has no valuation for collateral {}", token_id);
            Err(LoanError::ValuationUnavailable)
        }
    }
}

/// Moves the pledged asset from the borrower into the ledger's custody. The
/// borrower must have approved this contract on the collection beforehand.
pub fn take_custody(e: &Env, loan: &Loan) {
    let this = e.current_contract_address();
    CollateralClient::new(e, &loan.collection).transfer_from(
        &this,
        &loan.borrower,
        &this,
        &loan.collateral_id,
    );
}

pub fn release_collateral(e: &Env, loan: &Loan, to: &Address) {
    CollateralClient::new(e, &loan.collection).transfer(
        &e.current_contract_address(),
        to,
        &loan.collateral_id,
    );
}

pub fn transfer_funds(e: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    token::Client::new(e, token).transfer(from, to, &amount);
}
