//! Peer-to-peer loans collateralized by a single non-fungible asset.

use crate::admin::{has_owner, read_owner, require_owner, write_owner};
use crate::config::{self, read_config, write_initial_config, Config};
use crate::error::LoanError;
use crate::fees::Settlement;
use crate::guard::non_reentrant;
use crate::lifecycle::{self, LoanRequest};
use crate::registry::{self, Loan, LoanStatus};
use crate::storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};
use soroban_token_sdk::TokenUtils;

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contract]
pub struct NftLoans;

#[contractimpl]
impl NftLoans {
    pub fn initialize(e: Env, owner: Address, config: Config) -> Result<(), LoanError> {
        if has_owner(&e) {
            return Err(LoanError::AlreadyInitialized);
        }
        write_owner(&e, &owner);
        write_initial_config(&e, config)?;
        bump_instance(&e);
        Ok(())
    }

    pub fn owner(e: Env) -> Result<Address, LoanError> {
        read_owner(&e)
    }

    pub fn transfer_ownership(e: Env, new_owner: Address) -> Result<(), LoanError> {
        let owner = require_owner(&e)?;
        bump_instance(&e);

        write_owner(&e, &new_owner);
        TokenUtils::new(&e).events().set_admin(owner, new_owner);
        Ok(())
    }

    pub fn upgrade(e: Env, new_wasm_hash: BytesN<32>) -> Result<(), LoanError> {
        require_owner(&e)?;

        e.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // Parameters

    pub fn config(e: Env) -> Result<Config, LoanError> {
        read_config(&e)
    }

    pub fn config_version(e: Env) -> Result<u32, LoanError> {
        Ok(read_config(&e)?.version)
    }

    pub fn set_protocol_fee(e: Env, fee: u32) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_protocol_fee(&e, fee)
    }

    pub fn set_liquidation_fee(e: Env, fee: u32) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_liquidation_fee(&e, fee)
    }

    pub fn set_base_origination_fee(e: Env, fee: u32) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_base_origination_fee(&e, fee)
    }

    pub fn set_fee_reduction_factor(e: Env, factor: u32) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_fee_reduction_factor(&e, factor)
    }

    pub fn set_origination_thresholds(e: Env, thresholds: Vec<i128>) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_origination_thresholds(&e, thresholds)
    }

    pub fn set_repay_grace_period(e: Env, period: u64) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_repay_grace_period(&e, period)
    }

    pub fn set_repay_grace_fee(e: Env, fee: u32) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_repay_grace_fee(&e, fee)
    }

    pub fn set_duration_rates(
        e: Env,
        durations: Vec<u64>,
        rates: Vec<u32>,
    ) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_duration_rates(&e, durations, rates)
    }

    pub fn unset_duration(e: Env, duration: u64) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::unset_duration(&e, duration)
    }

    pub fn set_treasury(e: Env, treasury: Address) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_treasury(&e, treasury)
    }

    pub fn set_oracle(e: Env, oracle: Address) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::set_oracle(&e, oracle)
    }

    pub fn allow_token(e: Env, token: Address) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::allow_token(&e, token);
        Ok(())
    }

    pub fn disallow_token(e: Env, token: Address) -> Result<(), LoanError> {
        require_owner(&e)?;
        config::disallow_token(&e, token);
        Ok(())
    }

    pub fn is_token_allowed(e: Env, token: Address) -> bool {
        config::is_token_allowed(&e, &token)
    }

    pub fn duration_rate(e: Env, duration: u64) -> Result<Option<u32>, LoanError> {
        Ok(read_config(&e)?.duration_rates.get(duration))
    }

    // Lifecycle

    #[allow(clippy::too_many_arguments)]
    pub fn request_loan(
        e: Env,
        borrower: Address,
        token: Address,
        amount: i128,
        collection: Address,
        collateral_id: u64,
        duration: u64,
        deadline: u64,
    ) -> Result<u64, LoanError> {
        bump_instance(&e);
        let request = LoanRequest {
            token,
            amount,
            collection,
            collateral_id,
            duration,
            deadline,
        };
        non_reentrant(&e, || lifecycle::request_loan(&e, borrower, request))
    }

    pub fn cancel_loan(e: Env, borrower: Address, loan_id: u64) -> Result<(), LoanError> {
        bump_instance(&e);
        non_reentrant(&e, || lifecycle::cancel_loan(&e, borrower, loan_id))
    }

    pub fn accept_loan(e: Env, lender: Address, loan_id: u64) -> Result<(), LoanError> {
        bump_instance(&e);
        non_reentrant(&e, || lifecycle::accept_loan(&e, lender, loan_id))
    }

    pub fn repay_loan(e: Env, payer: Address, loan_id: u64) -> Result<Settlement, LoanError> {
        bump_instance(&e);
        non_reentrant(&e, || lifecycle::repay_loan(&e, payer, loan_id))
    }

    pub fn claim_nft(e: Env, lender: Address, loan_id: u64) -> Result<(), LoanError> {
        bump_instance(&e);
        non_reentrant(&e, || lifecycle::claim_nft(&e, lender, loan_id))
    }

    pub fn liquidate_loan(
        e: Env,
        liquidator: Address,
        loan_id: u64,
    ) -> Result<Settlement, LoanError> {
        bump_instance(&e);
        non_reentrant(&e, || lifecycle::liquidate_loan(&e, liquidator, loan_id))
    }

    // Views

    pub fn get_loan(e: Env, loan_id: u64) -> Result<Loan, LoanError> {
        registry::read(&e, loan_id)
    }

    pub fn loan_status(e: Env, loan_id: u64) -> Result<LoanStatus, LoanError> {
        Ok(registry::read(&e, loan_id)?.status())
    }

    pub fn loan_exists(e: Env, loan_id: u64) -> bool {
        registry::exists(&e, loan_id)
    }

    pub fn loan_count(e: Env) -> u64 {
        registry::count(&e)
    }

    pub fn quote_repayment(e: Env, loan_id: u64) -> Result<Settlement, LoanError> {
        lifecycle::quote_repayment(&e, loan_id)
    }

    pub fn quote_liquidation(e: Env, loan_id: u64) -> Result<Settlement, LoanError> {
        lifecycle::quote_liquidation(&e, loan_id)
    }
}
