//! Minimal non-fungible collection. One owner per token id; tokens can be
//! moved by their owner, by the address approved for that token, or by an
//! operator approved for all of the owner's tokens.

use crate::admin::{has_administrator, read_administrator, write_administrator};
use crate::allowance::{
    is_authorized, read_approval_for_all, read_approved, write_approval_for_all, write_approved,
};
use crate::balance::{has_owner, move_token, read_balance, read_owner, write_balance, write_owner};
use crate::error::NftError;
use crate::event;
use crate::metadata::{self, read_metadata, write_metadata, CollectionMetadata};
use crate::storage_types::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{contract, contractimpl, Address, Env, String};
use soroban_token_sdk::TokenUtils;

#[contract]
pub struct CollateralNft;

#[contractimpl]
impl CollateralNft {
    pub fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        base_uri: String,
    ) -> Result<(), NftError> {
        if has_administrator(&e) {
            return Err(NftError::AlreadyInitialized);
        }
        write_administrator(&e, &admin);

        write_metadata(
            &e,
            CollectionMetadata {
                name,
                symbol,
                base_uri,
            },
        )
    }

    pub fn set_admin(e: Env, new_admin: Address) -> Result<(), NftError> {
        let admin = read_administrator(&e)?;
        admin.require_auth();

        e.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_administrator(&e, &new_admin);
        TokenUtils::new(&e).events().set_admin(admin, new_admin);
        Ok(())
    }

    pub fn name(env: Env) -> Result<String, NftError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, NftError> {
        Ok(read_metadata(&env)?.symbol)
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, NftError> {
        read_owner(&env, token_id)?;
        metadata::token_uri(&env, &read_metadata(&env)?.base_uri, token_id)
    }

    pub fn mint(env: Env, to: Address, token_id: u64) -> Result<(), NftError> {
        read_administrator(&env)?.require_auth();
        if has_owner(&env, token_id) {
            return Err(NftError::AlreadyMinted);
        }

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        write_owner(&env, token_id, &to);
        write_balance(&env, to.clone(), read_balance(&env, to.clone()) + 1);
        event::emit_mint(&env, &to, token_id);
        Ok(())
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, NftError> {
        read_owner(&env, token_id)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        read_balance(&env, owner)
    }

    pub fn approve(
        env: Env,
        owner: Address,
        operator: Address,
        token_id: u64,
    ) -> Result<(), NftError> {
        owner.require_auth();
        if read_owner(&env, token_id)? != owner {
            return Err(NftError::NotOwner);
        }

        write_approved(&env, token_id, Some(operator.clone()));
        event::emit_approve(&env, &owner, &operator, token_id);
        Ok(())
    }

    pub fn get_approved(env: Env, token_id: u64) -> Option<Address> {
        read_approved(&env, token_id)
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        write_approval_for_all(&env, owner.clone(), operator.clone(), approved);
        event::emit_approve_all(&env, &owner, &operator, approved);
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        read_approval_for_all(&env, owner, operator)
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), NftError> {
        from.require_auth();
        if read_owner(&env, token_id)? != from {
            return Err(NftError::NotOwner);
        }

        write_approved(&env, token_id, None);
        move_token(&env, &from, &to, token_id);
        event::emit_transfer(&env, &from, &to, token_id);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), NftError> {
        spender.require_auth();
        if read_owner(&env, token_id)? != from {
            return Err(NftError::NotOwner);
        }
        if !is_authorized(&env, &from, &spender, token_id) {
            return Err(NftError::NotApproved);
        }

        write_approved(&env, token_id, None);
        move_token(&env, &from, &to, token_id);
        event::emit_transfer(&env, &from, &to, token_id);
        Ok(())
    }
}
