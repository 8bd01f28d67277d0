use crate::error::NftError;
use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

pub fn read_balance(env: &Env, addr: Address) -> u64 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = env.storage().persistent().get::<DataKey, u64>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

pub fn write_balance(env: &Env, addr: Address, amount: u64) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env, token_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Owner(token_id))
}

pub fn read_owner(env: &Env, token_id: u64) -> Result<Address, NftError> {
    let key = DataKey::Owner(token_id);
    let owner = env
        .storage()
        .persistent()
        .get::<DataKey, Address>(&key)
        .ok_or(NftError::NotMinted)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    Ok(owner)
}

pub fn write_owner(env: &Env, token_id: u64, owner: &Address) {
    let key = DataKey::Owner(token_id);
    env.storage().persistent().set(&key, owner);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Moves `token_id` and the matching balance unit from `from` to `to`.
pub fn move_token(env: &Env, from: &Address, to: &Address, token_id: u64) {
    write_balance(env, from.clone(), read_balance(env, from.clone()) - 1);
    write_balance(env, to.clone(), read_balance(env, to.clone()) + 1);
    write_owner(env, token_id, to);
}
