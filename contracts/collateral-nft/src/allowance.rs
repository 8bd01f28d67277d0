use crate::storage_types::{DataKey, BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

pub fn read_approved(env: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::Approved(token_id);
    env.storage().persistent().get::<DataKey, Address>(&key)
}

pub fn write_approved(env: &Env, token_id: u64, approved: Option<Address>) {
    let key = DataKey::Approved(token_id);
    match approved {
        Some(addr) => {
            env.storage().persistent().set(&key, &addr);
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        }
        None => env.storage().persistent().remove(&key),
    }
}

pub fn read_approval_for_all(env: &Env, owner: Address, operator: Address) -> bool {
    let key = DataKey::ApprovalForAll(owner, operator);
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&key)
        .unwrap_or(false)
}

pub fn write_approval_for_all(env: &Env, owner: Address, operator: Address, approved: bool) {
    let key = DataKey::ApprovalForAll(owner, operator);
    if approved {
        env.storage().persistent().set(&key, &approved);
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}

/// Whether `spender` may move `token_id` out of `owner`'s account.
pub fn is_authorized(env: &Env, owner: &Address, spender: &Address, token_id: u64) -> bool {
    spender == owner
        || read_approved(env, token_id).as_ref() == Some(spender)
        || read_approval_for_all(env, owner.clone(), spender.clone())
}
