use crate::error::LoanError;
use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};

pub fn has_owner(e: &Env) -> bool {
    let key = DataKey::Owner;
    e.storage().instance().has(&key)
}

pub fn read_owner(e: &Env) -> Result<Address, LoanError> {
    let key = DataKey::Owner;
    e.storage()
        .instance()
        .get(&key)
        .ok_or(LoanError::NotInitialized)
}

pub fn write_owner(e: &Env, id: &Address) {
    let key = DataKey::Owner;
    e.storage().instance().set(&key, id);
}

/// Reads the owner and requires its authorization for the current call.
pub fn require_owner(e: &Env) -> Result<Address, LoanError> {
    let owner = read_owner(e)?;
    owner.require_auth();
    Ok(owner)
}

/// Actor-bound operations: the authorized caller must be the recorded party.
pub fn require_actor(caller: &Address, expected: &Address) -> Result<(), LoanError> {
    if caller != expected {
        return Err(LoanError::Unauthorized);
    }
    Ok(())
}
