use soroban_sdk::Env;

use crate::error::LoanError;
use crate::storage_types::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};

pub fn is_entered(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Entered)
        .unwrap_or(false)
}

pub fn enter(e: &Env) -> Result<(), LoanError> {
    if is_entered(e) {
        return Err(LoanError::Reentrant);
    }
    e.storage().instance().set(&DataKey::Entered, &true);
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    Ok(())
}

pub fn exit(e: &Env) {
    e.storage().instance().remove(&DataKey::Entered);
}

/// Runs one lifecycle operation with the in-flight marker held. A failed
/// operation is rolled back by the host together with the marker.
pub fn non_reentrant<T>(
    e: &Env,
    op: impl FnOnce() -> Result<T, LoanError>,
) -> Result<T, LoanError> {
    enter(e)?;
    let result = op();
    exit(e);
    result
}
