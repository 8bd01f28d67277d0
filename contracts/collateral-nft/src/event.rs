use soroban_sdk::{symbol_short, Address, Env};

pub fn emit_mint(env: &Env, to: &Address, token_id: u64) {
    env.events()
        .publish((symbol_short!("mint"), to.clone()), token_id);
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, token_id: u64) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        token_id,
    );
}

pub fn emit_approve(env: &Env, owner: &Address, operator: &Address, token_id: u64) {
    env.events().publish(
        (symbol_short!("approve"), owner.clone()),
        (operator.clone(), token_id),
    );
}

pub fn emit_approve_all(env: &Env, owner: &Address, operator: &Address, approved: bool) {
    env.events().publish(
        (symbol_short!("appr_all"), owner.clone()),
        (operator.clone(), approved),
    );
}
