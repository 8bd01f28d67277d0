//! Stateless helper that commits an airdrop recipient list to a Merkle root
//! and serves inclusion proofs against it.

use crate::error::AirdropError;
use crate::merkle::{self, Recipient};
use soroban_sdk::{contract, contractimpl, BytesN, Env, Vec};

#[contract]
pub struct AirdropMerkle;

#[contractimpl]
impl AirdropMerkle {
    pub fn merkle_root(e: Env, recipients: Vec<Recipient>) -> Result<BytesN<32>, AirdropError> {
        let root = merkle::root(&e, &recipients)?;
        log::debug!("committed {} airdrop recipients", recipients.len());
        Ok(root)
    }

    pub fn merkle_proof(
        e: Env,
        recipients: Vec<Recipient>,
        index: u32,
    ) -> Result<Vec<BytesN<32>>, AirdropError> {
        merkle::proof(&e, &recipients, index)
    }

    pub fn verify(e: Env, root: BytesN<32>, recipient: Recipient, proof: Vec<BytesN<32>>) -> bool {
        merkle::verify(&e, &root, &recipient, &proof)
    }
}
