//! Merkle commitment over an airdrop recipient list.
//!
//! Leaves are `keccak256(0x00 || xdr(account) || amount as 16 big-endian bytes)`.
//! Internal nodes are `keccak256(0x01 || low || high)` over the sorted pair, so
//! a proof carries no position bits and no node can pass for a leaf.
//! An unpaired node at the end of a level is promoted to the next level as is.

use soroban_sdk::{contracttype, xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

use crate::error::AirdropError;

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Recipient {
    pub account: Address,
    pub amount: i128,
}

pub fn leaf(e: &Env, recipient: &Recipient) -> BytesN<32> {
    let mut data = Bytes::from_array(e, &[LEAF_PREFIX]);
    data.append(&recipient.account.clone().to_xdr(e));
    data.append(&Bytes::from_array(e, &recipient.amount.to_be_bytes()));
    e.crypto().keccak256(&data).into()
}

pub fn hash_pair(e: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut data = Bytes::from_array(e, &[NODE_PREFIX]);
    data.append(&Bytes::from_array(e, &low.to_array()));
    data.append(&Bytes::from_array(e, &high.to_array()));
    e.crypto().keccak256(&data).into()
}

fn leaves(e: &Env, recipients: &Vec<Recipient>) -> Result<Vec<BytesN<32>>, AirdropError> {
    if recipients.is_empty() {
        return Err(AirdropError::EmptyRecipients);
    }
    let mut level = Vec::new(e);
    for recipient in recipients.iter() {
        if recipient.amount <= 0 {
            return Err(AirdropError::NonPositiveAmount);
        }
        level.push_back(leaf(e, &recipient));
    }
    Ok(level)
}

fn next_level(e: &Env, level: &Vec<BytesN<32>>) -> Vec<BytesN<32>> {
    let mut parents = Vec::new(e);
    let mut i = 0;
    while i < level.len() {
        let left = level.get_unchecked(i);
        if i + 1 < level.len() {
            parents.push_back(hash_pair(e, &left, &level.get_unchecked(i + 1)));
        } else {
            parents.push_back(left);
        }
        i += 2;
    }
    parents
}

pub fn root(e: &Env, recipients: &Vec<Recipient>) -> Result<BytesN<32>, AirdropError> {
    let mut level = leaves(e, recipients)?;
    while level.len() > 1 {
        level = next_level(e, &level);
    }
    Ok(level.get_unchecked(0))
}

/// Sibling hashes from the leaf at `index` up to the root.
pub fn proof(
    e: &Env,
    recipients: &Vec<Recipient>,
    index: u32,
) -> Result<Vec<BytesN<32>>, AirdropError> {
    let mut level = leaves(e, recipients)?;
    if index >= level.len() {
        return Err(AirdropError::IndexOutOfRange);
    }

    let mut path = Vec::new(e);
    let mut position = index;
    while level.len() > 1 {
        let sibling = position ^ 1;
        if sibling < level.len() {
            path.push_back(level.get_unchecked(sibling));
        }
        level = next_level(e, &level);
        position /= 2;
    }
    Ok(path)
}

pub fn verify(
    e: &Env,
    root: &BytesN<32>,
    recipient: &Recipient,
    proof: &Vec<BytesN<32>>,
) -> bool {
    let mut node = leaf(e, recipient);
    for sibling in proof.iter() {
        node = hash_pair(e, &node, &sibling);
    }
    node == *root
}
