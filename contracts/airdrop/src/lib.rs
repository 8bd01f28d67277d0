#![no_std]

mod contract;
mod error;
mod merkle;

pub use crate::contract::AirdropMerkleClient;
pub use crate::error::AirdropError;
pub use crate::merkle::Recipient;
