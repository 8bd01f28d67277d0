use soroban_sdk::{self, contracterror};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NftError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    NotMinted = 4,
    AlreadyMinted = 5,
    NotApproved = 6,
    InvalidBaseUri = 7,
}
