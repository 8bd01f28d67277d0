use soroban_sdk::{self, contracterror};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AirdropError {
    EmptyRecipients = 1,
    IndexOutOfRange = 2,
    NonPositiveAmount = 3,
}
