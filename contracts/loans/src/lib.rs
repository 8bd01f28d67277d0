#![no_std]

mod admin;
mod config;
mod contract;
mod error;
mod event;
mod fees;
mod guard;
mod interfaces;
mod lifecycle;
mod math;
mod registry;
mod storage_types;

pub use crate::config::Config;
pub use crate::contract::NftLoansClient;
pub use crate::error::LoanError;
pub use crate::fees::Settlement;
pub use crate::interfaces::Valuation;
pub use crate::registry::{Lender, Loan, LoanStatus};
