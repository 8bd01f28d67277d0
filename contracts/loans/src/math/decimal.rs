//! Unsigned 18-decimal fixed-point value backed by a host `U256`.
//!
//! Every division truncates toward zero at the 18th decimal, so a chain of
//! operations is deterministic and reproducible off chain with the same
//! order of operations. Host `U256` arithmetic traps on overflow; products
//! and sums are range checked first and report `MathOverflow` instead.

use soroban_sdk::{Env, U256};

use crate::error::LoanError;
use crate::math::WAD;

#[derive(Clone)]
pub struct Decimal {
    env: Env,
    val: U256,
}

impl Decimal {
    /// Whole number, scaled by `WAD`.
    pub fn from_u128(env: &Env, val: u128) -> Self {
        Self {
            env: env.clone(),
            val: U256::from_u128(env, val).mul(&U256::from_u128(env, WAD)),
        }
    }

    /// Non-negative token amount, scaled by `WAD`.
    pub fn from_amount(env: &Env, amount: i128) -> Result<Self, LoanError> {
        let val = u128::try_from(amount).map_err(|_| LoanError::MathOverflow)?;
        Ok(Self::from_u128(env, val))
    }

    /// Raw scaled value, if it fits in 128 bits.
    #[cfg(test)]
    pub fn to_scaled_val(&self) -> Option<u128> {
        self.val.to_u128()
    }

    fn wad(&self) -> U256 {
        U256::from_u128(&self.env, WAD)
    }

    fn max(&self) -> U256 {
        U256::from_parts(&self.env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
    }

    fn is_zero(&self, val: &U256) -> bool {
        *val == U256::from_u32(&self.env, 0)
    }

    fn checked_mul(&self, a: &U256, b: &U256) -> Result<U256, LoanError> {
        if !self.is_zero(b) && *a > self.max().div(b) {
            return Err(LoanError::MathOverflow);
        }
        Ok(a.mul(b))
    }

    fn with_val(&self, val: U256) -> Self {
        Self {
            env: self.env.clone(),
            val,
        }
    }

    pub fn add(&self, rhs: &Self) -> Result<Self, LoanError> {
        if self.val > self.max().sub(&rhs.val) {
            return Err(LoanError::MathOverflow);
        }
        Ok(self.with_val(self.val.add(&rhs.val)))
    }

    pub fn mul(&self, rhs: &Self) -> Result<Self, LoanError> {
        let product = self.checked_mul(&self.val, &rhs.val)?;
        Ok(self.with_val(product.div(&self.wad())))
    }

    pub fn div(&self, rhs: &Self) -> Result<Self, LoanError> {
        if self.is_zero(&rhs.val) {
            return Err(LoanError::MathOverflow);
        }
        let scaled = self.checked_mul(&self.val, &self.wad())?;
        Ok(self.with_val(scaled.div(&rhs.val)))
    }

    pub fn mul_int(&self, rhs: u128) -> Result<Self, LoanError> {
        let product = self.checked_mul(&self.val, &U256::from_u128(&self.env, rhs))?;
        Ok(self.with_val(product))
    }

    pub fn div_int(&self, rhs: u128) -> Result<Self, LoanError> {
        if rhs == 0 {
            return Err(LoanError::MathOverflow);
        }
        Ok(self.with_val(self.val.div(&U256::from_u128(&self.env, rhs))))
    }

    /// Integer part, as a token amount.
    pub fn floor(&self) -> Result<i128, LoanError> {
        let whole = self
            .val
            .div(&self.wad())
            .to_u128()
            .ok_or(LoanError::MathOverflow)?;
        i128::try_from(whole).map_err(|_| LoanError::MathOverflow)
    }
}
