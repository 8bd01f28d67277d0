use soroban_sdk::{contracttype, Env, String};

use crate::error::NftError;
use crate::storage_types::DataKey;

/// Longest base URI that still leaves room for any `u64` token id.
pub const MAX_BASE_URI_LEN: u32 = 236;
const URI_BUFFER_LEN: usize = 256;

#[derive(Clone)]
#[contracttype]
pub struct CollectionMetadata {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
}

pub fn write_metadata(e: &Env, metadata: CollectionMetadata) -> Result<(), NftError> {
    if metadata.base_uri.len() > MAX_BASE_URI_LEN {
        return Err(NftError::InvalidBaseUri);
    }
    let key = DataKey::Metadata;
    e.storage().instance().set(&key, &metadata);
    Ok(())
}

pub fn read_metadata(e: &Env) -> Result<CollectionMetadata, NftError> {
    let key = DataKey::Metadata;
    e.storage()
        .instance()
        .get(&key)
        .ok_or(NftError::NotInitialized)
}

/// `base_uri` followed by the decimal form of `token_id`.
pub fn token_uri(e: &Env, base_uri: &String, token_id: u64) -> Result<String, NftError> {
    let mut buf = [0u8; URI_BUFFER_LEN];
    let base_len = base_uri.len() as usize;
    if base_len > MAX_BASE_URI_LEN as usize {
        return Err(NftError::InvalidBaseUri);
    }
    base_uri.copy_into_slice(&mut buf[..base_len]);

    let mut digits = [0u8; 20];
    let mut n = token_id;
    let mut count = 0;
    loop {
        digits[count] = b'0' + (n % 10) as u8;
        count += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    for (i, digit) in digits[..count].iter().rev().enumerate() {
        buf[base_len + i] = *digit;
    }

    let uri = core::str::from_utf8(&buf[..base_len + count]).map_err(|_| NftError::InvalidBaseUri)?;
    Ok(String::from_str(e, uri))
}
