#![cfg(test)]
extern crate std;

use crate::{contract::CollateralNft, CollateralNftClient, NftError};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    Address, Env, IntoVal, String, TryFromVal, Val, Vec,
};

fn create_collection<'a>(e: &Env, admin: &Address) -> CollateralNftClient<'a> {
    let nft = CollateralNftClient::new(e, &e.register_contract(None, CollateralNft {}));
    nft.initialize(
        admin,
        &"Collateral".into_val(e),
        &"COL".into_val(e),
        &"ipfs://collection/".into_val(e),
    );
    nft
}

#[test]
fn test_initialize_once() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let nft = create_collection(&e, &admin);
    assert_eq!(nft.name(), String::from_str(&e, "Collateral"));
    assert_eq!(nft.symbol(), String::from_str(&e, "COL"));

    let res = nft.try_initialize(
        &admin,
        &"Other".into_val(&e),
        &"OTH".into_val(&e),
        &"ipfs://other/".into_val(&e),
    );
    assert_eq!(res, Err(Ok(NftError::AlreadyInitialized)));
}

#[test]
fn test_mint() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let nft = create_collection(&e, &admin);

    nft.mint(&user1, &1);
    nft.mint(&user1, &2);
    assert_eq!(nft.owner_of(&1), user1);
    assert_eq!(nft.balance_of(&user1), 2);
    assert_eq!(
        nft.token_uri(&2),
        String::from_str(&e, "ipfs://collection/2")
    );

    assert_eq!(nft.try_mint(&user1, &1), Err(Ok(NftError::AlreadyMinted)));
    assert_eq!(nft.try_owner_of(&3), Err(Ok(NftError::NotMinted)));
}

#[test]
fn test_token_uri_large_id() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let nft = create_collection(&e, &admin);

    nft.mint(&admin, &u64::MAX);
    assert_eq!(
        nft.token_uri(&u64::MAX),
        String::from_str(&e, "ipfs://collection/18446744073709551615")
    );
    assert_eq!(nft.try_token_uri(&0), Err(Ok(NftError::NotMinted)));
}

#[test]
fn test_transfer() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let nft = create_collection(&e, &admin);

    nft.mint(&user1, &7);
    nft.transfer(&user1, &user2, &7);
    assert_eq!(nft.owner_of(&7), user2);
    assert_eq!(nft.balance_of(&user1), 0);
    assert_eq!(nft.balance_of(&user2), 1);

    // user1 no longer owns it
    assert_eq!(
        nft.try_transfer(&user1, &user2, &7),
        Err(Ok(NftError::NotOwner))
    );
}

#[test]
fn test_transfer_from_approved() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let spender = Address::generate(&e);
    let receiver = Address::generate(&e);
    let nft = create_collection(&e, &admin);

    nft.mint(&owner, &1);
    assert_eq!(
        nft.try_transfer_from(&spender, &owner, &receiver, &1),
        Err(Ok(NftError::NotApproved))
    );

    nft.approve(&owner, &spender, &1);
    assert_eq!(nft.get_approved(&1), Some(spender.clone()));

    nft.transfer_from(&spender, &owner, &receiver, &1);
    assert_eq!(nft.owner_of(&1), receiver);
    // approval does not survive the transfer
    assert_eq!(nft.get_approved(&1), None);
    assert_eq!(
        nft.try_transfer_from(&spender, &receiver, &owner, &1),
        Err(Ok(NftError::NotApproved))
    );
}

#[test]
fn test_transfer_from_operator() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let operator = Address::generate(&e);
    let nft = create_collection(&e, &admin);

    nft.mint(&owner, &1);
    nft.mint(&owner, &2);
    nft.set_approval_for_all(&owner, &operator, &true);
    assert!(nft.is_approved_for_all(&owner, &operator));

    nft.transfer_from(&operator, &owner, &operator, &1);
    nft.transfer_from(&operator, &owner, &operator, &2);
    assert_eq!(nft.balance_of(&operator), 2);

    nft.set_approval_for_all(&owner, &operator, &false);
    assert!(!nft.is_approved_for_all(&owner, &operator));
}

#[test]
fn test_approve_requires_owner() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let other = Address::generate(&e);
    let nft = create_collection(&e, &admin);

    nft.mint(&owner, &1);
    assert_eq!(
        nft.try_approve(&other, &other, &1),
        Err(Ok(NftError::NotOwner))
    );
    assert_eq!(
        nft.try_approve(&owner, &other, &9),
        Err(Ok(NftError::NotMinted))
    );
}

#[test]
fn test_set_admin() {
    let e = Env::default();
    e.mock_all_auths();

    let admin1 = Address::generate(&e);
    let admin2 = Address::generate(&e);
    let user = Address::generate(&e);
    let nft = create_collection(&e, &admin1);

    nft.set_admin(&admin2);
    nft.mint(&user, &1);
    // the new admin authorized the mint
    assert_eq!(e.auths()[0].0, admin2);
}

#[test]
fn test_transfer_event() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let user1 = Address::generate(&e);
    let user2 = Address::generate(&e);
    let nft = create_collection(&e, &admin);

    nft.mint(&user1, &5);
    nft.transfer(&user1, &user2, &5);

    let (contract, topics, data) = e.events().all().last().unwrap();
    let expected: Vec<Val> = (symbol_short!("transfer"), user1.clone(), user2.clone()).into_val(&e);
    assert_eq!(contract, nft.address);
    assert_eq!(topics, expected);
    assert_eq!(u64::try_from_val(&e, &data).unwrap(), 5);
}
