//! # Signing-Key Bindings for Relayed Operations
//!
//! Stellar addresses are not derivable from secp256k1 public keys, so the
//! signed (relayed) operation variants of the dependent registries need an
//! explicit mapping from a recovered signer key to the acting account. The
//! binding is self-authorized: only the account itself can bind or replace
//! its key. Both directions are stored so `holder_of` is a single read on
//! the hot path.

use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::Error;

/// Storage keys for signing-key bindings.
#[contracttype]
#[derive(Clone)]
pub enum BindingKey {
    /// Uncompressed secp256k1 key bound by an account.
    KeyOf(Address),
    /// Account that bound a key.
    HolderOf(BytesN<65>),
}

/// Key currently bound by `account`, if any.
pub fn key_of(env: &Env, account: &Address) -> Option<BytesN<65>> {
    env.storage()
        .persistent()
        .get(&BindingKey::KeyOf(account.clone()))
}

/// Account that bound `public_key`, if any.
pub fn holder_of(env: &Env, public_key: &BytesN<65>) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&BindingKey::HolderOf(public_key.clone()))
}

/// Bind `public_key` to `account`, replacing the account's previous key.
///
/// A key already bound by a different account is rejected: allowing the
/// rebind would leave the other account's forward mapping dangling and let
/// one account capture another's relayed operations.
pub fn bind(env: &Env, account: &Address, public_key: &BytesN<65>) -> Result<(), Error> {
    if let Some(holder) = holder_of(env, public_key) {
        if holder != *account {
            return Err(Error::KeyAlreadyBound);
        }
    }
    if let Some(old) = key_of(env, account) {
        env.storage().persistent().remove(&BindingKey::HolderOf(old));
    }
    env.storage()
        .persistent()
        .set(&BindingKey::KeyOf(account.clone()), public_key);
    env.storage()
        .persistent()
        .set(&BindingKey::HolderOf(public_key.clone()), account);
    Ok(())
}
