//! Signed (relayed) issuance tests with real secp256k1 signatures.

use k256::ecdsa::SigningKey;
use rand_core::OsRng;
use soroban_sdk::crypto::Hash;
use soroban_sdk::{Address, BytesN, Env, String};
use sovra_common::signed_ops::{SignedOperation, OP_ISSUE_CREDENTIAL};
use sovra_role_control::RoleControlClient;

use super::*;
use crate::test::{cred_id, setup};

/// Generate a fresh secp256k1 key and bind it to `account`.
fn bind_key(env: &Env, roles: &RoleControlClient, account: &Address) -> SigningKey {
    let key = SigningKey::random(&mut OsRng);
    let point = key.verifying_key().to_encoded_point(false);
    let raw: [u8; 65] = point.as_bytes().try_into().unwrap();
    roles.set_signing_key(account, &BytesN::from_array(env, &raw));
    key
}

fn sign(env: &Env, key: &SigningKey, digest: &Hash<32>) -> (u32, BytesN<32>, BytesN<32>) {
    let prehash = digest.to_bytes().to_array();
    let (sig, recovery_id) = key.sign_prehash_recoverable(&prehash).unwrap();
    let bytes: [u8; 64] = sig.to_bytes().into();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);
    (
        recovery_id.to_byte() as u32,
        BytesN::from_array(env, &r),
        BytesN::from_array(env, &s),
    )
}

fn issuance_digest(
    env: &Env,
    registry: &Address,
    identity: &Address,
    credential_id: &BytesN<32>,
    cid: &String,
) -> Hash<32> {
    SignedOperation::new(env, registry, identity, OP_ISSUE_CREDENTIAL)
        .push_hash(credential_id)
        .push_string(env, cid)
        .digest(env)
}

#[test]
fn issue_credential_signed_resolves_the_bound_issuer() {
    let h = setup();
    let key = bind_key(&h.env, &h.roles, &h.issuer);

    let id = cred_id(&h.env, 1);
    let cid = String::from_str(&h.env, "bafy-signed-cred");
    let digest = issuance_digest(&h.env, &h.creds.address, &h.holder, &id, &cid);
    let (v, r, s) = sign(&h.env, &key, &digest);

    h.creds
        .issue_credential_signed(&h.holder, &id, &v, &r, &s, &cid);

    let record = h.creds.resolve_credential(&id);
    assert_eq!(record.issuer, h.issuer);
    assert_eq!(record.metadata.status, CredentialStatus::Active);
}

#[test]
fn unbound_signer_is_rejected() {
    let h = setup();
    let key = SigningKey::random(&mut OsRng);

    let id = cred_id(&h.env, 1);
    let cid = String::from_str(&h.env, "bafy");
    let digest = issuance_digest(&h.env, &h.creds.address, &h.holder, &id, &cid);
    let (v, r, s) = sign(&h.env, &key, &digest);

    assert_eq!(
        h.creds.try_issue_credential_signed(&h.holder, &id, &v, &r, &s, &cid),
        Err(Ok(Error::UnknownSigner))
    );
}

#[test]
fn signed_issuer_is_held_to_the_role_gate() {
    let h = setup();
    // Bound key, valid signature, but a holder cannot issue.
    let key = bind_key(&h.env, &h.roles, &h.holder);

    let id = cred_id(&h.env, 1);
    let cid = String::from_str(&h.env, "bafy");
    let digest = issuance_digest(&h.env, &h.creds.address, &h.issuer, &id, &cid);
    let (v, r, s) = sign(&h.env, &key, &digest);

    assert!(h
        .creds
        .try_issue_credential_signed(&h.issuer, &id, &v, &r, &s, &cid)
        .is_err());
}

#[test]
fn tampered_credential_id_is_rejected() {
    let h = setup();
    let key = bind_key(&h.env, &h.roles, &h.issuer);

    let id = cred_id(&h.env, 1);
    let cid = String::from_str(&h.env, "bafy");
    let digest = issuance_digest(&h.env, &h.creds.address, &h.holder, &id, &cid);
    let (v, r, s) = sign(&h.env, &key, &digest);

    // Relaying different arguments than were signed recovers a key with
    // no binding.
    let other_id = cred_id(&h.env, 2);
    assert_eq!(
        h.creds.try_issue_credential_signed(&h.holder, &other_id, &v, &r, &s, &cid),
        Err(Ok(Error::UnknownSigner))
    );
}
