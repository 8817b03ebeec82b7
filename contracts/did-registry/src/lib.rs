#![no_std]
//! # DID Registry Contract
//!
//! Lifecycle registry for decentralized identifiers. Each identity address
//! owns at most one record holding a commitment to its off-chain DID
//! document; records move `Absent -> Active -> Deactivated` with no path
//! back. Creation is gated by role (via the role control contract); update
//! and deactivation by identity ownership or trusteeship.
//!
//! Every mutating operation has a signed variant that authenticates
//! through secp256k1 recovery instead of Soroban auth, so a relayer can
//! submit on behalf of the actual signer. The recovered signer is resolved
//! to an account through the role control signing-key registry and held to
//! exactly the same rules as a direct caller.

use soroban_sdk::crypto::Hash;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};
use sovra_common::signed_ops::{self, SignedOperation};

pub mod events;
pub mod records;
pub mod types;

pub use types::{DidKey, DidMetadata, DidRecord, DidStatus, DidValidation, Error};

/// Role control client: WASM import for wasm32 (avoids duplicate symbols), crate for tests.
#[cfg(target_arch = "wasm32")]
mod role_control_import {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/sovra_role_control.wasm"
    );
    pub use Client as RoleControlClient;
}
#[cfg(not(target_arch = "wasm32"))]
mod role_control_import {
    pub use sovra_role_control::RoleControlClient;
}
use role_control_import::RoleControlClient;


#[contract]
pub struct DidRegistry;

#[contractimpl]
impl DidRegistry {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time initialization. Stores the role control contract address;
    /// the reference is never reassigned afterwards.
    pub fn initialize(env: Env, role_control: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DidKey::RoleControl) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&DidKey::RoleControl, &role_control);
        Ok(())
    }

    /// Return the injected role control contract address.
    pub fn get_role_control(env: Env) -> Result<Address, Error> {
        role_control_address(&env)
    }

    // ── DID lifecycle ───────────────────────────────────────────────

    /// Create the DID record for `identity`.
    ///
    /// The sender must authorize and hold any non-NONE role; the identity
    /// must not already have a record. The record's owner is fixed to
    /// `identity`, regardless of who created it.
    pub fn create_did(
        env: Env,
        sender: Address,
        identity: Address,
        doc_hash: BytesN<32>,
        doc_cid: String,
    ) -> Result<(), Error> {
        sender.require_auth();
        role_client(&env)?.is_trustee_or_issuer_or_holder(&sender);
        create(&env, &identity, &doc_hash, &doc_cid)
    }

    /// Signed variant of [`create_did`]: the actor is the account whose
    /// bound signing key produced `(sig_v, sig_r, sig_s)` over the
    /// creation digest for `identity`.
    pub fn create_did_signed(
        env: Env,
        identity: Address,
        sig_v: u32,
        sig_r: BytesN<32>,
        sig_s: BytesN<32>,
        doc_hash: BytesN<32>,
        doc_cid: String,
    ) -> Result<(), Error> {
        let digest = SignedOperation::new(
            &env,
            &env.current_contract_address(),
            &identity,
            signed_ops::OP_CREATE_DID,
        )
        .push_hash(&doc_hash)
        .push_string(&env, &doc_cid)
        .digest(&env);
        let actor = signer_account(&env, &digest, sig_v, &sig_r, &sig_s)?;
        role_client(&env)?.is_trustee_or_issuer_or_holder(&actor);
        create(&env, &identity, &doc_hash, &doc_cid)
    }

    /// Replace the document commitment for an active `identity`.
    ///
    /// Only the identity itself or a trustee may update.
    pub fn update_did(
        env: Env,
        sender: Address,
        identity: Address,
        doc_hash: BytesN<32>,
        doc_cid: String,
    ) -> Result<(), Error> {
        sender.require_auth();
        authorize_controller(&env, &sender, &identity)?;
        update(&env, &identity, &doc_hash, &doc_cid)
    }

    /// Signed variant of [`update_did`].
    pub fn update_did_signed(
        env: Env,
        identity: Address,
        sig_v: u32,
        sig_r: BytesN<32>,
        sig_s: BytesN<32>,
        doc_hash: BytesN<32>,
        doc_cid: String,
    ) -> Result<(), Error> {
        let digest = SignedOperation::new(
            &env,
            &env.current_contract_address(),
            &identity,
            signed_ops::OP_UPDATE_DID,
        )
        .push_hash(&doc_hash)
        .push_string(&env, &doc_cid)
        .digest(&env);
        let actor = signer_account(&env, &digest, sig_v, &sig_r, &sig_s)?;
        authorize_controller(&env, &actor, &identity)?;
        update(&env, &identity, &doc_hash, &doc_cid)
    }

    /// Deactivate the DID record for an active `identity`. Terminal: no
    /// later operation can touch the record again.
    ///
    /// Only the identity itself or a trustee may deactivate.
    pub fn deactivate_did(env: Env, sender: Address, identity: Address) -> Result<(), Error> {
        sender.require_auth();
        authorize_controller(&env, &sender, &identity)?;
        deactivate(&env, &identity)
    }

    /// Signed variant of [`deactivate_did`].
    pub fn deactivate_did_signed(
        env: Env,
        identity: Address,
        sig_v: u32,
        sig_r: BytesN<32>,
        sig_s: BytesN<32>,
    ) -> Result<(), Error> {
        let digest = SignedOperation::new(
            &env,
            &env.current_contract_address(),
            &identity,
            signed_ops::OP_DEACTIVATE_DID,
        )
        .digest(&env);
        let actor = signer_account(&env, &digest, sig_v, &sig_r, &sig_s)?;
        authorize_controller(&env, &actor, &identity)?;
        deactivate(&env, &identity)
    }

    // ── Read-only queries ───────────────────────────────────────────

    /// Return the full record for an active `identity`.
    pub fn resolve_did(env: Env, identity: Address) -> Result<DidRecord, Error> {
        records::read_active(&env, &identity)
    }

    /// Validation snapshot for `identity`. Never fails; absent identities
    /// yield `exists: false`. This is the single call the credential
    /// registry makes per validated party.
    pub fn validate_did(env: Env, identity: Address) -> DidValidation {
        match records::read(&env, &identity) {
            None => DidValidation {
                exists: false,
                active: false,
                owner: None,
            },
            Some(record) => DidValidation {
                exists: true,
                active: record.metadata.status == DidStatus::Active,
                owner: Some(record.metadata.owner),
            },
        }
    }

    /// Whether `hash` matches the stored commitment for `identity`. The
    /// record must exist; deactivated records still answer.
    pub fn validate_document_hash(
        env: Env,
        identity: Address,
        hash: BytesN<32>,
    ) -> Result<bool, Error> {
        let record = records::read(&env, &identity).ok_or(Error::DidNotFound)?;
        Ok(record.document_hash == hash)
    }
}

// ── Shared operation bodies ──────────────────────────────────────────
//
// The signed and direct variants differ only in how the actor is
// established; everything below runs identically for both.

fn create(env: &Env, identity: &Address, doc_hash: &BytesN<32>, doc_cid: &String) -> Result<(), Error> {
    records::require_commitment(env, doc_hash)?;
    if records::read(env, identity).is_some() {
        return Err(Error::DidAlreadyExists);
    }
    let now = env.ledger().timestamp();
    let record = DidRecord {
        document_hash: doc_hash.clone(),
        document_cid: doc_cid.clone(),
        metadata: DidMetadata {
            owner: identity.clone(),
            created: now,
            updated: now,
            version: env.ledger().sequence(),
            status: DidStatus::Active,
        },
    };
    records::write(env, identity, &record);
    events::emit_did_created(env, identity, doc_hash, doc_cid);
    Ok(())
}

fn update(env: &Env, identity: &Address, doc_hash: &BytesN<32>, doc_cid: &String) -> Result<(), Error> {
    records::require_commitment(env, doc_hash)?;
    let mut record = records::read_active(env, identity)?;
    record.document_hash = doc_hash.clone();
    record.document_cid = doc_cid.clone();
    record.metadata.updated = env.ledger().timestamp();
    record.metadata.version = env.ledger().sequence();
    records::write(env, identity, &record);
    events::emit_did_updated(env, identity, doc_hash, record.metadata.version);
    Ok(())
}

fn deactivate(env: &Env, identity: &Address) -> Result<(), Error> {
    let mut record = records::read_active(env, identity)?;
    record.metadata.status = DidStatus::Deactivated;
    record.metadata.updated = env.ledger().timestamp();
    record.metadata.version = env.ledger().sequence();
    records::write(env, identity, &record);
    events::emit_did_deactivated(env, identity, record.metadata.version);
    Ok(())
}

fn role_control_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DidKey::RoleControl)
        .ok_or(Error::NotInitialized)
}

fn role_client(env: &Env) -> Result<RoleControlClient<'_>, Error> {
    Ok(RoleControlClient::new(env, &role_control_address(env)?))
}

/// Resolve the account behind a signed operation: recover the secp256k1
/// key from the signature and look up its binding in the role control
/// signing-key registry.
fn signer_account(
    env: &Env,
    digest: &Hash<32>,
    sig_v: u32,
    sig_r: &BytesN<32>,
    sig_s: &BytesN<32>,
) -> Result<Address, Error> {
    let public_key = signed_ops::recover_signer(env, digest, sig_v, sig_r, sig_s);
    role_client(env)?
        .get_key_holder(&public_key)
        .ok_or(Error::UnknownSigner)
}

/// Gate for update/deactivate: the actor must be the identity itself, or
/// hold the TRUSTEE role.
fn authorize_controller(env: &Env, actor: &Address, identity: &Address) -> Result<(), Error> {
    if actor == identity {
        return Ok(());
    }
    if role_client(env)?.try_is_trustee(actor).is_err() {
        return Err(Error::NotIdentityOwner);
    }
    Ok(())
}
