#![no_std]
//! # Credential Registry Contract
//!
//! Issuance and status tracking for verifiable credentials. A credential
//! is represented on-chain by a caller-supplied content hash, the issuing
//! account, and a status lifecycle; the credential body lives off-chain
//! behind an opaque content identifier.
//!
//! Issuance requires both parties to self-control an active DID, checked
//! through the DID registry on every call rather than cached: an identity
//! deactivated between two issuances invalidates the second one. Status
//! changes carry the expected current status so a transaction racing a
//! concurrent change observes a mismatch and fails instead of silently
//! clobbering it.

use soroban_sdk::crypto::Hash;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};
use sovra_common::signed_ops::{self, SignedOperation};

pub mod events;
pub mod status;
pub mod types;

pub use types::{CredentialKey, CredentialMetadata, CredentialRecord, CredentialStatus, Error};

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

/// DID registry client: same dual-import scheme as the role control one.
#[cfg(target_arch = "wasm32")]
mod did_registry_import {
    soroban_sdk::contractimport!(
        file = "../../target/wasm32-unknown-unknown/release/sovra_did_registry.wasm"
    );
    pub use Client as DidRegistryClient;
}
#[cfg(not(target_arch = "wasm32"))]
mod did_registry_import {
    pub use sovra_did_registry::DidRegistryClient;
}
use did_registry_import::DidRegistryClient;

#[cfg(test)]
mod signed_test;

#[contract]
pub struct CredentialRegistry;

#[contractimpl]
impl CredentialRegistry {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time initialization. Stores the role control and DID registry
    /// contract addresses; neither reference is ever reassigned.
    pub fn initialize(env: Env, role_control: Address, did_registry: Address) -> Result<(), Error> {
        if env.storage().instance().has(&CredentialKey::RoleControl) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&CredentialKey::RoleControl, &role_control);
        env.storage()
            .instance()
            .set(&CredentialKey::DidRegistry, &did_registry);
        Ok(())
    }

    /// Return the injected role control contract address.
    pub fn get_role_control(env: Env) -> Result<Address, Error> {
        role_control_address(&env)
    }

    /// Return the injected DID registry contract address.
    pub fn get_did_registry(env: Env) -> Result<Address, Error> {
        did_registry_address(&env)
    }

    // ── Issuance ────────────────────────────────────────────────────

    /// Issue a credential for `identity` under the unused `credential_id`.
    ///
    /// The sender must authorize and hold the TRUSTEE or ISSUER role.
    /// Both the sender and the identity must self-control an active DID,
    /// and self-issuance is forbidden.
    pub fn issue_credential(
        env: Env,
        sender: Address,
        identity: Address,
        credential_id: BytesN<32>,
        credential_cid: String,
    ) -> Result<(), Error> {
        sender.require_auth();
        role_client(&env)?.is_trustee_or_issuer(&sender);
        issue(&env, &sender, &identity, &credential_id, &credential_cid)
    }

    /// Signed variant of [`issue_credential`]: the issuer is the account
    /// whose bound signing key produced `(sig_v, sig_r, sig_s)` over the
    /// issuance digest for `identity`.
    pub fn issue_credential_signed(
        env: Env,
        identity: Address,
        credential_id: BytesN<32>,
        sig_v: u32,
        sig_r: BytesN<32>,
        sig_s: BytesN<32>,
        credential_cid: String,
    ) -> Result<(), Error> {
        let digest = SignedOperation::new(
            &env,
            &env.current_contract_address(),
            &identity,
            signed_ops::OP_ISSUE_CREDENTIAL,
        )
        .push_hash(&credential_id)
        .push_string(&env, &credential_cid)
        .digest(&env);
        let actor = signer_account(&env, &digest, sig_v, &sig_r, &sig_s)?;
        role_client(&env)?.is_trustee_or_issuer(&actor);
        issue(&env, &actor, &identity, &credential_id, &credential_cid)
    }

    // ── Status lifecycle ────────────────────────────────────────────

    /// Move a credential from `previous_status` to `new_status`.
    ///
    /// Only the original issuer may update, and only while its own DID is
    /// still active and self-controlled. `previous_status` must match the
    /// stored status exactly: a caller must read before writing, and the
    /// loser of a status race observes the mismatch instead of silently
    /// overwriting the winner. Setting the status it already has is a
    /// no-op success without events.
    pub fn update_credential_status(
        env: Env,
        caller: Address,
        credential_id: BytesN<32>,
        previous_status: CredentialStatus,
        new_status: CredentialStatus,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut record = read(&env, &credential_id).ok_or(Error::CredentialNotFound)?;
        if record.issuer != caller {
            return Err(Error::NotCredentialIssuer);
        }
        require_active_self_owned(&env, &caller, Error::IssuerDidInvalid)?;

        let current = record.metadata.status;
        if current == CredentialStatus::Revoked {
            return Err(Error::CredentialRevoked);
        }
        if current != previous_status {
            return Err(Error::InvalidStatusTransition);
        }
        if new_status == current {
            return Ok(());
        }
        status::validate_transition(current, new_status)?;

        record.metadata.status = new_status;
        write(&env, &credential_id, &record);

        events::emit_credential_status_updated(&env, &credential_id, current, new_status, &caller);
        match new_status {
            CredentialStatus::Suspended => events::emit_credential_suspended(&env, &credential_id),
            CredentialStatus::Revoked => events::emit_credential_revoked(&env, &credential_id),
            // Only reachable from Suspended: the suspension was lifted.
            CredentialStatus::Active => events::emit_credential_reactivated(&env, &credential_id),
            // validate_transition rejects None targets.
            CredentialStatus::None => {}
        }
        Ok(())
    }

    // ── Read-only queries ───────────────────────────────────────────

    /// Return the record for `credential_id`. Suspended credentials are
    /// still resolvable; revoked and unknown ones are not.
    pub fn resolve_credential(env: Env, credential_id: BytesN<32>) -> Result<CredentialRecord, Error> {
        let record = read(&env, &credential_id).ok_or(Error::CredentialNotFound)?;
        if record.metadata.status == CredentialStatus::Revoked {
            return Err(Error::CredentialRevoked);
        }
        Ok(record)
    }
}

// ── Shared operation bodies ──────────────────────────────────────────

fn issue(
    env: &Env,
    issuer: &Address,
    identity: &Address,
    credential_id: &BytesN<32>,
    credential_cid: &String,
) -> Result<(), Error> {
    if read(env, credential_id).is_some() {
        return Err(Error::CredentialAlreadyExists);
    }
    require_active_self_owned(env, issuer, Error::IssuerDidInvalid)?;
    require_active_self_owned(env, identity, Error::HolderDidInvalid)?;
    if issuer == identity {
        return Err(Error::SelfIssuance);
    }

    let record = CredentialRecord {
        issuer: issuer.clone(),
        credential_cid: credential_cid.clone(),
        metadata: CredentialMetadata {
            issuance_date: env.ledger().timestamp(),
            expiration_date: 0,
            status: CredentialStatus::Active,
        },
    };
    write(env, credential_id, &record);
    events::emit_credential_issued(env, credential_id, issuer, identity, credential_cid);
    Ok(())
}

fn read(env: &Env, credential_id: &BytesN<32>) -> Option<CredentialRecord> {
    env.storage()
        .persistent()
        .get(&CredentialKey::Record(credential_id.clone()))
}

fn write(env: &Env, credential_id: &BytesN<32>, record: &CredentialRecord) {
    env.storage()
        .persistent()
        .set(&CredentialKey::Record(credential_id.clone()), record);
}

fn role_control_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&CredentialKey::RoleControl)
        .ok_or(Error::NotInitialized)
}

fn did_registry_address(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&CredentialKey::DidRegistry)
        .ok_or(Error::NotInitialized)
}

fn role_client(env: &Env) -> Result<RoleControlClient<'_>, Error> {
    Ok(RoleControlClient::new(env, &role_control_address(env)?))
}

fn did_client(env: &Env) -> Result<DidRegistryClient<'_>, Error> {
    Ok(DidRegistryClient::new(env, &did_registry_address(env)?))
}

/// Party validation: the address must have a DID that exists, is active,
/// and is owned by the address itself. Checked through the DID registry on
/// every call, never cached, so identity deactivation takes effect
/// immediately.
fn require_active_self_owned(env: &Env, party: &Address, error: Error) -> Result<(), Error> {
    let validation = did_client(env)?.validate_did(party);
    if validation.exists && validation.active && validation.owner == Some(party.clone()) {
        Ok(())
    } else {
        Err(error)
    }
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
