//! # Structured Event Emissions for the Credential Registry
//!
//! Issuance and status-change events. Every status change emits the
//! generic `CredentialStatusUpdated` plus one specific event per target
//! state, so indexers can either follow full histories or subscribe to a
//! single kind of change.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Symbol};

use crate::types::CredentialStatus;

/// Topic for credential issuance events.
pub const TOPIC_CREDENTIAL_ISSUED: Symbol = symbol_short!("cred_iss");
/// Topic for generic status-change events.
pub const TOPIC_CREDENTIAL_STATUS: Symbol = symbol_short!("cred_stat");
/// Topic for revocation events.
pub const TOPIC_CREDENTIAL_REVOKED: Symbol = symbol_short!("cred_rvkd");
/// Topic for suspension events.
pub const TOPIC_CREDENTIAL_SUSPENDED: Symbol = symbol_short!("cred_susp");
/// Topic for reactivation events.
pub const TOPIC_CREDENTIAL_REACTIVATED: Symbol = symbol_short!("cred_ract");

/// Event data for credential issuance.
#[contracttype]
#[derive(Clone, Debug)]
pub struct CredentialIssuedEvent {
    /// Content hash identifying the credential.
    pub credential_id: BytesN<32>,
    /// Account that issued the credential.
    pub issuer: Address,
    /// Identity the credential was issued to.
    pub identity: Address,
    /// Content identifier of the off-chain credential.
    pub credential_cid: String,
}

/// Event data for status changes.
#[contracttype]
#[derive(Clone, Debug)]
pub struct CredentialStatusUpdatedEvent {
    pub credential_id: BytesN<32>,
    pub previous_status: CredentialStatus,
    pub new_status: CredentialStatus,
    /// Issuer that performed the change.
    pub changed_by: Address,
}

/// Event data for the per-target-state specific events.
#[contracttype]
#[derive(Clone, Debug)]
pub struct CredentialStatusEvent {
    pub credential_id: BytesN<32>,
}

/// Emit a credential issued event.
pub fn emit_credential_issued(
    env: &Env,
    credential_id: &BytesN<32>,
    issuer: &Address,
    identity: &Address,
    credential_cid: &String,
) {
    let event = CredentialIssuedEvent {
        credential_id: credential_id.clone(),
        issuer: issuer.clone(),
        identity: identity.clone(),
        credential_cid: credential_cid.clone(),
    };
    env.events()
        .publish((TOPIC_CREDENTIAL_ISSUED, credential_id.clone()), event);
}

/// Emit the generic status-change event.
pub fn emit_credential_status_updated(
    env: &Env,
    credential_id: &BytesN<32>,
    previous_status: CredentialStatus,
    new_status: CredentialStatus,
    changed_by: &Address,
) {
    let event = CredentialStatusUpdatedEvent {
        credential_id: credential_id.clone(),
        previous_status,
        new_status,
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_CREDENTIAL_STATUS, credential_id.clone()), event);
}

/// Emit a credential revoked event.
pub fn emit_credential_revoked(env: &Env, credential_id: &BytesN<32>) {
    let event = CredentialStatusEvent {
        credential_id: credential_id.clone(),
    };
    env.events()
        .publish((TOPIC_CREDENTIAL_REVOKED, credential_id.clone()), event);
}

/// Emit a credential suspended event.
pub fn emit_credential_suspended(env: &Env, credential_id: &BytesN<32>) {
    let event = CredentialStatusEvent {
        credential_id: credential_id.clone(),
    };
    env.events()
        .publish((TOPIC_CREDENTIAL_SUSPENDED, credential_id.clone()), event);
}

/// Emit a credential reactivated event (suspension lifted).
pub fn emit_credential_reactivated(env: &Env, credential_id: &BytesN<32>) {
    let event = CredentialStatusEvent {
        credential_id: credential_id.clone(),
    };
    env.events()
        .publish((TOPIC_CREDENTIAL_REACTIVATED, credential_id.clone()), event);
}
