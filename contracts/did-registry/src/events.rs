//! # Structured Event Emissions for the DID Registry
//!
//! Lifecycle events for DID records. Each carries the identity as a topic
//! so indexers can follow a single identity's history without decoding
//! payloads.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Symbol};

/// Topic for DID creation events.
pub const TOPIC_DID_CREATED: Symbol = symbol_short!("did_crtd");
/// Topic for DID update events.
pub const TOPIC_DID_UPDATED: Symbol = symbol_short!("did_updt");
/// Topic for DID deactivation events.
pub const TOPIC_DID_DEACTIVATED: Symbol = symbol_short!("did_deact");

/// Event data for DID creation.
#[contracttype]
#[derive(Clone, Debug)]
pub struct DidCreatedEvent {
    /// Identity the record was created for.
    pub identity: Address,
    /// Document commitment stored at creation.
    pub document_hash: BytesN<32>,
    /// Content identifier of the off-chain document.
    pub document_cid: String,
}

/// Event data for DID document updates.
#[contracttype]
#[derive(Clone, Debug)]
pub struct DidUpdatedEvent {
    /// Identity whose record was updated.
    pub identity: Address,
    /// New document commitment.
    pub document_hash: BytesN<32>,
    /// Record version after the update.
    pub version: u32,
}

/// Event data for DID deactivation.
#[contracttype]
#[derive(Clone, Debug)]
pub struct DidDeactivatedEvent {
    /// Identity whose record was deactivated.
    pub identity: Address,
    /// Record version after deactivation.
    pub version: u32,
}

/// Emit a DID created event.
pub fn emit_did_created(
    env: &Env,
    identity: &Address,
    document_hash: &BytesN<32>,
    document_cid: &String,
) {
    let event = DidCreatedEvent {
        identity: identity.clone(),
        document_hash: document_hash.clone(),
        document_cid: document_cid.clone(),
    };
    env.events()
        .publish((TOPIC_DID_CREATED, identity.clone()), event);
}

/// Emit a DID updated event.
pub fn emit_did_updated(env: &Env, identity: &Address, document_hash: &BytesN<32>, version: u32) {
    let event = DidUpdatedEvent {
        identity: identity.clone(),
        document_hash: document_hash.clone(),
        version,
    };
    env.events()
        .publish((TOPIC_DID_UPDATED, identity.clone()), event);
}

/// Emit a DID deactivated event.
pub fn emit_did_deactivated(env: &Env, identity: &Address, version: u32) {
    let event = DidDeactivatedEvent {
        identity: identity.clone(),
        version,
    };
    env.events()
        .publish((TOPIC_DID_DEACTIVATED, identity.clone()), event);
}
