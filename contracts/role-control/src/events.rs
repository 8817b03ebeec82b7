//! # Structured Event Emissions for Role Control
//!
//! Events for the role lifecycle and signing-key bindings, designed for
//! off-chain indexers tracking the authorization state of the system.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

use crate::Role;

/// Topic for role assignment events.
pub const TOPIC_ROLE_ASSIGNED: Symbol = symbol_short!("role_asgn");
/// Topic for role revocation events.
pub const TOPIC_ROLE_REVOKED: Symbol = symbol_short!("role_rvkd");
/// Topic for signing-key binding events.
pub const TOPIC_SIGNING_KEY_BOUND: Symbol = symbol_short!("key_bound");

/// Event data for role changes.
#[contracttype]
#[derive(Clone, Debug)]
pub struct RoleChangedEvent {
    /// Account whose role changed.
    pub account: Address,
    /// Role that was assigned or revoked.
    pub role: Role,
    /// Trustee that made the change.
    pub changed_by: Address,
}

/// Event data for signing-key bindings.
#[contracttype]
#[derive(Clone, Debug)]
pub struct SigningKeyBoundEvent {
    /// Account that bound the key.
    pub account: Address,
    /// Uncompressed secp256k1 public key.
    pub public_key: BytesN<65>,
}

/// Emit a role assigned event.
pub fn emit_role_assigned(env: &Env, account: &Address, role: Role, changed_by: &Address) {
    let event = RoleChangedEvent {
        account: account.clone(),
        role,
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_ROLE_ASSIGNED, account.clone()), event);
}

/// Emit a role revoked event.
pub fn emit_role_revoked(env: &Env, account: &Address, role: Role, changed_by: &Address) {
    let event = RoleChangedEvent {
        account: account.clone(),
        role,
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_ROLE_REVOKED, account.clone()), event);
}

/// Emit a signing-key bound event.
pub fn emit_signing_key_bound(env: &Env, account: &Address, public_key: &BytesN<65>) {
    let event = SigningKeyBoundEvent {
        account: account.clone(),
        public_key: public_key.clone(),
    };
    env.events()
        .publish((TOPIC_SIGNING_KEY_BOUND, account.clone()), event);
}
