#![no_std]
//! # Role Control Contract
//!
//! Authorization authority for the Sovra registries. Maps each account to
//! at most one role and exposes the guard calls the DID and credential
//! registries use to gate privileged operations.
//!
//! ## Roles
//!
//! | Role    | Description                                          |
//! |---------|------------------------------------------------------|
//! | TRUSTEE | Administers roles; full control over the role table  |
//! | ISSUER  | Creates DIDs and issues credentials                  |
//! | HOLDER  | Creates DIDs and receives credentials                |
//!
//! The initializing address becomes the bootstrap trustee, so the system
//! always has at least one trustee after deployment.

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, BytesN, Env};

pub mod events;
pub mod roles;
pub mod signing_keys;

pub use roles::{Role, RoleKey};

#[cfg(test)]
mod test;

/// Errors surfaced by the role control contract. Codes 1–19 are reserved
/// for this contract so failures stay attributable when they propagate
/// through a dependent registry.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidRole = 4,
    KeyAlreadyBound = 5,
}

/// Contract configuration keys.
#[contracttype]
#[derive(Clone)]
pub enum ConfigKey {
    /// Bootstrap trustee; doubles as the initialization marker.
    Admin,
}

#[contract]
pub struct RoleControl;

#[contractimpl]
impl RoleControl {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time contract initialization. The initializing address must
    /// authorize and is assigned the TRUSTEE role.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&ConfigKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        env.storage().instance().set(&ConfigKey::Admin, &admin);
        roles::set_role(&env, &admin, Role::Trustee);
        Ok(())
    }

    // ── Role management ─────────────────────────────────────────────

    /// Assign `role` to `account`.
    ///
    /// The caller must hold the manager role for `role` (a trustee). An
    /// account holds exactly one role, so any previously held role is
    /// replaced and its counter adjusted. Assigning a role the account
    /// already holds is a no-op success. Returns the assigned role.
    pub fn assign_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<Role, Error> {
        caller.require_auth();
        roles::require_manager(&env, &caller, role)?;
        if roles::get_role(&env, &account) != role {
            roles::set_role(&env, &account, role);
            events::emit_role_assigned(&env, &account, role, &caller);
        }
        Ok(role)
    }

    /// Revoke `role` from `account`.
    ///
    /// Returns `true` if the account held exactly `role` and it was
    /// cleared, `false` if it held some other role (no-op, not an error).
    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<bool, Error> {
        caller.require_auth();
        roles::require_manager(&env, &caller, role)?;
        if roles::get_role(&env, &account) != role {
            return Ok(false);
        }
        roles::set_role(&env, &account, Role::None);
        events::emit_role_revoked(&env, &account, role, &caller);
        Ok(true)
    }

    // ── Read-only queries ───────────────────────────────────────────

    /// Whether `account` currently holds exactly `role`.
    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        roles::has_role(&env, &account, role)
    }

    /// Role held by `account`; `Role::None` for unknown accounts.
    pub fn get_role(env: Env, account: Address) -> Role {
        roles::get_role(&env, &account)
    }

    /// Number of accounts currently holding `role`.
    pub fn get_role_count(env: Env, role: Role) -> u64 {
        roles::get_count(&env, role)
    }

    /// Return the bootstrap trustee address.
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&ConfigKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    // ── Guards for dependent contracts ──────────────────────────────
    //
    // These fail instead of returning a boolean: the registries invoke
    // them as gates and rely on the failure unwinding the whole
    // transaction.

    /// Gate: `account` must be a trustee.
    pub fn is_trustee(env: Env, account: Address) -> Result<(), Error> {
        roles::require_any(&env, &account, &[Role::Trustee])
    }

    /// Gate: `account` must be an issuer.
    pub fn is_issuer(env: Env, account: Address) -> Result<(), Error> {
        roles::require_any(&env, &account, &[Role::Issuer])
    }

    /// Gate: `account` must be a holder.
    pub fn is_holder(env: Env, account: Address) -> Result<(), Error> {
        roles::require_any(&env, &account, &[Role::Holder])
    }

    /// Gate: `account` must be a trustee or an issuer.
    pub fn is_trustee_or_issuer(env: Env, account: Address) -> Result<(), Error> {
        roles::require_any(&env, &account, &[Role::Trustee, Role::Issuer])
    }

    /// Gate: `account` must hold any non-NONE role.
    pub fn is_trustee_or_issuer_or_holder(env: Env, account: Address) -> Result<(), Error> {
        roles::require_any(&env, &account, &[Role::Trustee, Role::Issuer, Role::Holder])
    }

    // ── Signing keys ────────────────────────────────────────────────

    /// Bind an uncompressed secp256k1 public key to `account` for use by
    /// the signed operation variants of the dependent registries.
    ///
    /// Only the account itself can bind or replace its key. A key already
    /// bound by a different account is rejected.
    pub fn set_signing_key(
        env: Env,
        account: Address,
        public_key: BytesN<65>,
    ) -> Result<(), Error> {
        account.require_auth();
        signing_keys::bind(&env, &account, &public_key)?;
        events::emit_signing_key_bound(&env, &account, &public_key);
        Ok(())
    }

    /// Key currently bound by `account`, if any.
    pub fn get_signing_key(env: Env, account: Address) -> Option<BytesN<65>> {
        signing_keys::key_of(&env, &account)
    }

    /// Account that bound `public_key`, if any.
    pub fn get_key_holder(env: Env, public_key: BytesN<65>) -> Option<Address> {
        signing_keys::holder_of(&env, &public_key)
    }
}
