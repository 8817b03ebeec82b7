//! # Role Storage and Authorization Guards
//!
//! Storage layer for the role relation. It enforces the two structural
//! invariants the rest of the system depends on:
//!
//! - Each account holds **exactly one** role at a time; assigning a new
//!   role implicitly revokes the old one.
//! - Per-role counters are exact: every successful role change adjusts the
//!   counters of both the old and the new role.
//!
//! The manager table is static: trustees administer the whole role set.
//! `Role::None` is the implicit state of an unknown account and is never
//! assignable.

use soroban_sdk::{contracttype, Address, Env};

use crate::Error;

/// The closed set of roles an account can hold.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    None = 0,
    Issuer = 1,
    Holder = 2,
    Trustee = 3,
}

/// Storage keys for the role relation.
#[contracttype]
#[derive(Clone)]
pub enum RoleKey {
    /// Role held by an account. Absent means `Role::None`.
    Account(Address),
    /// Number of accounts currently holding a role.
    Count(Role),
}

/// Role held by `account`; `Role::None` for unknown accounts.
pub fn get_role(env: &Env, account: &Address) -> Role {
    env.storage()
        .persistent()
        .get(&RoleKey::Account(account.clone()))
        .unwrap_or(Role::None)
}

/// Whether `account` currently holds exactly `role`.
pub fn has_role(env: &Env, account: &Address, role: Role) -> bool {
    get_role(env, account) == role
}

/// Number of accounts currently holding `role`.
pub fn get_count(env: &Env, role: Role) -> u64 {
    env.storage()
        .instance()
        .get(&RoleKey::Count(role))
        .unwrap_or(0)
}

fn set_count(env: &Env, role: Role, count: u64) {
    env.storage().instance().set(&RoleKey::Count(role), &count);
}

/// Move `account` to `role`, keeping the per-role counters exact.
///
/// Passing `Role::None` clears the account's entry entirely.
pub fn set_role(env: &Env, account: &Address, role: Role) {
    let old = get_role(env, account);
    if old == role {
        return;
    }
    if old != Role::None {
        set_count(env, old, get_count(env, old) - 1);
    }
    match role {
        Role::None => {
            env.storage()
                .persistent()
                .remove(&RoleKey::Account(account.clone()));
        }
        Role::Issuer | Role::Holder | Role::Trustee => {
            env.storage()
                .persistent()
                .set(&RoleKey::Account(account.clone()), &role);
            set_count(env, role, get_count(env, role) + 1);
        }
    }
}

/// The role allowed to assign or revoke `role`.
pub fn manager_of(role: Role) -> Result<Role, Error> {
    match role {
        Role::None => Err(Error::InvalidRole),
        Role::Issuer | Role::Holder | Role::Trustee => Ok(Role::Trustee),
    }
}

/// Gate: `caller` must hold the manager role for `role`.
pub fn require_manager(env: &Env, caller: &Address, role: Role) -> Result<(), Error> {
    let manager = manager_of(role)?;
    if has_role(env, caller, manager) {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

/// Gate: `account` must hold one of `allowed`.
pub fn require_any(env: &Env, account: &Address, allowed: &[Role]) -> Result<(), Error> {
    let role = get_role(env, account);
    if allowed.iter().any(|r| *r == role) {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}
