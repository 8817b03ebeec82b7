//! Role lifecycle tests: bootstrap invariant, assignment/revocation,
//! role uniqueness, counter accuracy, and the guard entry points used by
//! the dependent registries.

use super::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

/// Helper: register the contract and return a client plus the bootstrap
/// trustee.
fn setup() -> (Env, RoleControlClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(RoleControl, ());
    let client = RoleControlClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin);
    (env, client, admin)
}

// ── Initialization ───────────────────────────────────────────────────

#[test]
fn initialize_bootstraps_trustee() {
    let (_env, client, admin) = setup();
    assert_eq!(client.get_role(&admin), Role::Trustee);
    assert!(client.has_role(&Role::Trustee, &admin));
    assert_eq!(client.get_role_count(&Role::Trustee), 1);
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn initialize_twice_fails() {
    let (_env, client, admin) = setup();
    assert_eq!(
        client.try_initialize(&admin),
        Err(Ok(Error::AlreadyInitialized))
    );
}

// ── Assignment ───────────────────────────────────────────────────────

#[test]
fn trustee_assigns_roles() {
    let (env, client, admin) = setup();
    let issuer = Address::generate(&env);
    let holder = Address::generate(&env);

    assert_eq!(client.assign_role(&admin, &Role::Issuer, &issuer), Role::Issuer);
    assert_eq!(client.assign_role(&admin, &Role::Holder, &holder), Role::Holder);

    assert_eq!(client.get_role(&issuer), Role::Issuer);
    assert_eq!(client.get_role(&holder), Role::Holder);
    assert_eq!(client.get_role_count(&Role::Issuer), 1);
    assert_eq!(client.get_role_count(&Role::Holder), 1);
}

#[test]
fn assignment_replaces_previous_role() {
    let (env, client, admin) = setup();
    let account = Address::generate(&env);

    client.assign_role(&admin, &Role::Issuer, &account);
    client.assign_role(&admin, &Role::Holder, &account);

    // Exactly one role at a time: the issuer entry is gone and both
    // counters reflect the move.
    assert_eq!(client.get_role(&account), Role::Holder);
    assert!(!client.has_role(&Role::Issuer, &account));
    assert_eq!(client.get_role_count(&Role::Issuer), 0);
    assert_eq!(client.get_role_count(&Role::Holder), 1);
}

#[test]
fn reassigning_same_role_is_noop() {
    let (env, client, admin) = setup();
    let account = Address::generate(&env);

    client.assign_role(&admin, &Role::Issuer, &account);
    assert_eq!(client.assign_role(&admin, &Role::Issuer, &account), Role::Issuer);

    assert_eq!(client.get_role_count(&Role::Issuer), 1);
}

#[test]
fn assignment_requires_manager_role() {
    let (env, client, admin) = setup();
    let issuer = Address::generate(&env);
    let outsider = Address::generate(&env);
    client.assign_role(&admin, &Role::Issuer, &issuer);

    // Neither an unknown account nor an issuer can manage roles.
    assert_eq!(
        client.try_assign_role(&outsider, &Role::Holder, &outsider),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        client.try_assign_role(&issuer, &Role::Holder, &outsider),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn assigning_none_is_invalid() {
    let (env, client, admin) = setup();
    let account = Address::generate(&env);
    assert_eq!(
        client.try_assign_role(&admin, &Role::None, &account),
        Err(Ok(Error::InvalidRole))
    );
}

#[test]
fn trustee_can_appoint_trustees() {
    let (env, client, admin) = setup();
    let second = Address::generate(&env);

    client.assign_role(&admin, &Role::Trustee, &second);
    assert_eq!(client.get_role_count(&Role::Trustee), 2);

    // The appointed trustee manages roles like the bootstrap one.
    let issuer = Address::generate(&env);
    client.assign_role(&second, &Role::Issuer, &issuer);
    assert_eq!(client.get_role(&issuer), Role::Issuer);
}

// ── Revocation ───────────────────────────────────────────────────────

#[test]
fn revoke_clears_role_and_counter() {
    let (env, client, admin) = setup();
    let issuer = Address::generate(&env);
    client.assign_role(&admin, &Role::Issuer, &issuer);

    assert!(client.revoke_role(&admin, &Role::Issuer, &issuer));
    assert_eq!(client.get_role(&issuer), Role::None);
    assert_eq!(client.get_role_count(&Role::Issuer), 0);
}

#[test]
fn revoking_role_not_held_returns_false() {
    let (env, client, admin) = setup();
    let account = Address::generate(&env);
    client.assign_role(&admin, &Role::Holder, &account);

    // Held role is Holder, not Issuer: no-op, not an error.
    assert!(!client.revoke_role(&admin, &Role::Issuer, &account));
    assert_eq!(client.get_role(&account), Role::Holder);
    assert_eq!(client.get_role_count(&Role::Holder), 1);
}

#[test]
fn revoke_requires_manager_role() {
    let (env, client, admin) = setup();
    let issuer = Address::generate(&env);
    let outsider = Address::generate(&env);
    client.assign_role(&admin, &Role::Issuer, &issuer);

    assert_eq!(
        client.try_revoke_role(&outsider, &Role::Issuer, &issuer),
        Err(Ok(Error::Unauthorized))
    );
}

// ── Guard entry points ───────────────────────────────────────────────

#[test]
fn guards_pass_for_matching_roles() {
    let (env, client, admin) = setup();
    let issuer = Address::generate(&env);
    let holder = Address::generate(&env);
    client.assign_role(&admin, &Role::Issuer, &issuer);
    client.assign_role(&admin, &Role::Holder, &holder);

    client.is_trustee(&admin);
    client.is_issuer(&issuer);
    client.is_holder(&holder);
    client.is_trustee_or_issuer(&admin);
    client.is_trustee_or_issuer(&issuer);
    client.is_trustee_or_issuer_or_holder(&holder);
}

#[test]
fn guards_fail_for_mismatched_roles() {
    let (env, client, admin) = setup();
    let holder = Address::generate(&env);
    let outsider = Address::generate(&env);
    client.assign_role(&admin, &Role::Holder, &holder);

    assert_eq!(client.try_is_trustee(&holder), Err(Ok(Error::Unauthorized)));
    assert_eq!(client.try_is_issuer(&admin), Err(Ok(Error::Unauthorized)));
    assert_eq!(
        client.try_is_trustee_or_issuer(&holder),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        client.try_is_trustee_or_issuer_or_holder(&outsider),
        Err(Ok(Error::Unauthorized))
    );
}
