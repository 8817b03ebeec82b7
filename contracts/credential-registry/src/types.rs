//! Storage types and errors for the credential registry.

use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

/// Status of a credential record.
///
/// `None` is the implicit state of an unknown id and never a valid
/// transition target; `Revoked` is absorbing.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CredentialStatus {
    None = 0,
    Active = 1,
    Revoked = 2,
    Suspended = 3,
}

/// Issuance metadata kept alongside the issuer reference.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialMetadata {
    /// Ledger timestamp at issuance.
    pub issuance_date: u64,
    /// Expiry timestamp; 0 when unset.
    pub expiration_date: u64,
    pub status: CredentialStatus,
}

/// A credential record. The full credential lives off-chain; on-chain
/// state is the issuer, the content identifier, and the status lifecycle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialRecord {
    /// Account that issued the credential; the only account allowed to
    /// change its status.
    pub issuer: Address,
    /// Opaque content identifier of the off-chain credential.
    pub credential_cid: String,
    pub metadata: CredentialMetadata,
}

/// Storage keys for the credential registry.
#[contracttype]
#[derive(Clone)]
pub enum CredentialKey {
    /// Role control contract address; doubles as the initialization marker.
    RoleControl,
    /// DID registry contract address.
    DidRegistry,
    /// Credential record keyed by credential id.
    Record(BytesN<32>),
}

/// Errors surfaced by the credential registry. Codes 200–219 are reserved
/// for this contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 200,
    NotInitialized = 201,
    CredentialNotFound = 202,
    CredentialAlreadyExists = 203,
    CredentialRevoked = 204,
    InvalidStatusTransition = 205,
    SelfIssuance = 206,
    NotCredentialIssuer = 207,
    IssuerDidInvalid = 208,
    HolderDidInvalid = 209,
    UnknownSigner = 210,
}
