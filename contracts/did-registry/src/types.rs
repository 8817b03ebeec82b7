//! Storage types and errors for the DID registry.

use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

/// Lifecycle status of a DID record. The only transition is
/// `Active -> Deactivated`; deactivation is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DidStatus {
    None = 0,
    Active = 1,
    Deactivated = 2,
}

/// Lifecycle metadata kept alongside the document commitment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DidMetadata {
    /// Controlling address; fixed to the identity at creation.
    pub owner: Address,
    /// Ledger timestamp at creation.
    pub created: u64,
    /// Ledger timestamp at the last write.
    pub updated: u64,
    /// Ledger sequence number at the last write.
    pub version: u32,
    pub status: DidStatus,
}

/// A DID record: commitment to an off-chain canonicalized document plus
/// lifecycle metadata.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DidRecord {
    /// 32-byte commitment to the canonicalized DID document.
    pub document_hash: BytesN<32>,
    /// Opaque content identifier of the off-chain document.
    pub document_cid: String,
    pub metadata: DidMetadata,
}

/// Result of [`validate_did`](crate::DidRegistry::validate_did), the
/// single cross-contract call the credential registry makes per party, so
/// it never fails and carries everything a validator needs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DidValidation {
    pub exists: bool,
    pub active: bool,
    /// Controlling address, when the record exists.
    pub owner: Option<Address>,
}

/// Storage keys for the DID registry.
#[contracttype]
#[derive(Clone)]
pub enum DidKey {
    /// Role control contract address; doubles as the initialization marker.
    RoleControl,
    /// DID record keyed by identity.
    Record(Address),
}

/// Errors surfaced by the DID registry. Codes 100–119 are reserved for
/// this contract so failures stay attributable when they propagate
/// through the credential registry.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    DidNotFound = 102,
    DidAlreadyExists = 103,
    DidDeactivated = 104,
    InvalidDocumentHash = 105,
    NotIdentityOwner = 106,
    UnknownSigner = 107,
}
