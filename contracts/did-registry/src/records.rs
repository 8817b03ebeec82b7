//! DID record storage and lifecycle checks.
//!
//! A record exists iff a value is stored under its identity key; status
//! then governs what may still happen to it. `Deactivated` is terminal, so
//! `read_active` is the precondition check for every mutating operation
//! after creation.

use soroban_sdk::{Address, BytesN, Env};

use crate::types::{DidKey, DidRecord, DidStatus, Error};

/// Stored record for `identity`, if any.
pub fn read(env: &Env, identity: &Address) -> Option<DidRecord> {
    env.storage()
        .persistent()
        .get(&DidKey::Record(identity.clone()))
}

/// Stored record for `identity`, which must be in the `Active` state.
pub fn read_active(env: &Env, identity: &Address) -> Result<DidRecord, Error> {
    match read(env, identity) {
        None => Err(Error::DidNotFound),
        Some(record) => match record.metadata.status {
            DidStatus::Active => Ok(record),
            DidStatus::Deactivated => Err(Error::DidDeactivated),
            // Stored records are written Active; None never persists.
            DidStatus::None => Err(Error::DidNotFound),
        },
    }
}

pub fn write(env: &Env, identity: &Address, record: &DidRecord) {
    env.storage()
        .persistent()
        .set(&DidKey::Record(identity.clone()), record);
}

/// Reject the all-zero document hash, which commits to nothing.
pub fn require_commitment(env: &Env, document_hash: &BytesN<32>) -> Result<(), Error> {
    if *document_hash == BytesN::from_array(env, &[0u8; 32]) {
        return Err(Error::InvalidDocumentHash);
    }
    Ok(())
}
