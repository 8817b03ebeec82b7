//! # Signed-Operation Digests and Signer Recovery
//!
//! Shared helpers for the signed (relayed) variants of registry operations.
//! A signed operation lets a third party submit a transaction on behalf of
//! the actual signer without that signer paying for the submission: the
//! contract rebuilds the operation digest from its own address and the call
//! arguments, recovers the secp256k1 public key from the supplied signature,
//! and holds the recovered signer to the same authorization rules as a
//! direct caller.
//!
//! ## Digest layout
//!
//! ```text
//! keccak256( 0x19 || 0x00 || xdr(contract) || xdr(identity)
//!            || ascii(op_tag) || payload... )
//! ```
//!
//! Payload components are appended in declaration order: `BytesN<32>`
//! components raw, `String` components XDR-encoded. The layout is fixed;
//! off-chain signers must reproduce it byte-exactly. The leading
//! `0x19 0x00` pair marks the bytes as a structured signing payload, so an
//! operation signature can never collide with a signature over ordinary
//! data. Replay scoping comes from the domain separation itself: the
//! verifying contract's address, the subject identity, and the operation
//! tag are all part of the digest.

use soroban_sdk::crypto::Hash;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

/// Operation tag for DID creation.
pub const OP_CREATE_DID: &str = "createDid";
/// Operation tag for DID document updates.
pub const OP_UPDATE_DID: &str = "updateDid";
/// Operation tag for DID deactivation.
pub const OP_DEACTIVATE_DID: &str = "deactivateDid";
/// Operation tag for credential issuance.
pub const OP_ISSUE_CREDENTIAL: &str = "issueCredential";

/// Accumulates the byte string for one signed operation.
///
/// Components must be pushed in the same order as the operation's
/// declared arguments.
pub struct SignedOperation {
    buf: Bytes,
}

impl SignedOperation {
    /// Start a digest for `op` on `identity`, domain-separated by the
    /// verifying contract's address.
    pub fn new(env: &Env, contract: &Address, identity: &Address, op: &str) -> Self {
        let mut buf = Bytes::from_array(env, &[0x19u8, 0x00u8]);
        buf.append(&contract.clone().to_xdr(env));
        buf.append(&identity.clone().to_xdr(env));
        buf.append(&Bytes::from_slice(env, op.as_bytes()));
        Self { buf }
    }

    /// Append a 32-byte component (document hash, credential id), raw.
    pub fn push_hash(mut self, hash: &BytesN<32>) -> Self {
        let raw: Bytes = hash.clone().into();
        self.buf.append(&raw);
        self
    }

    /// Append an opaque string component (a CID), XDR-encoded.
    pub fn push_string(mut self, env: &Env, value: &String) -> Self {
        self.buf.append(&value.clone().to_xdr(env));
        self
    }

    /// Finish the accumulation: keccak-256 over the collected bytes.
    pub fn digest(self, env: &Env) -> Hash<32> {
        env.crypto().keccak256(&self.buf)
    }
}

/// Recover the uncompressed secp256k1 public key (65 bytes, SEC-1 `0x04`
/// prefix) that produced `(sig_v, sig_r, sig_s)` over `digest`.
///
/// `sig_v` is accepted either as a raw recovery id (`0`/`1`) or in the
/// legacy `27`/`28` convention. An out-of-range recovery id or a signature
/// that does not recover to a valid curve point traps the host call,
/// aborting the whole transaction.
pub fn recover_signer(
    env: &Env,
    digest: &Hash<32>,
    sig_v: u32,
    sig_r: &BytesN<32>,
    sig_s: &BytesN<32>,
) -> BytesN<65> {
    let recovery_id = if sig_v >= 27 { sig_v - 27 } else { sig_v };
    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&sig_r.to_array());
    sig[32..].copy_from_slice(&sig_s.to_array());
    let signature = BytesN::from_array(env, &sig);
    env.crypto().secp256k1_recover(digest, &signature, recovery_id)
}
