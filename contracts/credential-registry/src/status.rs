//! Credential status machine.
//!
//! ```text
//! Absent --issue--> Active <--> Suspended
//!                      \          /
//!                       v        v
//!                        Revoked (absorbing)
//! ```
//!
//! From `Active` the allowed targets are `Suspended` and `Revoked`; from
//! `Suspended`, `Active` and `Revoked`. `None` is never a valid target and
//! issuance is the only way out of Absent. Callers handle the absorbing
//! `Revoked` state and the same-status no-op before consulting this table.

use crate::types::{CredentialStatus, Error};

/// Check that `current -> new` is a legal walk on the status machine.
pub fn validate_transition(current: CredentialStatus, new: CredentialStatus) -> Result<(), Error> {
    let allowed = match current {
        CredentialStatus::Active => {
            matches!(new, CredentialStatus::Suspended | CredentialStatus::Revoked)
        }
        CredentialStatus::Suspended => {
            matches!(new, CredentialStatus::Active | CredentialStatus::Revoked)
        }
        CredentialStatus::None | CredentialStatus::Revoked => false,
    };
    if allowed {
        Ok(())
    } else {
        Err(Error::InvalidStatusTransition)
    }
}
