//! Authorization engine: per-record ownership plus time-bounded grants.
//!
//! Ownership is a permanent per-record capability; grants are the only
//! mechanism for delegated access. Expiry is evaluated lazily against the
//! ledger timestamp at check time, so stale grant rows persist until revoked
//! or overwritten.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::errors::ContractError;
use crate::{AccessGrant, TTL_EXTEND_TO, TTL_THRESHOLD};

const GRANT: Symbol = symbol_short!("GRANT");

fn grant_key(record_id: &String, grantee: &Address) -> (Symbol, String, Address) {
    (GRANT, record_id.clone(), grantee.clone())
}

pub fn read_grant(env: &Env, record_id: &String, grantee: &Address) -> Option<AccessGrant> {
    env.storage()
        .persistent()
        .get(&grant_key(record_id, grantee))
}

pub fn write_grant(env: &Env, record_id: &String, grantee: &Address, grant: &AccessGrant) {
    let key = grant_key(record_id, grantee);
    env.storage().persistent().set(&key, grant);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn remove_grant(env: &Env, record_id: &String, grantee: &Address) {
    env.storage()
        .persistent()
        .remove(&grant_key(record_id, grantee));
}

/// True iff a record exists for `record_id` and its owner equals `caller`.
/// Absence of the record yields false, not an error.
pub fn is_owner(env: &Env, record_id: &String, caller: &Address) -> bool {
    match crate::read_record(env, record_id) {
        Some(record) => record.owner == *caller,
        None => false,
    }
}

/// True iff an unexpired grant for (`record_id`, `caller`) satisfies the
/// requested capability level. An expired grant is indistinguishable from a
/// missing one.
pub fn has_access(
    env: &Env,
    record_id: &String,
    caller: &Address,
    require_edit: bool,
    now: u64,
) -> bool {
    let grant = match read_grant(env, record_id, caller) {
        Some(grant) => grant,
        None => return false,
    };
    if now >= grant.expires_at {
        return false;
    }
    if require_edit && !grant.can_edit {
        return false;
    }
    grant.can_view
}

/// The single gate used by every operation that reads or mutates a record.
pub fn authorize(
    env: &Env,
    record_id: &String,
    caller: &Address,
    require_edit: bool,
    now: u64,
) -> bool {
    is_owner(env, record_id, caller) || has_access(env, record_id, caller, require_edit, now)
}

/// Grant management requires true ownership, but a grant may precede the
/// record itself: the owner check only binds once the record exists. An
/// orphan grant is inert because record reads fail before grants are
/// consulted.
pub fn require_owner_if_exists(
    env: &Env,
    record_id: &String,
    caller: &Address,
) -> Result<(), ContractError> {
    if let Some(record) = crate::read_record(env, record_id) {
        if record.owner != *caller {
            return Err(ContractError::Unauthorized);
        }
    }
    Ok(())
}
