//! Append-only per-record audit trail.
//!
//! Entries are keyed by a per-record sequence number rather than the ledger
//! timestamp, so two events on the same record in the same second never
//! collide. The contract itself never reads entries back while authorizing;
//! the getters exist for external audit consumers.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::{TTL_EXTEND_TO, TTL_THRESHOLD};

const AUDIT: Symbol = symbol_short!("AUDIT");
const AUDIT_SEQ: Symbol = symbol_short!("AUD_SEQ");

/// The fixed vocabulary of audited operations.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuditAction {
    Create,
    Update,
    Read,
    Grant,
    Revoke,
    Transfer,
}

/// A single audit trail entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditEntry {
    pub accessor: Address,
    pub action: AuditAction,
    pub timestamp: u64,
}

fn seq_key(record_id: &String) -> (Symbol, String) {
    (AUDIT_SEQ, record_id.clone())
}

fn entry_key(record_id: &String, seq: u64) -> (Symbol, String, u64) {
    (AUDIT, record_id.clone(), seq)
}

/// Appends an entry under the next sequence number for `record_id`.
/// Called exactly once per successful audited operation.
pub fn append(env: &Env, record_id: &String, accessor: &Address, action: AuditAction, now: u64) {
    let seq: u64 = env.storage().persistent().get(&seq_key(record_id)).unwrap_or(0);

    let entry = AuditEntry {
        accessor: accessor.clone(),
        action,
        timestamp: now,
    };

    let key = entry_key(record_id, seq);
    env.storage().persistent().set(&key, &entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    let counter = seq_key(record_id);
    env.storage()
        .persistent()
        .set(&counter, &seq.saturating_add(1));
    env.storage()
        .persistent()
        .extend_ttl(&counter, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Number of entries recorded for `record_id`.
pub fn entry_count(env: &Env, record_id: &String) -> u64 {
    env.storage().persistent().get(&seq_key(record_id)).unwrap_or(0)
}

/// Fetches the entry at `seq`, if one has been recorded.
pub fn get_entry(env: &Env, record_id: &String, seq: u64) -> Option<AuditEntry> {
    env.storage().persistent().get(&entry_key(record_id, seq))
}
