#![no_std]

pub mod access;
pub mod audit;
pub mod errors;
pub mod events;
pub mod validation;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, BytesN, Env, String, Symbol,
};

pub use audit::{AuditAction, AuditEntry};
pub use errors::{ContractError, ErrorCategory, ErrorSeverity};

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const RECORD: Symbol = symbol_short!("RECORD");

pub(crate) const TTL_THRESHOLD: u32 = 5184000;
pub(crate) const TTL_EXTEND_TO: u32 = 10368000;

/// Extends the time-to-live (TTL) for a record storage key.
/// This ensures the data remains accessible for the extended period.
fn extend_ttl_record_key(env: &Env, key: &(Symbol, String)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// A patient record: a 32-byte reference to off-chain encrypted content,
/// plus ownership and versioning metadata.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    pub owner: Address,
    pub data_ref: BytesN<32>,
    pub updated_at: u64,
    pub version: u64,
}

/// A time-bounded, capability-scoped delegation of access to one grantee.
/// `can_view` is always true once stored; the flag exists for forward
/// extensibility since every grant implies viewing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrant {
    pub can_view: bool,
    pub can_edit: bool,
    pub granted_at: u64,
    pub expires_at: u64,
}

/// Result of a `check_access` query.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessCheck {
    pub has_access: bool,
    pub can_edit: bool,
    pub time_remaining: u64,
}

pub(crate) fn read_record(env: &Env, record_id: &String) -> Option<PatientRecord> {
    env.storage().persistent().get(&(RECORD, record_id.clone()))
}

fn write_record(env: &Env, record_id: &String, record: &PatientRecord) {
    let key = (RECORD, record_id.clone());
    env.storage().persistent().set(&key, record);
    extend_ttl_record_key(env, &key);
}

#[contract]
pub struct MedicalRecordsContract;

#[contractimpl]
impl MedicalRecordsContract {
    /// Initialize the contract with an admin address
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Hand the admin role to a successor. Only the current admin may call
    /// this, and the role cannot be handed to oneself. Admin changes sit
    /// outside the per-record audit trail.
    pub fn change_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), ContractError> {
        caller.require_auth();

        let admin = Self::get_admin(env.clone())?;
        if caller != admin {
            return Err(ContractError::Unauthorized);
        }
        validation::validate_distinct(&new_admin, &caller)?;

        env.storage().instance().set(&ADMIN, &new_admin);

        events::publish_admin_changed(&env, admin, new_admin);

        Ok(())
    }

    /// Create a new patient record owned by the caller.
    pub fn create_record(
        env: Env,
        caller: Address,
        record_id: String,
        data_ref: BytesN<32>,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        validation::validate_record_id(&record_id)?;
        if read_record(&env, &record_id).is_some() {
            return Err(ContractError::RecordAlreadyExists);
        }

        let now = env.ledger().timestamp();
        let record = PatientRecord {
            owner: caller.clone(),
            data_ref,
            updated_at: now,
            version: 1,
        };
        write_record(&env, &record_id, &record);

        audit::append(&env, &record_id, &caller, AuditAction::Create, now);
        events::publish_record_created(&env, record_id, caller);

        Ok(())
    }

    /// Replace a record's content reference. Requires edit capability: the
    /// owner, or an unexpired grant with `can_edit`. The version counter
    /// increases by exactly one per successful update.
    pub fn update_record(
        env: Env,
        caller: Address,
        record_id: String,
        data_ref: BytesN<32>,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        validation::validate_record_id(&record_id)?;
        let mut record = read_record(&env, &record_id).ok_or(ContractError::RecordNotFound)?;

        let now = env.ledger().timestamp();
        if !access::authorize(&env, &record_id, &caller, true, now) {
            return Err(ContractError::Unauthorized);
        }

        record.data_ref = data_ref;
        record.updated_at = now;
        record.version = record.version.saturating_add(1);
        write_record(&env, &record_id, &record);

        audit::append(&env, &record_id, &caller, AuditAction::Update, now);
        events::publish_record_updated(&env, record_id, caller, record.version);

        Ok(())
    }

    /// Transfer record ownership. Requires true ownership, not merely an
    /// edit grant. The version counter is preserved, and existing grants
    /// (keyed by record, not owner) remain valid until expiry or revocation.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        record_id: String,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        validation::validate_record_id(&record_id)?;
        validation::validate_distinct(&new_owner, &caller)?;
        let mut record = read_record(&env, &record_id).ok_or(ContractError::RecordNotFound)?;

        if record.owner != caller {
            return Err(ContractError::Unauthorized);
        }

        let now = env.ledger().timestamp();
        record.owner = new_owner.clone();
        record.updated_at = now;
        write_record(&env, &record_id, &record);

        audit::append(&env, &record_id, &caller, AuditAction::Transfer, now);
        events::publish_ownership_transferred(&env, record_id, caller, new_owner);

        Ok(())
    }

    /// Fetch a record. Viewing requires the owner or any unexpired grant,
    /// and the read is itself recorded in the audit trail.
    pub fn get_record(
        env: Env,
        caller: Address,
        record_id: String,
    ) -> Result<PatientRecord, ContractError> {
        caller.require_auth();

        validation::validate_record_id(&record_id)?;
        let record = read_record(&env, &record_id).ok_or(ContractError::RecordNotFound)?;

        let now = env.ledger().timestamp();
        if !access::authorize(&env, &record_id, &caller, false, now) {
            return Err(ContractError::Unauthorized);
        }

        audit::append(&env, &record_id, &caller, AuditAction::Read, now);

        Ok(record)
    }

    /// Grant time-bounded access on a record to another identity. Only the
    /// record's owner may grant, and a grantee can never sub-grant. The
    /// record itself need not exist yet; an orphan grant is inert until a
    /// record with that identifier is created. Re-granting overwrites.
    pub fn grant_access(
        env: Env,
        caller: Address,
        record_id: String,
        grantee: Address,
        can_edit: bool,
        duration_seconds: u64,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        validation::validate_record_id(&record_id)?;
        validation::validate_distinct(&grantee, &caller)?;
        validation::validate_duration(duration_seconds)?;
        access::require_owner_if_exists(&env, &record_id, &caller)?;

        let now = env.ledger().timestamp();
        let expires_at = now.saturating_add(duration_seconds);
        let grant = AccessGrant {
            can_view: true,
            can_edit,
            granted_at: now,
            expires_at,
        };
        access::write_grant(&env, &record_id, &grantee, &grant);

        audit::append(&env, &record_id, &caller, AuditAction::Grant, now);
        events::publish_access_granted(
            &env,
            record_id,
            grantee,
            can_edit,
            duration_seconds,
            expires_at,
        );

        Ok(())
    }

    /// Revoke a grantee's access. Idempotent: revoking an absent grant
    /// succeeds and leaves state unchanged except for the audit trail,
    /// which records the revocation attempt unconditionally.
    pub fn revoke_access(
        env: Env,
        caller: Address,
        record_id: String,
        grantee: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        validation::validate_record_id(&record_id)?;
        validation::validate_distinct(&grantee, &caller)?;
        access::require_owner_if_exists(&env, &record_id, &caller)?;

        let now = env.ledger().timestamp();
        access::remove_grant(&env, &record_id, &grantee);

        audit::append(&env, &record_id, &caller, AuditAction::Revoke, now);
        events::publish_access_revoked(&env, record_id, grantee);

        Ok(())
    }

    /// Check a grantee's current access on a record. Callable by anyone,
    /// never fails, and writes nothing: an expired or missing grant yields
    /// an all-negative result.
    pub fn check_access(env: Env, record_id: String, grantee: Address) -> AccessCheck {
        let now = env.ledger().timestamp();
        match access::read_grant(&env, &record_id, &grantee) {
            Some(grant) if now < grant.expires_at => AccessCheck {
                has_access: grant.can_view,
                can_edit: grant.can_edit,
                time_remaining: grant.expires_at.saturating_sub(now),
            },
            _ => AccessCheck {
                has_access: false,
                can_edit: false,
                time_remaining: 0,
            },
        }
    }

    /// Number of audit entries recorded for a record.
    pub fn get_audit_count(env: Env, record_id: String) -> u64 {
        audit::entry_count(&env, &record_id)
    }

    /// Fetch a single audit entry by sequence number.
    pub fn get_audit_entry(env: Env, record_id: String, seq: u64) -> Option<AuditEntry> {
        audit::get_entry(&env, &record_id, seq)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}


#[cfg(test)]
mod test_access;
