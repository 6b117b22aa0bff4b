use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when the administrative role changes hands.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEvent {
    pub previous_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Event published when a new patient record is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordCreatedEvent {
    pub record_id: String,
    pub owner: Address,
    pub timestamp: u64,
}

/// Event published when a record's content reference is replaced.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordUpdatedEvent {
    pub record_id: String,
    pub editor: Address,
    pub version: u64,
    pub timestamp: u64,
}

/// Event published when record ownership is transferred.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub record_id: String,
    pub previous_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

/// Event published when access is granted on a record.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub record_id: String,
    pub grantee: Address,
    pub can_edit: bool,
    pub duration_seconds: u64,
    pub expires_at: u64,
    pub timestamp: u64,
}

/// Event published when access is revoked.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub record_id: String,
    pub grantee: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when the admin role is reassigned.
pub fn publish_admin_changed(env: &Env, previous_admin: Address, new_admin: Address) {
    let topics = (symbol_short!("ADM_CHG"), new_admin.clone());
    let data = AdminChangedEvent {
        previous_admin,
        new_admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a new record is created.
/// This event includes the record identifier, owner, and creation timestamp.
pub fn publish_record_created(env: &Env, record_id: String, owner: Address) {
    let topics = (symbol_short!("REC_NEW"), owner.clone());
    let data = RecordCreatedEvent {
        record_id,
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a record's content reference is replaced.
/// This event includes the record identifier, editor, and new version.
pub fn publish_record_updated(env: &Env, record_id: String, editor: Address, version: u64) {
    let topics = (symbol_short!("REC_UPD"), editor.clone());
    let data = RecordUpdatedEvent {
        record_id,
        editor,
        version,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when record ownership changes hands.
pub fn publish_ownership_transferred(
    env: &Env,
    record_id: String,
    previous_owner: Address,
    new_owner: Address,
) {
    let topics = (
        symbol_short!("OWN_XFER"),
        previous_owner.clone(),
        new_owner.clone(),
    );
    let data = OwnershipTransferredEvent {
        record_id,
        previous_owner,
        new_owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when access is granted on a record.
/// This event includes the grantee, capability level, duration, and expiry.
pub fn publish_access_granted(
    env: &Env,
    record_id: String,
    grantee: Address,
    can_edit: bool,
    duration_seconds: u64,
    expires_at: u64,
) {
    let topics = (symbol_short!("ACC_GRT"), grantee.clone());
    let data = AccessGrantedEvent {
        record_id,
        grantee,
        can_edit,
        duration_seconds,
        expires_at,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when access to a record is revoked.
pub fn publish_access_revoked(env: &Env, record_id: String, grantee: Address) {
    let topics = (symbol_short!("ACC_REV"), grantee.clone());
    let data = AccessRevokedEvent {
        record_id,
        grantee,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
