#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

use super::*;
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{symbol_short, Env, IntoVal, TryFromVal, TryIntoVal, Val};

fn setup() -> (Env, MedicalRecordsContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    (env, client)
}

/// Returns the last published event as a `(topics, data)` tuple in the
/// legacy `(_, Vec<Val>, Val)` shape, decoding the SDK's XDR event form.
fn last_event(env: &Env) -> ((), soroban_sdk::Vec<Val>, Val) {
    use soroban_sdk::xdr::ContractEventBody;
    let all = env.events().all();
    let ev = all.events().last().unwrap().clone();
    let ContractEventBody::V0(body) = ev.body;
    let mut topics = soroban_sdk::Vec::new(env);
    for topic in body.topics.iter() {
        topics.push_back(Val::try_from_val(env, topic).unwrap());
    }
    let data = Val::try_from_val(env, &body.data).unwrap();
    ((), topics, data)
}

fn data_ref(env: &Env, fill: u8) -> BytesN<32> {
    BytesN::from_array(env, &[fill; 32])
}

#[test]
fn test_grant_then_check_within_window() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));

    env.ledger().set_timestamp(1000);
    client.grant_access(&alice, &record_id, &bob, &false, &100);

    env.ledger().set_timestamp(1050);
    let check = client.check_access(&record_id, &bob);
    assert_eq!(
        check,
        AccessCheck {
            has_access: true,
            can_edit: false,
            time_remaining: 50,
        }
    );

    // At the expiry instant the grant conveys nothing
    env.ledger().set_timestamp(1100);
    let check = client.check_access(&record_id, &bob);
    assert_eq!(
        check,
        AccessCheck {
            has_access: false,
            can_edit: false,
            time_remaining: 0,
        }
    );
}

#[test]
fn test_check_without_grant_is_negative() {
    let (env, client) = setup();

    let record_id = String::from_str(&env, "p1");
    let bob = Address::generate(&env);

    let check = client.check_access(&record_id, &bob);
    assert!(!check.has_access);
    assert!(!check.can_edit);
    assert_eq!(check.time_remaining, 0);
}

#[test]
fn test_view_grant_cannot_update() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));
    client.grant_access(&alice, &record_id, &bob, &false, &86400);

    let res = client.try_update_record(&bob, &record_id, &data_ref(&env, 2));
    assert!(matches!(res.unwrap_err(), Ok(ContractError::Unauthorized)));

    // Upgrading to an edit grant makes the same update succeed
    client.grant_access(&alice, &record_id, &bob, &true, &86400);
    client.update_record(&bob, &record_id, &data_ref(&env, 2));
    assert_eq!(client.get_record(&alice, &record_id).version, 2);
}

#[test]
fn test_expired_edit_grant_cannot_update() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    env.ledger().set_timestamp(1000);
    client.create_record(&alice, &record_id, &data_ref(&env, 1));
    client.grant_access(&alice, &record_id, &bob, &true, &100);

    env.ledger().set_timestamp(1100);
    let res = client.try_update_record(&bob, &record_id, &data_ref(&env, 2));
    assert!(matches!(res.unwrap_err(), Ok(ContractError::Unauthorized)));

    let res = client.try_get_record(&bob, &record_id);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::Unauthorized)));
}

#[test]
fn test_grant_zero_duration_fails() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));

    let res = client.try_grant_access(&alice, &record_id, &bob, &false, &0);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::InvalidInput)));
    assert!(!client.check_access(&record_id, &bob).has_access);
}

#[test]
fn test_self_grant_fails() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));

    let res = client.try_grant_access(&alice, &record_id, &alice, &true, &3600);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::InvalidInput)));

    let res = client.try_revoke_access(&alice, &record_id, &alice);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::InvalidInput)));
}

#[test]
fn test_grantee_cannot_sub_grant_or_revoke() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));
    client.grant_access(&alice, &record_id, &bob, &true, &86400);

    let res = client.try_grant_access(&bob, &record_id, &carol, &false, &3600);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::Unauthorized)));
    assert!(!client.check_access(&record_id, &carol).has_access);

    // Nor may a grantee revoke another grantee
    client.grant_access(&alice, &record_id, &carol, &false, &3600);
    let res = client.try_revoke_access(&bob, &record_id, &carol);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::Unauthorized)));
    assert!(client.check_access(&record_id, &carol).has_access);
}

#[test]
fn test_revoke_removes_access() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));
    client.grant_access(&alice, &record_id, &bob, &true, &86400);
    assert!(client.check_access(&record_id, &bob).has_access);

    client.revoke_access(&alice, &record_id, &bob);
    assert!(!client.check_access(&record_id, &bob).has_access);

    let res = client.try_get_record(&bob, &record_id);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::Unauthorized)));
}

#[test]
fn test_revoke_without_grant_is_idempotent() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));

    // No grant exists; revoking is still a success
    client.revoke_access(&alice, &record_id, &bob);
    assert!(!client.check_access(&record_id, &bob).has_access);
}

#[test]
fn test_regrant_overwrites() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));

    env.ledger().set_timestamp(1000);
    client.grant_access(&alice, &record_id, &bob, &true, &100);
    client.grant_access(&alice, &record_id, &bob, &false, &500);

    let check = client.check_access(&record_id, &bob);
    assert!(check.has_access);
    assert!(!check.can_edit);
    assert_eq!(check.time_remaining, 500);
}

#[test]
fn test_grant_on_missing_record_is_inert() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "unwritten");

    // Grants are keyed independently of records
    client.grant_access(&alice, &record_id, &bob, &true, &3600);
    assert!(client.check_access(&record_id, &bob).has_access);

    // ...but convey nothing until the record exists
    let res = client.try_get_record(&bob, &record_id);
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RecordNotFound)));
    let res = client.try_update_record(&bob, &record_id, &data_ref(&env, 1));
    assert!(matches!(res.unwrap_err(), Ok(ContractError::RecordNotFound)));
}

#[test]
fn test_grant_publishes_event() {
    let (env, client) = setup();

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let record_id = String::from_str(&env, "p1");

    client.create_record(&alice, &record_id, &data_ref(&env, 1));

    env.ledger().set_timestamp(1000);
    client.grant_access(&alice, &record_id, &bob, &true, &100);

    let event = last_event(&env);
    assert_eq!(
        event.1,
        (symbol_short!("ACC_GRT"), bob.clone()).into_val(&env)
    );
    let payload: events::AccessGrantedEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.grantee, bob);
    assert!(payload.can_edit);
    assert_eq!(payload.duration_seconds, 100);
    assert_eq!(payload.expires_at, 1100);
}
