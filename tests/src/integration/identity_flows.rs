//! # Identity Flows
//!
//! Create, read, and update of identity records through the dispatcher.
//!
//! ## Flows Tested:
//!
//! 1. **Create → Read**: the stored payload is the canonical JSON record
//! 2. **Duplicate create**: rejected, first record kept
//! 3. **Update**: eleven fields replaced, key and reference number kept
//! 4. **Update on a missing key**: rejected without a write

#[cfg(test)]
mod tests {
    use super::super::{call, key};
    use idm_chaincode::codec;
    use idm_chaincode::prelude::*;
    use idm_chaincode::test_utils::{identity_args, identity_update_args, RecordingLedger};
    use serde_json::{json, Value};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn setup() -> (Chaincode, InMemoryLedger) {
        idm_telemetry::init_test_tracing();
        (Chaincode::new(ChaincodeConfig::default()), InMemoryLedger::new())
    }

    fn read_json(chaincode: &mut Chaincode, ledger: &mut InMemoryLedger, k: &str) -> Value {
        let response = call(chaincode, ledger, "ReadGeneralInfo", key(k));
        assert!(response.is_ok(), "{}", response.message);
        serde_json::from_slice(&response.payload).unwrap()
    }

    // =============================================================================
    // CREATE / READ
    // =============================================================================

    #[test]
    fn test_create_then_read_returns_wire_record() {
        let (mut chaincode, mut ledger) = setup();

        let response = call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("alice"));
        assert_eq!(response.status, Response::OK);
        assert!(response.payload.is_empty());

        let stored = read_json(&mut chaincode, &mut ledger, "alice");
        assert_eq!(
            stored,
            json!({
                "docType": "info",
                "username": "alice",
                "name": "Alice Smith",
                "fhname": "Robert Smith",
                "age": "34",
                "gender": "F",
                "dob": "1990-01-01",
                "pan": "ABCDE1234F",
                "aadhar": "1234-5678-9012",
                "currentaddress": "1 Main St, Springfield",
                "permanentaddress": "2 Oak Ave, Shelbyville",
                "cibilscore": "750",
                "cibildate": "2024-01-01",
                "uniquenumber": "REF-0001"
            })
        );
    }

    #[test]
    fn test_read_returns_ledger_bytes_verbatim() {
        let (mut chaincode, mut ledger) = setup();
        call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("alice"));

        let response = call(&mut chaincode, &mut ledger, "ReadGeneralInfo", key("alice"));
        assert_eq!(Some(response.payload), ledger.get_state("alice").unwrap());
    }

    #[test]
    fn test_duplicate_create_keeps_first_record() {
        let (mut chaincode, mut ledger) = setup();
        call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("alice"));

        let mut other = identity_args("alice");
        other[1] = "Mallory".to_string();
        let response = call(&mut chaincode, &mut ledger, "InitGeneralInfo", other);
        assert_eq!(response.status, Response::ERROR);
        assert_eq!(response.message, "this user name already exists: alice");

        let stored = read_json(&mut chaincode, &mut ledger, "alice");
        assert_eq!(stored["name"], "Alice Smith");
    }

    #[test]
    fn test_independent_keys_do_not_interfere() {
        let (mut chaincode, mut ledger) = setup();
        for name in ["alice", "bob", "carol"] {
            let response = call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args(name));
            assert!(response.is_ok());
        }
        assert_eq!(ledger.len(), 3);
        assert_eq!(read_json(&mut chaincode, &mut ledger, "bob")["username"], "bob");
    }

    // =============================================================================
    // UPDATE
    // =============================================================================

    #[test]
    fn test_update_replaces_mutable_fields_only() {
        let (mut chaincode, mut ledger) = setup();
        call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("alice"));

        let response = call(
            &mut chaincode,
            &mut ledger,
            "UpdateGeneralInfo",
            identity_update_args("alice"),
        );
        assert!(response.is_ok(), "{}", response.message);
        assert!(response.payload.is_empty());

        let stored = read_json(&mut chaincode, &mut ledger, "alice");
        assert_eq!(stored["docType"], "info");
        assert_eq!(stored["username"], "alice");
        assert_eq!(stored["uniquenumber"], "REF-0001");
        assert_eq!(stored["name"], "Alice Jones");
        assert_eq!(stored["fhname"], "Carl Jones");
        assert_eq!(stored["age"], "35");
        assert_eq!(stored["gender"], "X");
        assert_eq!(stored["dob"], "1989-12-31");
        assert_eq!(stored["pan"], "ZYXWV9876K");
        assert_eq!(stored["aadhar"], "9999-8888-7777");
        assert_eq!(stored["currentaddress"], "3 Elm St, Capital City");
        assert_eq!(stored["permanentaddress"], "4 Pine Rd, Ogdenville");
        assert_eq!(stored["cibilscore"], "812");
        assert_eq!(stored["cibildate"], "2025-06-30");
    }

    #[test]
    fn test_repeated_update_is_idempotent() {
        let (mut chaincode, mut ledger) = setup();
        call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("alice"));

        call(&mut chaincode, &mut ledger, "UpdateGeneralInfo", identity_update_args("alice"));
        let first = ledger.get_state("alice").unwrap();
        call(&mut chaincode, &mut ledger, "UpdateGeneralInfo", identity_update_args("alice"));
        assert_eq!(ledger.get_state("alice").unwrap(), first);
    }

    #[test]
    fn test_update_missing_key_writes_nothing() {
        idm_telemetry::init_test_tracing();
        let mut chaincode = Chaincode::default();
        let mut ledger = RecordingLedger::new(InMemoryLedger::new());

        let response = call(
            &mut chaincode,
            &mut ledger,
            "UpdateGeneralInfo",
            identity_update_args("ghost"),
        );
        assert_eq!(response.status, Response::ERROR);
        assert_eq!(response.message, "user name does not exist: ghost");
        assert_eq!(ledger.gets(), 1);
        assert_eq!(ledger.puts(), 0);
    }

    #[test]
    fn test_create_and_update_use_one_read_one_write() {
        idm_telemetry::init_test_tracing();
        let mut chaincode = Chaincode::default();
        let mut ledger = RecordingLedger::new(InMemoryLedger::new());

        call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("alice"));
        assert_eq!((ledger.gets(), ledger.puts()), (1, 1));

        call(&mut chaincode, &mut ledger, "UpdateGeneralInfo", identity_update_args("alice"));
        assert_eq!((ledger.gets(), ledger.puts()), (2, 2));

        call(&mut chaincode, &mut ledger, "ReadGeneralInfo", key("alice"));
        assert_eq!((ledger.gets(), ledger.puts()), (3, 2));
    }

    #[test]
    fn test_decoded_payload_matches_typed_record() {
        let (mut chaincode, mut ledger) = setup();
        call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("alice"));

        let response = call(&mut chaincode, &mut ledger, "ReadGeneralInfo", key("alice"));
        let record: IdentityRecord = codec::decode(&response.payload).unwrap();
        assert_eq!(
            record,
            IdentityRecord::from_args(&identity_args("alice")).unwrap()
        );
    }
}
