//! # Document Flows
//!
//! Document create/read through the dispatcher, and how document keys share
//! the ledger with identity keys under each key layout.

#[cfg(test)]
mod tests {
    use super::super::{call, key};
    use idm_chaincode::prelude::*;
    use idm_chaincode::test_utils::{document_args, identity_args, identity_update_args};

    fn chaincode(layout: KeyLayout) -> Chaincode {
        idm_telemetry::init_test_tracing();
        Chaincode::new(ChaincodeConfig::default().with_key_layout(layout))
    }

    #[test]
    fn test_create_then_read_document() {
        let mut chaincode = chaincode(KeyLayout::Flat);
        let mut ledger = InMemoryLedger::new();

        let response = call(
            &mut chaincode,
            &mut ledger,
            "InitDocument",
            document_args("doc1", "CERT", "IMG"),
        );
        assert!(response.is_ok());

        let response = call(&mut chaincode, &mut ledger, "ReadDocument", key("doc1"));
        assert!(response.is_ok());
        assert_eq!(
            response.payload,
            br#"{"docType":"doc","uniquekey":"doc1","certificate":"CERT","image":"IMG"}"#
        );
    }

    #[test]
    fn test_duplicate_document_rejected() {
        let mut chaincode = chaincode(KeyLayout::Flat);
        let mut ledger = InMemoryLedger::new();
        call(&mut chaincode, &mut ledger, "InitDocument", document_args("doc1", "CERT", "IMG"));

        let response = call(
            &mut chaincode,
            &mut ledger,
            "InitDocument",
            document_args("doc1", "OTHER", "OTHER"),
        );
        assert_eq!(response.status, Response::ERROR);
        assert_eq!(response.message, "this unique key already exists: doc1");
    }

    #[test]
    fn test_read_missing_document() {
        let mut chaincode = chaincode(KeyLayout::Flat);
        let mut ledger = InMemoryLedger::new();

        let response = call(&mut chaincode, &mut ledger, "ReadDocument", key("nope"));
        assert_eq!(response.status, Response::ERROR);
        assert_eq!(response.message, "unique key does not exist: nope");
        assert!(response.payload.is_empty());
    }

    #[test]
    fn test_large_blobs_stored_intact() {
        let mut chaincode = chaincode(KeyLayout::Flat);
        let mut ledger = InMemoryLedger::new();
        let certificate = "Q0VSVA==".repeat(4096);
        let image = "\"quoted\" \\ and unicode: \u{e9}\u{4e2d}".to_string();

        call(
            &mut chaincode,
            &mut ledger,
            "InitDocument",
            document_args("big", &certificate, &image),
        );
        let response = call(&mut chaincode, &mut ledger, "ReadDocument", key("big"));
        let record: DocumentRecord = idm_chaincode::codec::decode(&response.payload).unwrap();
        assert_eq!(record.certificate_blob, certificate);
        assert_eq!(record.image_blob, image);
    }

    // =============================================================================
    // KEY NAMESPACES
    // =============================================================================

    #[test]
    fn test_flat_layout_cross_kind_collision() {
        let mut chaincode = chaincode(KeyLayout::Flat);
        let mut ledger = InMemoryLedger::new();
        call(&mut chaincode, &mut ledger, "InitDocument", document_args("k", "CERT", "IMG"));

        // Occupied by a document, so an identity create fails
        let response = call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("k"));
        assert_eq!(response.message, "this user name already exists: k");

        // Reading it as an identity hands back the document bytes
        let response = call(&mut chaincode, &mut ledger, "ReadGeneralInfo", key("k"));
        assert!(response.is_ok());
        assert!(String::from_utf8_lossy(&response.payload).contains("\"docType\":\"doc\""));

        // Updating it as an identity is refused and leaves it untouched
        let before = ledger.get_state("k").unwrap();
        let response = call(&mut chaincode, &mut ledger, "UpdateGeneralInfo", identity_update_args("k"));
        assert_eq!(response.status, Response::ERROR);
        assert!(response.message.starts_with("malformed info record under k"));
        assert_eq!(ledger.get_state("k").unwrap(), before);
    }

    #[test]
    fn test_prefixed_layout_keeps_kinds_apart() {
        let mut chaincode = chaincode(KeyLayout::KindPrefixed);
        let mut ledger = InMemoryLedger::new();

        assert!(call(&mut chaincode, &mut ledger, "InitDocument", document_args("k", "C", "I")).is_ok());
        assert!(call(&mut chaincode, &mut ledger, "InitGeneralInfo", identity_args("k")).is_ok());
        assert!(call(&mut chaincode, &mut ledger, "UpdateGeneralInfo", identity_update_args("k")).is_ok());

        let doc = call(&mut chaincode, &mut ledger, "ReadDocument", key("k"));
        assert!(String::from_utf8_lossy(&doc.payload).contains("\"docType\":\"doc\""));
        assert_eq!(ledger.keys().collect::<Vec<_>>(), vec!["doc:k", "info:k"]);
    }
}
