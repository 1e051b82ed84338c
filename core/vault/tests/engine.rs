//! End-to-end engine scenarios.

use lockbox_common::Error;
use lockbox_vault::VaultEngine;

#[test]
fn fresh_vault_item_roundtrip() {
    let engine = VaultEngine::new();

    let record = engine
        .encrypt_file(b"hello world", "greeting.txt", "text/plain", "Tr0ub4dor&3")
        .unwrap();
    assert_eq!(record.plain_size, 11);
    assert_eq!(record.ciphertext.len(), 11);

    let plaintext = engine.decrypt_file(&record, "Tr0ub4dor&3").unwrap();
    assert_eq!(plaintext, b"hello world");

    let result = engine.decrypt_file(&record, "wrong-password");
    assert!(matches!(result, Err(Error::Decryption)));
}

#[test]
fn empty_plaintext_roundtrip() {
    let engine = VaultEngine::new();

    let record = engine.encrypt_file(b"", "empty", "application/octet-stream", "pw").unwrap();
    assert_eq!(record.plain_size, 0);
    assert!(record.ciphertext.is_empty());

    let plaintext = engine.decrypt_file(&record, "pw").unwrap();
    assert!(plaintext.is_empty());
}

#[test]
fn wrong_password_fails_closed() {
    let engine = VaultEngine::new();
    let record = engine.encrypt_file(b"secret", "s", "text/plain", "pw1").unwrap();

    // Never garbage plaintext, always the generic decryption error.
    let result = engine.decrypt_file(&record, "pw2");
    assert!(matches!(result, Err(Error::Decryption)));
}

#[test]
fn single_bit_flip_in_ciphertext_detected() {
    let engine = VaultEngine::new();
    let mut record = engine
        .encrypt_file(b"tamper target", "t", "text/plain", "pw")
        .unwrap();

    record.ciphertext[0] ^= 0x01;

    let result = engine.decrypt_file(&record, "pw");
    assert!(matches!(result, Err(Error::Decryption)));
}

#[test]
fn single_bit_flip_in_tag_detected() {
    let engine = VaultEngine::new();
    let mut record = engine
        .encrypt_file(b"tamper target", "t", "text/plain", "pw")
        .unwrap();

    record.tag[15] ^= 0x80;

    let result = engine.decrypt_file(&record, "pw");
    assert!(matches!(result, Err(Error::Decryption)));
}

#[test]
fn export_import_then_decrypt() {
    let engine = VaultEngine::new();
    let record = engine
        .encrypt_file(b"portable secret", "p.bin", "application/octet-stream", "pw")
        .unwrap();

    let text = engine.export_record(&record).unwrap();
    let restored = engine.import_record(&text).unwrap();
    assert_eq!(restored, record);

    let plaintext = engine.decrypt_file(&restored, "pw").unwrap();
    assert_eq!(plaintext, b"portable secret");
}

#[test]
fn corrupted_store_scenario() {
    // Flip one byte value inside the exported tag array, re-import, decrypt.
    let engine = VaultEngine::new();
    let record = engine
        .encrypt_file(b"stored data", "s", "text/plain", "pw")
        .unwrap();

    let text = engine.export_record(&record).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let tag0 = value["tag"][0].as_u64().unwrap();
    value["tag"][0] = serde_json::json!((tag0 ^ 0x01) as u8);

    let tampered = engine.import_record(&value.to_string()).unwrap();
    let result = engine.decrypt_file(&tampered, "pw");
    assert!(matches!(result, Err(Error::Decryption)));
}

#[test]
fn password_strength_scenario() {
    let engine = VaultEngine::new();

    assert!(engine.estimate_password_strength("aaaa") < 40);

    let generated = engine.generate_password(16).unwrap();
    assert!(engine.estimate_password_strength(&generated) >= 80);
}

#[test]
fn independent_engines_have_isolated_caches() {
    let engine1 = VaultEngine::new();
    let engine2 = VaultEngine::new();

    engine1.encrypt_file(b"data", "f", "text/plain", "pw").unwrap();

    assert_eq!(engine1.key_cache().len(), 1);
    assert!(engine2.key_cache().is_empty());
}

#[test]
fn record_metadata_carried_through() {
    let engine = VaultEngine::new();
    let record = engine
        .encrypt_file(b"pdf bytes", "report.pdf", "application/pdf", "pw")
        .unwrap();

    assert_eq!(record.name, "report.pdf");
    assert_eq!(record.mime_type, "application/pdf");
    assert_eq!(record.plain_size, 9);
    assert!(record.timestamp > 0);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Keep the case count modest: every encrypt pays a fresh 100k-iteration
        // derivation.
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn roundtrip_arbitrary_bytes(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let engine = VaultEngine::new();
            let record = engine.encrypt_file(&data, "f", "application/octet-stream", "pw").unwrap();
            let plaintext = engine.decrypt_file(&record, "pw").unwrap();
            prop_assert_eq!(plaintext, data);
        }
    }

    proptest! {
        #[test]
        fn codec_roundtrip_arbitrary_records(
            ciphertext in proptest::collection::vec(any::<u8>(), 0..512),
            name in "[a-zA-Z0-9._ -]{0,64}",
            mime in "[a-z]{1,10}/[a-z.+-]{1,20}",
            iv in proptest::array::uniform12(any::<u8>()),
            salt in proptest::array::uniform16(any::<u8>()),
            tag in proptest::array::uniform16(any::<u8>()),
            size in any::<u64>(),
            timestamp in any::<i64>(),
        ) {
            // No cryptography involved; the codec must round-trip any
            // well-formed record field-for-field.
            let record = lockbox_vault::EncryptedRecord {
                id: lockbox_common::RecordId::generate(),
                name,
                mime_type: mime,
                plain_size: size,
                ciphertext,
                iv,
                salt: lockbox_crypto::Salt::from_bytes(salt),
                tag,
                checksum: "00ff".to_string(),
                timestamp,
            };

            let engine = VaultEngine::new();
            let restored = engine.import_record(&engine.export_record(&record).unwrap()).unwrap();
            prop_assert_eq!(restored, record);
        }
    }
}
