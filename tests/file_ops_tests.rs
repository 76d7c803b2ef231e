// tests/file_ops_tests.rs
use fileseal::error::CoreError;
use fileseal::{decrypt_file, encrypt_file};

#[test]
fn test_encrypt_decrypt_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    let sealed = dir.path().join("encrypted_report.txt");
    let restored = dir.path().join("decrypted_report.txt");
    std::fs::write(&input, b"quarterly numbers").unwrap();

    let size = encrypt_file(input.as_path(), sealed.as_path(), "pw").unwrap();
    assert_eq!(size, 17);
    assert_ne!(std::fs::read(&sealed).unwrap(), b"quarterly numbers");

    let restored_size = decrypt_file(sealed.as_path(), restored.as_path(), "pw").unwrap();
    assert_eq!(restored_size, 17);
    assert_eq!(std::fs::read(&restored).unwrap(), b"quarterly numbers");
}

#[test]
fn test_encrypt_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");
    let output = dir.path().join("out.bin");

    let result = encrypt_file(missing.as_path(), output.as_path(), "pw");
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn test_decrypt_file_rejects_truncated_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("stub.bin");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, b"short").unwrap();

    let result = decrypt_file(input.as_path(), output.as_path(), "pw");
    assert!(matches!(result, Err(CoreError::MalformedInput)));
    assert!(!output.exists());
}
