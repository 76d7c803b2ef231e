// tests/crypto_tests.rs
use fileseal::consts::{BLOCK_LEN, IV_LEN};
use fileseal::error::CoreError;
use fileseal::{decrypt_to_vec, encrypt_to_vec};

#[test]
fn test_encrypt_decrypt_roundtrip_in_memory() {
    let plaintext = b"Attack at dawn!";
    let envelope = encrypt_to_vec(plaintext, "correct horse battery staple").unwrap();
    let decrypted = decrypt_to_vec(&envelope, "correct horse battery staple").unwrap();
    assert_eq!(plaintext.as_slice(), decrypted.as_slice());
}

#[test]
fn test_hello_world_envelope_geometry() {
    // 11 plaintext bytes pad to one block: 16 IV + 16 ciphertext
    let envelope = encrypt_to_vec(b"hello world", "secret123").unwrap();
    assert_eq!(envelope.len(), 32);

    let decrypted = decrypt_to_vec(&envelope, "secret123").unwrap();
    assert_eq!(decrypted.as_slice(), b"hello world");
}

#[test]
fn test_roundtrip_empty_plaintext() {
    // Empty input still gains a full padding block
    let envelope = encrypt_to_vec(b"", "pw").unwrap();
    assert_eq!(envelope.len(), IV_LEN + BLOCK_LEN);

    let decrypted = decrypt_to_vec(&envelope, "pw").unwrap();
    assert!(decrypted.is_empty());
}

#[test]
fn test_roundtrip_single_byte() {
    let envelope = encrypt_to_vec(b"x", "pw").unwrap();
    let decrypted = decrypt_to_vec(&envelope, "pw").unwrap();
    assert_eq!(decrypted.as_slice(), b"x");
}

#[test]
fn test_roundtrip_block_aligned_plaintext() {
    // Exactly one block of input → a second, all-padding block is appended
    let plaintext = [0x41u8; BLOCK_LEN];
    let envelope = encrypt_to_vec(&plaintext, "pw").unwrap();
    assert_eq!(envelope.len(), IV_LEN + 2 * BLOCK_LEN);

    let decrypted = decrypt_to_vec(&envelope, "pw").unwrap();
    assert_eq!(decrypted.as_slice(), plaintext.as_slice());
}

#[test]
fn test_roundtrip_large_buffer() {
    let plaintext = vec![0x42u8; 64 * 1024];
    let envelope = encrypt_to_vec(&plaintext, "pw").unwrap();
    let decrypted = decrypt_to_vec(&envelope, "pw").unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_encrypt_twice_uses_fresh_iv() {
    let first = encrypt_to_vec(b"same input", "same password").unwrap();
    let second = encrypt_to_vec(b"same input", "same password").unwrap();

    assert_ne!(first, second);
    assert_ne!(&first[..IV_LEN], &second[..IV_LEN]);
}

#[test]
fn test_decrypt_fails_with_wrong_password() {
    let envelope = encrypt_to_vec(b"secret payload", "password-one").unwrap();

    // A wrong key almost always breaks the padding; on the rare accidental
    // valid-padding collision the output must still differ from the input.
    match decrypt_to_vec(&envelope, "password-two") {
        Err(CoreError::InvalidPadding) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
        Ok(garbage) => assert_ne!(garbage.as_slice(), b"secret payload"),
    }
}

#[test]
fn test_decrypt_empty_envelope_is_malformed() {
    let result = decrypt_to_vec(b"", "pw");
    assert!(matches!(result, Err(CoreError::MalformedInput)));
}

#[test]
fn test_decrypt_short_envelope_is_malformed() {
    let result = decrypt_to_vec(b"short", "pw");
    assert!(matches!(result, Err(CoreError::MalformedInput)));
}

#[test]
fn test_decrypt_unaligned_ciphertext_is_malformed() {
    // Room for the IV, but a 5-byte ciphertext body
    let envelope = [0u8; 21];
    let result = decrypt_to_vec(&envelope, "pw");
    assert!(matches!(result, Err(CoreError::MalformedInput)));
}

#[test]
fn test_decrypt_failures_render_identically() {
    // No caller should be able to tell the rejection paths apart
    assert_eq!(
        CoreError::MalformedInput.to_string(),
        CoreError::InvalidPadding.to_string()
    );
}

#[test]
fn test_password_truncates_at_32_bytes() {
    let long = "0123456789abcdef0123456789abcdef-everything-past-here-is-ignored";
    let envelope = encrypt_to_vec(b"payload", long).unwrap();

    let decrypted = decrypt_to_vec(&envelope, &long[..32]).unwrap();
    assert_eq!(decrypted.as_slice(), b"payload");
}

#[test]
fn test_short_password_absorbs_trailing_nul() {
    // "abc" zero-pads to the same key as "abc\0"
    let envelope = encrypt_to_vec(b"payload", "abc").unwrap();
    let decrypted = decrypt_to_vec(&envelope, "abc\0").unwrap();
    assert_eq!(decrypted.as_slice(), b"payload");
}

#[test]
fn test_unicode_password_roundtrip() {
    let envelope = encrypt_to_vec(b"payload", "mật khẩu bảo mật").unwrap();
    let decrypted = decrypt_to_vec(&envelope, "mật khẩu bảo mật").unwrap();
    assert_eq!(decrypted.as_slice(), b"payload");
}
