//! tests/vector_tests.rs
//! Reference vectors computed with an independent PBKDF2 implementation
//! (Python hashlib.pbkdf2_hmac), split key || IV at the key word boundary.

mod common;

use common::{TEST_PASSWORD, TEST_SALT};
use hex::decode;
use openssl_pbkdf2_rs::{derive, derive_with, Hasher, OsSaltSource, Pbkdf2};
use serde::Deserialize;

fn load_json<T>(filename: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join(filename);

    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {filename}: {e}"));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}

#[derive(Debug, Deserialize)]
struct Pbkdf2Vector {
    password: String,
    salt_hex: String,
    hasher: String,
    iterations: u32,
    key_size: usize,
    iv_size: usize,
    key_hex: String,
    iv_hex: String,
}

#[test]
fn json_vectors() {
    let vectors: Vec<Pbkdf2Vector> = load_json("pbkdf2_vectors.json");
    assert!(!vectors.is_empty());

    for (i, v) in vectors.iter().enumerate() {
        let hasher: Hasher = v
            .hasher
            .parse()
            .unwrap_or_else(|e| panic!("Vector {i}: bad hasher {}: {e}", v.hasher));
        let salt =
            decode(&v.salt_hex).unwrap_or_else(|e| panic!("Vector {i} invalid salt hex: {e}"));

        // the hasher is passed as None: the primitive's default must be honoured
        let kdf = Pbkdf2::new(v.iterations, hasher);
        let result = derive_with(
            &kdf,
            &mut OsSaltSource,
            v.password.as_bytes(),
            v.key_size,
            v.iv_size,
            Some(salt.as_slice()),
            None,
        )
        .unwrap_or_else(|e| panic!("Vector {i} derive failed: {e:?}"));

        assert_eq!(
            hex::encode(result.key().expose_secret()),
            v.key_hex,
            "key mismatch in vector {i}"
        );
        assert_eq!(hex::encode(result.iv().expose_secret()), v.iv_hex, "IV mismatch in vector {i}");
        assert_eq!(result.salt(), salt.as_slice(), "salt mismatch in vector {i}");
    }
}

/// `derive("correcthorse", 8, 4, 0x0102030405060708)` with the default
/// configuration: PBKDF2-HMAC-SHA256, 250,000 rounds, 48 bytes.
#[test]
fn default_configuration_scenario() {
    let result = derive(TEST_PASSWORD, 8, 4, Some(&TEST_SALT[..]), None).unwrap();

    let stream = decode(
        "ac33f619b3fc0a5deece93c2ef0cc9875929d243c87cc250f06182495a727b2e\
         609a3fc622b6904b8cc42610fc056f15",
    )
    .unwrap();

    assert_eq!(result.key().expose_secret(), &stream[..32]);
    assert_eq!(result.iv().expose_secret(), &stream[32..]);
    assert_eq!(result.salt(), &TEST_SALT);
}

#[test]
fn sha1_scenario_at_default_rounds() {
    let result = derive(TEST_PASSWORD, 8, 4, Some(&TEST_SALT[..]), Some(Hasher::Sha1)).unwrap();

    let stream = decode(
        "0d7f5a863a420d775d6cf59449778c123bd70285dc2a6331f4a7f65572b1c9db\
         c6a33fabbbc621279bddba0261b76b39",
    )
    .unwrap();

    let mut joined = result.key().expose_secret().to_vec();
    joined.extend_from_slice(result.iv().expose_secret());
    assert_eq!(joined, stream);
}
