//! Known Answer Tests against the NIST LWC submission vectors.
//!
//! The vector files are not vendored; point `SPARKLE_KAT_DIR` at a
//! directory holding the `LWC_AEAD_KAT_<key bits>_<nonce bits>.txt` files
//! from the submission package (or drop them into `tests/data/`) and every
//! vector is checked in both directions. Without them the tests skip.

use std::collections::HashMap;
use std::path::PathBuf;

use schwaemm::{
    AeadInPlace, Key, KeyInit, Nonce, Schwaemm, Schwaemm128_128, Schwaemm192_192, Schwaemm256_128,
    Schwaemm256_256, SchwaemmVariant, Tag,
};

fn kat_file(name: &str) -> Option<String> {
    let mut candidates = Vec::new();
    if let Some(dir) = std::env::var_os("SPARKLE_KAT_DIR") {
        candidates.push(PathBuf::from(dir).join(name));
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name));

    candidates.iter().find_map(|p| std::fs::read_to_string(p).ok())
}

/// Parse `Field = hexvalue` records separated by blank lines.
fn records(text: &str) -> Vec<HashMap<String, Vec<u8>>> {
    let mut out = Vec::new();
    let mut current = HashMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            continue;
        }
        let Some((field, value)) = line.split_once('=') else {
            continue;
        };
        let field = field.trim().to_string();
        let value = value.trim();
        let bytes = if field == "Count" {
            value.as_bytes().to_vec()
        } else {
            hex::decode(value).expect("malformed hex in KAT file")
        };
        current.insert(field, bytes);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn run_aead_kat<V: SchwaemmVariant>(name: &str) {
    let Some(text) = kat_file(name) else {
        eprintln!("skipping {name}: vector file not present");
        return;
    };

    let records = records(&text);
    assert!(!records.is_empty(), "{name} parsed to zero records");

    for record in &records {
        let key = Key::<Schwaemm<V>>::clone_from_slice(&record["Key"]);
        let nonce = Nonce::<Schwaemm<V>>::clone_from_slice(&record["Nonce"]);
        let pt = &record["PT"];
        let ad = &record["AD"];
        let ct = &record["CT"];

        // The KAT ciphertext carries the tag appended.
        let (body, tag) = ct.split_at(ct.len() - V::CAPACITY);
        let tag = Tag::<Schwaemm<V>>::clone_from_slice(tag);

        let cipher = Schwaemm::<V>::new(&key);

        let mut buffer = pt.clone();
        let produced = cipher
            .encrypt_in_place_detached(&nonce, ad, &mut buffer)
            .expect("encryption failed");
        assert_eq!(buffer, body, "{name}: ciphertext mismatch");
        assert_eq!(produced, tag, "{name}: tag mismatch");

        cipher
            .decrypt_in_place_detached(&nonce, ad, &mut buffer, &tag)
            .expect("KAT vector failed to verify");
        assert_eq!(&buffer, pt, "{name}: decryption mismatch");
    }
}

#[test]
fn schwaemm128_128_lwc_aead_kat() {
    run_aead_kat::<Schwaemm128_128>("LWC_AEAD_KAT_128_128.txt");
}

#[test]
fn schwaemm192_192_lwc_aead_kat() {
    run_aead_kat::<Schwaemm192_192>("LWC_AEAD_KAT_192_192.txt");
}

#[test]
fn schwaemm256_128_lwc_aead_kat() {
    run_aead_kat::<Schwaemm256_128>("LWC_AEAD_KAT_128_256.txt");
}

#[test]
fn schwaemm256_256_lwc_aead_kat() {
    run_aead_kat::<Schwaemm256_256>("LWC_AEAD_KAT_256_256.txt");
}
