//! File- and stream-backed hashing against in-memory results.

use std::io::Write;

use quickdigest::{digest, digest_file, file_to_hash, Error};

#[test]
fn stream_digest_matches_in_memory_digest() {
    let content: Vec<u8> = (0u32..20_000).map(|i| (i % 251) as u8).collect();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&content).unwrap();
    file.flush().unwrap();

    let from_file = digest_file(file.path()).unwrap();
    assert_eq!(from_file, digest(&content));
}

#[test]
fn file_to_hash_known_vector() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello world").unwrap();
    file.flush().unwrap();

    let hash = file_to_hash(file.path()).unwrap();
    assert_eq!(hash, "5eb63bbbe01eeed093cb22bb8f5acdc3");
}

#[test]
fn empty_file_hashes_like_empty_input() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let hash = file_to_hash(file.path()).unwrap();
    assert_eq!(hash, "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn missing_file_yields_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("definitely-not-here.bin");

    let err = file_to_hash(&missing).unwrap_err();
    match err {
        Error::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
    }
}
