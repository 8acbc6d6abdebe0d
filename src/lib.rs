//! Fast MD5 digests of strings, byte streams, and files.
//!
//! The crate exposes a small incremental hasher ([`Md5`]) and one-shot
//! helpers that return either the raw 16-byte digest or its 32-character
//! lowercase hex form.
//!
//! MD5 is broken as a cryptographic hash. Use this crate for checksums and
//! content identification, not for security decisions.
//!
//! ```rust
//! assert_eq!(
//!     quickdigest::to_hash(b"abc"),
//!     "900150983cd24fb0d6963f7d28e17f72"
//! );
//! ```

pub mod error;
pub mod md5;

pub use error::{Error, Result};
pub use md5::{
    digest, digest_file, digest_stream, file_to_hash, hex_string, to_hash, Md5, MD5_BLOCK_SIZE,
    MD5_OUTPUT_SIZE,
};
