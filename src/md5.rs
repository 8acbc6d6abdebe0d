//! MD5 message digest over byte slices, readers, and files.
//!
//! NOTE: MD5 is cryptographically broken. Nothing here attempts to be
//! constant-time or collision-resistant; use this for checksums and
//! content identification only, never for anything security-sensitive.
//! If you need a secure hash, use SHA-2 or SHA-3 from a vetted library.

use std::convert::TryInto;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::Result;

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// The size of one MD5 message block in bytes (512 bits).
pub const MD5_BLOCK_SIZE: usize = 64;

/// Read granularity for [`digest_stream`].
const STREAM_CHUNK_SIZE: usize = 4096;

/// The initial accumulator words (A, B, C, D) from the MD5 specification.
static INIT_STATE: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Padding source: a single 0x80 marker byte followed by zeros. Finalization
/// feeds a prefix of this buffer through the ordinary update path. The zeros
/// are spelled out; nothing relies on default-initialized storage.
static PADDING: [u8; MD5_BLOCK_SIZE] = [
    0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// The sine-derived constants (K) of MD5.
/// K[i] = floor(2^32 * abs(sin(i+1))) for i = 0..63
static K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-step left-rotation amounts, grouped by round.
static S: [u32; 64] = [
    // Round 1
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    // Round 2
    5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,
    // Round 3
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

/// Incremental MD5 state.
///
/// A state is single-use: construct with [`Md5::new`], feed it with
/// [`Md5::update`] any number of times, then consume it with
/// [`Md5::finalize`]. Because `finalize` takes the state by value, updating
/// after finalization is rejected at compile time rather than guarded at
/// runtime.
#[derive(Debug, Clone)]
pub struct Md5 {
    /// Message bytes absorbed so far. Wraps at 2^64; digests are only
    /// standards-conformant for inputs shorter than 2^64 bytes.
    size: u64,
    /// Running accumulator (A, B, C, D), touched only by the compression
    /// transform.
    state: [u32; 4],
    /// Unprocessed tail of the message. The write position is `size % 64`.
    pending: [u8; MD5_BLOCK_SIZE],
}

impl Md5 {
    /// Creates a fresh state with the standard initial accumulator.
    pub fn new() -> Self {
        Self {
            size: 0,
            state: INIT_STATE,
            pending: [0u8; MD5_BLOCK_SIZE],
        }
    }

    /// Absorbs `data` as the next piece of the message.
    ///
    /// Bytes across calls form one continuous stream; the digest does not
    /// depend on how the message is split between calls. Each time the
    /// working buffer fills to 64 bytes it is consumed by the compression
    /// transform.
    pub fn update(&mut self, data: &[u8]) {
        let mut offset = (self.size % MD5_BLOCK_SIZE as u64) as usize;
        self.size = self.size.wrapping_add(data.len() as u64);

        for &byte in data {
            self.pending[offset] = byte;
            offset += 1;

            if offset == MD5_BLOCK_SIZE {
                let block = block_words(&self.pending);
                compress(&mut self.state, &block);
                offset = 0;
            }
        }
    }

    /// Completes the hash and returns the 16-byte digest.
    ///
    /// Appends the standard MD5 padding (a 0x80 byte, zeros, then the
    /// original message length in bits as a 64-bit little-endian quantity),
    /// runs the transform over the final block, and serializes the
    /// accumulator little-endian.
    pub fn finalize(mut self) -> [u8; MD5_OUTPUT_SIZE] {
        let offset = (self.size % MD5_BLOCK_SIZE as u64) as usize;
        let pad_len = if offset < 56 { 56 - offset } else { 120 - offset };

        // The padding goes through the normal absorption path, so a message
        // tail of 56 bytes or more triggers one extra block transform here.
        self.update(&PADDING[..pad_len]);

        // The length words must describe the message itself, not the padding.
        self.size = self.size.wrapping_sub(pad_len as u64);

        let mut block = block_words(&self.pending);
        let bit_len = self.size.wrapping_mul(8);
        block[14] = bit_len as u32;
        block[15] = (bit_len >> 32) as u32;
        compress(&mut self.state, &block);

        let mut digest = [0u8; MD5_OUTPUT_SIZE];
        for (chunk, word) in digest.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        digest
    }
}

/// Reads a 64-byte block as sixteen little-endian 32-bit words.
fn block_words(bytes: &[u8; MD5_BLOCK_SIZE]) -> [u32; 16] {
    let mut words = [0u32; 16];
    for (i, word) in words.iter_mut().enumerate() {
        *word = u32::from_le_bytes(bytes[4 * i..4 * i + 4].try_into().unwrap());
    }
    words
}

/// The MD5 compression transform: folds one 16-word block into the
/// accumulator. 64 steps in four rounds of 16, all arithmetic wrapping
/// mod 2^32.
fn compress(state: &mut [u32; 4], block: &[u32; 16]) {
    let (mut a, mut b, mut c, mut d) = (state[0], state[1], state[2], state[3]);

    for i in 0..64 {
        let (f, g) = match i / 16 {
            0 => ((b & c) | (!b & d), i),
            1 => ((b & d) | (c & !d), (5 * i + 1) % 16),
            2 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let rotated = a
            .wrapping_add(f)
            .wrapping_add(K[i])
            .wrapping_add(block[g])
            .rotate_left(S[i]);

        let temp = d;
        d = c;
        c = b;
        b = b.wrapping_add(rotated);
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// Computes the MD5 digest of `data` in one shot.
pub fn digest(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    let mut hasher = Md5::new();
    hasher.update(data);
    hasher.finalize()
}

/// Computes the MD5 digest of everything `source` yields, reading in
/// fixed-size chunks until end of stream.
pub fn digest_stream<R: Read>(mut source: R) -> Result<[u8; MD5_OUTPUT_SIZE]> {
    let mut hasher = Md5::new();
    let mut chunk = [0u8; STREAM_CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let read = match source.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        hasher.update(&chunk[..read]);
        total += read as u64;
    }

    log::debug!("hashed {} bytes from stream", total);
    Ok(hasher.finalize())
}

/// Computes the MD5 digest of the file at `path`.
///
/// The file handle is scoped to this call and released when it returns,
/// whether the read succeeds or fails.
pub fn digest_file<P: AsRef<Path>>(path: P) -> Result<[u8; MD5_OUTPUT_SIZE]> {
    let file = File::open(path.as_ref())?;
    digest_stream(file)
}

/// Renders a 16-byte digest as 32 lowercase hex characters.
pub fn hex_string(digest: &[u8; MD5_OUTPUT_SIZE]) -> String {
    hex::encode(digest)
}

/// Convenience: MD5 of `data` as a lowercase hex string.
pub fn to_hash(data: &[u8]) -> String {
    hex_string(&digest(data))
}

/// Convenience: MD5 of the file at `path` as a lowercase hex string.
pub fn file_to_hash<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(hex_string(&digest_file(path)?))
}
