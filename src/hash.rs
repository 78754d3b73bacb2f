//! BLAKE3 content hashing for cache-busting file names

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{self, AssetplanError, Result};

/// Default number of hex characters kept from a digest
pub const DEFAULT_HASH_LENGTH: usize = 20;

/// Accepted range for the hash length
pub const HASH_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 4..=64;

const READ_BUFFER_SIZE: usize = 8192;

/// Fingerprint of asset contents
///
/// Implementations must be pure: the same bytes always give the same token,
/// and the token must be a non-empty string safe to place in a file name.
pub trait ContentHasher: Send + Sync {
    fn hash(&self, bytes: &[u8]) -> String;

    /// Hash everything `reader` yields; must equal `hash` over the same bytes
    fn hash_reader(&self, reader: &mut dyn Read) -> io::Result<String> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.hash(&bytes))
    }
}

/// Hash a file's contents without loading it into memory at once
pub fn hash_file(hasher: &dyn ContentHasher, path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| error::fs::read_failed(path, &e))?;
    let mut reader = BufReader::new(file);
    hasher
        .hash_reader(&mut reader)
        .map_err(|e| error::fs::read_failed(path, &e))
}

/// Truncated BLAKE3 hex digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blake3Hasher {
    length: usize,
}

impl Blake3Hasher {
    pub fn new(length: usize) -> Result<Self> {
        if !HASH_LENGTH_RANGE.contains(&length) {
            return Err(AssetplanError::InvalidHashLength { length });
        }
        Ok(Self { length })
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self {
            length: DEFAULT_HASH_LENGTH,
        }
    }
}

impl ContentHasher for Blake3Hasher {
    fn hash(&self, bytes: &[u8]) -> String {
        self.truncate(&blake3::hash(bytes))
    }

    fn hash_reader(&self, reader: &mut dyn Read) -> io::Result<String> {
        let mut hasher = blake3::Hasher::new();
        let mut buffer = [0u8; READ_BUFFER_SIZE];

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(self.truncate(&hasher.finalize()))
    }
}

impl Blake3Hasher {
    fn truncate(&self, digest: &blake3::Hash) -> String {
        digest.to_hex().as_str()[..self.length].to_string()
    }
}
