//! MD5 helpers for asset digests.
//!
//! MD5 is used for change detection only, never for security: the digest is
//! spliced into asset URLs so browser caches see content changes as new
//! resources, and a fast 128-bit digest is enough for that.

use md5::{Digest, Md5};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Hash a file by streaming its contents and returning a lowercase hex string.
pub fn md5_file(path: &Path) -> io::Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Md5::new();
    md5_reader(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Feed a reader's bytes into an existing hasher state.
///
/// Used by tree digests to hash the concatenation of many files without
/// buffering them all in memory.
pub(crate) fn md5_reader(reader: &mut impl Read, hasher: &mut Md5) -> io::Result<()> {
    let mut buffer = [0u8; 8192];
    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_fixture(content: &[u8]) -> String {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("style.css");
        std::fs::write(&path, content).expect("write fixture");
        md5_file(&path).expect("hash file")
    }

    #[test]
    fn md5_file_matches_known_vector() {
        assert_eq!(hash_fixture(b"body{}"), "aa676972bbd2b68e94ef8e91e81d20be");
    }

    #[test]
    fn md5_file_of_empty_file() {
        assert_eq!(hash_fixture(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
