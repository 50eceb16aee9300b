//! Content digesting and cache-busted URL construction.
//!
//! The digest of an asset is a pure function of byte content: the single
//! file's bytes, or the concatenation of every regular file under an assets
//! directory in a fixed traversal order. Directory metadata (names, mtimes,
//! modes) never contributes, so a digest only moves when bytes move.

use anyhow::{anyhow, Context, Result};
use md5::{Digest, Md5};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::hashing::{md5_file, md5_reader};
use crate::paths::validate_asset_name;

/// Compute the cache-busted URL for an asset: `<asset>?<hex-digest>`.
///
/// `asset` is a relative path resolved against `root` (the site's working
/// directory). Without `assets_dir` the asset file itself is hashed. With
/// `assets_dir` the digest covers the whole directory tree and `asset` is
/// only the label in the returned URL, so any change under the tree busts
/// every asset that shares it.
pub fn busted_url(root: &Path, asset: &str, assets_dir: Option<&Path>) -> Result<String> {
    validate_asset_name(asset)?;
    let digest = match assets_dir {
        Some(dir) => digest_tree(&resolve(root, dir))?,
        None => digest_file(&root.join(asset))?,
    };
    Ok(format!("{asset}?{digest}"))
}

/// Digest a single asset file.
pub fn digest_file(path: &Path) -> Result<String> {
    let metadata =
        fs::metadata(path).with_context(|| format!("stat asset {}", path.display()))?;
    if metadata.is_dir() {
        return Err(anyhow!(
            "asset is a directory, expected a file: {}",
            path.display()
        ));
    }
    md5_file(path).with_context(|| format!("hash asset {}", path.display()))
}

/// Digest every regular file under `dir` as one concatenated stream.
///
/// Traversal is depth-first with siblings sorted by file name, so the result
/// is stable across runs and filesystems. Directories contribute nothing;
/// symlinks are rejected rather than silently followed or skipped.
pub fn digest_tree(dir: &Path) -> Result<String> {
    let metadata =
        fs::metadata(dir).with_context(|| format!("stat assets dir {}", dir.display()))?;
    if !metadata.is_dir() {
        return Err(anyhow!(
            "assets path is not a directory: {}",
            dir.display()
        ));
    }
    let mut hasher = Md5::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk assets dir {}", dir.display()))?;
        if entry.file_type().is_symlink() {
            return Err(anyhow!(
                "symlink in assets dir: {}",
                entry.path().display()
            ));
        }
        if !entry.file_type().is_file() {
            continue;
        }
        let mut file = fs::File::open(entry.path())
            .with_context(|| format!("read asset {}", entry.path().display()))?;
        md5_reader(&mut file, &mut hasher)
            .with_context(|| format!("hash asset {}", entry.path().display()))?;
    }
    Ok(hex::encode(hasher.finalize()))
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
