//! Content-hash cache busting for static-site assets.
//!
//! Given a stylesheet or script path, [`busted_url`] returns
//! `<asset>?<hex-digest>` where the digest is the MD5 of the asset's bytes
//! (or of every file under an assets directory, concatenated in a fixed
//! order). A build step splices the result into `href`/`src` attributes so
//! browser caches invalidate exactly when content changes.
//!
//! Everything here is synchronous, read-only, and deterministic: same bytes
//! in, same URL out. There is no registry and no state; callers pass the
//! function into whatever templating step needs it.

pub mod digest;
pub mod hashing;
pub mod paths;

pub use digest::{busted_url, digest_file, digest_tree};
