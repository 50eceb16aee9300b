//! Path hygiene for asset names.
//!
//! Asset names end up verbatim inside HTML `href`/`src` attributes, so they
//! must be clean relative paths before anything touches the filesystem.

use anyhow::{anyhow, Result};
use std::path::Path;

/// Validate that an asset name is a clean, relative path without `.` or `..`.
pub fn validate_asset_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("asset name is empty"));
    }
    // The name is emitted as `<name>?<digest>`, so a literal `?` or `#`
    // would corrupt the query string.
    if value.contains('?') || value.contains('#') {
        return Err(anyhow!("asset name contains reserved URL character"));
    }
    let path = Path::new(value);
    if path.is_absolute() {
        return Err(anyhow!("asset name must be relative"));
    }
    for comp in path.components() {
        match comp {
            std::path::Component::ParentDir
            | std::path::Component::RootDir
            | std::path::Component::Prefix(_)
            | std::path::Component::CurDir => {
                return Err(anyhow!("asset name contains invalid component"));
            }
            std::path::Component::Normal(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_names() {
        assert!(validate_asset_name("css/style.css").is_ok());
    }

    #[test]
    fn rejects_empty_absolute_and_traversal() {
        assert!(validate_asset_name("").is_err());
        assert!(validate_asset_name("  ").is_err());
        assert!(validate_asset_name("/etc/passwd").is_err());
        assert!(validate_asset_name("../secret.css").is_err());
        assert!(validate_asset_name("./style.css").is_err());
    }

    #[test]
    fn rejects_reserved_url_characters() {
        assert!(validate_asset_name("style.css?v=1").is_err());
        assert!(validate_asset_name("style.css#top").is_err());
    }
}
