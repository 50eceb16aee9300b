//! Cache-bust CLI entrypoint.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use cachebust::paths::validate_asset_name;
use cachebust::{busted_url, digest_tree};

/// CLI arguments for the cache-bust tool.
#[derive(Parser, Debug)]
#[command(
    name = "cachebust",
    version,
    about = "Append a content digest to asset names for cache busting"
)]
struct Args {
    /// Asset paths relative to the site root
    #[arg(required = true)]
    assets: Vec<String>,

    /// Digest this whole directory instead of each asset file
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    /// Site root that asset paths resolve against
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Emit a JSON array instead of one URL per line
    #[arg(long)]
    json: bool,
}

/// One busted asset as reported in `--json` output.
#[derive(Serialize, Debug)]
struct BustedAsset {
    asset: String,
    url: String,
    digest: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    // One tree walk shared by every asset when --assets-dir is given.
    let tree_digest = match &args.assets_dir {
        Some(dir) => {
            let resolved = if dir.is_absolute() {
                dir.clone()
            } else {
                args.root.join(dir)
            };
            let digest = digest_tree(&resolved)
                .with_context(|| format!("digest assets dir {}", resolved.display()))?;
            Some(digest)
        }
        None => None,
    };

    let mut busted = Vec::with_capacity(args.assets.len());
    for asset in &args.assets {
        let (url, digest) = match &tree_digest {
            Some(digest) => {
                validate_asset_name(asset).with_context(|| format!("asset {asset}"))?;
                (format!("{asset}?{digest}"), digest.clone())
            }
            None => {
                let url = busted_url(&args.root, asset, None)
                    .with_context(|| format!("cache-bust asset {asset}"))?;
                let digest = url
                    .rsplit_once('?')
                    .map(|(_, digest)| digest.to_string())
                    .unwrap_or_default();
                (url, digest)
            }
        };
        busted.push(BustedAsset {
            asset: asset.clone(),
            url,
            digest,
        });
    }

    if args.json {
        let rendered = serde_json::to_string_pretty(&busted).context("serialize JSON output")?;
        println!("{rendered}");
    } else {
        for entry in &busted {
            println!("{}", entry.url);
        }
    }
    Ok(())
}
