use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use icons_core::loader::{LoadOptions, discover_or_empty};

/// Directory scanned for icons, relative to the crate root.
const ICON_ROOT: &str = "assets/icons";

/// Url prefix the icons are served under (Trunk copies `assets/icons` to `icons/`).
const URL_PREFIX: &str = "icons";

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let icon_root = crate_root.join(ICON_ROOT);
    println!("cargo:rerun-if-changed={}", icon_root.display());

    let options = LoadOptions::default().with_url_prefix(URL_PREFIX);
    let assets = discover_or_empty(&icon_root, &options)
        .unwrap_or_else(|err| panic!("failed to scan {}: {err}", icon_root.display()));

    let mut generated = String::from(
        "/// Build-time generated icon catalog: `(path, url)` pairs, paths relative to the icon root.\n\
pub const ICON_CATALOG: &[(&str, &str)] = &[\n",
    );
    for asset in &assets {
        writeln!(generated, "    ({:?}, {:?}),", asset.path, asset.url).expect("write to string");
    }
    generated.push_str("];\n");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("icon_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
