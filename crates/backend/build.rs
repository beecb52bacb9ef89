use std::env;
use std::fs;
use std::path::Path;

// Puts config.toml and the deployment override file next to the binary,
// where the exe-relative discovery in shared::config expects them.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../config/admin_overrides.toml");

    // OUT_DIR is typically target/<profile>/build/backend-xxx/out;
    // walk up to target/<profile>.
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");
    let out_path = Path::new(&out_dir);
    let Some(target_dir) = out_path.ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=Could not find target profile directory, skipping config copy");
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    copy_if_present(
        &workspace_root.join("config.toml"),
        &target_dir.join("config.toml"),
    );
    copy_if_present(
        &workspace_root.join("config").join("admin_overrides.toml"),
        &target_dir.join("config").join("admin_overrides.toml"),
    );
}

fn copy_if_present(source: &Path, dest: &Path) {
    if !source.exists() {
        println!("cargo:warning={source:?} not found, the binary falls back to defaults");
        return;
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).unwrap_or_else(|e| panic!("Failed to create {parent:?}: {e}"));
    }
    fs::copy(source, dest).unwrap_or_else(|e| panic!("Failed to copy {source:?}: {e}"));
}
