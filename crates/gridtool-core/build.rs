use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Read both local and workspace Cargo.toml to extract dependency versions
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cargo_toml_path = Path::new(&manifest_dir).join("Cargo.toml");
    let cargo_toml = fs::read_to_string(cargo_toml_path).unwrap();

    // Member manifests inherit versions, so the workspace manifest is the real source
    let workspace_cargo_toml_path = Path::new(&manifest_dir).join("../../Cargo.toml");
    let workspace_cargo_toml = fs::read_to_string(workspace_cargo_toml_path).unwrap_or_default();

    let mut image_version = "unknown";
    let mut egui_version = "unknown";

    for line in cargo_toml.lines().chain(workspace_cargo_toml.lines()) {
        if image_version == "unknown" && line.starts_with("image = ") {
            image_version = line.split('"').nth(1).unwrap_or("unknown");
        } else if egui_version == "unknown" && line.starts_with("egui = ") {
            egui_version = line.split('"').nth(1).unwrap_or("unknown");
        }
    }

    // These will be available as env!() variables at compile time
    println!("cargo:rustc-env=IMAGE_CRATE_VERSION={}", image_version);
    println!("cargo:rustc-env=EGUI_CRATE_VERSION={}", egui_version);
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=../../Cargo.toml");
}
