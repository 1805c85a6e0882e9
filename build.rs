use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=csrc/numeric.c");
    println!("cargo:rerun-if-changed=csrc/fixtures/abi_v2.c");

    // C provider, linked as libnumeric_c.a
    cc::Build::new()
        .file("csrc/numeric.c")
        .warnings(true)
        .compile("numeric_c");

    let unix = env::var("CARGO_CFG_TARGET_FAMILY")
        .map(|family| family.split(',').any(|f| f == "unix"))
        .unwrap_or(false);
    if unix {
        build_abi_fixture();
    }
}

/// Shared library exporting a mismatched contract version, loaded by tests.
fn build_abi_fixture() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let ext = match env::var("CARGO_CFG_TARGET_OS").as_deref() {
        Ok("macos") => "dylib",
        _ => "so",
    };
    let lib = out_dir.join(format!("libabi_v2_fixture.{}", ext));

    let compiler = cc::Build::new().pic(true).get_compiler();
    let status = compiler
        .to_command()
        .arg("-shared")
        .arg("-o")
        .arg(&lib)
        .arg("csrc/fixtures/abi_v2.c")
        .status()
        .expect("failed to run the C compiler");
    assert!(status.success(), "building the ABI fixture library failed");

    println!("cargo:rustc-env=NUMERIC_BRIDGE_ABI_V2_FIXTURE={}", lib.display());
}
