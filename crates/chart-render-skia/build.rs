// File: crates/chart-render-skia/build.rs
// Summary: Link the Windows system libraries Skia's prebuilt binaries expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
