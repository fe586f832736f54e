// File: crates/history-chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry access used by the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
