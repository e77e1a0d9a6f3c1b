fn main() {
    // Only the handheld firmware needs the esp-hal and defmt linker scripts.
    if std::env::var_os("CARGO_FEATURE_ESP32S3").is_none() {
        return;
    }

    if std::env::var("PROFILE").unwrap_or_default() == "release" {
        println!("cargo:rustc-env=DEFMT_LOG=off");
    }

    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}
