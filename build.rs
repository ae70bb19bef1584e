use std::env;

fn main() {
    // Load .env so the backend endpoint can be embedded at build time.
    // Falls back to system environment variables when no .env file exists.
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=No .env file loaded ({}), using system environment variables.", e);
    }

    if let Ok(base_url) = env::var("STRESS_MONITOR_BASE_URL") {
        println!("cargo:rustc-env=STRESS_MONITOR_BASE_URL={}", base_url);
    }

    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=STRESS_MONITOR_BASE_URL");

    tauri_build::build();
}
