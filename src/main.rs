// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    // A local .env can override the backend endpoint without rebuilding.
    let _ = dotenvy::dotenv();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    println!("\n=== Student Stress Monitor ===");
    println!("The prediction backend is expected on port 5001 unless configured otherwise.");

    if let Err(e) = stress_monitor_lib::run() {
        eprintln!("Error running application: {}", e);
        std::process::exit(1);
    }
}
