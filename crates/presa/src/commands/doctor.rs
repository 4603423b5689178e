use presa_core::config;

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";
const FIXED: &str = "\x1b[36m[fixed]\x1b[0m";

pub fn execute() {
    println!("Checking Presa setup:");
    println!();
    check_config_dir();
    check_config_file();
    check_platform();
    println!();
}

fn check_config_dir() {
    match config::config_dir() {
        Some(dir) if dir.is_dir() => {
            println!("  {OK} Config directory exists ({})", dir.display());
        }
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                println!("  {FIXED} Created config directory ({})", dir.display());
            }
            Err(e) => {
                println!("  {FAIL} Config directory missing and could not create it: {e}");
            }
        },
        None => {
            println!("  {FAIL} Could not determine home directory");
        }
    }
}

fn check_config_file() {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return;
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (using defaults; run 'presa init')");
        return;
    }
    match config::try_load() {
        Ok(_) => println!("  {OK} config.toml is valid"),
        Err(e) => println!("  {FAIL} config.toml: {e}"),
    }
}

#[cfg(target_os = "macos")]
fn check_platform() {
    if presa_macos::permission::is_trusted() {
        println!("  {OK} Accessibility permission granted");
    } else {
        println!("  {FAIL} Accessibility permission not granted");
        println!("         Grant it in System Settings > Privacy & Security > Accessibility");
    }
}

#[cfg(not(target_os = "macos"))]
fn check_platform() {
    println!("  {FAIL} Unsupported platform (presa requires macOS)");
}
