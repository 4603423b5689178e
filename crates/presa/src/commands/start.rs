/// Runs the drag engine in the foreground until interrupted.
#[cfg(target_os = "macos")]
pub fn execute() {
    let config = presa_core::config::load();
    let modifier = config.general.modifier.clone();

    if !presa_macos::permission::is_trusted() {
        println!("Presa needs the Accessibility permission to move windows.");
        println!("Grant it in System Settings > Privacy & Security > Accessibility,");
        println!("then restart presa. Waiting is fine too: a system prompt follows.");
    }

    let engine = match presa_macos::Engine::start(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: could not start the drag engine: {e}");
            std::process::exit(1);
        }
    };

    println!("Presa is running. Hold '{modifier}' and drag anywhere inside a window to move it.");
    println!("Press Ctrl+C to quit.");

    engine.wait();
}

#[cfg(not(target_os = "macos"))]
pub fn execute() {
    eprintln!("Error: presa only runs on macOS (it drives the macOS accessibility interface).");
    std::process::exit(1);
}
