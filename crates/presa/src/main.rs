mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "presa",
    version,
    about = "Move any window by holding a modifier and dragging anywhere inside it"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Run the drag engine in the foreground
    Start,
    /// Check configuration and permissions
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Doctor => commands::doctor::execute(),
    }
}
