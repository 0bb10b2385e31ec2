use clap::Parser;

mod components;
mod options;
mod tracing;

use crate::tracing::setup_tracing;

#[tokio::main]
async fn main() {
    let args = options::Opt::parse();

    if let Err(error) = setup_tracing(args.verbose) {
        eprintln!("Failed to initialize tracing: {error}");
        std::process::exit(1);
    }

    let result = match args.commands {
        options::CertregCommand::Registry(cmd) => {
            components::registry::handle_command(cmd, &args.home).await
        }
        options::CertregCommand::Verifier(cmd) => {
            components::verifier::handle_command(cmd, &args.home).await
        }
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
