//! Seed validation CLI tool
//!
//! Validates a dayplan seed file and reports any errors.

use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let seed_path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: validate-seed <seed-file>");
            eprintln!();
            eprintln!("Validates a dayplan seed file.");
            eprintln!();
            eprintln!("Example:");
            eprintln!("  validate-seed seed.example.toml");
            return ExitCode::from(2);
        }
    };

    if !seed_path.exists() {
        eprintln!("Error: Seed file not found: {}", seed_path.display());
        return ExitCode::from(1);
    }

    match dayplan_config::load_seed(&seed_path) {
        Ok(seed) => {
            println!("✓ Seed is valid");
            println!();
            println!("Summary:");
            println!("  Seed version: {}", dayplan_config::CURRENT_CONFIG_VERSION);
            println!("  Events: {}", seed.events.len());

            if !seed.events.is_empty() {
                println!();
                println!("Events:");
                for event in &seed.events {
                    println!(
                        "  - {}: {} - {} (planned {})",
                        event.name, event.start, event.end, event.planned
                    );
                }
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Seed validation failed");
            eprintln!();
            match &e {
                dayplan_config::ConfigError::ReadError(io_err) => {
                    eprintln!("Failed to read file: {}", io_err);
                }
                dayplan_config::ConfigError::ParseError(parse_err) => {
                    eprintln!("TOML parse error:");
                    eprintln!("  {}", parse_err);
                }
                dayplan_config::ConfigError::ValidationFailed { errors } => {
                    eprintln!("Validation errors ({}):", errors.len());
                    for err in errors {
                        eprintln!("  - {}", err);
                    }
                }
                dayplan_config::ConfigError::UnsupportedVersion(ver) => {
                    eprintln!(
                        "Unsupported seed version: {} (expected {})",
                        ver,
                        dayplan_config::CURRENT_CONFIG_VERSION
                    );
                }
            }
            ExitCode::from(1)
        }
    }
}
