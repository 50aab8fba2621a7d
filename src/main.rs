use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::debug;

use enigma::config::{DEFAULT_REFLECTOR, DEFAULT_ROTORS};
use enigma::registry::{reflector_ids, rotor_ids};
use enigma::text::sanitize_plaintext;
use enigma::{Enigma, MachineConfig};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Enigma cipher machine emulator")]
#[command(
    long_about = "Encrypt or decrypt text with an emulated Enigma I, M3 or M4. \
                  Spaces become X and anything outside A-Z is dropped. \
                  Decrypt by running the ciphertext through the same settings."
)]
#[command(version)]
struct Cli {
    /// Text to encode
    text: Vec<String>,

    #[arg(long, num_args = 1.., default_values = DEFAULT_ROTORS)]
    #[arg(help = rotors_help())]
    rotors: Vec<String>,

    /// Ring setting per rotor, 1-26 (default 1 for each)
    #[arg(long, num_args = 1..)]
    rings: Vec<u8>,

    /// Start position per rotor, A-Z (default A for each)
    #[arg(long, num_args = 1..)]
    position: Vec<char>,

    /// Plugboard pairs, e.g. AB CD
    #[arg(long, num_args = 0..)]
    plugboard: Vec<String>,

    #[arg(long, default_value = DEFAULT_REFLECTOR, help = reflector_help())]
    reflector: String,

    /// Print only the result
    #[arg(short, long)]
    condensed: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn rotors_help() -> String {
    let ids: Vec<_> = rotor_ids().collect();
    format!("Rotors, leftmost first: {}", ids.join(", "))
}

fn reflector_help() -> String {
    let ids: Vec<_> = reflector_ids().collect();
    format!("Reflector: {}", ids.join(", "))
}

/// Assembles the machine described by the command line.
fn build_machine(cli: &Cli) -> enigma::Result<(MachineConfig, Enigma)> {
    let config = MachineConfig::from_settings(
        &cli.rotors,
        &cli.rings,
        &cli.position,
        &cli.reflector,
        &cli.plugboard,
    )?;
    let machine = Enigma::from_config(&config)?;
    Ok((config, machine))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let original = cli.text.join(" ");
    let plaintext = sanitize_plaintext(&original);
    if plaintext.is_empty() {
        // Nothing to encode: show usage like `--help` would.
        if let Err(e) = Cli::command().print_help() {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let (config, mut machine) = match build_machine(&cli) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let encoded = machine.encode_string(&plaintext);
    debug!("final rotor positions {}", machine.positions());

    if cli.condensed {
        print!("{}", encoded);
    } else {
        print_report(&original, &plaintext, &config, &encoded);
    }
    ExitCode::SUCCESS
}

fn print_report(original: &str, plaintext: &str, config: &MachineConfig, encoded: &str) {
    let join = |items: Vec<String>| items.join(" ");

    println!("Original text:");
    println!("  {}", original);
    if plaintext != original {
        println!("Processed original text:");
        println!("  {}", plaintext);
    }
    println!("Enigma configuration:");
    println!(
        "  Rotors: {}",
        join(config.rotors.iter().map(|r| r.id.clone()).collect())
    );
    println!(
        "  Rotor positions: {}",
        join(config.rotors.iter().map(|r| r.start.to_string()).collect())
    );
    println!(
        "  Rings: {}",
        join(config.rotors.iter().map(|r| r.ring.to_string()).collect())
    );
    if config.plugboard.is_empty() {
        println!("  Plugboard: empty");
    } else {
        println!("  Plugboard: {}", config.plugboard.join(" "));
    }
    println!("  Reflector: {}", config.reflector);
    println!("Result:");
    println!("  {}", encoded);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help_for(id: &str) -> String {
        let cmd = Cli::command();
        let arg = cmd.get_arguments().find(|a| a.get_id() == id).unwrap();
        arg.get_help().unwrap().to_string()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_lists_registry_ids() {
        let rotors = help_for("rotors");
        assert!(rotor_ids().all(|id| rotors.contains(id)), "{}", rotors);
        let reflectors = help_for("reflector");
        assert!(reflector_ids().all(|id| reflectors.contains(id)));
    }

    #[test]
    fn test_defaults_build_enigma_i() {
        let cli = Cli::parse_from(["enigma", "AAAAA"]);
        let (config, mut machine) = build_machine(&cli).unwrap();
        assert_eq!(config, MachineConfig::default());
        assert_eq!(machine.encode_string("AAAAA"), "BDZGO");
    }

    #[test]
    fn test_settings_errors_reach_caller() {
        let cli = Cli::parse_from(["enigma", "--rotors", "I", "II", "IX", "--", "HI"]);
        let err = build_machine(&cli).unwrap_err();
        assert_eq!(err.to_string(), "unknown rotor \"IX\"");

        let cli = Cli::parse_from(["enigma", "--rings", "1", "2", "--", "HI"]);
        assert!(build_machine(&cli).is_err());
    }
}
