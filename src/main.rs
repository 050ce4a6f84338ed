// Command-line host for the Enigma machine

use anyhow::Context;
use clap::Parser;
use enigma::{Catalog, Letter, MachineSettings};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Enigma I machine emulator", long_about = None)]
#[command(after_help = "Example:\n  enigma --rotors I II III --positions a b c --rings a a a \
    --reflector B --plugboard ab cd ef --text \"hello world\"")]
struct Cli {
    /// Three rotors, left to right (I, II, III, IV, V)
    #[arg(long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"],
          required_unless_present = "config")]
    rotors: Vec<String>,

    /// Initial position of each rotor (e.g. a b c)
    #[arg(long, num_args = 3, required_unless_present = "config")]
    positions: Vec<String>,

    /// Ring setting of each rotor (e.g. a a a)
    #[arg(long, num_args = 3, required_unless_present = "config")]
    rings: Vec<String>,

    /// Reflector to use (B or C)
    #[arg(long, required_unless_present = "config")]
    reflector: Option<String>,

    /// Plugboard pairs (e.g. ab cd ef)
    #[arg(long, num_args = 0..)]
    plugboard: Vec<String>,

    /// Read machine settings from a JSON file instead of the flags above
    #[arg(long, conflicts_with_all = ["rotors", "positions", "rings", "reflector", "plugboard"])]
    config: Option<String>,

    /// Replace the historical rotor and reflector tables with a JSON file
    #[arg(long)]
    catalog: Option<String>,

    /// Text to encrypt or decrypt
    #[arg(long)]
    text: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<MachineSettings> {
        if let Some(path) = &self.config {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings from {path}"))?;
            return Ok(MachineSettings::from_json(&json)?);
        }

        let rotors: [String; 3] = self
            .rotors
            .clone()
            .try_into()
            .map_err(|_| anyhow::anyhow!("--rotors takes exactly three names"))?;

        Ok(MachineSettings {
            rotors,
            positions: letters(&self.positions, "position")?,
            rings: letters(&self.rings, "ring")?,
            reflector: self.reflector.clone().unwrap_or_default(),
            plugboard: self.plugboard.clone(),
        })
    }

    fn catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading catalog from {path}"))?;
                Ok(Catalog::from_json(&json)?)
            }
            None => Ok(Catalog::historical()),
        }
    }
}

/// Check each flag value is a single letter, then join them.
fn letters(values: &[String], field: &'static str) -> anyhow::Result<String> {
    let letters = values
        .iter()
        .map(|value| Letter::parse(value, field).map(Letter::to_char))
        .collect::<Result<String, _>>()?;
    Ok(letters)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let settings = cli.settings()?;
    let catalog = cli.catalog()?;
    debug!(?settings, "Resolved machine settings");

    let mut machine = settings
        .build(&catalog)
        .context("invalid machine configuration")?;
    let start = machine.setting();

    let result = machine.process(&cli.text.to_lowercase());
    info!(start = %start, end = %machine.setting(), "Processed {} characters", cli.text.chars().count());

    println!("Result: {result}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enigma::ConfigError;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("enigma").chain(args.iter().copied())).unwrap()
    }

    fn flags(positions: [&str; 3], rings: [&str; 3]) -> Vec<String> {
        let mut args = vec!["--rotors", "I", "II", "III", "--positions"];
        args.extend(positions);
        args.push("--rings");
        args.extend(rings);
        args.extend(["--reflector", "B", "--plugboard", "ab", "cd", "ef"]);
        args.extend(["--text", "hello world"]);
        args.into_iter().map(str::to_string).collect()
    }

    fn settings_error(args: &[String]) -> ConfigError {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let err = cli(&args).settings().unwrap_err();
        err.downcast::<ConfigError>().unwrap()
    }

    #[test]
    fn flags_build_settings() {
        let args = flags(["a", "b", "c"], ["a", "a", "a"]);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let cli = cli(&args);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.positions, "abc");
        assert_eq!(settings.rings, "aaa");
        assert_eq!(settings.reflector, "B");
        assert_eq!(settings.plugboard, vec!["ab", "cd", "ef"]);

        let mut machine = settings.build(&cli.catalog().unwrap()).unwrap();
        assert_eq!(machine.process(&cli.text), "rvmul laiai");
    }

    #[test]
    fn flag_letters_are_case_insensitive() {
        let args = flags(["A", "B", "C"], ["a", "A", "a"]);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let settings = cli(&args).settings().unwrap();
        assert_eq!(settings.positions, "abc");
        assert_eq!(settings.rings, "aaa");
    }

    #[test]
    fn misaligned_positions_are_rejected() {
        let err = settings_error(&flags(["", "ab", "c"], ["a", "a", "a"]));
        assert!(matches!(
            err,
            ConfigError::InvalidLetter { field: "position", value } if value.is_empty()
        ));
    }

    #[test]
    fn misaligned_rings_are_rejected() {
        let err = settings_error(&flags(["a", "b", "c"], ["a", "aa", ""]));
        assert!(matches!(
            err,
            ConfigError::InvalidLetter { field: "ring", value } if value == "aa"
        ));
    }

    #[test]
    fn flags_are_required_without_config() {
        assert!(Cli::try_parse_from(["enigma", "--text", "hello"]).is_err());
        assert!(Cli::try_parse_from(["enigma", "--rotors", "I", "II", "--text", "x"]).is_err());
    }

    #[test]
    fn config_file_builds_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "rotors": ["I", "II", "III"], "positions": "abc", "reflector": "B",
                 "plugboard": ["ab", "cd", "ef"] }}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = cli(&["--config", path, "--text", "hello world"]);
        let settings = cli.settings().unwrap();
        assert_eq!(settings.rings, "aaa");

        let mut machine = settings.build(&cli.catalog().unwrap()).unwrap();
        assert_eq!(machine.process(&cli.text), "rvmul laiai");
    }

    #[test]
    fn config_conflicts_with_flags() {
        let result = Cli::try_parse_from([
            "enigma", "--config", "x.json", "--reflector", "B", "--text", "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let cli = cli(&["--config", "/nonexistent/enigma.json", "--text", "x"]);
        let err = cli.settings().unwrap_err();
        assert!(err.to_string().contains("reading settings"));
    }
}
