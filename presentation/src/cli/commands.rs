//! CLI command definitions

use clap::Parser;
use snake_domain::ExplicitArgs;
use std::path::PathBuf;

/// CLI arguments for snake-game
#[derive(Parser, Debug)]
#[command(name = "snake-game")]
#[command(author, version, about = "A snake moving on a wrapping surface")]
#[command(long_about = r#"
A snake actor moves across a surface that wraps at its edges.

Settings are resolved per field from (in priority order):
1. Command-line flags
2. Environment variables: LOG_LEVEL, LOG_DIRECTORY, LOG_FILE, WIDTH, HEIGHT
3. Configuration file: --config-file, $CONFIGURATION_FILE, ./res/settings.json,
   or ~/.config/snake-game/settings.json
4. Built-in defaults

Example:
  snake-game --log-level info --width 1024 --height 768
  snake-game --config-file res/settings.json --show-config
  snake-game --write-config res/settings.json --log-level warning
"#)]
pub struct Cli {
    /// Log level: debug, info, warning, error or critical
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Surface width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Surface height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Path to the configuration file
    #[arg(long = "config-file", value_name = "PATH")]
    pub configuration_file: Option<PathBuf>,

    /// Directory to store log files
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_directory: Option<String>,

    /// Name of the log file
    #[arg(long, value_name = "NAME")]
    pub log_file: Option<String>,

    /// Ticks per second
    #[arg(long, default_value_t = 60)]
    pub tick_rate: u32,

    /// Stop after this many ticks (runs until Ctrl-C otherwise)
    #[arg(long, value_name = "N")]
    pub ticks: Option<u64>,

    /// Show the resolved configuration and where each value came from, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Write the resolved configuration to PATH (JSON, or TOML for .toml), then exit
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<PathBuf>,
}

impl Cli {
    /// The explicit configuration layer carried by these flags.
    pub fn explicit_args(&self) -> ExplicitArgs {
        ExplicitArgs {
            log_level: self.log_level.clone(),
            log_directory: self.log_directory.clone(),
            log_file: self.log_file.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_empty_layer() {
        let cli = Cli::parse_from(["snake-game"]);
        assert_eq!(cli.explicit_args(), ExplicitArgs::default());
        assert_eq!(cli.tick_rate, 60);
        assert!(cli.configuration_file.is_none());
        assert!(!cli.show_config);
    }

    #[test]
    fn test_flags_map_to_explicit_layer() {
        let cli = Cli::parse_from([
            "snake-game",
            "--log-level",
            "INFO",
            "--width",
            "1920",
            "--height",
            "1080",
            "--log-dir",
            "out",
            "--log-file",
            "game.log",
            "--config-file",
            "res/settings.json",
        ]);
        let args = cli.explicit_args();
        assert_eq!(args.log_level.as_deref(), Some("INFO"));
        assert_eq!(args.width, Some(1920));
        assert_eq!(args.height, Some(1080));
        assert_eq!(args.log_directory.as_deref(), Some("out"));
        assert_eq!(args.log_file.as_deref(), Some("game.log"));
        assert_eq!(
            cli.configuration_file,
            Some(PathBuf::from("res/settings.json"))
        );
    }

    #[test]
    fn test_empty_flag_value_is_present() {
        let cli = Cli::parse_from(["snake-game", "--log-file", ""]);
        assert_eq!(cli.explicit_args().log_file.as_deref(), Some(""));
    }

    #[test]
    fn test_non_numeric_width_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["snake-game", "--width", "wide"]).is_err());
    }
}
