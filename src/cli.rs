use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "galaxy-data")]
#[command(version, about = "Inspect GalaxyData token traits", long_about = None)]
pub struct Cli {
    /// Optional TOML config file; environment variables override it
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print trait names as a JSON array instead of one per line
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the decoded trait names of a token
    GetTraits {
        /// Token identifier (decimal or 0x hex)
        token_id: String,
    },
    /// Print each trait of a token with its available values
    GetTraitsAvailableValues {
        /// Token identifier (decimal or 0x hex)
        token_id: String,
    },
}

impl Command {
    pub fn token_id(&self) -> &str {
        match self {
            Command::GetTraits { token_id } | Command::GetTraitsAvailableValues { token_id } => {
                token_id
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_traits() {
        let cli = Cli::try_parse_from(["galaxy-data", "get-traits", "17"]).unwrap();
        assert_eq!(
            cli.command,
            Command::GetTraits {
                token_id: "17".into()
            }
        );
        assert!(!cli.json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_available_values_with_flags() {
        let cli = Cli::try_parse_from([
            "galaxy-data",
            "get-traits-available-values",
            "0x11",
            "--config",
            "galaxy.toml",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.command.token_id(), "0x11");
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("galaxy.toml")));
    }

    #[test]
    fn test_token_id_required() {
        assert!(Cli::try_parse_from(["galaxy-data", "get-traits"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
