// sesame/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sesame")]
#[command(about = "Eligibility & Access-Gating Engine for E-Learning Resources", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔐 Checks whether a subject may access a gated resource
    Check {
        /// Data export file (YAML or JSON: catalog + raw subject documents)
        #[arg(long, default_value = "sesame_export.yaml")]
        data: PathBuf,

        /// Subject (user) identifier
        #[arg(long, short)]
        subject: String,

        /// Resource (tool/certification) identifier
        #[arg(long, short)]
        resource: String,
    },

    /// 🔍 Prints a subject's normalized progress snapshot (debug shape drift)
    Snapshot {
        /// Data export file (YAML or JSON)
        #[arg(long, default_value = "sesame_export.yaml")]
        data: PathBuf,

        /// Subject (user) identifier
        #[arg(long, short)]
        subject: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_check() -> Result<()> {
        let args = Cli::parse_from([
            "sesame", "check", "--data", "/tmp/export.yaml", "--subject", "u1", "--resource", "r1",
        ]);
        match args.command {
            Commands::Check { data, subject, resource } => {
                assert_eq!(data.to_string_lossy(), "/tmp/export.yaml");
                assert_eq!(subject, "u1");
                assert_eq!(resource, "r1");
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_snapshot_defaults() -> Result<()> {
        let args = Cli::parse_from(["sesame", "snapshot", "--subject", "u1"]);
        match args.command {
            Commands::Snapshot { data, subject } => {
                assert_eq!(data.to_string_lossy(), "sesame_export.yaml");
                assert_eq!(subject, "u1");
                Ok(())
            }
            _ => bail!("Expected Snapshot command"),
        }
    }
}
