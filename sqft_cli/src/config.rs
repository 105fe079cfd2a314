//! Command-line flags and environment.

use clap::Parser;

use sqft_core::WorksheetSettings;

/// Square footage worksheet: type heights and widths in inches, get square feet.
#[derive(Parser, Debug)]
#[command(name = "sqft", version, about)]
pub struct CliConfig {
    /// Worksheet title.
    #[arg(short, long, default_value = "Untitled", env = "SQFT_TITLE")]
    pub title: String,

    /// Arm the new last row when the armed row is deleted.
    #[arg(long, env = "SQFT_REARM_AFTER_DELETE")]
    pub rearm_after_delete: bool,

    /// Print the JSON snapshot after every command.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (no prompt or event lines).
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliConfig {
    /// Worksheet settings selected by the flags
    pub fn settings(&self) -> WorksheetSettings {
        WorksheetSettings {
            rearm_after_delete: self.rearm_after_delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["sqft"]);
        assert_eq!(config.title, "Untitled");
        assert!(!config.json);
        assert!(!config.settings().rearm_after_delete);
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from(["sqft", "--title", "Attic", "--rearm-after-delete", "--json"]);
        assert_eq!(config.title, "Attic");
        assert!(config.json);
        assert!(config.settings().rearm_after_delete);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        CliConfig::command().debug_assert();
    }
}
