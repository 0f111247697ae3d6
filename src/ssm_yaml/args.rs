use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn long_version() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        Box::leak(format!("{} ({})", env!("CARGO_PKG_VERSION"), hash).into_boxed_str())
    }
}

#[derive(Parser, Debug)]
#[command(name = "ssm-yaml")]
#[command(version = long_version())]
#[command(about = "Manage AWS SSM parameters from YAML files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// AWS region to use (overrides the default profile)
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Enable debug logging
    #[arg(short = 'b', long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a YAML file to the parameter store
    #[command(alias = "l")]
    Load {
        /// Path to the YAML config file
        #[arg(short, long)]
        file: PathBuf,

        /// Path prefix to upload under (e.g. /myapp)
        #[arg(short, long)]
        prefix: String,

        /// Upload all parameters as SecureString
        #[arg(short, long)]
        secure: bool,

        /// Auto-select SecureString for secret-like keys
        #[arg(short, long)]
        auto_secure: bool,

        /// Allow overwriting existing parameters
        #[arg(short, long)]
        overwrite: bool,

        /// Show values while uploading
        #[arg(short = 'v', long)]
        values: bool,
    },

    /// Read parameters from the store and output YAML ("-" or no --out for stdout)
    #[command(alias = "s")]
    Save {
        /// Path prefix to read from (e.g. /myapp)
        #[arg(short, long)]
        prefix: String,

        /// Output YAML file
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Disable list conversion, output all maps
        #[arg(long)]
        raw: bool,
    },

    /// Delete parameters listed in a YAML file
    #[command(alias = "d")]
    Delete {
        /// Path to the YAML file naming the keys
        #[arg(short, long)]
        file: PathBuf,

        /// Path prefix to delete under
        #[arg(short, long)]
        prefix: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print a tree of parameters under a prefix
    #[command(alias = "t")]
    Tree {
        /// Path prefix to read from (e.g. /myapp)
        #[arg(short, long)]
        prefix: String,

        /// Decrypt SecureString values (requires IAM permission)
        #[arg(short, long)]
        decrypt: bool,

        /// Show values alongside keys
        #[arg(short = 'v', long)]
        values: bool,
    },

    /// Print a tree of a local YAML file
    #[command(name = "yaml-tree", alias = "yt")]
    YamlTree {
        /// YAML file to inspect
        #[arg(short, long)]
        file: PathBuf,

        /// Show values alongside keys
        #[arg(short = 'v', long)]
        values: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_load_with_flags() {
        let cli = Cli::parse_from([
            "ssm-yaml", "load", "-f", "cfg.yaml", "-p", "/app", "--auto-secure", "--values",
        ]);
        match cli.command {
            Commands::Load {
                prefix,
                auto_secure,
                values,
                secure,
                ..
            } => {
                assert_eq!(prefix, "/app");
                assert!(auto_secure);
                assert!(values);
                assert!(!secure);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn subcommand_aliases_resolve() {
        let cli = Cli::parse_from(["ssm-yaml", "yt", "-f", "cfg.yaml"]);
        assert!(matches!(cli.command, Commands::YamlTree { .. }));
    }
}
