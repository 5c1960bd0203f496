//! CLI definitions for the `gemrelay` binary.
//!
//! Running with no subcommand starts the server, so `gemrelay --port 8080`
//! and `gemrelay serve --port 8080` are equivalent. Global flags may come
//! before or after the subcommand.

pub mod models;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Relay browser prompts to the Gemini API.
#[derive(Parser)]
#[command(name = "gemrelay", version, about, long_about = None)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to a TOML config file.
    #[arg(long, global = true, env = "GEMRELAY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Serve options used when no subcommand is given.
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (the default).
    Serve(ServeArgs),

    /// Print the raw model catalog visible to the configured key.
    Models,
}

#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Interface to bind.
    #[arg(long)]
    pub host: Option<String>,
}

impl Cli {
    /// Log filter implied by `--quiet` / `-v`.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,gemrelay=debug",
            _ => "trace",
        }
    }

    /// The subcommand to run, defaulting to `serve`.
    ///
    /// Serve options given before `serve` fill in any the subcommand left unset.
    pub fn into_command(self) -> Commands {
        match self.command {
            None => Commands::Serve(self.serve),
            Some(Commands::Serve(args)) => Commands::Serve(ServeArgs {
                port: args.port.or(self.serve.port),
                host: args.host.or(self.serve.host),
            }),
            Some(other) => other,
        }
    }
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
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["gemrelay", "--port", "8080"]).unwrap();
        match cli.into_command() {
            Commands::Serve(args) => assert_eq!(args.port, Some(8080)),
            Commands::Models => panic!("expected serve"),
        }
    }

    #[test]
    fn serve_subcommand_takes_host() {
        let cli = Cli::try_parse_from(["gemrelay", "serve", "--host", "0.0.0.0"]).unwrap();
        match cli.into_command() {
            Commands::Serve(args) => assert_eq!(args.host.as_deref(), Some("0.0.0.0")),
            Commands::Models => panic!("expected serve"),
        }
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = Cli::try_parse_from(["gemrelay", "--config", "x.toml", "serve"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("x.toml")));
        assert!(matches!(cli.into_command(), Commands::Serve(_)));

        let cli = Cli::try_parse_from(["gemrelay", "-v", "models"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.into_command(), Commands::Models));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gemrelay", "models", "--quiet", "--otel"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.otel);
    }

    #[test]
    fn serve_options_before_subcommand_are_kept() {
        let cli = Cli::try_parse_from(["gemrelay", "--host", "0.0.0.0", "serve", "--port", "9000"])
            .unwrap();
        match cli.into_command() {
            Commands::Serve(args) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(9000));
            }
            Commands::Models => panic!("expected serve"),
        }
    }

    #[test]
    fn models_subcommand_parses() {
        let cli = Cli::try_parse_from(["gemrelay", "models"]).unwrap();
        assert!(matches!(cli.into_command(), Commands::Models));
    }

    #[test]
    fn verbosity_maps_to_filter() {
        let quiet = Cli::try_parse_from(["gemrelay", "--quiet"]).unwrap();
        assert_eq!(quiet.log_filter(), "error");
        let debug = Cli::try_parse_from(["gemrelay", "-v"]).unwrap();
        assert_eq!(debug.log_filter(), "info,gemrelay=debug");
        let trace = Cli::try_parse_from(["gemrelay", "-vv"]).unwrap();
        assert_eq!(trace.log_filter(), "trace");
    }
}
