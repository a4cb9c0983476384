use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold, run, and smoke-test Python API projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new API project with example files
    New {
        /// Project name (used as the directory name)
        name: String,

        /// Project template to scaffold from
        #[arg(short, long, default_value = papi::templates::DEFAULT_TEMPLATE)]
        template: String,
    },

    /// Run the example API app and print its combined output
    Run {
        /// Interpreter to launch the app with (default: python3, or PAPI_PYTHON)
        #[arg(long)]
        python: Option<String>,
    },

    /// Send a GET to every endpoint in papi.paths.json and print the responses
    Test {
        /// Base URL of the running service (default: http://127.0.0.1:5000, or PAPI_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Per-request timeout in seconds (default: wait indefinitely)
        #[arg(long)]
        timeout: Option<u64>,

        /// Keep testing after a failed endpoint and report all failures at the end
        #[arg(short, long)]
        keep_going: bool,
    },

    /// List available project templates
    Templates,
}

fn main() -> Result<()> {
    papi::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::New { name, template } => {
            commands::new::execute(name, template)?;
        }
        Commands::Run { python } => {
            commands::run::execute(python)?;
        }
        Commands::Test {
            base_url,
            timeout,
            keep_going,
        } => {
            commands::test::execute(base_url, timeout, keep_going)?;
        }
        Commands::Templates => {
            commands::templates::execute()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_new_defaults_to_flask() {
        let cli = Cli::try_parse_from(["papi", "new", "demo"]).unwrap();
        match cli.command {
            Commands::New { name, template } => {
                assert_eq!(name, "demo");
                assert_eq!(template, "flask");
            }
            _ => panic!("expected new"),
        }
    }

    #[test]
    fn test_new_requires_name() {
        assert!(Cli::try_parse_from(["papi", "new"]).is_err());
    }

    #[test]
    fn test_test_flags() {
        let cli =
            Cli::try_parse_from(["papi", "test", "--base-url", "http://localhost:9000", "-k"])
                .unwrap();
        match cli.command {
            Commands::Test {
                base_url,
                timeout,
                keep_going,
            } => {
                assert_eq!(base_url.as_deref(), Some("http://localhost:9000"));
                assert!(timeout.is_none());
                assert!(keep_going);
            }
            _ => panic!("expected test"),
        }
    }
}
