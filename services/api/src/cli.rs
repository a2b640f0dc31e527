use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use home_valuation::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Home Valuation Intake",
    about = "Serve the property intake API or walk through one intake form from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Fill one intake form from flags and print the submitted payload
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use home_valuation::intake::{FormField, PricingMode};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn demo_collects_repeated_assignments() {
        let cli = Cli::try_parse_from([
            "home-valuation-api",
            "demo",
            "--mode",
            "lookup",
            "--set",
            "city=San Francisco",
            "--set",
            "zipCode=94103",
            "--drop",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.mode, PricingMode::Lookup);
                assert_eq!(
                    args.assignments,
                    vec![
                        (FormField::City, "San Francisco".to_string()),
                        (FormField::ZipCode, "94103".to_string()),
                    ]
                );
                assert!(args.drop);
                assert!(args.zip.is_none());
            }
            other => panic!("expected demo command, got {other:?}"),
        }
    }

    #[test]
    fn demo_defaults_to_self_reported_mode() {
        let cli = Cli::try_parse_from(["home-valuation-api", "demo"]).expect("arguments parse");
        match cli.command {
            Some(Command::Demo(args)) => assert_eq!(args.mode, PricingMode::SelfReported),
            other => panic!("expected demo command, got {other:?}"),
        }
    }
}
