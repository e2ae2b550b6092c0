use crate::report::{run_compliance_export, run_compliance_report, ExportArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use raffle_audit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Raffle Audit",
    about = "Compliance reporting for independently audited prize competitions",
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
    /// Summarise or export an operator's compliance snapshot
    Compliance {
        #[command(subcommand)]
        command: ComplianceCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ComplianceCommand {
    /// Print a compliance report built from captured API payloads
    Report(ReportArgs),
    /// Write the competition list as a CSV or JSON export
    Export(ExportArgs),
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
        Command::Compliance {
            command: ComplianceCommand::Report(args),
        } => run_compliance_report(args),
        Command::Compliance {
            command: ComplianceCommand::Export(args),
        } => run_compliance_export(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["raffle-audit"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn export_requires_a_format() {
        let result = Cli::try_parse_from([
            "raffle-audit",
            "compliance",
            "export",
            "--raffles",
            "raffles.json",
            "--operator-name",
            "Acme",
        ]);
        assert!(result.is_err());
    }
}
