use chrono::Utc;
use clap::{Args, ValueEnum};
use raffle_audit::compliance::export::{default_export_file_name, ensure_exportable};
use raffle_audit::compliance::{
    calculate_ranking, export_json, format_date, format_response_time, identify_critical_issues,
    raffles_to_csv, status_badge, ChainIntegrity, ComplianceReport, ComplianceSummary,
    OperatorIdentity, RaffleDetail, ReportInputs, SnapshotLoader,
};
use raffle_audit::config::ExportConfig;
use raffle_audit::error::AppError;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct SnapshotArgs {
    /// JSON file with the competition list returned by the audit API
    #[arg(long)]
    pub(crate) raffles: PathBuf,
    /// JSON file with the operator compliance summary (defaults to empty)
    #[arg(long)]
    pub(crate) summary: Option<PathBuf>,
    /// Operator display name stamped on the report
    #[arg(long)]
    pub(crate) operator_name: String,
    /// Operator identifier stamped on the report
    #[arg(long)]
    pub(crate) operator_id: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    #[command(flatten)]
    pub(crate) snapshot: SnapshotArgs,
    /// Mark the audit hash chain as verified
    #[arg(long)]
    pub(crate) chain_verified: bool,
    /// Percentage of the hash chain verified (defaults to 100 when verified, else 0)
    #[arg(long)]
    pub(crate) chain_percentage: Option<f64>,
    /// Print the full report as JSON instead of a text digest
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) snapshot: SnapshotArgs,
    /// Export format
    #[arg(long, value_enum)]
    pub(crate) format: ExportFormat,
    /// Output path (defaults to a dated file in APP_EXPORT_DIR)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

struct LoadedSnapshot {
    operator: OperatorIdentity,
    summary: ComplianceSummary,
    raffles: Vec<RaffleDetail>,
}

fn load_snapshot(args: SnapshotArgs) -> Result<LoadedSnapshot, AppError> {
    let SnapshotArgs {
        raffles,
        summary,
        operator_name,
        operator_id,
    } = args;

    let raffles = SnapshotLoader::raffles_from_path(raffles)?;
    let summary = match summary {
        Some(path) => SnapshotLoader::summary_from_path(path)?,
        None => ComplianceSummary::default(),
    };

    Ok(LoadedSnapshot {
        operator: OperatorIdentity {
            id: operator_id,
            name: operator_name,
            email: None,
        },
        summary,
        raffles,
    })
}

pub(crate) fn run_compliance_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        snapshot,
        chain_verified,
        chain_percentage,
        json,
    } = args;

    let LoadedSnapshot {
        operator,
        summary,
        raffles,
    } = load_snapshot(snapshot)?;

    let chain_integrity = ChainIntegrity {
        verified: chain_verified,
        percentage: chain_percentage.unwrap_or(if chain_verified { 100.0 } else { 0.0 }),
    };
    let issues = identify_critical_issues(&raffles);
    let report = ComplianceReport::generate(ReportInputs {
        operator: &operator,
        summary: &summary,
        raffles: &raffles,
        chain_integrity,
        critical_issues: &issues,
    });

    if json {
        let encoded = report
            .to_json_pretty()
            .map_err(raffle_audit::compliance::ExportError::from)?;
        println!("{encoded}");
    } else {
        render_compliance_report(&report);
    }

    Ok(())
}

pub(crate) fn run_compliance_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs {
        snapshot,
        format,
        output,
    } = args;

    let LoadedSnapshot {
        operator,
        summary,
        raffles,
    } = load_snapshot(snapshot)?;
    ensure_exportable(&raffles)?;

    let now = Utc::now();
    let contents = match format {
        ExportFormat::Csv => raffles_to_csv(&raffles)?,
        ExportFormat::Json => export_json(&operator, &summary, &raffles, now)?,
    };

    let path = match output {
        Some(path) => path,
        None => ExportConfig::from_env()?
            .output_dir
            .join(default_export_file_name(&operator, format.extension(), now)),
    };

    std::fs::write(&path, contents)?;
    info!(path = %path.display(), rows = raffles.len(), "compliance export written");
    println!("Exported {} competitions to {}", raffles.len(), path.display());

    Ok(())
}

fn render_compliance_report(report: &ComplianceReport) {
    let metadata = &report.report_metadata;
    let overview = &report.compliance_overview;
    let summary = &report.summary_statistics;

    println!("Compliance snapshot for {}", metadata.operator.name);
    println!("Generated {}", metadata.generated_at.to_rfc3339());

    println!(
        "\nOverall score: {} ({})",
        overview.overall_score, overview.status.label
    );
    println!(
        "Industry ranking: {}",
        calculate_ranking(overview.overall_score as f64, summary.industry_average_score)
    );
    println!(
        "Draw integrity: {}/{} audited ({}%)",
        overview.draw_integrity.audited,
        overview.draw_integrity.total,
        overview.draw_integrity.percentage
    );
    println!(
        "Chain integrity: {} ({}%)",
        if overview.chain_integrity.verified {
            "verified"
        } else {
            "unverified"
        },
        overview.chain_integrity.percentage
    );
    println!(
        "Postal fairness ratio: {:.2}%",
        overview.postal_fairness_ratio
    );
    println!(
        "Average complaint response: {}",
        format_response_time(summary.avg_response_time_minutes())
    );

    if report.competition_details.is_empty() {
        println!("\nCompetitions: none");
    } else {
        println!("\nCompetitions");
        for raffle in &report.competition_details {
            let badge = status_badge(&raffle.status);
            println!(
                "- {} [{}] score {}, {} audit(s), {} open complaint(s), draw {}",
                raffle.name,
                badge.label,
                raffle.compliance_score,
                raffle.audit_count,
                raffle.active_complaint_count(),
                format_date(raffle.draw_at.as_deref())
            );
        }
    }

    if report.critical_issues.is_empty() {
        println!("\nCritical issues: none");
    } else {
        println!("\nCritical issues");
        for issue in &report.critical_issues {
            println!("- [{}] {} ({})", issue.kind.label(), issue.message, issue.link);
        }
    }
}
