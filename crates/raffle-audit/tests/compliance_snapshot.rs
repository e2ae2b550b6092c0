use chrono::{TimeZone, Utc};
use raffle_audit::compliance::{
    calculate_overall_score, calculate_ranking, format_response_time, identify_critical_issues,
    AlertKind, ChainIntegrity, ComplianceReport, OperatorIdentity, RaffleStatus, ReportInputs,
    SnapshotLoader,
};

const RAFFLES: &str = r#"{
  "raffles": [
    {
      "id": 101,
      "external_id": "HOUSE-01",
      "name": "Lakeside Dream Home",
      "status": "Active",
      "total_entries": 5400,
      "postal_entries": 120,
      "free_entries_count": 120,
      "free_entry_percentage": 2.22,
      "has_audit": true,
      "audit_count": 1,
      "active_complaints": 1,
      "active_complaints_count": 3,
      "compliance_score": 96,
      "created_at": "2025-01-02T10:00:00Z",
      "updated_at": null,
      "draw_at": null
    },
    {
      "id": "rf-102",
      "external_id": "CAR-07",
      "name": "Weekend Supercar",
      "status": "COMPLETED",
      "total_entries": 2100,
      "postal_entries": 30,
      "has_audit": false,
      "audit_count": 0,
      "compliance_score": 82
    },
    {
      "id": "rf-103",
      "name": "Cash Bonanza",
      "status": "awaiting_draw",
      "total_entries": 500,
      "postal_entries": 0,
      "audit_count": 2,
      "compliance_score": 40
    }
  ]
}"#;

const SUMMARY: &str = r#"{
  "raffles_hosted": 3,
  "with_audit_logs_percentage": 66.67,
  "active_complaints": 3,
  "postal_entries_received": 150,
  "avg_postal_per_raffle": 50,
  "avg_response_time_minutes": 150,
  "industry_average_score": 70,
  "tier": "gold"
}"#;

#[test]
fn api_payloads_flow_into_a_compliance_report() {
    let raffles =
        SnapshotLoader::raffles_from_reader(RAFFLES.as_bytes()).expect("raffles payload loads");
    let summary =
        SnapshotLoader::summary_from_reader(SUMMARY.as_bytes()).expect("summary payload loads");

    assert_eq!(raffles.len(), 3);
    assert_eq!(raffles[1].status, RaffleStatus::Completed);
    assert_eq!(raffles[0].active_complaint_count(), 3);
    assert!(raffles[2].is_audited());

    let issues = identify_critical_issues(&raffles);
    let kinds: Vec<AlertKind> = issues.iter().map(|issue| issue.kind).collect();
    assert_eq!(
        kinds,
        vec![AlertKind::Complaint, AlertKind::Audit, AlertKind::Draw]
    );

    let operator = OperatorIdentity::named("Lakeside Competitions");
    let generated_at = Utc
        .with_ymd_and_hms(2025, 4, 2, 8, 30, 0)
        .single()
        .expect("valid timestamp");
    let report = ComplianceReport::build(
        ReportInputs {
            operator: &operator,
            summary: &summary,
            raffles: &raffles,
            chain_integrity: ChainIntegrity {
                verified: true,
                percentage: 100.0,
            },
            critical_issues: &issues,
        },
        generated_at,
    );

    // (96 + 82 + 40) / 3 = 72.67
    assert_eq!(report.compliance_overview.overall_score, 73);
    assert_eq!(report.compliance_overview.draw_integrity.audited, 2);
    assert_eq!(report.compliance_overview.draw_integrity.percentage, 67);
    // 150 / 8000 postal entries
    assert_eq!(report.compliance_overview.postal_fairness_ratio, 1.88);

    let encoded = report.to_json_pretty().expect("report encodes");
    let value: serde_json::Value = serde_json::from_str(&encoded).expect("report decodes");
    assert_eq!(value["summary_statistics"]["tier"], "gold");
    assert_eq!(value["critical_issues"][0]["type"], "complaint");
    assert_eq!(value["critical_issues"][1]["competitionId"], "rf-102");
    assert_eq!(value["competition_details"][0]["id"], "101");
}

#[test]
fn summary_benchmarks_drive_ranking_and_response_copy() {
    let raffles =
        SnapshotLoader::raffles_from_reader(RAFFLES.as_bytes()).expect("raffles payload loads");
    let summary =
        SnapshotLoader::summary_from_reader(SUMMARY.as_bytes()).expect("summary payload loads");

    let score = calculate_overall_score(&raffles);
    assert_eq!(
        calculate_ranking(score as f64, summary.industry_average_score),
        "Top 25%"
    );
    assert_eq!(
        format_response_time(summary.avg_response_time_minutes()),
        "2h 30m"
    );
}

#[test]
fn identical_input_yields_identical_output() {
    let raffles =
        SnapshotLoader::raffles_from_reader(RAFFLES.as_bytes()).expect("raffles payload loads");

    let first = serde_json::to_string(&identify_critical_issues(&raffles)).expect("encode");
    let second = serde_json::to_string(&identify_critical_issues(&raffles)).expect("encode");
    assert_eq!(first, second);
}
