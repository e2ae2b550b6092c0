use raffle_audit::compliance::export::CSV_HEADERS;
use raffle_audit::compliance::{raffles_to_csv, RaffleDetail, RaffleStatus};

fn tricky_raffles() -> Vec<RaffleDetail> {
    let mut comma = RaffleDetail::new("r-1", "Cars, Bikes and Boats", RaffleStatus::Active);
    comma.external_id = Some("EXT,1".to_string());
    comma.total_entries = 250;
    comma.postal_entries = 5;
    comma.free_entry_percentage = 2.0;
    comma.compliance_score = 91.5;

    let mut quoted = RaffleDetail::new("r-2", "The \"Ultimate\" Watch", RaffleStatus::Drawn);
    quoted.has_audit = Some(true);
    quoted.audit_count = 1;
    quoted.active_complaints_count = Some(2);
    quoted.compliance_score = 77.0;

    let mut both = RaffleDetail::new("r-3", "\"Win\", then \"Win\" again", RaffleStatus::Ended);
    both.compliance_score = 64.0;

    vec![comma, quoted, both]
}

#[test]
fn csv_round_trip_preserves_names_with_commas_and_quotes() {
    let raffles = tricky_raffles();
    let csv = raffles_to_csv(&raffles).expect("csv export builds");

    let mut reader = csv::ReaderBuilder::new().from_reader(csv.as_bytes());
    let headers = reader.headers().expect("header row").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows parse");
    assert_eq!(rows.len(), raffles.len());

    for (row, raffle) in rows.iter().zip(&raffles) {
        assert_eq!(&row[0], raffle.id.as_str());
        assert_eq!(&row[1], raffle.external_id.as_deref().unwrap_or(""));
        assert_eq!(&row[2], raffle.name);
        assert_eq!(&row[3], raffle.status.as_str());
        assert_eq!(row[4].parse::<u64>().expect("total"), raffle.total_entries);
        assert_eq!(row[5].parse::<u64>().expect("postal"), raffle.postal_entries);
        assert_eq!(
            row[6].parse::<f64>().expect("free entry %"),
            raffle.free_entry_percentage
        );
        assert_eq!(&row[7], if raffle.is_audited() { "Yes" } else { "No" });
        assert_eq!(row[8].parse::<u64>().expect("audits"), raffle.audit_count);
        assert_eq!(
            row[9].parse::<u64>().expect("complaints"),
            raffle.active_complaint_count()
        );
        assert_eq!(
            row[10].parse::<f64>().expect("score"),
            raffle.compliance_score
        );
    }
}
