use doping_scatter::PlotError;
use doping_scatter::core::{Record, TimeOfDay, parse_records_json};

#[test]
fn parses_minutes_and_seconds() {
    let time = TimeOfDay::parse("36:50").expect("valid time");
    assert_eq!(time.minute(), 36);
    assert_eq!(time.second(), 50);
    assert_eq!(time.seconds_of_day(), 2210);
    assert_eq!(time.format_mm_ss(), "36:50");
}

#[test]
fn single_digit_fields_are_accepted_and_padded_on_output() {
    let time: TimeOfDay = "7:5".parse().expect("short fields");
    assert_eq!(time.to_string(), "07:05");
}

#[test]
fn malformed_times_are_rejected() {
    for raw in ["", "36", "36:", ":50", "36:60", "60:00", "3a:10", "036:50", "36:50:00", "-1:10"] {
        let err = TimeOfDay::parse(raw).expect_err(raw);
        assert!(matches!(err, PlotError::InvalidTime(_)), "{raw}: {err}");
    }
}

#[test]
fn times_order_by_duration() {
    let fast = TimeOfDay::parse("36:50").expect("fast");
    let slow = TimeOfDay::parse("39:50").expect("slow");
    assert!(fast < slow);
}

#[test]
fn record_iso_timestamp_counts_seconds_from_epoch() {
    let record = Record::new(1995, "36:50", 2210, "Marco Pantani", "ITA");
    assert_eq!(
        record.iso_timestamp().expect("timestamp"),
        "1970-01-01T00:36:50.000Z"
    );
}

#[test]
fn allegation_text_gets_line_break_only_when_present() {
    let clean = Record::new(2006, "38:14", 2294, "Clean Rider", "USA");
    assert_eq!(clean.allegation_text(), "");

    let alleged = clean.clone().with_doping("Positive test");
    assert_eq!(alleged.allegation_text(), "<br/>Positive test");
}

#[test]
fn records_decode_with_missing_optional_fields() {
    let records = parse_records_json(
        r#"[{"Time":"37:15","Seconds":2235,"Name":"Rider","Year":2001,"Nationality":"ESP"}]"#,
    )
    .expect("decode");
    assert_eq!(records[0].doping, "");
    assert_eq!(records[0].place, None);
    assert_eq!(records[0].url, None);
}

#[test]
fn invalid_records_json_is_a_decode_error() {
    let err = parse_records_json(r#"{"not":"an array"}"#).expect_err("object payload");
    assert!(matches!(err, PlotError::Decode(_)));
}
