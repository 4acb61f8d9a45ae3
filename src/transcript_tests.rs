use super::*;
use crate::samples;

#[test]
fn every_sample_has_a_recorded_transcript() {
    for sample in samples::catalog() {
        assert!(
            recorded(sample.id).is_some(),
            "missing transcript for {}",
            sample.id
        );
    }
}

#[test]
fn every_sample_matches_its_transcript() {
    for sample in samples::catalog() {
        let transcript = recorded(sample.id).expect("recorded transcript");
        let divergence = first_divergence(transcript, &sample.render());
        assert!(
            divergence.is_none(),
            "sample {} diverged: {:?}",
            sample.id,
            divergence
        );
    }
}

#[test]
fn walkthrough_transcript_is_the_fixed_sequence() {
    let lines: Vec<&str> = WALKTHROUGH_TRANSCRIPT.lines().collect();
    assert_eq!(lines.len(), 23);
    assert_eq!(lines[0], "Hello, World!");
    assert_eq!(lines[1], "Number: 0");
    assert_eq!(lines[2], "Even");
    assert_eq!(lines[19], "Number: 9");
    assert_eq!(lines[20], "Odd");
    assert_eq!(lines[21], "This is true");
    assert_eq!(lines[22], "This will print");
    assert!(WALKTHROUGH_TRANSCRIPT.ends_with("This will print\n"));
}

#[test]
fn identical_lines_have_no_divergence() {
    let actual = vec!["a".to_string(), "b".to_string()];
    assert!(first_divergence("a\nb\n", &actual).is_none());
}

#[test]
fn changed_line_is_pinpointed() {
    let actual = vec!["a".to_string(), "x".to_string(), "c".to_string()];
    let divergence = first_divergence("a\nb\nc\n", &actual).expect("divergence");
    assert_eq!(divergence.line, 2);
    assert_eq!(divergence.expected.as_deref(), Some("b"));
    assert_eq!(divergence.actual.as_deref(), Some("x"));
}

#[test]
fn short_rendering_is_reported_at_the_missing_line() {
    let actual = vec!["a".to_string()];
    let divergence = first_divergence("a\nb\n", &actual).expect("divergence");
    assert_eq!(divergence.line, 2);
    assert_eq!(divergence.expected.as_deref(), Some("b"));
    assert_eq!(divergence.actual, None);
}

#[test]
fn long_rendering_is_reported_past_the_transcript() {
    let actual = vec!["a".to_string(), "b".to_string(), "extra".to_string()];
    let divergence = first_divergence("a\nb\n", &actual).expect("divergence");
    assert_eq!(divergence.line, 3);
    assert_eq!(divergence.expected, None);
    assert_eq!(divergence.actual.as_deref(), Some("extra"));
}

#[test]
fn report_counts_follow_statuses() {
    let report = CheckReport::from_results(vec![
        CheckResult {
            sample_id: "a".to_string(),
            status: CheckStatus::Confirmed,
            divergence: None,
        },
        CheckResult {
            sample_id: "b".to_string(),
            status: CheckStatus::Refuted,
            divergence: Some(Divergence {
                line: 1,
                expected: Some("x".to_string()),
                actual: Some("y".to_string()),
            }),
        },
    ]);
    assert_eq!(report.schema_version, CHECK_REPORT_SCHEMA_VERSION);
    assert_eq!(report.pass_count, 1);
    assert_eq!(report.fail_count, 1);
}

#[test]
fn check_statuses_serialize_snake_case() {
    let json = serde_json::to_string(&CheckStatus::Confirmed).expect("serialize status");
    assert_eq!(json, "\"confirmed\"");
}
