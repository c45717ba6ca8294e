use super::*;

const S: Duration = Duration::from_secs(1);

#[test]
fn empty_stats_have_nothing_to_compare() {
    let s = QuizStats::new();
    assert_eq!(s.accuracy_pct(), None);
    assert_eq!(s.avg_decision_secs(), None);
    let cmp = s.compare();
    assert_eq!(cmp.accuracy_summary(), "Make at least one decision to compare");
    assert_eq!(cmp.time_summary(), "Make at least one decision to compare");
}

#[test]
fn accuracy_rounds_to_whole_percent() {
    let mut s = QuizStats::new();
    s.record(true, S);
    s.record(false, S);
    s.record(false, S);
    assert_eq!(s.correct(), 1);
    assert_eq!(s.total(), 3);
    assert_eq!(s.accuracy_pct(), Some(33));
    s.record(true, S);
    s.record(true, S);
    s.record(true, S);
    assert_eq!(s.accuracy_pct(), Some(67));
}

#[test]
fn comparison_texts() {
    let mut s = QuizStats::new();
    s.record(true, 2 * S);
    let cmp = s.compare();
    assert_eq!(cmp.accuracy_summary(), "+53.0% better than NFL average");
    assert_eq!(cmp.time_summary(), "0.7s faster than NFL average");

    let mut s = QuizStats::new();
    s.record(false, 4 * S);
    let cmp = s.compare();
    assert_eq!(cmp.accuracy_summary(), "47.0% below NFL average");
    assert_eq!(cmp.time_summary(), "1.3s slower than NFL average");
}

#[test]
fn average_decision_time() {
    let mut s = QuizStats::new();
    s.record(true, Duration::from_millis(1500));
    s.record(false, Duration::from_millis(2500));
    assert!((s.avg_decision_secs().unwrap() - 2.0).abs() < 1e-12);
    assert_eq!(s.decision_times().len(), 2);

    s.reset();
    assert_eq!(s.total(), 0);
    assert!(s.decision_times().is_empty());
}
