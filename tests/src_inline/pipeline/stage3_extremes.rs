
use super::*;

fn item(id: &str, score: f64) -> ScoredUtterance {
    ScoredUtterance {
        id: id.to_string(),
        text: format!("text for {id}"),
        score,
    }
}

fn scores(items: &[ScoredUtterance]) -> Vec<f64> {
    items.iter().map(|i| i.score).collect()
}

#[test]
fn test_reference_stream() {
    let stream = [0.1, 0.9, -0.9, 0.5, 0.5, 0.5, 0.2, -0.2];
    let mut tracker = ExtremalTracker::new(5);
    for (i, &score) in stream.iter().enumerate() {
        tracker.insert(item(&format!("u{i}"), score));
    }
    assert_eq!(scores(&tracker.highest()), vec![0.9, 0.5, 0.5, 0.5, 0.2]);
    assert_eq!(scores(&tracker.lowest()), vec![-0.9, -0.2, 0.1, 0.2, 0.5]);
}

#[test]
fn test_fewer_items_than_k() {
    let mut tracker = ExtremalTracker::new(5);
    tracker.insert(item("a", 0.3));
    tracker.insert(item("b", -0.1));
    tracker.insert(item("c", 0.7));
    assert_eq!(scores(&tracker.highest()), vec![0.7, 0.3, -0.1]);
    assert_eq!(scores(&tracker.lowest()), vec![-0.1, 0.3, 0.7]);
}

#[test]
fn test_reads_are_repeatable() {
    let mut tracker = ExtremalTracker::new(2);
    tracker.insert(item("a", 1.0));
    tracker.insert(item("b", 2.0));
    let first = tracker.highest();
    let second = tracker.highest();
    assert_eq!(scores(&first), scores(&second));
    assert_eq!(tracker.lowest().len(), 2);
}

#[test]
fn test_revalidates_against_current_extreme_after_capacity() {
    let mut tracker = ExtremalTracker::new(2);
    tracker.insert(item("a", 5.0));
    tracker.insert(item("b", 4.0));
    tracker.insert(item("c", 3.0));
    assert_eq!(scores(&tracker.highest()), vec![5.0, 4.0]);

    tracker.insert(item("d", 4.5));
    assert_eq!(scores(&tracker.highest()), vec![5.0, 4.5]);

    // Between the previously evicted 4.0 and the current floor 4.5: must
    // not be retained.
    tracker.insert(item("e", 4.2));
    assert_eq!(scores(&tracker.highest()), vec![5.0, 4.5]);
}

#[test]
fn test_tie_with_floor_is_not_admitted() {
    let mut tracker = ExtremalTracker::new(1);
    tracker.insert(item("first", 1.0));
    tracker.insert(item("second", 1.0));
    let highest = tracker.highest();
    assert_eq!(highest.len(), 1);
    assert_eq!(highest[0].id, "first");
    let lowest = tracker.lowest();
    assert_eq!(lowest[0].id, "first");
}

#[test]
fn test_duplicate_scores_are_distinct_entries() {
    let mut tracker = ExtremalTracker::new(3);
    tracker.insert(item("a", 0.5));
    tracker.insert(item("b", 0.5));
    tracker.insert(item("c", 0.5));
    assert_eq!(scores(&tracker.highest()), vec![0.5, 0.5, 0.5]);
    assert_eq!(tracker.lowest().len(), 3);
}

#[test]
fn test_zero_capacity_tracker_stays_empty() {
    let mut tracker = ExtremalTracker::new(0);
    tracker.insert(item("a", 0.5));
    assert!(tracker.highest().is_empty());
    assert!(tracker.lowest().is_empty());
}

#[test]
fn test_run_stage3_is_deterministic() {
    let stream: Vec<ScoredUtterance> = [0.5, 0.5, 0.5, 0.1, 0.9]
        .iter()
        .enumerate()
        .map(|(i, &s)| item(&format!("u{i}"), s))
        .collect();
    let a = run_stage3(&stream, 3);
    let b = run_stage3(&stream, 3);
    let ids = |items: &[ScoredUtterance]| items.iter().map(|i| i.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&a.highest), ids(&b.highest));
    assert_eq!(ids(&a.lowest), ids(&b.lowest));
}
