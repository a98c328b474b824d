
use super::*;

use std::path::PathBuf;

use crate::input::utterances::UtteranceRecord;

fn markers(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs
        .iter()
        .map(|&(id, v)| (id.to_string(), v))
        .collect()
}

fn bundle(records: Vec<UtteranceRecord>) -> InputBundle {
    InputBundle {
        corpus_name: "wiki-corpus".to_string(),
        source_path: PathBuf::from("data/wiki-corpus/utterances.jsonl"),
        utterances: records,
    }
}

fn record(id: &str, text: &str, pairs: &[(&str, f64)]) -> UtteranceRecord {
    UtteranceRecord {
        id: id.to_string(),
        text: text.to_string(),
        markers: markers(pairs),
    }
}

#[test]
fn test_ratio_score_weighted_sum() {
    let weights = MarkerWeights::from_pairs(&[("A", 1.0), ("B", -1.0)]);
    let scorer = Scorer::new(&weights, NormalizationPolicy::Ratio);
    assert!((scorer.score(&markers(&[("A", 1.0)])) - 0.5).abs() < 1e-12);
    assert!((scorer.score(&markers(&[("B", 1.0)])) + 0.5).abs() < 1e-12);
    assert!((scorer.score(&markers(&[("A", 1.0), ("B", 1.0)]))).abs() < 1e-12);
}

#[test]
fn test_empty_marker_vector_scores_zero() {
    let builtin = MarkerWeights::builtin();
    for policy in [
        NormalizationPolicy::Ratio,
        NormalizationPolicy::SymmetricRescale,
    ] {
        let scorer = Scorer::new(&builtin, policy);
        assert_eq!(scorer.score(&HashMap::new()), 0.0);
    }
}

#[test]
fn test_unknown_markers_ignored() {
    let weights = MarkerWeights::from_pairs(&[("A", 1.0)]);
    let scorer = Scorer::new(&weights, NormalizationPolicy::Ratio);
    assert_eq!(scorer.score(&markers(&[("Z", 5.0)])), 0.0);
}

#[test]
fn test_zero_weight_table_scores_zero_without_fault() {
    let empty = MarkerWeights::from_pairs(&[]);
    let all_zero = MarkerWeights::from_pairs(&[("A", 0.0), ("B", 0.0)]);
    for weights in [&empty, &all_zero] {
        for policy in [
            NormalizationPolicy::Ratio,
            NormalizationPolicy::SymmetricRescale,
        ] {
            let scorer = Scorer::new(weights, policy);
            assert_eq!(scorer.score(&markers(&[("A", 3.0)])), 0.0);
        }
    }
}

#[test]
fn test_policies_agree_on_every_input() {
    let weights = MarkerWeights::from_pairs(&[("a", 0.5), ("b", -0.5)]);
    let ratio = Scorer::new(&weights, NormalizationPolicy::Ratio);
    let rescale = Scorer::new(&weights, NormalizationPolicy::SymmetricRescale);
    let cases = [
        markers(&[]),
        markers(&[("a", 1.0)]),
        markers(&[("b", 1.0)]),
        markers(&[("a", 1.0), ("b", 1.0)]),
        markers(&[("a", 2.0)]),
        markers(&[("b", 2.0)]),
        markers(&[("a", 0.3), ("b", 1.7)]),
    ];
    for case in &cases {
        let a = ratio.score(case);
        let b = rescale.score(case);
        assert!((a - b).abs() < 1e-12, "policies diverged: {a} vs {b}");
    }
}

#[test]
fn test_same_sign_table_at_unit_strength_scores_one() {
    let weights = MarkerWeights::from_pairs(&[("a", 0.25), ("b", 0.75)]);
    let scorer = Scorer::new(&weights, NormalizationPolicy::Ratio);
    assert_eq!(scorer.score(&markers(&[("a", 1.0), ("b", 1.0)])), 1.0);
}

#[test]
fn test_unit_strength_vector_stays_in_bounds() {
    let builtin = MarkerWeights::builtin();
    let scorer = Scorer::new(&builtin, NormalizationPolicy::Ratio);
    let all_on = builtin
        .entries()
        .iter()
        .map(|e| (e.id.clone(), 1.0))
        .collect::<HashMap<_, _>>();
    let score = scorer.score(&all_on);
    assert!(score.abs() <= 1.0);
}

#[test]
fn test_run_stage2_preserves_order_and_payload() {
    let weights = MarkerWeights::from_pairs(&[("A", 1.0), ("B", -1.0)]);
    let bundle = bundle(vec![
        record("u1", "thank you", &[("A", 1.0)]),
        record("u2", "no", &[("B", 1.0)]),
        record("u3", "plain", &[]),
    ]);
    let out = run_stage2(&bundle, &weights, NormalizationPolicy::Ratio);
    assert_eq!(out.scored.len(), 3);
    assert_eq!(out.scored[0].id, "u1");
    assert_eq!(out.scored[0].text, "thank you");
    assert!((out.scored[0].score - 0.5).abs() < 1e-12);
    assert!((out.scored[1].score + 0.5).abs() < 1e-12);
    assert_eq!(out.scored[2].score, 0.0);
}
