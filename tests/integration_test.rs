// Integration tests for jamrank
use jamrank::tiers::{FallbackTier, InvertedPositionTier};
use jamrank::{
    filter_available, parse_records, rank_batch, Cascade, RankConfig, RankReport, Ranker, Record, ScoreSource,
};
use serde_json::json;
use std::io::Write;

fn ranked_ids(outcome: &jamrank::RankOutcome) -> Vec<i64> {
    outcome
        .top
        .iter()
        .map(|s| s.record.get("id").and_then(|v| v.as_i64()).unwrap())
        .collect()
}

#[test]
fn test_search_response_end_to_end() {
    let response = json!({
        "headers": {"status": "success", "results_count": 8},
        "results": [
            {"id": 100, "name": "Dust", "position": 12, "releasedate": "2016-02-01"},
            {"id": 101, "name": "Glow", "releasedate": "2023-09-10"},
            {"id": 102, "name": "Night Bus", "listens": 340},
            {"id": 103, "name": "Loop", "releasedate": "2012-01-01"},
            {"id": 104, "name": "Paper Moon", "position": 1},
            {"id": 105, "name": "Echoes", "popularity_total": 0, "popularity_month": 77},
            {"id": 106, "name": "Static"},
            {"id": 107, "name": "Old Tape", "releasedate": "not a date"}
        ]
    });

    let records = parse_records(&response.to_string()).unwrap();
    let ranker = Ranker::new(RankConfig::default()).unwrap();
    let outcome = ranker.rank_top_k(records);

    assert_eq!(ranked_ids(&outcome), vec![101, 104, 100, 102, 105]);
    assert_eq!(outcome.top[0].source, ScoreSource::ReleaseYear);
    assert_eq!(outcome.top[0].score, 2023);
    assert_eq!(outcome.top[4].source.as_str(), "popularity_month");

    let diagnostics = &outcome.diagnostics;
    assert_eq!(diagnostics.total(), 8);
    assert_eq!(diagnostics.count("fallback_rank"), 3);
    assert_eq!(diagnostics.count("position_inverted"), 2);
    assert_eq!(diagnostics.count("release_year"), 1);
    assert_eq!(diagnostics.count("listens"), 1);
    assert_eq!(diagnostics.count("popularity_month"), 1);
}

#[test]
fn test_all_fallback_keeps_input_order() {
    let records: Vec<Record> = (0..6).map(|i| Record::from(json!({"id": i}))).collect();
    let ranker = Ranker::new(RankConfig::default().with_top_k(4)).unwrap();
    let outcome = ranker.rank_top_k(records);

    assert_eq!(ranked_ids(&outcome), vec![0, 1, 2, 3]);
    assert!(outcome.top.iter().all(|s| s.source == ScoreSource::Fallback && s.score == 0));
    assert_eq!(outcome.diagnostics.count("fallback_rank"), 6);
}

#[test]
fn test_custom_cascade() {
    let cascade = Cascade::new(vec![
        Box::new(InvertedPositionTier::new(50)),
        Box::new(FallbackTier),
    ]);
    let ranker = Ranker::with_cascade(RankConfig::default(), cascade).unwrap();

    let records = vec![
        Record::from(json!({"id": 1, "likes": 900})),
        Record::from(json!({"id": 2, "position": 5})),
    ];
    let outcome = ranker.rank_top_k(records);

    assert_eq!(ranked_ids(&outcome), vec![2, 1]);
    assert_eq!(outcome.top[0].score, 45);
    assert_eq!(outcome.top[1].source, ScoreSource::Fallback);
}

#[test]
fn test_config_file_drives_ranking() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"top_k": 2, "direct_signal_fields": ["downloads"], "recency_year_threshold": 2010}}"#
    )
    .unwrap();

    let config = RankConfig::from_json_file(file.path()).unwrap();
    let ranker = Ranker::new(config).unwrap();
    let records = vec![
        Record::from(json!({"id": 1, "likes": 500})),
        Record::from(json!({"id": 2, "downloads": 3})),
        Record::from(json!({"id": 3, "releasedate": "2011-06-01"})),
    ];

    let outcome = ranker.rank_top_k(records);
    assert_eq!(ranked_ids(&outcome), vec![3, 2]);
    assert_eq!(outcome.diagnostics.count("likes"), 0);
    assert_eq!(outcome.diagnostics.count("fallback_rank"), 1);
}

#[test]
fn test_filtered_ranking_report() {
    let config = RankConfig::default().with_top_k(2).with_filter_available(true);
    let ranker = Ranker::new(config.clone()).unwrap();
    let playable = |id: i64, extra: serde_json::Value| {
        let mut value = json!({
            "id": id,
            "audio": format!("https://stream/{}", id),
            "audiodownload": format!("https://download/{}", id),
            "audiodownload_allowed": true
        });
        if let (Some(obj), Some(more)) = (value.as_object_mut(), extra.as_object()) {
            obj.extend(more.clone());
        }
        Record::from(value)
    };

    let records = vec![
        Record::from(json!({"id": 1, "likes": 10000})),
        playable(2, json!({"position": 9})),
        playable(3, json!({"likes": 12})),
        playable(4, json!({})),
    ];

    assert_eq!(ranker.rank_top_k(records.clone()).candidates, 4);

    let records = filter_available(&config, records);
    let report = RankReport::from_outcome(ranker.rank_top_k(records), false);
    assert_eq!(report.stats.candidates_count, 3);
    assert_eq!(report.stats.results_count, 2);
    assert_eq!(report.stats.best_score, Some(991));
    assert_eq!(report.results[0].track.id.as_deref(), Some("2"));
    assert_eq!(report.results[1].track.id.as_deref(), Some("3"));
    assert_eq!(report.results[0].track.audio.as_deref(), Some("https://stream/2"));
}

#[test]
fn test_concurrent_keyword_batches() {
    let ranker = Ranker::new(RankConfig::default().with_top_k(1)).unwrap();
    let batches: Vec<(String, Vec<Record>)> = ["lofi", "piano", "chill", "happy", "cinematic"]
        .iter()
        .enumerate()
        .map(|(i, keyword)| {
            let records = (0..=i as i64)
                .map(|n| Record::from(json!({"id": n, "likes": n + 1})))
                .collect();
            (keyword.to_string(), records)
        })
        .collect();

    let results = rank_batch(&ranker, batches);
    assert_eq!(results.len(), 5);
    for (i, (keyword, outcome)) in results.iter().enumerate() {
        assert!(!keyword.is_empty());
        assert_eq!(outcome.candidates, i + 1);
        assert_eq!(ranked_ids(outcome), vec![i as i64]);
    }
}
