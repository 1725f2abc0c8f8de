//! End-to-end ranking over a short AP newswire story.

use overlap_textrank::{
    build_similarity, rank, RankingPipeline, SentenceSelector, StopwordFilter, TeleportMode,
    TextRankConfig, TextRankError, TraceRecorder,
};

const STORY: &[&str] = &[
    "BC-Hurricane Gilbert 09-11 0339",
    "BC-Hurricane Gilbert 0348",
    "Hurricane Gilbert Heads Toward Dominican Coast",
    "By RUDDY GONZALEZ",
    "Associated Press Writer",
    "SANTO DOMINGO Dominican Republic (AP)",
    "Hurricane Gilbert swept toward the Dominican Republic Sunday and the Civil Defense alerted its heavily populated south coast to prepare for high winds heavy rains and high seas",
    "The storm was approaching from the southeast with sustained winds of 75 mph gusting to 92 mph",
    "There is no need for alarm Civil Defense Director Eugenio Cabral said in a television alert shortly before midnight Saturday",
    "Cabral said residents of the province of Barahona should closely follow Gilbert 's movement",
    "An estimated 100,000 people live in the province including 70,000 in the city of Barahona about 125 miles west of Santo Domingo",
    "Tropical Storm Gilbert formed in the eastern Caribbean and strengthened into a hurricane Saturday night",
    "The National Hurricane Center in Miami reported its position at 2 a.m. Sunday at latitude 16.1 north longitude 67.5 west about 140 miles south of Ponce Puerto Rico and 200 miles southeast of Santo Domingo",
    "The National Weather Service in San Juan Puerto Rico said Gilbert was moving westward at 15 mph with a broad area of cloudiness and heavy weather rotating around the center of the storm",
    "The weather service issued a flash flood watch for Puerto Rico and the Virgin Islands until at least 6 p.m. Sunday",
    "Strong winds associated with the Gilbert brought coastal flooding strong southeast winds and up to 12 feet feet to Puerto Rico 's south coast",
    "There were no reports of casualties",
    "San Juan on the north coast had heavy rains and gusts Saturday but they subsided during the night",
    "On Saturday Hurricane Florence was downgraded to a tropical storm and its remnants pushed inland from the U.S. Gulf Coast",
    "Residents returned home happy to find little damage from 80 mph winds and sheets of rain",
    "Florence the sixth named storm of the 1988 Atlantic storm season was the second hurricane",
    "The first Debby reached minimal hurricane strength briefly before hitting the Mexican coast last month",
];

fn story_tokens() -> Vec<Vec<&'static str>> {
    STORY.iter().map(|s| s.split(' ').collect()).collect()
}

#[test]
fn ranks_form_a_distribution() {
    let ranks = rank(&story_tokens(), &TextRankConfig::default()).unwrap();

    assert_eq!(ranks.len(), STORY.len());
    let sum: f64 = ranks.as_slice().iter().sum();
    assert!((sum - 1.0).abs() < 1e-5);
    assert!(ranks.as_slice().iter().all(|&s| s > 0.0));
    assert!(ranks.delta <= 1e-4);
}

#[test]
fn similarity_is_symmetric_with_zero_diagonal() {
    let sim = build_similarity(&story_tokens()).unwrap();

    assert!(sim.is_symmetric());
    for i in 0..sim.size() {
        assert_eq!(sim.get(i, i), 0.0);
        assert!(sim.row(i).iter().all(|&w| w >= 0.0));
    }
}

#[test]
fn isolated_byline_ranks_below_lead_sentence() {
    let ranks = rank(&story_tokens(), &TextRankConfig::default()).unwrap();

    // "By RUDDY GONZALEZ" shares no token with any other sentence
    assert!(ranks.score(3) < ranks.score(6));
    let top = ranks.top_n(5);
    assert!(top.iter().all(|&(i, _)| i != 3));
}

#[test]
fn repeated_runs_are_identical() {
    let pipeline = RankingPipeline::default();
    let input = story_tokens();
    assert_eq!(pipeline.rank(&input).unwrap(), pipeline.rank(&input).unwrap());
}

#[test]
fn teleport_modes_agree_after_normalization() {
    let tight = TextRankConfig::new()
        .with_threshold(1e-12)
        .with_max_iterations(1000);

    let flat = rank(&story_tokens(), &tight.clone().with_teleport(TeleportMode::Flat)).unwrap();
    let classical = rank(&story_tokens(), &tight.with_teleport(TeleportMode::Classical)).unwrap();

    for (a, b) in flat.as_slice().iter().zip(classical.as_slice()) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn one_iteration_is_not_enough() {
    let config = TextRankConfig::new().with_max_iterations(1);
    let err = rank(&story_tokens(), &config).unwrap_err();
    match err {
        TextRankError::NonConvergence { iterations, scores, .. } => {
            assert_eq!(iterations, 1);
            assert_eq!(scores.len(), STORY.len());
        }
        other => panic!("expected NonConvergence, got {other:?}"),
    }
}

#[test]
fn trace_reports_each_iteration() {
    let mut trace = TraceRecorder::new();
    let ranks = RankingPipeline::default()
        .rank_with_observer(&story_tokens(), &mut trace)
        .unwrap();

    assert_eq!(trace.steps.len(), ranks.iterations);
    let indices: Vec<usize> = trace.steps.iter().map(|&(i, _)| i).collect();
    assert_eq!(indices, (1..=ranks.iterations).collect::<Vec<_>>());
}

#[test]
fn caller_side_stopword_filtering() {
    let stopwords = StopwordFilter::from_list(&["the", "of", "and", "a", "to", "in"]);
    let tokens = story_tokens();
    let filtered: Vec<Vec<&str>> = tokens
        .iter()
        .map(|s| stopwords.filter_tokens(s))
        .collect();
    assert!(filtered.iter().all(|s| !s.is_empty()));

    let ranks = rank(&filtered, &TextRankConfig::default()).unwrap();
    let summary = SentenceSelector::new()
        .with_num_sentences(5)
        .with_document_order(true)
        .select(&ranks);

    assert_eq!(summary.len(), 5);
    for pair in summary.windows(2) {
        assert!(pair[0].index < pair[1].index);
    }
}
