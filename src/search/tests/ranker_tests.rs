//! Tests for relevance ranking and offset pagination.

use super::card_with_skill;
use crate::descriptor::AgentCard;
use crate::search::{OffsetWindow, RankingWeights, RelevanceRanker, is_wildcard_query, tokenize};
use rstest::{fixture, rstest};

#[fixture]
fn ranker() -> RelevanceRanker {
    RelevanceRanker::default()
}

#[fixture]
fn cards() -> Vec<AgentCard> {
    vec![
        card_with_skill("nlp-agent", "translate", "Translate text between languages"),
        card_with_skill("vision-agent", "detect", "Detect objects in images"),
    ]
}

fn names(cards: &[AgentCard]) -> Vec<&str> {
    cards.iter().map(AgentCard::name).collect()
}

#[rstest]
fn tokenize_lowercases_and_dedupes() {
    let tokens = tokenize("Translate TEXT, translate push_notifications!");
    let collected: Vec<&str> = tokens.iter().map(String::as_str).collect();
    assert_eq!(collected, ["push_notifications", "text", "translate"]);
}

#[rstest]
#[case("", true)]
#[case("   ", true)]
#[case(" * ", true)]
#[case("**", false)]
#[case("translate", false)]
fn wildcard_detection(#[case] query: &str, #[case] expected: bool) {
    assert_eq!(is_wildcard_query(query), expected);
}

#[rstest]
fn skill_match_ranks_and_zero_scores_are_dropped(ranker: RelevanceRanker, cards: Vec<AgentCard>) {
    let results = ranker.search("translate text", cards, OffsetWindow::default());
    assert_eq!(names(&results), ["nlp-agent"]);
}

#[rstest]
fn nothing_matching_returns_empty(ranker: RelevanceRanker, cards: Vec<AgentCard>) {
    assert!(
        ranker
            .search("zzzznomatch", cards, OffsetWindow::default())
            .is_empty()
    );
}

#[rstest]
fn wildcard_returns_every_candidate_in_order(ranker: RelevanceRanker, cards: Vec<AgentCard>) {
    let results = ranker.search("*", cards, OffsetWindow::default());
    assert_eq!(names(&results), ["nlp-agent", "vision-agent"]);
}

#[rstest]
fn score_applies_field_weights(ranker: RelevanceRanker) {
    let card = card_with_skill("translate", "translate", "translate");
    // name 3 + skills 2; the card has no description.
    assert_eq!(ranker.score(&tokenize("translate"), &card), 5);
    // streaming is an enabled capability flag.
    assert_eq!(ranker.score(&tokenize("streaming"), &card), 1);
}

#[rstest]
#[case("pushNotifications")]
#[case("PUSHNOTIFICATIONS")]
fn camel_case_capability_query_matches_enabled_flag(
    ranker: RelevanceRanker,
    #[case] query: &str,
) {
    let card: AgentCard = serde_json::from_value(serde_json::json!({
        "name": "alpha",
        "version": "1",
        "capabilities": { "pushNotifications": true }
    }))
    .expect("valid card");

    assert_eq!(ranker.score(&tokenize(query), &card), 1);
    let results = ranker.search(query, vec![card], OffsetWindow::default());
    assert_eq!(names(&results), ["alpha"]);
}

#[rstest]
fn snake_case_capability_query_does_not_match_flag(ranker: RelevanceRanker) {
    let card: AgentCard = serde_json::from_value(serde_json::json!({
        "name": "alpha",
        "version": "1",
        "capabilities": { "stateTransitionHistory": true }
    }))
    .expect("valid card");

    assert_eq!(ranker.score(&tokenize("state_transition_history"), &card), 0);
    assert_eq!(ranker.score(&tokenize("stateTransitionHistory"), &card), 1);
}

#[rstest]
fn custom_weights_change_the_order() {
    let ranker = RelevanceRanker::new(RankingWeights {
        name: 0,
        description: 0,
        skills: 5,
        capabilities: 0,
    });
    let cards = vec![
        card_with_skill("detect", "other", "nothing"),
        card_with_skill("vision", "detect", "find things"),
    ];

    let ranked = ranker.rank("detect", cards);
    let scores: Vec<u64> = ranked.iter().map(|(_, score)| *score).collect();
    assert_eq!(scores, [5, 0]);
    assert_eq!(ranked.first().map(|(card, _)| card.name()), Some("vision"));
}

#[rstest]
fn ties_keep_insertion_order(ranker: RelevanceRanker) {
    let cards = vec![
        card_with_skill("first", "translate", "a"),
        card_with_skill("second", "translate", "b"),
        card_with_skill("third", "translate", "c"),
    ];
    let results = ranker.search("translate", cards, OffsetWindow::default());
    assert_eq!(names(&results), ["first", "second", "third"]);
}

#[rstest]
#[case(0, Some(2), vec![0, 1])]
#[case(3, Some(5), vec![3, 4])]
#[case(5, Some(1), vec![])]
#[case(9, None, vec![])]
#[case(2, None, vec![2, 3, 4])]
fn offset_window_slices_and_clips(
    #[case] offset: usize,
    #[case] limit: Option<usize>,
    #[case] expected: Vec<u32>,
) {
    let items: Vec<u32> = (0..5).collect();
    assert_eq!(OffsetWindow::new(offset, limit).apply(items), expected);
}

#[rstest]
#[case(1, 20, Some(0))]
#[case(3, 10, Some(20))]
#[case(0, 10, None)]
fn page_windows_are_one_based(
    #[case] page: usize,
    #[case] page_size: usize,
    #[case] expected_offset: Option<usize>,
) {
    let window = OffsetWindow::for_page(page, page_size);
    assert_eq!(window.map(|found| found.offset()), expected_offset);
}
