use pretty_assertions::assert_eq;
use rstest::rstest;
use wikiwatch_engine::{AutoLinker, auto_link, snapshot};

const SUMMARY: &str =
    "The Eiffel Tower is a wrought-iron lattice tower on the Champ de Mars in Paris, France.";

const LINKS: &[&str] = &[
    "Paris",
    "France",
    "Champ de Mars",
    "wrought iron",
    "Eiffel Tower",
    "Mars",
];

#[test]
fn summary_snapshot() {
    let runs = auto_link(SUMMARY, LINKS);
    snapshot::check(SUMMARY, &runs);
    insta::assert_snapshot!(snapshot::render(&runs), @r#"
    [--] "The "
    [--] "Eiffel Tower" -> Eiffel Tower
    [--] " is a wrought-iron lattice tower on the "
    [--] "Champ de Mars" -> Champ de Mars
    [--] " in "
    [--] "Paris" -> Paris
    [--] ", "
    [--] "France" -> France
    [--] "."
    "#);
}

#[rstest]
#[case(SUMMARY, LINKS)]
#[case("Paris Agreement was signed", &["Paris", "Paris Agreement"])]
#[case("Parisian culture", &["Paris"])]
#[case("aaaa", &["a", "aa", "aaa"])]
#[case("a-a-a a.a", &["a", "a-a", "a.a"])]
#[case("Ünïcödé ünïcödé", &["ÜNÏCÖDÉ"])]
#[case("no links here", &[])]
#[case("", &["anything"])]
fn runs_reproduce_text(#[case] text: &str, #[case] candidates: &[&str]) {
    let runs = auto_link(text, candidates);
    snapshot::check(text, &runs);
}

#[rstest]
#[case(SUMMARY, LINKS)]
#[case("New York Bay and York", &["New York", "York Bay", "York"])]
#[case("a a a a a", &["a a", "a a a", "a"])]
#[case("St. Louis, St. Paul", &["St.", "St. Louis", "Louis", "Paul"])]
fn matches_never_overlap(#[case] text: &str, #[case] candidates: &[&str]) {
    let matches = AutoLinker::new(candidates.iter().copied()).find_matches(text);
    for pair in matches.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "overlapping matches: {:?} and {:?}",
            pair[0],
            pair[1]
        );
    }
    for m in &matches {
        assert!(m.start < m.end);
    }
}

#[test]
fn word_boundaries_respected_inside_words() {
    let linker = AutoLinker::new(["art", "Art"]);
    let linked: Vec<_> = linker
        .link("Art, party, cart, art.")
        .into_iter()
        .filter(|r| r.is_link())
        .map(|r| r.text)
        .collect();
    assert_eq!(linked, vec!["Art", "art"]);
}

#[test]
fn link_targets_are_candidates_not_text() {
    let runs = auto_link("visit PARIS", &["Paris"]);
    assert_eq!(runs[1].text, "PARIS");
    assert_eq!(runs[1].link_target(), Some("Paris"));
}

#[test]
fn linker_is_shareable_across_threads() {
    let linker = std::sync::Arc::new(AutoLinker::new(LINKS.iter().copied()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let linker = linker.clone();
            std::thread::spawn(move || linker.link(SUMMARY).len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 9);
    }
}
