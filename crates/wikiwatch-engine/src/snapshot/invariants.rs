use crate::runs::{TextRun, visible_text};

/// Validates a run sequence against the text it should display.
///
/// Asserts that:
/// - No run has empty text
/// - Concatenating the runs gives exactly `expected`
/// - Link runs have a non-empty target
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(expected: &str, runs: &[TextRun]) {
    for (i, run) in runs.iter().enumerate() {
        assert!(!run.text.is_empty(), "run {i} has empty text: {run:?}");
        if let Some(link) = &run.link {
            assert!(!link.target.is_empty(), "run {i} links nowhere: {run:?}");
        }
    }
    let joined = visible_text(runs);
    assert_eq!(
        joined, expected,
        "runs do not reproduce the visible text: {runs:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runs::Link;

    #[test]
    fn accepts_valid_runs() {
        check(
            "a b",
            &[TextRun::plain("a "), TextRun::linked("b", Link::new("B"))],
        );
    }

    #[test]
    #[should_panic(expected = "empty text")]
    fn rejects_empty_run() {
        check("", &[TextRun::plain("")]);
    }

    #[test]
    #[should_panic(expected = "do not reproduce")]
    fn rejects_lossy_runs() {
        check("abc", &[TextRun::plain("ab")]);
    }
}
