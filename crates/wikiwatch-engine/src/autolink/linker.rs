use std::{cmp::Reverse, collections::HashSet};

use serde::Serialize;

use crate::runs::{Link, RunBuilder, TextRun};

use super::matcher::{find_ignore_case, is_boundary_after, is_boundary_before, next_char};

/// An accepted occurrence of a candidate title, as a byte range `[start, end)`
/// into the linked text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkMatch {
    pub start: usize,
    pub end: usize,
    /// The candidate string that matched, as given (not the text's casing).
    pub target: String,
}

impl LinkMatch {
    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && self.end > start
    }
}

/// Links known article titles inside plain text.
///
/// Built once per candidate list and reusable across texts. Candidates are
/// tried longest first (by char count, ties in input order), so "Paris
/// Agreement" claims its text before "Paris" can.
#[derive(Debug, Clone, Default)]
pub struct AutoLinker {
    candidates: Vec<String>,
}

impl AutoLinker {
    /// Empty strings and exact duplicates are dropped.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut candidates: Vec<String> = candidates
            .into_iter()
            .map(Into::into)
            .filter(|c| !c.is_empty() && seen.insert(c.clone()))
            .collect();
        candidates.sort_by_key(|c| Reverse(c.chars().count()));
        Self { candidates }
    }

    /// Candidates in the order they are tried.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Finds the accepted, non-overlapping matches in `text`, ordered by start.
    ///
    /// An occurrence counts only when it is bounded on both sides by
    /// start/end of text or a non-alphanumeric char, and does not overlap a
    /// match already accepted for this or a longer candidate.
    pub fn find_matches(&self, text: &str) -> Vec<LinkMatch> {
        let mut accepted: Vec<LinkMatch> = Vec::new();

        for candidate in &self.candidates {
            let mut from = 0;
            while let Some((start, end)) = find_ignore_case(text, candidate, from) {
                if is_boundary_before(text, start)
                    && is_boundary_after(text, end)
                    && !accepted.iter().any(|m| m.overlaps(start, end))
                {
                    accepted.push(LinkMatch {
                        start,
                        end,
                        target: candidate.clone(),
                    });
                }
                from = next_char(text, start);
            }
        }

        accepted.sort_by_key(|m| m.start);
        log::trace!(
            "auto-linked {} matches from {} candidates",
            accepted.len(),
            self.candidates.len()
        );
        accepted
    }

    /// Splits `text` into plain runs and one link run per accepted match.
    ///
    /// Empty text gives no runs; with no candidates the whole text is one
    /// plain run. Link runs keep the text's own casing and target the
    /// candidate string.
    pub fn link(&self, text: &str) -> Vec<TextRun> {
        if text.is_empty() {
            return Vec::new();
        }
        if self.is_empty() {
            return vec![TextRun::plain(text)];
        }

        let mut out = RunBuilder::default();
        let mut pos = 0;
        for m in self.find_matches(text) {
            out.push(TextRun::plain(&text[pos..m.start]));
            out.push(TextRun::linked(&text[m.start..m.end], Link::new(m.target)));
            pos = m.end;
        }
        out.push(TextRun::plain(&text[pos..]));
        out.finish()
    }
}

/// One-shot form of [`AutoLinker::link`].
pub fn auto_link<S: AsRef<str>>(text: &str, candidates: &[S]) -> Vec<TextRun> {
    AutoLinker::new(candidates.iter().map(|c| c.as_ref())).link(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn candidates_sorted_longest_first_stable() {
        let linker = AutoLinker::new(["Rome", "Paris", "Paris Agreement", "Oslo", "Lima"]);
        assert_eq!(
            linker.candidates(),
            ["Paris Agreement", "Paris", "Rome", "Oslo", "Lima"]
        );
    }

    #[test]
    fn empty_and_duplicate_candidates_dropped() {
        let linker = AutoLinker::new(["", "Rome", "Rome", "rome"]);
        assert_eq!(linker.candidates(), ["Rome", "rome"]);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // "Zürich" is 6 chars / 7 bytes, "Geneva" 6 chars / 6 bytes.
        let linker = AutoLinker::new(["Bern", "Geneva", "Zürich"]);
        assert_eq!(linker.candidates(), ["Geneva", "Zürich", "Bern"]);
    }

    #[test]
    fn longest_match_preferred() {
        let runs = auto_link("Paris Agreement was signed", &["Paris", "Paris Agreement"]);
        assert_eq!(
            runs,
            vec![
                TextRun::linked("Paris Agreement", Link::new("Paris Agreement")),
                TextRun::plain(" was signed"),
            ]
        );
    }

    #[test]
    fn word_boundary_enforced() {
        let runs = auto_link("Parisian culture", &["Paris"]);
        assert_eq!(runs, vec![TextRun::plain("Parisian culture")]);
    }

    #[test]
    fn empty_text_gives_no_runs() {
        assert!(auto_link("", &["Paris"]).is_empty());
        assert!(auto_link::<&str>("", &[]).is_empty());
    }

    #[test]
    fn no_candidates_gives_single_plain_run() {
        assert_eq!(
            auto_link::<&str>("just text", &[]),
            vec![TextRun::plain("just text")]
        );
        assert_eq!(
            auto_link("just text", &[""]),
            vec![TextRun::plain("just text")]
        );
    }

    #[test]
    fn match_keeps_text_casing_and_candidate_target() {
        let runs = auto_link("the eiffel tower at night", &["Eiffel Tower"]);
        assert_eq!(
            runs,
            vec![
                TextRun::plain("the "),
                TextRun::linked("eiffel tower", Link::new("Eiffel Tower")),
                TextRun::plain(" at night"),
            ]
        );
    }

    #[test]
    fn every_occurrence_is_linked() {
        let linker = AutoLinker::new(["Rome"]);
        let matches = linker.find_matches("Rome, then rome again: ROME.");
        let ranges: Vec<_> = matches.iter().map(|m| (m.start, m.end)).collect();
        assert_eq!(ranges, vec![(0, 4), (11, 15), (23, 27)]);
    }

    #[test]
    fn shorter_candidate_fills_remaining_gaps() {
        let runs = auto_link(
            "Paris Agreement negotiators met in Paris",
            &["Paris", "Paris Agreement"],
        );
        assert_eq!(
            runs,
            vec![
                TextRun::linked("Paris Agreement", Link::new("Paris Agreement")),
                TextRun::plain(" negotiators met in "),
                TextRun::linked("Paris", Link::new("Paris")),
            ]
        );
    }

    #[test]
    fn overlapping_equal_length_first_wins() {
        // "New York" and "York Bay" overlap on "York"; equal length, input order decides.
        let runs = auto_link("New York Bay", &["New York", "York Bay"]);
        assert_eq!(
            runs,
            vec![
                TextRun::linked("New York", Link::new("New York")),
                TextRun::plain(" Bay"),
            ]
        );
    }

    #[test]
    fn rejected_occurrence_does_not_stop_search() {
        let linker = AutoLinker::new(["art"]);
        let matches = linker.find_matches("party art");
        assert_eq!(
            matches,
            vec![LinkMatch {
                start: 6,
                end: 9,
                target: "art".into()
            }]
        );
    }

    #[test]
    fn self_overlapping_occurrences_only_take_first() {
        let linker = AutoLinker::new(["a a"]);
        let ranges: Vec<_> = linker
            .find_matches("a a a")
            .iter()
            .map(|m| (m.start, m.end))
            .collect();
        assert_eq!(ranges, vec![(0, 3)]);
    }

    #[test]
    fn adjacent_punctuation_matches_are_separate_runs() {
        let runs = auto_link("--", &["-"]);
        assert_eq!(
            runs,
            vec![
                TextRun::linked("-", Link::new("-")),
                TextRun::linked("-", Link::new("-")),
            ]
        );
    }

    #[test]
    fn linker_is_reusable() {
        let linker = AutoLinker::new(["Moon"]);
        assert_eq!(linker.link("Moon").len(), 1);
        assert_eq!(linker.link("no match").len(), 1);
        assert_eq!(linker.link("The Moon rises").len(), 3);
    }
}
