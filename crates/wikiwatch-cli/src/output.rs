use crossterm::style::Stylize;
use wikiwatch_engine::TextRun;

/// How runs are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// ANSI bold/italic, links underlined and blue.
    Styled,
    /// Text only, no escape codes.
    Plain,
    /// The run list as a JSON array.
    Json,
}

/// Formats runs for display. Styled and plain output end with a numbered
/// list of the link targets, in order of appearance.
pub fn format_runs(runs: &[TextRun], mode: OutputMode) -> anyhow::Result<String> {
    let mut out = match mode {
        OutputMode::Json => return Ok(serde_json::to_string_pretty(runs)?),
        OutputMode::Styled => runs.iter().map(styled).collect::<String>(),
        OutputMode::Plain => runs.iter().map(|r| r.text.as_str()).collect::<String>(),
    };

    let legend = link_legend(runs);
    if !legend.is_empty() {
        out.push_str("\n\n");
        out.push_str(&legend.join("\n"));
    }
    Ok(out)
}

fn styled(run: &TextRun) -> String {
    let mut content = run.text.as_str().stylize();
    if run.style.bold {
        content = content.bold();
    }
    if run.style.italic {
        content = content.italic();
    }
    if run.is_link() {
        content = content.underlined().blue();
    }
    content.to_string()
}

/// `[n] text -> target` for every link run.
pub fn link_legend(runs: &[TextRun]) -> Vec<String> {
    runs.iter()
        .filter_map(|r| r.link.as_ref().map(|l| (r, l)))
        .enumerate()
        .map(|(i, (run, link))| format!("[{}] {} -> {}", i + 1, run.text, link.target))
        .collect()
}
