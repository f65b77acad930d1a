use crate::runs::TextRun;

/// Renders runs as one line each: `[bi] "text"` with `-` for unset flags,
/// followed by ` -> target` for links and ` (title)` when the tooltip
/// differs from the target.
pub fn render(runs: &[TextRun]) -> String {
    runs.iter().map(render_run).collect::<Vec<_>>().join("\n")
}

fn render_run(run: &TextRun) -> String {
    let flags = format!(
        "[{}{}]",
        if run.style.bold { 'b' } else { '-' },
        if run.style.italic { 'i' } else { '-' }
    );
    let mut line = format!("{flags} {:?}", run.text);
    if let Some(link) = &run.link {
        line.push_str(&format!(" -> {}", link.target));
        if link.title != link.target {
            line.push_str(&format!(" ({})", link.title));
        }
    }
    line
}
