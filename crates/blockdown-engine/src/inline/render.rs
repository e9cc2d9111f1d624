use crate::models::TextRun;

/// Renders one run to markdown, wrapping innermost to outermost: link first,
/// then code, then strikethrough, then bold/italic. This exact order is what
/// keeps parse and render stable inverses of each other.
pub fn render_run(run: &TextRun) -> String {
    let mut out = run.text.clone();

    if let Some(url) = &run.link {
        out = format!("[{out}]({url})");
    }
    if run.annotations.code {
        out = format!("`{out}`");
    }
    if run.annotations.strikethrough {
        out = format!("~~{out}~~");
    }
    match (run.annotations.bold, run.annotations.italic) {
        (true, true) => out = format!("***{out}***"),
        (true, false) => out = format!("**{out}**"),
        (false, true) => out = format!("*{out}*"),
        (false, false) => {}
    }

    out
}

/// Renders a run sequence; runs concatenate with no separator.
pub fn render_runs(runs: &[TextRun]) -> String {
    runs.iter().map(render_run).collect()
}
