use crate::models::{Annotations, TextRun};

/// Parses inline-formatted text into an ordered [`TextRun`] sequence.
///
/// Scans left to right, non-overlapping. At each position tokens are tried
/// in priority order: `***x***` (bold+italic), `**x**` (bold), `` `x` ``
/// (code, content taken verbatim), `~~x~~` (strikethrough), `*x*` / `_x_`
/// (italic), `[text](url)` (link). Anything that does not open and close a
/// token is emitted as a plain run, so the parse never fails.
pub fn parse_runs(s: &str) -> Vec<TextRun> {
    let mut out = Vec::new();
    let mut i = 0;
    let mut plain_start = 0;

    while i < s.len() {
        if let Some((run, consumed)) = try_token(&s[i..]) {
            flush_plain(&mut out, &s[plain_start..i]);
            out.push(run);
            i += consumed;
            plain_start = i;
        } else {
            i += s[i..].chars().next().map_or(1, char::len_utf8);
        }
    }

    flush_plain(&mut out, &s[plain_start..]);
    out
}

fn flush_plain(out: &mut Vec<TextRun>, text: &str) {
    if !text.is_empty() {
        out.push(TextRun::plain(text));
    }
}

/// Tries every token at the start of `rest`, in priority order.
/// Returns the run plus the number of bytes consumed.
fn try_token(rest: &str) -> Option<(TextRun, usize)> {
    let bold_italic = Annotations {
        bold: true,
        italic: true,
        ..Default::default()
    };
    let bold = Annotations {
        bold: true,
        ..Default::default()
    };
    let strikethrough = Annotations {
        strikethrough: true,
        ..Default::default()
    };
    let italic = Annotations {
        italic: true,
        ..Default::default()
    };

    try_delimited(rest, "***", bold_italic)
        .or_else(|| try_delimited(rest, "**", bold))
        .or_else(|| try_code_span(rest))
        .or_else(|| try_delimited(rest, "~~", strikethrough))
        .or_else(|| try_delimited(rest, "*", italic))
        .or_else(|| try_delimited(rest, "_", italic))
        .or_else(|| try_link(rest))
}

/// A symmetric-delimiter token (`**bold**`, `~~strike~~`, ...).
///
/// The enclosed text may itself be a whole `[text](url)` link, in which case
/// the link lands on the same run; that is the inverse of rendering, where
/// the link wraps innermost.
fn try_delimited(rest: &str, delim: &str, annotations: Annotations) -> Option<(TextRun, usize)> {
    let body = rest.strip_prefix(delim)?;
    let close = body.find(delim)?;
    if close == 0 {
        return None;
    }
    let inner = &body[..close];
    let consumed = delim.len() * 2 + inner.len();

    let run = match as_whole_link(inner) {
        Some((text, url)) => TextRun {
            text: text.to_string(),
            annotations,
            link: Some(url.to_string()),
        },
        None => TextRun {
            text: inner.to_string(),
            annotations,
            link: None,
        },
    };
    Some((run, consumed))
}

/// A backtick code span. Content is taken verbatim; nothing inside is
/// re-scanned, so `` `**x**` `` is code whose text is `**x**`.
fn try_code_span(rest: &str) -> Option<(TextRun, usize)> {
    let body = rest.strip_prefix('`')?;
    let close = body.find('`')?;
    let inner = &body[..close];
    Some((TextRun::plain(inner).code(), inner.len() + 2))
}

/// A `[text](url)` link with no annotations of its own.
fn try_link(rest: &str) -> Option<(TextRun, usize)> {
    let (text, url, consumed) = take_link(rest)?;
    Some((TextRun::plain(text).with_link(url), consumed))
}

/// Matches a `[text](url)` prefix, returning text, url, and bytes consumed.
fn take_link(rest: &str) -> Option<(&str, &str, usize)> {
    let body = rest.strip_prefix('[')?;
    let text_end = body.find(']')?;
    let after_text = &body[text_end..];
    let url_body = after_text.strip_prefix("](")?;
    let url_end = url_body.find(')')?;

    let text = &body[..text_end];
    let url = &url_body[..url_end];
    // '[' + text + "](" + url + ')'
    let consumed = 1 + text_end + 2 + url_end + 1;
    Some((text, url, consumed))
}

/// `Some((text, url))` when `s` is exactly one link and nothing else.
fn as_whole_link(s: &str) -> Option<(&str, &str)> {
    let (text, url, consumed) = take_link(s)?;
    (consumed == s.len()).then_some((text, url))
}
