use std::sync::OnceLock;

use regex::Regex;

/// What construct a line begins, with the fields already extracted from it.
///
/// This is phase 1 of parsing: each line is judged on local facts alone,
/// without reference to surrounding lines. Multi-line behavior (table
/// capture, quote and paragraph merging, fence bodies) belongs to the
/// parser loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStart {
    /// `| ... |` — membership in a pipe table; validation happens later.
    TableRow,
    /// Opening code fence. `language` defaults to `"plain text"` when the
    /// fence carries no tag.
    CodeFence { language: String },
    /// A homogeneous run (>= 3) of `*`, `-` or `_`.
    Divider,
    /// 1-3 `#` characters, a space, then text.
    Heading { level: u8, text: String },
    /// Bullet marker, `[ ]` or `[x]`, then text.
    ToDo { checked: bool, text: String },
    /// Bullet marker (`-`, `*`, `+`), a space, then text.
    BulletedItem { text: String },
    /// Digits, `.`, a space, then text.
    NumberedItem { text: String },
    /// `>` with optional space; text may be empty.
    Quote { text: String },
}

/// One entry in the precedence table: a rule name plus a fused
/// predicate/extractor (`None` means "this rule does not match").
pub struct StartRule {
    pub name: &'static str,
    matcher: fn(&str) -> Option<LineStart>,
}

impl StartRule {
    pub fn try_match(&self, line: &str) -> Option<LineStart> {
        (self.matcher)(line)
    }
}

/// The classifier's precedence table; first match wins.
///
/// Order is load-bearing: to-do must come before bulleted-item because a
/// to-do line also matches the bullet pattern. A line that matches no rule
/// is a paragraph start (or a continuation of one).
pub const START_RULES: &[StartRule] = &[
    StartRule {
        name: "table-row",
        matcher: match_table_row,
    },
    StartRule {
        name: "code-fence",
        matcher: match_code_fence,
    },
    StartRule {
        name: "divider",
        matcher: match_divider,
    },
    StartRule {
        name: "heading",
        matcher: match_heading,
    },
    StartRule {
        name: "to-do",
        matcher: match_to_do,
    },
    StartRule {
        name: "bulleted-item",
        matcher: match_bulleted,
    },
    StartRule {
        name: "numbered-item",
        matcher: match_numbered,
    },
    StartRule {
        name: "quote",
        matcher: match_quote,
    },
];

/// Runs the precedence table against one line (trailing newline already
/// stripped). `None` means paragraph start or continuation.
pub fn classify(line: &str) -> Option<LineStart> {
    START_RULES.iter().find_map(|rule| rule.try_match(line))
}

/// Default language tag for a bare code fence.
pub const DEFAULT_LANGUAGE: &str = "plain text";

fn match_table_row(line: &str) -> Option<LineStart> {
    (line.len() >= 3 && line.starts_with('|') && line.ends_with('|')).then_some(LineStart::TableRow)
}

fn match_code_fence(line: &str) -> Option<LineStart> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^```(\w+)?$").expect("invalid code fence regex"));
    let caps = re.captures(line)?;
    let language = caps
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    Some(LineStart::CodeFence { language })
}

fn match_divider(line: &str) -> Option<LineStart> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re =
        RE.get_or_init(|| Regex::new(r"^(\*{3,}|-{3,}|_{3,})$").expect("invalid divider regex"));
    re.is_match(line).then_some(LineStart::Divider)
}

fn match_heading(line: &str) -> Option<LineStart> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^(#{1,3}) (.+)$").expect("invalid heading regex"));
    let caps = re.captures(line)?;
    Some(LineStart::Heading {
        level: caps[1].len() as u8,
        text: caps[2].to_string(),
    })
}

fn match_to_do(line: &str) -> Option<LineStart> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re =
        RE.get_or_init(|| Regex::new(r"^[-*+] \[( |x|X)\] (.*)$").expect("invalid to-do regex"));
    let caps = re.captures(line)?;
    Some(LineStart::ToDo {
        checked: &caps[1] != " ",
        text: caps[2].to_string(),
    })
}

fn match_bulleted(line: &str) -> Option<LineStart> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[-*+] (.+)$").expect("invalid bullet regex"));
    let caps = re.captures(line)?;
    Some(LineStart::BulletedItem {
        text: caps[1].to_string(),
    })
}

fn match_numbered(line: &str) -> Option<LineStart> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^\d+\. (.+)$").expect("invalid numbered regex"));
    let caps = re.captures(line)?;
    Some(LineStart::NumberedItem {
        text: caps[1].to_string(),
    })
}

fn match_quote(line: &str) -> Option<LineStart> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^> ?(.*)$").expect("invalid quote regex"));
    let caps = re.captures(line)?;
    Some(LineStart::Quote {
        text: caps[1].to_string(),
    })
}
