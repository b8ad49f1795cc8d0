//! Best-effort structuring of the free-text analysis report.
//!
//! The remote service loosely follows a convention of numbered sections and
//! bold-marked headers. Splitting, title extraction and keyword
//! classification are display heuristics only: malformed input degrades to
//! "one big segment with the default icon", never to an error.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionIcon {
    Summary,
    Statistics,
    Trend,
    Insight,
    Problem,
    Recommendation,
    Default,
}

impl SectionIcon {
    pub fn symbol(&self) -> &'static str {
        match self {
            SectionIcon::Summary => "▤",
            SectionIcon::Statistics => "σ",
            SectionIcon::Trend => "↗",
            SectionIcon::Insight => "✦",
            SectionIcon::Problem => "!",
            SectionIcon::Recommendation => "➤",
            SectionIcon::Default => "◆",
        }
    }
}

const KEYWORD_ICONS: &[(&str, SectionIcon)] = &[
    ("RESUMEN", SectionIcon::Summary),
    ("ESTADÍSTICA", SectionIcon::Statistics),
    ("PATRÓN", SectionIcon::Trend),
    ("INSIGHT", SectionIcon::Insight),
    ("PROBLEMA", SectionIcon::Problem),
    ("RECOMENDACIÓN", SectionIcon::Recommendation),
];

/// One displayable block of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Trimmed source slice, delimiter included. Classification runs over
    /// this, so a keyword inside the title still counts.
    pub raw: String,
    pub title: Option<String>,
    pub body: String,
    pub icons: Vec<SectionIcon>,
}

fn boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // A new segment starts at any line beginning with `<digits>.` or `**`.
    // The regex crate has no lookahead, so boundaries are collected as match
    // starts instead of split points; the delimiter stays with its segment.
    RE.get_or_init(|| Regex::new(r"(?m)^(?:\d+\.\s|\*\*)").expect("boundary regex"))
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("title regex"))
}

/// Splits a report into ordered, non-empty segments. Text without any
/// delimiter comes back as a single segment.
pub fn split_report(text: &str) -> Vec<Segment> {
    let mut starts = vec![0];
    for m in boundary_re().find_iter(text) {
        if m.start() != 0 {
            starts.push(m.start());
        }
    }
    starts.push(text.len());

    starts
        .windows(2)
        .filter_map(|pair| Segment::from_raw(&text[pair[0]..pair[1]]))
        .collect()
}

impl Segment {
    /// Returns `None` for whitespace-only slices.
    fn from_raw(slice: &str) -> Option<Self> {
        let raw = slice.trim();
        if raw.is_empty() {
            return None;
        }

        // The first bold span becomes the title and is cut from the body.
        let (title, body) = match title_re().find(raw) {
            Some(m) => {
                let title = raw[m.start() + 2..m.end() - 2].to_string();
                let mut body = String::with_capacity(raw.len());
                body.push_str(&raw[..m.start()]);
                body.push_str(&raw[m.end()..]);
                (Some(title), body.trim().to_string())
            }
            None => (None, raw.to_string()),
        };

        let icons = classify(raw);

        Some(Self {
            raw: raw.to_string(),
            title,
            body,
            icons,
        })
    }
}

/// Independent keyword checks; several icons can apply to one segment, and
/// a segment matching none gets the single default icon.
pub fn classify(raw: &str) -> Vec<SectionIcon> {
    let mut icons: Vec<SectionIcon> = KEYWORD_ICONS
        .iter()
        .filter(|(keyword, _)| raw.contains(keyword))
        .map(|(_, icon)| *icon)
        .collect();

    if icons.is_empty() {
        icons.push(SectionIcon::Default);
    }
    icons
}
