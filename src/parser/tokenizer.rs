//! Splits a report into whitespace-delimited groups and locates the station.

use crate::parser::error::MalformedReportError;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());
static STATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]{3}$").unwrap());

static WIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{3}|VRB|///)P?(\d{2,3}|//)(GP?\d{2,3})?(KT|MPS|KMH|KPH)$").unwrap()
});
static VARIABLE_DIRECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3}V\d{3}$").unwrap());
static WHOLE_MILES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[PM]?\d$").unwrap());
static FRACTION_MILES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d/\d{1,2}SM$").unwrap());
static PROBABILITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^PROB\d{2}$").unwrap());
static SHEAR_RUNWAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^R(WY)?\d{2}[LCR]?$").unwrap());

/// Words that may precede the station identifier.
const PREFIX_WORDS: [&str; 6] = ["METAR", "SPECI", "TAF", "AMD", "COR", "PROV"];

/// One group of a report: a slice of the sanitised text and its byte offset.
///
/// Groups merged by lookahead (`02007KT 340V050`, `1 1/2SM`, `PROB30 TEMPO`,
/// `WS ALL RWY`) span every token they were built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawGroup<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> RawGroup<'a> {
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// A tokenized report: the prefix words, the station and the remaining groups.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    pub source: &'a str,
    pub prefixes: Vec<RawGroup<'a>>,
    pub station: RawGroup<'a>,
    pub groups: Vec<RawGroup<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn has_prefix(&self, word: &str) -> bool {
        self.prefixes.iter().any(|prefix| prefix.text() == word)
    }

    /// Everything after `group`, verbatim.
    pub fn rest_after(&self, group: &RawGroup<'a>) -> &'a str {
        self.source[group.offset + group.text.len()..].trim()
    }
}

/// Collapses whitespace runs, trims and strips a trailing `=`.
pub fn sanitise(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_end_matches('=').trim_end().to_string()
}

/// Splits `text` into groups, merging multi-token constructs.
pub fn tokenize(text: &str) -> Result<Tokens<'_>, MalformedReportError> {
    let words: Vec<RawGroup<'_>> = TOKEN
        .find_iter(text)
        .map(|m| RawGroup::new(m.as_str(), m.start()))
        .collect();
    if words.is_empty() {
        return Err(MalformedReportError::Empty);
    }

    let prefix_count = words
        .iter()
        .take_while(|word| PREFIX_WORDS.contains(&word.text()))
        .count();
    let station = match words.get(prefix_count) {
        Some(word) if STATION.is_match(word.text()) => *word,
        Some(word) => return Err(MalformedReportError::MissingStation(word.text().to_string())),
        None => return Err(MalformedReportError::MissingStation(String::new())),
    };

    Ok(Tokens {
        source: text,
        prefixes: words[..prefix_count].to_vec(),
        station,
        groups: merge_groups(text, &words[prefix_count + 1..]),
    })
}

fn merge_groups<'a>(text: &'a str, words: &[RawGroup<'a>]) -> Vec<RawGroup<'a>> {
    let mut groups = Vec::with_capacity(words.len());
    let mut index = 0;
    while index < words.len() {
        let span = merge_span(words, index);
        let first = words[index];
        let last = words[index + span - 1];
        let end = last.offset() + last.text().len();
        groups.push(RawGroup::new(&text[first.offset()..end], first.offset()));
        index += span;
    }
    groups
}

/// Number of tokens starting at `index` that form one group.
fn merge_span(words: &[RawGroup<'_>], index: usize) -> usize {
    let current = words[index].text();
    let next = words.get(index + 1).map(RawGroup::text);
    let after = words.get(index + 2).map(RawGroup::text);

    match (current, next, after) {
        ("WS", Some("ALL"), Some("RWY")) => 3,
        ("WS", Some(runway), _) if SHEAR_RUNWAY.is_match(runway) => 2,
        (_, Some("TEMPO"), _) if PROBABILITY.is_match(current) => 2,
        (_, Some(range), _) if WIND.is_match(current) && VARIABLE_DIRECTION.is_match(range) => 2,
        (_, Some(fraction), _)
            if WHOLE_MILES.is_match(current) && FRACTION_MILES.is_match(fraction) =>
        {
            2
        }
        _ => 1,
    }
}
