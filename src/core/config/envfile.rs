//! `.env` file grammar.
//!
//! One `[export ]KEY=value` (or `KEY: value`) assignment per line, `#`
//! comments, values optionally wrapped in `'`, `"` or `` ` `` quotes. Quoted
//! values may span lines. Inside double quotes the two-character sequences
//! `\n` and `\r` become a newline and a carriage return; nothing else is
//! interpreted. In particular `$NAME` and `${NAME}` stay as written, so a
//! credential containing `$` reaches the resolver byte for byte.

/// Assignments in file order plus the count of lines that were not one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEnvFile {
    pub entries: Vec<(String, String)>,
    /// Non-blank, non-comment lines that did not parse as an assignment.
    pub skipped: usize,
}

const QUOTES: [char; 3] = ['\'', '"', '`'];

/// Parse env-file text. Later duplicates are kept; the caller decides who wins.
pub fn parse(src: &str) -> ParsedEnvFile {
    let text = src.replace("\r\n", "\n").replace('\r', "\n");
    let chars: Vec<char> = text.chars().collect();
    let mut parsed = ParsedEnvFile::default();

    let mut pos = 0;
    while pos < chars.len() {
        match parse_entry(&chars, pos) {
            Some(entry) => {
                parsed.entries.push((entry.key, entry.value));
                pos = next_line(&chars, entry.end);
            }
            None => {
                let next = next_line(&chars, pos);
                if !is_blank_or_comment(&chars[pos..next]) {
                    parsed.skipped += 1;
                }
                pos = next;
            }
        }
    }
    parsed
}

struct Entry {
    key: String,
    value: String,
    end: usize,
}

fn parse_entry(chars: &[char], pos: usize) -> Option<Entry> {
    let start = skip_space(chars, pos);
    strip_export(chars, start)
        .and_then(|after| parse_assignment(chars, after))
        .or_else(|| parse_assignment(chars, start))
}

/// Position after `export` and its trailing whitespace, if present.
fn strip_export(chars: &[char], pos: usize) -> Option<usize> {
    let word: Vec<char> = "export".chars().collect();
    let end = pos + word.len();
    if chars.get(pos..end)? != word.as_slice() {
        return None;
    }
    let after = skip_space(chars, end);
    (after > end).then_some(after)
}

fn parse_assignment(chars: &[char], pos: usize) -> Option<Entry> {
    let mut i = pos;
    while i < chars.len() && is_key_char(chars[i]) {
        i += 1;
    }
    if i == pos {
        return None;
    }
    let key: String = chars[pos..i].iter().collect();

    let sep = skip_space(chars, i);
    let value_start = match chars.get(sep) {
        Some('=') => sep + 1,
        Some(':') if chars.get(i).copied() == Some(':') => {
            // `KEY: value` needs at least one whitespace character after the colon.
            match chars.get(i + 1) {
                Some(c) if is_space(*c) => i + 2,
                _ => return None,
            }
        }
        _ => return None,
    };

    let (raw, end) = match_value(chars, value_start);
    Some(Entry {
        key,
        value: finish_value(&raw),
        end,
    })
}

/// Raw (untrimmed) value text and the position where the assignment ends.
fn match_value(chars: &[char], pos: usize) -> (String, usize) {
    let quote_pos = skip_space(chars, pos);
    if let Some(&quote) = chars.get(quote_pos).filter(|c| QUOTES.contains(*c)) {
        for close in closing_candidates(chars, quote_pos, quote).into_iter().rev() {
            if line_rest_is_empty(chars, close + 1) {
                return (chars[pos..=close].iter().collect(), close + 1);
            }
        }
    }

    let mut end = pos;
    while end < chars.len() && !matches!(chars[end], '#' | '\n') {
        end += 1;
    }
    (chars[pos..end].iter().collect(), end)
}

/// Positions that may close a quote opened at `open`: every backslash-escaped
/// quote, up to and including the first unescaped one.
fn closing_candidates(chars: &[char], open: usize, quote: char) -> Vec<usize> {
    let mut candidates = Vec::new();
    for (i, &c) in chars.iter().enumerate().skip(open + 1) {
        if c != quote {
            continue;
        }
        candidates.push(i);
        if i == open + 1 || chars[i - 1] != '\\' {
            break;
        }
    }
    candidates
}

/// Only whitespace, optionally followed by a `#` comment, remains on the line.
fn line_rest_is_empty(chars: &[char], pos: usize) -> bool {
    let mut i = pos;
    while i < chars.len() && chars[i] != '\n' && is_space(chars[i]) {
        i += 1;
    }
    i == chars.len() || matches!(chars[i], '\n' | '#')
}

fn finish_value(raw: &str) -> String {
    let trimmed = raw.trim_matches(is_space);
    let mut value = strip_quotes(trimmed).to_string();
    if trimmed.starts_with('"') {
        value = value.replace("\\n", "\n").replace("\\r", "\r");
    }
    value
}

fn strip_quotes(value: &str) -> &str {
    let mut it = value.chars();
    match (it.next(), it.next_back()) {
        (Some(first), Some(last)) if first == last && QUOTES.contains(&first) => {
            &value[first.len_utf8()..value.len() - last.len_utf8()]
        }
        _ => value,
    }
}

fn next_line(chars: &[char], pos: usize) -> usize {
    chars[pos.min(chars.len())..]
        .iter()
        .position(|&c| c == '\n')
        .map_or(chars.len(), |offset| pos + offset + 1)
}

fn is_blank_or_comment(line: &[char]) -> bool {
    line.iter()
        .copied()
        .find(|c| !is_space(*c))
        .is_none_or(|c| c == '#')
}

fn skip_space(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && is_space(chars[pos]) {
        pos += 1;
    }
    pos
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}
