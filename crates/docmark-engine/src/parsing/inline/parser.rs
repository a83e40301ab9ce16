use crate::models::{InlineSpan, Mark};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, Strong, WikiLink},
};

/// Tokenizes a single logical line into styled text spans.
///
/// # Precedence
/// At each position the constructs are tried in a fixed order: wikilink,
/// link, bold, italic, code span. The first one that closes wins and the
/// cursor jumps past it, so matches never overlap. Unclosed constructs are
/// left as plain text.
///
/// Bold, italic and link text are tokenized recursively; their mark is
/// pushed after the inner marks (innermost first). Code spans and wikilinks
/// are raw.
///
/// # Returns
/// An empty vector for blank input. Otherwise a sequence of spans, none of
/// which has empty `content`.
pub fn tokenize(text: &str) -> Vec<InlineSpan> {
    if text.trim().is_empty() {
        return vec![];
    }
    tokenize_run(text)
}

fn tokenize_run(s: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineSpan>, text: &str) {
        if !text.is_empty() {
            out.push(InlineSpan::plain(text));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(spans) = try_parse_construct(&mut cur) {
            flush_text(&mut out, &s[text_start..start]);
            out.extend(spans);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &s[text_start..]);
    out
}

fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<Vec<InlineSpan>> {
    if let Some(span) = try_parse_wikilink(cur) {
        return Some(vec![span]);
    }
    if let Some(spans) = try_parse_link(cur) {
        return Some(spans);
    }
    if let Some(spans) = try_parse_strong(cur) {
        return Some(spans);
    }
    if let Some(spans) = try_parse_emphasis(cur) {
        return Some(spans);
    }
    try_parse_code_span(cur).map(|span| vec![span])
}

/// Tokenizes `inner` and wraps every resulting span in `mark`.
fn wrap(inner: &str, mark: Mark) -> Vec<InlineSpan> {
    let mut spans = tokenize_run(inner);
    for span in &mut spans {
        span.marks.push(mark.clone());
    }
    spans
}

/// `[[target]]` or `[[target#anchor]]`.
fn try_parse_wikilink(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if !cur.starts_with(WikiLink::OPEN) {
        return None;
    }

    let body = &cur.rest()[WikiLink::OPEN.len()..];
    let close = body.find(WikiLink::CLOSE)?;
    let (target, anchor) = WikiLink::split(&body[..close])?;

    let span = InlineSpan::marked(
        WikiLink::display_text(target),
        Mark::Wikilink {
            target: target.to_string(),
            anchor: anchor.map(str::to_string),
        },
    );
    cur.bump_n(WikiLink::OPEN.len() + close + WikiLink::CLOSE.len());
    Some(span)
}

/// `[text](href)`. Both parts must be non-empty.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Vec<InlineSpan>> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let body = &cur.rest()[1..];
    let text_end = body.find(Link::TEXT_CLOSE)?;
    let text = &body[..text_end];
    let after_text = body[text_end + 1..].strip_prefix(Link::HREF_OPEN)?;
    let href_end = after_text.find(Link::HREF_CLOSE)?;
    let href = &after_text[..href_end];
    if text.is_empty() || href.is_empty() {
        return None;
    }

    let spans = wrap(
        text,
        Mark::Link {
            href: href.to_string(),
        },
    );
    cur.bump_n(1 + text_end + 1 + 1 + href_end + 1);
    Some(spans)
}

/// `**bold**`. The closing delimiter is the first `**` not followed by
/// another `*`, so `***x***` reads as bold around italic.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<Vec<InlineSpan>> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let body = &cur.rest()[Strong::DELIM.len()..];
    let mut from = body.chars().next()?.len_utf8();
    let close = loop {
        let idx = from + body.get(from..)?.find(Strong::DELIM)?;
        if body.as_bytes().get(idx + Strong::DELIM.len()) != Some(&Emphasis::DELIM) {
            break idx;
        }
        from = idx + 1;
    };

    let spans = wrap(&body[..close], Mark::Bold);
    cur.bump_n(Strong::DELIM.len() + close + Strong::DELIM.len());
    Some(spans)
}

/// `*italic*`. The inner text may not contain `*`.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<Vec<InlineSpan>> {
    if cur.peek() != Some(Emphasis::DELIM) {
        return None;
    }

    let body = &cur.rest()[1..];
    let close = body.find(Emphasis::DELIM as char)?;
    if close == 0 {
        return None;
    }

    let spans = wrap(&body[..close], Mark::Italic);
    cur.bump_n(1 + close + 1);
    Some(spans)
}

/// `` `code` ``. Raw zone: the content is not tokenized further.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineSpan> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let body = &cur.rest()[1..];
    let close = body.find(CodeSpan::TICK as char)?;
    if close == 0 {
        return None;
    }

    let span = InlineSpan::marked(&body[..close], Mark::Code);
    cur.bump_n(1 + close + 1);
    Some(span)
}
