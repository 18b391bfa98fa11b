//! Directive syntax parsing: `:name`, `::name` and `:::name`.

use super::DirectiveArgs;

/// A directive found in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedDirective {
    /// `:name[content]{attrs}`
    Inline { name: String, args: DirectiveArgs },
    /// `::name[content]{attrs}`
    Leaf { name: String, args: DirectiveArgs },
    /// `:::name[content]{attrs}` on its own line.
    ContainerStart { name: String, args: DirectiveArgs },
    /// `:::` on its own line.
    ContainerEnd,
}

/// Find the first inline or leaf directive in a line.
///
/// Returns the directive with its byte range. Code spans are skipped, as
/// are colon runs that don't start a valid name (`https://`, `10:30`).
pub(crate) fn parse_line(line: &str) -> Option<(ParsedDirective, usize, usize)> {
    let bytes = line.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'`' => pos = skip_code_span(line, pos),
            b':' => {
                let run = count_run(line, pos, b':');
                if run <= 2
                    && let Some((directive, end)) = parse_at(line, pos + run, run)
                {
                    return Some((directive, pos, end));
                }
                pos += run;
            }
            _ => pos += 1,
        }
    }

    None
}

/// Parse a whole line as a container opening or closing.
pub(crate) fn parse_container_line(line: &str) -> Option<ParsedDirective> {
    let trimmed = line.trim();
    if !trimmed.starts_with(":::") {
        return None;
    }

    let colon_count = count_run(trimmed, 0, b':');
    let after_colons = trimmed[colon_count..].trim_start();
    if after_colons.is_empty() {
        return Some(ParsedDirective::ContainerEnd);
    }

    let name_end = after_colons
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(after_colons.len());
    let name = &after_colons[..name_end];
    if !is_valid_directive_name(name) {
        return None;
    }

    let after_name = after_colons[name_end..].trim_start();
    let (content, consumed) = parse_brackets(after_name);
    let (attrs, _) = parse_braces(&after_name[consumed..]);

    Some(ParsedDirective::ContainerStart {
        name: name.to_owned(),
        args: DirectiveArgs::parse(&content, &attrs),
    })
}

fn parse_at(line: &str, name_start: usize, colons: usize) -> Option<(ParsedDirective, usize)> {
    let rest = &line[name_start..];
    let name_len = rest
        .find(|c: char| !is_name_char(c))
        .unwrap_or(rest.len());
    let name = &rest[..name_len];
    if !is_valid_directive_name(name) {
        return None;
    }

    let mut pos = name_start + name_len;
    let (content, consumed) = parse_brackets(&line[pos..]);
    pos += consumed;
    let (attrs, consumed) = parse_braces(&line[pos..]);
    pos += consumed;

    let name = name.to_owned();
    let args = DirectiveArgs::parse(&content, &attrs);
    let directive = if colons == 1 {
        ParsedDirective::Inline { name, args }
    } else {
        ParsedDirective::Leaf { name, args }
    };
    Some((directive, pos))
}

fn count_run(s: &str, start: usize, byte: u8) -> usize {
    s.as_bytes()[start..]
        .iter()
        .take_while(|&&b| b == byte)
        .count()
}

/// Return the position after the code span opened at `start`, or after
/// the opening backticks when the span is never closed.
fn skip_code_span(line: &str, start: usize) -> usize {
    let ticks = count_run(line, start, b'`');
    let body_start = start + ticks;
    let bytes = line.as_bytes();
    let mut pos = body_start;

    while pos < bytes.len() {
        if bytes[pos] == b'`' {
            let run = count_run(line, pos, b'`');
            if run == ticks {
                return pos + run;
            }
            pos += run;
        } else {
            pos += 1;
        }
    }

    body_start
}

pub(super) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Names start with a letter and continue with letters, digits, `-`, `_`.
fn is_valid_directive_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) && name.chars().all(is_name_char)
}

/// Parse `[content]` with nested brackets. Returns content and bytes consumed.
fn parse_brackets(s: &str) -> (String, usize) {
    parse_delimited(s, '[', ']')
}

/// Parse `{attrs}`. Returns the inner string and bytes consumed.
fn parse_braces(s: &str) -> (String, usize) {
    parse_delimited(s, '{', '}')
}

fn parse_delimited(s: &str, open: char, close: char) -> (String, usize) {
    if !s.starts_with(open) {
        return (String::new(), 0);
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (s[1..i].to_owned(), i + 1);
            }
        }
    }

    (String::new(), 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn inline(line: &str) -> (String, DirectiveArgs, usize, usize) {
        match parse_line(line) {
            Some((ParsedDirective::Inline { name, args }, start, end)) => (name, args, start, end),
            other => panic!("expected inline directive, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_tag() {
        let line = r#"Added in :highlight-tag[v10]{type="concepts"} and later."#;
        let (name, args, start, end) = inline(line);
        assert_eq!(name, "highlight-tag");
        assert_eq!(args.content, "v10");
        assert_eq!(args.get("type"), Some("concepts"));
        assert_eq!(&line[start..end], r#":highlight-tag[v10]{type="concepts"}"#);
    }

    #[test]
    fn test_inline_without_brackets() {
        let (name, args, _, _) = inline(r#":highlight-tag{type="devops" version="v2"}"#);
        assert_eq!(name, "highlight-tag");
        assert_eq!(args.content, "");
        assert_eq!(args.get("version"), Some("v2"));
    }

    #[test]
    fn test_url_before_directive() {
        let line = r#"See https://ibc.cosmos.network :highlight-tag{type="ibc-go"}"#;
        let (name, _, start, _) = inline(line);
        assert_eq!(name, "highlight-tag");
        assert_eq!(start, 31);
    }

    #[test]
    fn test_times_and_labels_not_directives() {
        assert!(parse_line("Meeting at 10:30").is_none());
        assert!(parse_line("Note: nothing here").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_code_span_skipped() {
        let line = r#"Write `:highlight-tag{type="x"}` to add :kbd[K]"#;
        let (name, args, _, _) = inline(line);
        assert_eq!(name, "kbd");
        assert_eq!(args.content, "K");
    }

    #[test]
    fn test_unclosed_code_span_is_literal() {
        let (name, _, _, _) = inline("a ` b :kbd[X]");
        assert_eq!(name, "kbd");
    }

    #[test]
    fn test_leaf() {
        match parse_line(r#"::highlight-tag[v8]{type="ibc-go"}"#) {
            Some((ParsedDirective::Leaf { name, args }, 0, _)) => {
                assert_eq!(name, "highlight-tag");
                assert_eq!(args.content, "v8");
            }
            other => panic!("expected leaf, got {other:?}"),
        }
    }

    #[test]
    fn test_triple_colon_mid_line_ignored() {
        assert!(parse_line("text ::: more").is_none());
    }

    #[test]
    fn test_container_start() {
        let parsed = parse_container_line(r#":::highlight-box[Synopsis]{type="synopsis"}"#);
        match parsed {
            Some(ParsedDirective::ContainerStart { name, args }) => {
                assert_eq!(name, "highlight-box");
                assert_eq!(args.content, "Synopsis");
                assert_eq!(args.get("type"), Some("synopsis"));
            }
            other => panic!("expected container start, got {other:?}"),
        }
    }

    #[test]
    fn test_container_start_with_space() {
        match parse_container_line("  ::: highlight-box {type=tip}") {
            Some(ParsedDirective::ContainerStart { name, args }) => {
                assert_eq!(name, "highlight-box");
                assert_eq!(args.get("type"), Some("tip"));
            }
            other => panic!("expected container start, got {other:?}"),
        }
    }

    #[test]
    fn test_container_end() {
        assert_eq!(parse_container_line(":::"), Some(ParsedDirective::ContainerEnd));
        assert_eq!(parse_container_line("::::  "), Some(ParsedDirective::ContainerEnd));
    }

    #[test]
    fn test_not_container() {
        assert!(parse_container_line("::highlight-tag").is_none());
        assert!(parse_container_line(":::9lives").is_none());
        assert!(parse_container_line("text").is_none());
    }

    #[test]
    fn test_parse_brackets_nested() {
        assert_eq!(parse_brackets("[a [b]] c"), ("a [b]".to_owned(), 7));
        assert_eq!(parse_brackets("[unclosed"), (String::new(), 0));
        assert_eq!(parse_brackets("none"), (String::new(), 0));
    }

    #[test]
    fn test_parse_braces() {
        assert_eq!(parse_braces("{type=tip} x"), ("type=tip".to_owned(), 10));
        assert_eq!(parse_braces("{open"), (String::new(), 0));
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_directive_name("highlight-box"));
        assert!(is_valid_directive_name("tag_2"));
        assert!(!is_valid_directive_name(""));
        assert!(!is_valid_directive_name("2fa"));
        assert!(!is_valid_directive_name("-x"));
    }
}
