//! Container directive syntax.
//!
//! Callouts are written as container directives:
//!
//! ```text
//! :::callout{type="warning" title="Heads up"}
//! Body in **Markdown**.
//! :::
//! ```
//!
//! The opening fence may use more than three colons; the closing fence must
//! use at least as many. Bracket content (`:::callout[Title]`) is accepted as
//! a title when no `title` attribute is given. Directive lines inside fenced
//! code blocks are left alone.

use std::collections::HashMap;

/// Attributes of a directive: `[content]{key="value" ...}`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    /// Text between `[` and `]`, empty when absent.
    pub content: String,
    /// Key-value attributes.
    pub attrs: HashMap<String, String>,
}

impl DirectiveArgs {
    /// Parse bracket content and the inside of a `{...}` attribute list.
    ///
    /// ```
    /// use hmdocs_renderer::directive::DirectiveArgs;
    ///
    /// let args = DirectiveArgs::parse("", r#"type="warning" title='Heads up'"#);
    /// assert_eq!(args.get("type"), Some("warning"));
    /// assert_eq!(args.get("title"), Some("Heads up"));
    /// ```
    #[must_use]
    pub fn parse(content: &str, attrs_str: &str) -> Self {
        let mut args = Self {
            content: content.to_owned(),
            ..Default::default()
        };

        let mut remaining = attrs_str.trim();
        while !remaining.is_empty() {
            if let Some((key, value, rest)) = parse_key_value(remaining) {
                args.attrs.insert(key.to_owned(), value.to_owned());
                remaining = rest.trim_start();
            } else {
                // Skip one unrecognized character
                let mut chars = remaining.chars();
                chars.next();
                remaining = chars.as_str().trim_start();
            }
        }

        args
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// Parse `key="value"`, `key='value'` or `key=value`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];
    for quote in ['"', '\''] {
        if let Some(stripped) = after_eq.strip_prefix(quote) {
            let end = stripped.find(quote)?;
            return Some((key, &stripped[..end], &stripped[end + 1..]));
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    Some((key, &after_eq[..end], &after_eq[end..]))
}

/// A container directive fence.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Fence {
    /// `:::name[content]{attrs}`
    Start {
        name: String,
        args: DirectiveArgs,
        colons: usize,
    },
    /// `:::`
    End { colons: usize },
}

/// Parse a line as a container fence.
pub(crate) fn parse_fence(line: &str) -> Option<Fence> {
    let trimmed = line.trim();
    let colons = trimmed.chars().take_while(|&c| c == ':').count();
    if colons < 3 {
        return None;
    }

    let rest = &trimmed[colons..];
    if rest.trim().is_empty() {
        return Some(Fence::End { colons });
    }

    let name_end = rest
        .find(|c: char| c == '[' || c == '{' || c.is_whitespace())
        .unwrap_or(rest.len());
    let name = &rest[..name_end];
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }

    let rest = &rest[name_end..];
    let (content, rest) = delimited(rest, '[', ']');
    let (attrs, _) = delimited(rest, '{', '}');

    Some(Fence::Start {
        name: name.to_owned(),
        args: DirectiveArgs::parse(content, attrs),
        colons,
    })
}

/// Split `open ... close` off the front of `s`, honoring nesting.
///
/// Returns the inner text and what follows the closing delimiter, or an
/// empty inner text and `s` unchanged when `s` does not start with `open`.
fn delimited(s: &str, open: char, close: char) -> (&str, &str) {
    if !s.starts_with(open) {
        return ("", s);
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (&s[open.len_utf8()..i], &s[i + close.len_utf8()..]);
            }
        }
    }

    ("", s)
}

/// A chunk of Markdown source after container extraction.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Block {
    /// Plain Markdown, kept verbatim.
    Markdown(String),
    /// A `:::callout` container with its raw body.
    Callout {
        args: DirectiveArgs,
        body: String,
        line: usize,
    },
}

/// Split `source` into plain Markdown and top-level callout containers.
///
/// Nested containers stay inside their parent's body. Other container
/// names pass through as Markdown. An unclosed callout is closed at the end
/// of input and reported in `warnings`.
pub(crate) fn split_blocks(source: &str, warnings: &mut Vec<String>) -> Vec<Block> {
    struct Open {
        args: DirectiveArgs,
        colons: usize,
        line: usize,
        body: String,
        // Colon counts of nested containers inside the body.
        nested: Vec<usize>,
    }

    let mut blocks = Vec::new();
    let mut markdown = String::new();
    let mut open: Option<Open> = None;
    let mut code_fence: Option<String> = None;

    for (idx, line) in source.lines().enumerate() {
        if let Some(marker) = &code_fence {
            if line.trim_start().starts_with(marker.as_str()) {
                code_fence = None;
            }
        } else if let Some(marker) = code_fence_marker(line) {
            code_fence = Some(marker);
        } else {
            match parse_fence(line) {
                Some(Fence::Start { name, args, colons }) => {
                    if let Some(current) = open.as_mut() {
                        current.nested.push(colons);
                    } else if name == "callout" {
                        if !markdown.is_empty() {
                            blocks.push(Block::Markdown(std::mem::take(&mut markdown)));
                        }
                        open = Some(Open {
                            args,
                            colons,
                            line: idx + 1,
                            body: String::new(),
                            nested: Vec::new(),
                        });
                        continue;
                    }
                }
                Some(Fence::End { colons }) => {
                    if let Some(current) = open.as_mut() {
                        if current
                            .nested
                            .last()
                            .is_some_and(|&nested| colons >= nested)
                        {
                            current.nested.pop();
                        } else if current.nested.is_empty() && colons >= current.colons {
                            if let Some(done) = open.take() {
                                blocks.push(Block::Callout {
                                    args: done.args,
                                    body: done.body,
                                    line: done.line,
                                });
                            }
                            continue;
                        }
                    }
                }
                None => {}
            }
        }

        let target = match open.as_mut() {
            Some(current) => &mut current.body,
            None => &mut markdown,
        };
        target.push_str(line);
        target.push('\n');
    }

    if let Some(done) = open {
        warnings.push(format!(
            "unclosed callout opened at line {}, closed at end of input",
            done.line
        ));
        blocks.push(Block::Callout {
            args: done.args,
            body: done.body,
            line: done.line,
        });
    }

    if !markdown.is_empty() {
        blocks.push(Block::Markdown(markdown));
    }

    blocks
}

/// Opening marker of a fenced code block (```` ``` ```` or `~~~`).
fn code_fence_marker(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    let ch = trimmed.chars().next().filter(|&c| c == '`' || c == '~')?;
    let len = trimmed.chars().take_while(|&c| c == ch).count();
    (len >= 3).then(|| ch.to_string().repeat(len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn callout(blocks: &[Block], idx: usize) -> (&DirectiveArgs, &str) {
        match &blocks[idx] {
            Block::Callout { args, body, .. } => (args, body.as_str()),
            Block::Markdown(md) => panic!("expected callout, got markdown {md:?}"),
        }
    }

    #[test]
    fn test_args_quoted_and_bare() {
        let args = DirectiveArgs::parse("", r#"type=warning title="Heads up" x='y z'"#);
        assert_eq!(args.get("type"), Some("warning"));
        assert_eq!(args.get("title"), Some("Heads up"));
        assert_eq!(args.get("x"), Some("y z"));
        assert_eq!(args.get("missing"), None);
    }

    #[test]
    fn test_args_skip_garbage() {
        let args = DirectiveArgs::parse("", r#"#id .class type="info""#);
        assert_eq!(args.get("type"), Some("info"));
        assert_eq!(args.attrs.len(), 1);
    }

    #[test]
    fn test_parse_fence_start() {
        let fence = parse_fence(r#":::callout[Note]{type="info"}"#).unwrap();
        let Fence::Start { name, args, colons } = fence else {
            panic!("expected start fence");
        };
        assert_eq!(name, "callout");
        assert_eq!(args.content, "Note");
        assert_eq!(args.get("type"), Some("info"));
        assert_eq!(colons, 3);
    }

    #[test]
    fn test_parse_fence_end_and_non_fences() {
        assert_eq!(parse_fence("  ::::  "), Some(Fence::End { colons: 4 }));
        assert_eq!(parse_fence("::leaf"), None);
        assert_eq!(parse_fence("plain text"), None);
        assert_eq!(parse_fence(":::bad!name"), None);
    }

    #[test]
    fn test_split_single_callout() {
        let mut warnings = Vec::new();
        let blocks = split_blocks(
            "Intro\n\n:::callout{type=\"warning\"}\nCareful.\n:::\n\nOutro\n",
            &mut warnings,
        );

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], Block::Markdown("Intro\n\n".to_owned()));
        let (args, body) = callout(&blocks, 1);
        assert_eq!(args.get("type"), Some("warning"));
        assert_eq!(body, "Careful.\n");
        assert_eq!(blocks[2], Block::Markdown("\nOutro\n".to_owned()));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_split_keeps_nested_callout_in_body() {
        let source = "::::callout\nOuter\n:::callout{type=\"success\"}\nInner\n:::\n::::\n";
        let mut warnings = Vec::new();

        let blocks = split_blocks(source, &mut warnings);

        assert_eq!(blocks.len(), 1);
        let (_, body) = callout(&blocks, 0);
        assert_eq!(body, "Outer\n:::callout{type=\"success\"}\nInner\n:::\n");
    }

    #[test]
    fn test_split_nested_with_equal_fences() {
        let source = ":::callout\nA\n:::callout\nB\n:::\nC\n:::\n";
        let mut warnings = Vec::new();

        let blocks = split_blocks(source, &mut warnings);

        assert_eq!(blocks.len(), 1);
        let (_, body) = callout(&blocks, 0);
        assert_eq!(body, "A\n:::callout\nB\n:::\nC\n");
    }

    #[test]
    fn test_split_ignores_fences_in_code_blocks() {
        let source = "```md\n:::callout\n:::\n```\n";
        let mut warnings = Vec::new();

        let blocks = split_blocks(source, &mut warnings);

        assert_eq!(blocks, vec![Block::Markdown(source.to_owned())]);
    }

    #[test]
    fn test_split_passes_other_containers_through() {
        let source = ":::tabs\ncontent\n:::\n";
        let mut warnings = Vec::new();

        let blocks = split_blocks(source, &mut warnings);

        assert_eq!(blocks, vec![Block::Markdown(source.to_owned())]);
    }

    #[test]
    fn test_split_unclosed_callout_warns() {
        let mut warnings = Vec::new();

        let blocks = split_blocks("text\n:::callout\nnever closed\n", &mut warnings);

        assert_eq!(blocks.len(), 2);
        let (_, body) = callout(&blocks, 1);
        assert_eq!(body, "never closed\n");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("line 2"));
    }
}
