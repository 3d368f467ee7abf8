//! Template parsing.
//!
//! Supported syntax:
//!
//! - `{{ name }}` and `{{ item[N] }}` placeholders
//! - `{% for item in name %} ... {% endfor %}` blocks
//! - `-` on either side of a tag (`{%-`, `-%}`, `{{-`, `-}}`) strips all
//!   whitespace on that side of the tag

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Text(String),
    Expr(Expr),
    For(ForBlock),
}

/// A placeholder: a variable name with an optional component index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Expr {
    pub name: String,
    pub index: Option<usize>,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ForBlock {
    pub binding: String,
    pub sequence: String,
    pub body: Vec<Node>,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Expr,
    Stmt,
}

impl TagKind {
    fn close(self) -> &'static str {
        match self {
            TagKind::Expr => "}}",
            TagKind::Stmt => "%}",
        }
    }
}

#[derive(Debug)]
enum Token {
    Text(String),
    Tag {
        kind: TagKind,
        inner: String,
        offset: usize,
    },
}

enum Statement {
    For { binding: String, sequence: String },
    EndFor,
}

/// Parse template source into nodes.
pub(crate) fn parse(src: &str) -> Result<Vec<Node>> {
    let mut tokens = tokenize(src)?.into_iter();
    let (nodes, end) = parse_block(&mut tokens, &mut Vec::new())?;

    match end {
        Some(offset) => Err(Error::malformed(offset, "'endfor' without a matching 'for'")),
        None => Ok(nodes),
    }
}

fn tokenize(src: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut trim_next = false;

    while let Some((rel, kind)) = next_tag(&src[pos..]) {
        let start = pos + rel;
        push_text(&mut tokens, &src[pos..start], trim_next);

        let inner_start = start + 2;
        let Some(close_rel) = src[inner_start..].find(kind.close()) else {
            return Err(Error::malformed(
                start,
                format!("tag is never closed with '{}'", kind.close()),
            ));
        };
        let inner_end = inner_start + close_rel;

        let mut inner = &src[inner_start..inner_end];
        if let Some(stripped) = inner.strip_prefix('-') {
            inner = stripped;
            trim_previous(&mut tokens);
        }
        trim_next = match inner.strip_suffix('-') {
            Some(stripped) => {
                inner = stripped;
                true
            }
            None => false,
        };

        tokens.push(Token::Tag {
            kind,
            inner: inner.trim().to_string(),
            offset: start,
        });
        pos = inner_end + 2;
    }

    push_text(&mut tokens, &src[pos..], trim_next);
    Ok(tokens)
}

/// Find the earliest `{{` or `{%` in `s`.
fn next_tag(s: &str) -> Option<(usize, TagKind)> {
    let expr = s.find("{{").map(|i| (i, TagKind::Expr));
    let stmt = s.find("{%").map(|i| (i, TagKind::Stmt));

    match (expr, stmt) {
        (Some(e), Some(s)) => Some(if e.0 <= s.0 { e } else { s }),
        (e, s) => e.or(s),
    }
}

fn push_text(tokens: &mut Vec<Token>, text: &str, trim_start: bool) {
    let text = if trim_start { text.trim_start() } else { text };
    if !text.is_empty() {
        tokens.push(Token::Text(text.to_string()));
    }
}

fn trim_previous(tokens: &mut Vec<Token>) {
    if let Some(Token::Text(text)) = tokens.last_mut() {
        let trimmed_len = text.trim_end().len();
        text.truncate(trimmed_len);
        if text.is_empty() {
            tokens.pop();
        }
    }
}

/// Parse nodes until the end of input or an `endfor`.
///
/// `bound` holds the bindings of the enclosing `for` blocks. Returns the
/// offset of the terminating `endfor`, if one was reached.
fn parse_block(
    tokens: &mut std::vec::IntoIter<Token>,
    bound: &mut Vec<String>,
) -> Result<(Vec<Node>, Option<usize>)> {
    let mut nodes = Vec::new();

    while let Some(token) = tokens.next() {
        match token {
            Token::Text(text) => nodes.push(Node::Text(text)),
            Token::Tag {
                kind: TagKind::Expr,
                inner,
                offset,
            } => nodes.push(Node::Expr(parse_expr(&inner, offset)?)),
            Token::Tag {
                kind: TagKind::Stmt,
                inner,
                offset,
            } => match parse_statement(&inner, offset)? {
                Statement::For { binding, sequence } => {
                    // Sequences always come from the context, never a loop variable
                    if bound.contains(&sequence) {
                        return Err(Error::malformed(
                            offset,
                            format!("'for' block iterates loop variable '{}'", sequence),
                        ));
                    }

                    bound.push(binding.clone());
                    let (body, end) = parse_block(tokens, bound)?;
                    bound.pop();
                    if end.is_none() {
                        return Err(Error::malformed(
                            offset,
                            format!("'for' block over '{}' has no matching 'endfor'", sequence),
                        ));
                    }
                    nodes.push(Node::For(ForBlock {
                        binding,
                        sequence,
                        body,
                        offset,
                    }));
                }
                Statement::EndFor => return Ok((nodes, Some(offset))),
            },
        }
    }

    Ok((nodes, None))
}

fn parse_statement(inner: &str, offset: usize) -> Result<Statement> {
    let words: Vec<&str> = inner.split_whitespace().collect();

    match words.as_slice() {
        ["for", binding, "in", sequence] => {
            for name in [binding, sequence] {
                if !is_variable_name(name) {
                    return Err(Error::malformed(
                        offset,
                        format!("invalid variable name '{}'", name),
                    ));
                }
            }
            Ok(Statement::For {
                binding: binding.to_string(),
                sequence: sequence.to_string(),
            })
        }
        ["for", ..] => Err(Error::malformed(
            offset,
            "expected 'for <item> in <sequence>'",
        )),
        ["endfor"] => Ok(Statement::EndFor),
        [] => Err(Error::malformed(offset, "empty statement")),
        [keyword, ..] => Err(Error::malformed(
            offset,
            format!("unknown statement '{}'", keyword),
        )),
    }
}

fn parse_expr(inner: &str, offset: usize) -> Result<Expr> {
    let (name, index) = match inner.split_once('[') {
        None => (inner, None),
        Some((name, rest)) => {
            let Some(digits) = rest.trim_end().strip_suffix(']') else {
                return Err(Error::malformed(offset, "expected ']' after index"));
            };
            let digits = digits.trim();
            let index = digits.parse::<usize>().map_err(|_| {
                Error::malformed(offset, format!("invalid index '{}'", digits))
            })?;
            (name.trim_end(), Some(index))
        }
    };

    if name.is_empty() {
        return Err(Error::malformed(offset, "empty placeholder"));
    }
    if !is_variable_name(name) {
        return Err(Error::malformed(
            offset,
            format!("invalid variable name '{}'", name),
        ));
    }

    Ok(Expr {
        name: name.to_string(),
        index,
        offset,
    })
}

fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    fn expr(name: &str, index: Option<usize>, offset: usize) -> Node {
        Node::Expr(Expr {
            name: name.to_string(),
            index,
            offset,
        })
    }

    #[test]
    fn test_text_and_placeholders() {
        let nodes = parse("class {{ name }}Module {}").unwrap();

        assert_eq!(
            nodes,
            [text("class "), expr("name", None, 6), text("Module {}")]
        );
    }

    #[test]
    fn test_for_block() {
        let nodes = parse("{% for x in imports %}{{ x[1] }};{% endfor %}").unwrap();

        assert_eq!(
            nodes,
            [Node::For(ForBlock {
                binding: "x".into(),
                sequence: "imports".into(),
                body: vec![expr("x", Some(1), 22), text(";")],
                offset: 0,
            })]
        );
    }

    #[test]
    fn test_whitespace_control() {
        let nodes = parse("a,\n  {%- for x in xs -%}\n  b\n{% endfor %}").unwrap();

        match nodes.as_slice() {
            [Node::Text(before), Node::For(block)] => {
                assert_eq!(before, "a,");
                assert_eq!(block.body, [text("b\n")]);
            }
            other => panic!("unexpected nodes: {other:?}"),
        }
    }

    #[test]
    fn test_braces_that_are_not_tags() {
        let nodes = parse("@Module({\n}) {}").unwrap();
        assert_eq!(nodes, [text("@Module({\n}) {}")]);
    }

    #[test]
    fn test_unclosed_tag() {
        let err = parse("import {{ name }").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { offset: 7, .. }));
    }

    #[test]
    fn test_missing_endfor() {
        let err = parse("x{% for x in imports %}{{ x[0] }}").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { offset: 1, .. }));
    }

    #[test]
    fn test_stray_endfor() {
        let err = parse("{{ a }}{% endfor %}").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { offset: 7, .. }));
    }

    #[test]
    fn test_loop_over_loop_variable() {
        let err = parse("{% for x in xs %}{% for y in x %}{% endfor %}{% endfor %}").unwrap_err();
        assert!(matches!(err, Error::MalformedTemplate { offset: 17, .. }));

        assert!(parse("{% for x in xs %}{% endfor %}{% for y in x %}{% endfor %}").is_ok());
    }

    #[test]
    fn test_bad_statements_and_expressions() {
        for src in [
            "{% if x %}",
            "{% for x of xs %}{% endfor %}",
            "{% %}",
            "{{ }}",
            "{{ x[a] }}",
            "{{ x[0 }}",
            "{{ x.y }}",
        ] {
            assert!(
                matches!(parse(src), Err(Error::MalformedTemplate { .. })),
                "expected MalformedTemplate for {src:?}"
            );
        }
    }
}
