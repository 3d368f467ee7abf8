//! A small typed template engine.
//!
//! Templates are parsed once into a [`Template`] and rendered against a
//! [`RenderContext`] whose values are either scalars or sequences of
//! tuples. Unknown variables are errors, never empty text.
//!
//! ```
//! use modgen_codegen::template::{RenderContext, Template};
//!
//! let template = Template::parse(
//!     "{{ name }}:{% for x in items %} {{ x[0] }}={{ x[1] }}{% endfor %}",
//! )
//! .unwrap();
//!
//! let ctx = RenderContext::new().with("name", "user").with(
//!     "items",
//!     vec![vec!["a".to_string(), "1".to_string()]],
//! );
//!
//! assert_eq!(template.render(&ctx).unwrap(), "user: a=1");
//! ```

mod context;
mod parse;
mod render;

pub use context::{RenderContext, Tuple, Value};
use indexmap::IndexSet;
use parse::Node;

use crate::{Error, Result};

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedTemplate`] for unclosed tags, unknown
    /// statements, unbalanced `for` / `endfor`, and a `for` over a loop
    /// variable.
    pub fn parse(src: &str) -> Result<Self> {
        Ok(Self {
            nodes: parse::parse(src)?,
        })
    }

    /// Render against `ctx`. Pure: equal contexts give identical output.
    pub fn render(&self, ctx: &RenderContext) -> Result<String> {
        render::render(&self.nodes, ctx)
    }

    /// Context variables the template reads, in first-use order.
    ///
    /// Loop bindings are not included.
    pub fn variables(&self) -> Vec<&str> {
        let mut found = IndexSet::new();
        collect_variables(&self.nodes, &mut Vec::new(), &mut found);
        found.into_iter().collect()
    }

    /// Check that `ctx` binds every variable the template reads, with the
    /// right kind, without rendering.
    pub fn check(&self, ctx: &RenderContext) -> Result<()> {
        check_nodes(&self.nodes, ctx, &mut Vec::new())
    }
}

fn collect_variables<'a>(
    nodes: &'a [Node],
    bound: &mut Vec<&'a str>,
    found: &mut IndexSet<&'a str>,
) {
    for node in nodes {
        match node {
            Node::Text(_) => {}
            Node::Expr(expr) => {
                if !bound.contains(&expr.name.as_str()) {
                    found.insert(&expr.name);
                }
            }
            Node::For(block) => {
                found.insert(&block.sequence);
                bound.push(&block.binding);
                collect_variables(&block.body, bound, found);
                bound.pop();
            }
        }
    }
}

fn check_nodes<'a>(nodes: &'a [Node], ctx: &RenderContext, bound: &mut Vec<&'a str>) -> Result<()> {
    for node in nodes {
        match node {
            Node::Text(_) => {}
            Node::Expr(expr) => {
                if bound.contains(&expr.name.as_str()) {
                    continue;
                }
                match ctx.get(&expr.name) {
                    Some(Value::Scalar(_)) if expr.index.is_none() => {}
                    Some(value) => {
                        return Err(Error::malformed(
                            expr.offset,
                            format!("'{}' is a {} here", expr.name, value.kind()),
                        ));
                    }
                    None => {
                        return Err(Error::UndefinedVariable {
                            name: expr.name.clone(),
                        });
                    }
                }
            }
            Node::For(block) => {
                if !matches!(ctx.get(&block.sequence), Some(Value::Sequence(_))) {
                    return Err(Error::malformed(
                        block.offset,
                        format!("'{}' is not a bound sequence", block.sequence),
                    ));
                }
                bound.push(&block.binding);
                check_nodes(&block.body, ctx, bound)?;
                bound.pop();
            }
        }
    }
    Ok(())
}
