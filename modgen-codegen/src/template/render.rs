//! Template rendering.

use super::{
    context::{RenderContext, Tuple, Value},
    parse::{Expr, Node},
};
use crate::{Error, Result};

/// Loop bindings in scope, innermost last.
type Scopes<'a> = Vec<(&'a str, &'a Tuple)>;

/// Render parsed nodes against a context.
///
/// Output is only returned once every node rendered successfully.
pub(crate) fn render(nodes: &[Node], ctx: &RenderContext) -> Result<String> {
    let mut out = String::new();
    let mut scopes = Scopes::new();
    render_nodes(nodes, ctx, &mut scopes, &mut out)?;
    Ok(out)
}

fn render_nodes<'a>(
    nodes: &'a [Node],
    ctx: &'a RenderContext,
    scopes: &mut Scopes<'a>,
    out: &mut String,
) -> Result<()> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Expr(expr) => out.push_str(resolve(expr, ctx, scopes)?),
            Node::For(block) => {
                let items = match ctx.get(&block.sequence) {
                    Some(Value::Sequence(items)) => items,
                    Some(other) => {
                        return Err(Error::malformed(
                            block.offset,
                            format!(
                                "'for' block iterates '{}', which is a {}",
                                block.sequence,
                                other.kind()
                            ),
                        ));
                    }
                    None => {
                        return Err(Error::malformed(
                            block.offset,
                            format!(
                                "'for' block iterates undefined sequence '{}'",
                                block.sequence
                            ),
                        ));
                    }
                };

                for item in items {
                    scopes.push((block.binding.as_str(), item));
                    render_nodes(&block.body, ctx, scopes, out)?;
                    scopes.pop();
                }
            }
        }
    }
    Ok(())
}

fn resolve<'a>(expr: &Expr, ctx: &'a RenderContext, scopes: &Scopes<'a>) -> Result<&'a str> {
    if let Some(&(_, tuple)) = scopes.iter().rev().find(|(name, _)| *name == expr.name) {
        return match expr.index {
            Some(i) => tuple.get(i).map(String::as_str).ok_or_else(|| {
                Error::malformed(
                    expr.offset,
                    format!(
                        "'{}[{}]' is out of range for elements with {} component(s)",
                        expr.name,
                        i,
                        tuple.len()
                    ),
                )
            }),
            None if tuple.len() == 1 => Ok(tuple[0].as_str()),
            None => Err(Error::malformed(
                expr.offset,
                format!(
                    "loop variable '{}' has {} components and must be indexed, e.g. '{}[0]'",
                    expr.name,
                    tuple.len(),
                    expr.name
                ),
            )),
        };
    }

    match (ctx.get(&expr.name), expr.index) {
        (Some(Value::Scalar(value)), None) => Ok(value.as_str()),
        (Some(Value::Scalar(_)), Some(_)) => Err(Error::malformed(
            expr.offset,
            format!("'{}' is a scalar and cannot be indexed", expr.name),
        )),
        (Some(Value::Sequence(_)), _) => Err(Error::malformed(
            expr.offset,
            format!(
                "'{}' is a sequence; iterate it with a 'for' block",
                expr.name
            ),
        )),
        (None, _) => Err(Error::UndefinedVariable {
            name: expr.name.clone(),
        }),
    }
}
