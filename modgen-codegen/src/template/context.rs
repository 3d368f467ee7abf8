//! Typed rendering context.

use indexmap::IndexMap;

/// One element of a sequence: an ordered list of string components.
pub type Tuple = Vec<String>;

/// A value bound to a template variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Substituted by `{{ name }}`.
    Scalar(String),
    /// Iterated by `{% for item in name %}`; components read as `{{ item[N] }}`.
    Sequence(Vec<Tuple>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Sequence(_) => "sequence",
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<Vec<Tuple>> for Value {
    fn from(items: Vec<Tuple>) -> Self {
        Value::Sequence(items)
    }
}

/// The variables a template is rendered against.
///
/// Built fresh for each render call and never shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    values: IndexMap<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable, replacing any previous binding.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind a variable in place, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        let ctx = RenderContext::new()
            .with("entity_name", "user")
            .with("imports", vec![vec!["Profile".to_string()]]);

        assert_eq!(ctx.get("entity_name"), Some(&Value::Scalar("user".into())));
        assert_eq!(ctx.get("imports").map(Value::kind), Some("sequence"));
        assert_eq!(ctx.get("clean_entity_name"), None);
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut ctx = RenderContext::new().with("entity_name", "user");
        ctx.insert("entity_name", "asset");

        assert_eq!(ctx.get("entity_name"), Some(&Value::Scalar("asset".into())));
        assert_eq!(ctx, RenderContext::new().with("entity_name", "asset"));
    }
}
