//! Module generation.
//!
//! [`ModuleGenerator`] resolves an entity's relations, binds them into a
//! [`RenderContext`] and renders the module template. It performs no I/O;
//! callers decide where the returned source goes.

use std::sync::LazyLock;

use modgen_manifest::Manifest;
use tracing::debug;

use crate::{
    EntityDescriptor, Error, RelationImport, RelationResolver, RenderContext, Result, Template,
    entity::clean_entity_name,
};

const MODULE_TEMPLATE_SRC: &str = include_str!("../templates/module.ts.tmpl");

/// Symbols the module template imports on its own account.
pub const MODULE_TEMPLATE_SYMBOLS: &[&str] = &["Module", "TypeOrmModule"];

static MODULE_TEMPLATE: LazyLock<Result<Template>> =
    LazyLock::new(|| Template::parse(MODULE_TEMPLATE_SRC));

/// The built-in module template, parsed once per process.
pub fn module_template() -> Result<&'static Template> {
    MODULE_TEMPLATE.as_ref().map_err(Clone::clone)
}

/// Build the descriptor of a manifest entity, honouring its `clean_name`.
pub fn entity_descriptor(manifest: &Manifest, name: &str) -> Result<EntityDescriptor> {
    match manifest.clean_name_of(name) {
        Some(clean_name) => EntityDescriptor::new(name, clean_name),
        None => EntityDescriptor::from_name(name),
    }
}

/// Generates NestJS feature module source for one entity at a time.
#[derive(Debug, Clone)]
pub struct ModuleGenerator<'t> {
    template: &'t Template,
    resolver: RelationResolver,
}

impl ModuleGenerator<'static> {
    /// Create a generator over the built-in module template.
    pub fn new() -> Result<Self> {
        Ok(Self::with_template(module_template()?))
    }

    /// Create a generator that knows the file stem of every manifest entity.
    pub fn for_manifest(manifest: &Manifest) -> Result<Self> {
        let mut generator = Self::new()?;
        for name in manifest.entities.keys() {
            let symbol = manifest
                .clean_name_of(name)
                .map(str::to_string)
                .unwrap_or_else(|| clean_entity_name(name));
            generator = generator.with_known_entity(symbol, name.as_str());
        }
        Ok(generator)
    }
}

impl<'t> ModuleGenerator<'t> {
    /// Create a generator over a caller-supplied template.
    ///
    /// The template is rendered with `clean_entity_name`, `entity_name`
    /// and `imports` bound.
    pub fn with_template(template: &'t Template) -> Self {
        Self {
            template,
            resolver: RelationResolver::new().reserving(MODULE_TEMPLATE_SYMBOLS.iter().copied()),
        }
    }

    /// Register the file stem of an entity symbol.
    pub fn with_known_entity(mut self, symbol: impl Into<String>, stem: impl Into<String>) -> Self {
        self.resolver = self.resolver.with_known_entity(symbol, stem);
        self
    }

    /// File stem the generated imports expect for an entity symbol.
    pub fn entity_stem(&self, symbol: &str) -> String {
        self.resolver.entity_stem(symbol)
    }

    /// Resolve the imports of `entity`'s module.
    ///
    /// Fails with [`Error::InvalidEntityName`] when the entity's symbol or
    /// module class would shadow a symbol the template imports.
    pub fn imports<S: AsRef<str>>(
        &self,
        entity: &EntityDescriptor,
        relations: &[S],
    ) -> Result<Vec<RelationImport>> {
        let class_name = module_class_name(entity);
        if let Some(symbol) = MODULE_TEMPLATE_SYMBOLS
            .iter()
            .find(|s| **s == entity.clean_name() || **s == class_name)
        {
            return Err(Error::InvalidEntityName {
                name: entity.clean_name().to_string(),
                reason: format!("the generated module would declare '{}' twice", symbol),
            });
        }

        let imports = self.resolver.resolve(entity, relations)?;

        if let Some(clash) = imports.iter().find(|i| i.symbol_name == class_name) {
            return Err(Error::invalid_relation(
                &clash.symbol_name,
                "name collides with the generated module class",
            ));
        }

        Ok(imports)
    }

    /// Generate the module source for `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GenerationFailed`] wrapping the underlying relation
    /// or template error. No partial output is produced.
    pub fn generate<S: AsRef<str>>(
        &self,
        entity: &EntityDescriptor,
        relations: &[S],
    ) -> Result<String> {
        self.try_generate(entity, relations)
            .map_err(|source| Error::GenerationFailed {
                entity: entity.name().to_string(),
                source: Box::new(source),
            })
    }

    fn try_generate<S: AsRef<str>>(
        &self,
        entity: &EntityDescriptor,
        relations: &[S],
    ) -> Result<String> {
        let imports = self.imports(entity, relations)?;
        let ctx = render_context(entity, &imports);
        let source = self.template.render(&ctx)?;

        debug!(
            entity = entity.name(),
            imports = imports.len(),
            bytes = source.len(),
            "rendered module"
        );
        Ok(source)
    }
}

/// Name of the class the module template exports for `entity`.
pub fn module_class_name(entity: &EntityDescriptor) -> String {
    format!("{}Module", entity.clean_name())
}

/// Bind an entity and its resolved imports for the module template.
pub fn render_context(entity: &EntityDescriptor, imports: &[RelationImport]) -> RenderContext {
    RenderContext::new()
        .with("clean_entity_name", entity.clean_name())
        .with("entity_name", entity.name())
        .with(
            "imports",
            imports
                .iter()
                .map(RelationImport::to_tuple)
                .collect::<Vec<_>>(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> EntityDescriptor {
        EntityDescriptor::new("user", "User").unwrap()
    }

    #[test]
    fn test_builtin_template_parses() {
        assert!(module_template().is_ok());
    }

    #[test]
    fn test_builtin_template_reads_exactly_the_bound_keys() {
        let template = module_template().unwrap();
        let ctx = render_context(&user(), &[]);

        assert_eq!(
            template.variables(),
            ["clean_entity_name", "entity_name", "imports"]
        );
        assert!(template.check(&ctx).is_ok());
    }

    #[test]
    fn test_context_binds_imports_in_order() {
        let generator = ModuleGenerator::new().unwrap();
        let imports = generator.imports(&user(), &["Profile", "Asset"]).unwrap();
        let ctx = render_context(&user(), &imports);

        assert_eq!(
            ctx.get("imports"),
            Some(&crate::Value::Sequence(vec![
                vec!["Profile".to_string(), "./profile.entity".to_string()],
                vec!["Asset".to_string(), "./asset.entity".to_string()],
            ]))
        );
    }

    #[test]
    fn test_template_symbols_are_reserved() {
        let generator = ModuleGenerator::new().unwrap();

        for symbol in ["Module", "TypeOrmModule", "UserModule"] {
            let err = generator.imports(&user(), &[symbol]).unwrap_err();
            assert!(matches!(err, Error::InvalidRelationName { .. }), "{symbol}");
        }
    }

    #[test]
    fn test_entities_clashing_with_template_symbols() {
        let generator = ModuleGenerator::new().unwrap();

        for name in ["module", "type-orm"] {
            let entity = EntityDescriptor::from_name(name).unwrap();
            let err = generator.generate(&entity, &[] as &[&str]).unwrap_err();

            match err {
                Error::GenerationFailed { source, .. } => {
                    assert!(matches!(*source, Error::InvalidEntityName { .. }), "{name}")
                }
                other => panic!("expected GenerationFailed, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_generate_wraps_errors() {
        let generator = ModuleGenerator::new().unwrap();

        let err = generator.generate(&user(), &["not valid"]).unwrap_err();

        match err {
            Error::GenerationFailed { entity, source } => {
                assert_eq!(entity, "user");
                assert!(matches!(*source, Error::InvalidRelationName { .. }));
            }
            other => panic!("expected GenerationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_template() {
        let template = Template::parse(
            "{{ clean_entity_name }}:{% for r in imports %} {{ r[0] }}@{{ r[1] }}{% endfor %}",
        )
        .unwrap();
        let generator = ModuleGenerator::with_template(&template);

        let out = generator.generate(&user(), &["Profile"]).unwrap();

        assert_eq!(out, "User: Profile@./profile.entity");
    }

    #[test]
    fn test_custom_template_with_unknown_variable() {
        let template = Template::parse("{{ table_name }}").unwrap();
        let generator = ModuleGenerator::with_template(&template);

        let err = generator.generate(&user(), &[] as &[&str]).unwrap_err();

        match err {
            Error::GenerationFailed { source, .. } => assert_eq!(
                *source,
                Error::UndefinedVariable {
                    name: "table_name".into()
                }
            ),
            other => panic!("expected GenerationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_for_manifest_uses_entity_stems() {
        let manifest: Manifest = r#"
            [project]
            name = "adam-rms"

            [entities.user]
            relations = ["Profile", "AssetGroup"]

            [entities.user-profile]
            clean_name = "Profile"

            [entities.asset_group]
        "#
        .parse()
        .unwrap();
        let generator = ModuleGenerator::for_manifest(&manifest).unwrap();
        let entity = entity_descriptor(&manifest, "user").unwrap();

        let imports = generator
            .imports(&entity, manifest.relations_of("user"))
            .unwrap();

        assert_eq!(imports[0].module_path, "./user-profile.entity");
        assert_eq!(imports[1].module_path, "./asset_group.entity");
    }

    #[test]
    fn test_entity_descriptor_override() {
        let manifest: Manifest = r#"
            [project]
            name = "adam-rms"

            [entities.user-profile]
            clean_name = "Profile"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            entity_descriptor(&manifest, "user-profile")
                .unwrap()
                .clean_name(),
            "Profile"
        );
        assert_eq!(
            entity_descriptor(&manifest, "asset").unwrap().clean_name(),
            "Asset"
        );
    }
}
