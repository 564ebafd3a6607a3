//! Local names for the two injected imports.
//!
//! If the module already binds the preferred name at its top scope, a fresh
//! name is generated instead and used consistently for the import, the
//! catalog declaration and every call site of the file.

use super::host::ScopeBindings;
use super::options::TransformOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportNames {
    /// Local name of the catalog-builder function.
    pub catalog_builder: String,
    /// Local name of the default-imported runtime object.
    pub runtime: String,
}

impl ImportNames {
    /// Pick the local names, checking collisions against the top scope only.
    ///
    /// A nested binding with the preferred name (a parameter or a local
    /// `const intl`) is not detected, so a call site inside that scope refers
    /// to the nested binding instead of the injected import.
    pub fn resolve(scope: &mut dyn ScopeBindings, options: &TransformOptions) -> Self {
        Self {
            catalog_builder: resolve_name(scope, &options.catalog_builder),
            runtime: resolve_name(scope, &options.runtime_name),
        }
    }
}

fn resolve_name(scope: &mut dyn ScopeBindings, preferred: &str) -> String {
    if scope.has_binding(preferred) {
        scope.generate_uid(preferred)
    } else {
        preferred.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Scope with a fixed set of bindings.
    struct FixedScope {
        bindings: HashSet<&'static str>,
        generated: usize,
    }

    impl ScopeBindings for FixedScope {
        fn has_binding(&self, name: &str) -> bool {
            self.bindings.contains(name)
        }

        fn generate_uid(&mut self, hint: &str) -> String {
            self.generated += 1;
            format!("_{}{}", hint, self.generated)
        }
    }

    fn scope(bindings: &[&'static str]) -> FixedScope {
        FixedScope {
            bindings: bindings.iter().copied().collect(),
            generated: 0,
        }
    }

    #[test]
    fn test_preferred_names_when_free() {
        let mut scope = scope(&["React"]);
        let names = ImportNames::resolve(&mut scope, &TransformOptions::default());

        assert_eq!(names.catalog_builder, "defineMessages");
        assert_eq!(names.runtime, "intl");
        assert_eq!(scope.generated, 0);
    }

    #[test]
    fn test_colliding_names_are_regenerated() {
        let mut scope = scope(&["intl", "defineMessages"]);
        let names = ImportNames::resolve(&mut scope, &TransformOptions::default());

        assert_eq!(names.catalog_builder, "_defineMessages1");
        assert_eq!(names.runtime, "_intl2");
    }

    #[test]
    fn test_only_colliding_name_changes() {
        let mut scope = scope(&["intl"]);
        let names = ImportNames::resolve(&mut scope, &TransformOptions::default());

        assert_eq!(names.catalog_builder, "defineMessages");
        assert_eq!(names.runtime, "_intl1");
    }
}
