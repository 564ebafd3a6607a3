//! Capabilities the transform needs from the syntax-tree host.
//!
//! The engine never reprints or re-resolves code itself. It asks the host for
//! the original text of a sub-tree and for the bindings visible at the top of
//! the module.

use std::collections::HashSet;

use swc_common::{SourceMap, SourceMapper, Span};
use swc_ecma_ast::{
    Decl, DefaultDecl, Ident, ImportSpecifier, Module, ModuleDecl, ModuleItem, ObjectPatProp, Pat,
    Stmt, TsModuleName,
};
use swc_ecma_visit::{Visit, VisitWith};

/// Source text of a sub-tree.
pub trait SourceText {
    /// Text covered by `span`, or `None` for synthesized nodes.
    fn source_text(&self, span: Span) -> Option<String>;
}

impl SourceText for SourceMap {
    fn source_text(&self, span: Span) -> Option<String> {
        if span.is_dummy() {
            return None;
        }
        self.span_to_snippet(span).ok()
    }
}

/// Binding lookup and fresh-name generation for the module's top scope.
pub trait ScopeBindings {
    /// Whether `name` is declared in the top scope.
    fn has_binding(&self, name: &str) -> bool;

    /// Generate a name derived from `hint` that is neither bound nor referenced
    /// anywhere in the module, and reserve it.
    fn generate_uid(&mut self, hint: &str) -> String;
}

/// Top-scope bindings and every referenced identifier of one module.
#[derive(Debug, Default)]
pub struct ModuleScope {
    bindings: HashSet<String>,
    references: HashSet<String>,
    generated: HashSet<String>,
}

impl ModuleScope {
    pub fn from_module(module: &Module) -> Self {
        let mut bindings = HashSet::new();
        for item in &module.body {
            collect_item_bindings(item, &mut bindings);
        }

        let mut references = ReferenceCollector::default();
        module.visit_with(&mut references);

        Self {
            bindings,
            references: references.names,
            generated: HashSet::new(),
        }
    }

    fn is_taken(&self, name: &str) -> bool {
        self.bindings.contains(name)
            || self.references.contains(name)
            || self.generated.contains(name)
    }
}

impl ScopeBindings for ModuleScope {
    fn has_binding(&self, name: &str) -> bool {
        self.bindings.contains(name)
    }

    fn generate_uid(&mut self, hint: &str) -> String {
        let base = hint
            .trim_start_matches('_')
            .trim_end_matches(|c: char| c.is_ascii_digit());
        let base = if base.is_empty() { "temp" } else { base };

        let mut i = 1;
        loop {
            let candidate = if i > 1 {
                format!("_{}{}", base, i)
            } else {
                format!("_{}", base)
            };
            if !self.is_taken(&candidate) {
                self.generated.insert(candidate.clone());
                return candidate;
            }
            i += 1;
        }
    }
}

fn collect_item_bindings(item: &ModuleItem, out: &mut HashSet<String>) {
    match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => {
            for specifier in &import.specifiers {
                let local = match specifier {
                    ImportSpecifier::Named(named) => &named.local,
                    ImportSpecifier::Default(default) => &default.local,
                    ImportSpecifier::Namespace(namespace) => &namespace.local,
                };
                out.insert(local.sym.to_string());
            }
        }
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
            collect_decl_bindings(&export.decl, out);
        }
        ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
            let ident = match &export.decl {
                DefaultDecl::Class(class) => class.ident.as_ref(),
                DefaultDecl::Fn(func) => func.ident.as_ref(),
                DefaultDecl::TsInterfaceDecl(_) => None,
            };
            if let Some(ident) = ident {
                out.insert(ident.sym.to_string());
            }
        }
        ModuleItem::Stmt(Stmt::Decl(decl)) => collect_decl_bindings(decl, out),
        _ => {}
    }
}

fn collect_decl_bindings(decl: &Decl, out: &mut HashSet<String>) {
    match decl {
        Decl::Class(class) => {
            out.insert(class.ident.sym.to_string());
        }
        Decl::Fn(func) => {
            out.insert(func.ident.sym.to_string());
        }
        Decl::Var(var) => {
            for declarator in &var.decls {
                collect_pat_bindings(&declarator.name, out);
            }
        }
        Decl::Using(using) => {
            for declarator in &using.decls {
                collect_pat_bindings(&declarator.name, out);
            }
        }
        Decl::TsEnum(ts_enum) => {
            out.insert(ts_enum.id.sym.to_string());
        }
        Decl::TsModule(ts_module) => {
            if let TsModuleName::Ident(ident) = &ts_module.id {
                out.insert(ident.sym.to_string());
            }
        }
        // Type-only declarations do not bind runtime values
        _ => {}
    }
}

fn collect_pat_bindings(pat: &Pat, out: &mut HashSet<String>) {
    match pat {
        Pat::Ident(binding) => {
            out.insert(binding.id.sym.to_string());
        }
        Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                collect_pat_bindings(elem, out);
            }
        }
        Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    ObjectPatProp::KeyValue(kv) => collect_pat_bindings(&kv.value, out),
                    ObjectPatProp::Assign(assign) => {
                        out.insert(assign.key.id.sym.to_string());
                    }
                    ObjectPatProp::Rest(rest) => collect_pat_bindings(&rest.arg, out),
                }
            }
        }
        Pat::Rest(rest) => collect_pat_bindings(&rest.arg, out),
        Pat::Assign(assign) => collect_pat_bindings(&assign.left, out),
        _ => {}
    }
}

#[derive(Default)]
struct ReferenceCollector {
    names: HashSet<String>,
}

impl Visit for ReferenceCollector {
    fn visit_ident(&mut self, node: &Ident) {
        self.names.insert(node.sym.to_string());
    }
}
