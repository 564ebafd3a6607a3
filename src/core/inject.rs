//! Catalog injection.
//!
//! Right after the leading import block of the module, inserts in order:
//!
//! ```text
//! import { defineMessages } from "react-intl";
//! import intl from "@/utils/intl";
//! const i18nMessages = defineMessages({ "你好": { id: "你好" }, ... });
//! ```

use swc_common::{DUMMY_SP, SyntaxContext};
use swc_ecma_ast::{
    BindingIdent, Decl, Expr, IdentName, ImportDecl, ImportDefaultSpecifier, ImportNamedSpecifier,
    ImportPhase, ImportSpecifier, Module, ModuleDecl, ModuleExportName, ModuleItem, Pat, PropName,
    Stmt, VarDecl, VarDeclKind, VarDeclarator,
};

use super::build::{call, ident, object_lit, str_expr, str_lit};
use super::names::ImportNames;
use super::options::TransformOptions;
use super::registry::MessageEntry;

/// Index just past the leading run of import declarations.
///
/// Clamped to the statement count, so empty and import-only modules are fine.
pub fn leading_import_end(body: &[ModuleItem]) -> usize {
    body.iter()
        .take_while(|item| matches!(item, ModuleItem::ModuleDecl(ModuleDecl::Import(_))))
        .count()
}

/// Insert the two imports and the catalog declaration.
///
/// Returns the index the first inserted item landed at.
pub fn inject_catalog(
    module: &mut Module,
    names: &ImportNames,
    options: &TransformOptions,
    entries: &[MessageEntry],
) -> usize {
    let at = leading_import_end(&module.body);
    let items = [
        builder_import(names, options),
        runtime_import(names, options),
        catalog_declaration(names, options, entries),
    ];
    module.body.splice(at..at, items);
    at
}

/// `import { defineMessages } from "react-intl";`
/// or `import { defineMessages as _defineMessages } from "react-intl";`
fn builder_import(names: &ImportNames, options: &TransformOptions) -> ModuleItem {
    let imported = (names.catalog_builder != options.catalog_builder)
        .then(|| ModuleExportName::Ident(ident(&options.catalog_builder)));

    import_decl(
        ImportSpecifier::Named(ImportNamedSpecifier {
            span: DUMMY_SP,
            local: ident(&names.catalog_builder),
            imported,
            is_type_only: false,
        }),
        &options.catalog_module,
    )
}

/// `import intl from "@/utils/intl";`
fn runtime_import(names: &ImportNames, options: &TransformOptions) -> ModuleItem {
    import_decl(
        ImportSpecifier::Default(ImportDefaultSpecifier {
            span: DUMMY_SP,
            local: ident(&names.runtime),
        }),
        &options.runtime_module,
    )
}

fn import_decl(specifier: ImportSpecifier, src: &str) -> ModuleItem {
    ModuleItem::ModuleDecl(ModuleDecl::Import(ImportDecl {
        span: DUMMY_SP,
        specifiers: vec![specifier],
        src: Box::new(str_lit(src)),
        type_only: false,
        with: None,
        phase: ImportPhase::Evaluation,
    }))
}

/// `const i18nMessages = defineMessages({ "key": { id: "key" }, ... });`
fn catalog_declaration(
    names: &ImportNames,
    options: &TransformOptions,
    entries: &[MessageEntry],
) -> ModuleItem {
    let catalog = object_lit(
        entries
            .iter()
            .map(|entry| {
                let descriptor = object_lit(vec![(
                    PropName::Ident(IdentName::new("id".into(), DUMMY_SP)),
                    Box::new(str_expr(&entry.id)),
                )]);
                (PropName::Str(str_lit(&entry.key)), Box::new(descriptor))
            })
            .collect(),
    );

    let init = call(
        Expr::Ident(ident(&names.catalog_builder)),
        vec![catalog],
        DUMMY_SP,
    );

    ModuleItem::Stmt(Stmt::Decl(Decl::Var(Box::new(VarDecl {
        span: DUMMY_SP,
        ctxt: SyntaxContext::empty(),
        kind: VarDeclKind::Const,
        declare: false,
        decls: vec![VarDeclarator {
            span: DUMMY_SP,
            name: Pat::Ident(BindingIdent {
                id: ident(&options.catalog_identifier),
                type_ann: None,
            }),
            init: Some(Box::new(init)),
            definite: false,
        }],
    }))))
}
