//! Pass 2: replace every extraction site with a catalog lookup call.
//!
//! The rewriter only looks fragments up in the pass-1 outcome. Synthesized
//! nodes carry `DUMMY_SP`, so nothing generated here or by the catalog
//! injector can match a recorded site.

use swc_common::Span;
use swc_ecma_ast::{
    Expr, JSXAttrValue, JSXElementChild, JSXExpr, JSXExprContainer, Lit, Module, Pat,
    VarDeclarator,
};
use swc_ecma_visit::{VisitMut, VisitMutWith};

use super::build::format_call;
use super::collect::{CollectOutcome, ExtractionSite};
use super::names::ImportNames;
use super::options::TransformOptions;
use super::skip::{FragmentId, FragmentKind};

/// Rewrite all sites of `outcome` in place. Returns how many were rewritten.
pub fn rewrite_sites(
    module: &mut Module,
    outcome: &CollectOutcome,
    names: &ImportNames,
    options: &TransformOptions,
) -> usize {
    let mut rewriter = CallSiteRewriter {
        outcome,
        names,
        options,
        rewritten: 0,
    };
    module.visit_mut_with(&mut rewriter);
    rewriter.rewritten
}

struct CallSiteRewriter<'a> {
    outcome: &'a CollectOutcome,
    names: &'a ImportNames,
    options: &'a TransformOptions,
    rewritten: usize,
}

impl<'a> CallSiteRewriter<'a> {
    fn site(&self, kind: FragmentKind, span: Span) -> Option<&'a ExtractionSite> {
        self.outcome.site(FragmentId::new(kind, span))
    }

    fn call_for(&mut self, site: &ExtractionSite, args: Vec<(String, Box<Expr>)>) -> Expr {
        self.rewritten += 1;
        format_call(self.names, self.options, &site.key, args, site.span())
    }

    /// Replacement for an expression-position fragment, if it is a site.
    fn replace_expr(&mut self, expr: &mut Expr) -> Option<Expr> {
        match expr {
            Expr::Lit(Lit::Str(s)) => {
                let site = self.site(FragmentKind::Literal, s.span)?;
                Some(self.call_for(site, Vec::new()))
            }
            Expr::Tpl(tpl) => {
                let site = self.site(FragmentKind::Template, tpl.span)?;
                let mut exprs = std::mem::take(&mut tpl.exprs);
                // Nested fragments move along with their interpolation
                for expr in &mut exprs {
                    expr.visit_mut_with(self);
                }
                let args = site
                    .placeholders
                    .iter()
                    .map(|placeholder| placeholder.name())
                    .zip(exprs)
                    .collect();
                Some(self.call_for(site, args))
            }
            _ => None,
        }
    }

    fn is_catalog_binding(&self, pat: &Pat) -> bool {
        matches!(pat, Pat::Ident(b) if &*b.id.sym == self.options.catalog_identifier.as_str())
    }

    fn container(span: Span, call: Expr) -> JSXExprContainer {
        JSXExprContainer {
            span,
            expr: JSXExpr::Expr(Box::new(call)),
        }
    }
}

impl VisitMut for CallSiteRewriter<'_> {
    fn visit_mut_var_declarator(&mut self, node: &mut VarDeclarator) {
        // The injected catalog declaration is never rewritten
        if node.span.is_dummy() && self.is_catalog_binding(&node.name) {
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_expr(&mut self, node: &mut Expr) {
        if let Some(call) = self.replace_expr(node) {
            *node = call;
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_attr_value(&mut self, node: &mut JSXAttrValue) {
        if let JSXAttrValue::Str(s) = node
            && let Some(site) = self.site(FragmentKind::Literal, s.span)
        {
            let span = s.span;
            let call = self.call_for(site, Vec::new());
            *node = JSXAttrValue::JSXExprContainer(Self::container(span, call));
            return;
        }
        node.visit_mut_children_with(self);
    }

    fn visit_mut_jsx_element_child(&mut self, node: &mut JSXElementChild) {
        if let JSXElementChild::JSXText(text) = node
            && let Some(site) = self.site(FragmentKind::JsxText, text.span)
        {
            let span = text.span;
            let call = self.call_for(site, Vec::new());
            *node = JSXElementChild::JSXExprContainer(Self::container(span, call));
            return;
        }
        node.visit_mut_children_with(self);
    }
}
