//! Pass 1: collect translatable fragments.
//!
//! Walks the whole module in document order, classifies every candidate
//! (JSX text, string literals, template literals) and records:
//! - the per-file key registry,
//! - the skip table (node identity -> excluded),
//! - one extraction site per rewritable fragment, keyed by node identity.
//!
//! Nothing in the tree is modified here. The rewrite pass consumes the
//! outcome read-only and never re-derives a decision.

use std::collections::HashMap;

use swc_common::Span;
use swc_ecma_ast::{Expr, ImportDecl, JSXAttrValue, JSXText, Lit, Module, Str, Tpl, TsEnumMember};
use swc_ecma_visit::{Visit, VisitWith};

use super::host::SourceText;
use super::options::TransformOptions;
use super::parsers::jsx::ExtractedComments;
use super::registry::MessageKeyRegistry;
use super::skip::{FragmentId, FragmentKind, MarkerComment, SkipClassifier, SkipContext, SkipTable};
use super::template::{Placeholder, build_template_message};

/// A fragment that will be rewritten into a catalog lookup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSite {
    pub id: FragmentId,
    /// Trimmed key, byte-for-byte equal to a registry entry.
    pub key: String,
    /// Empty unless the fragment is a template with interpolations.
    pub placeholders: Vec<Placeholder>,
}

impl ExtractionSite {
    pub fn span(&self) -> Span {
        self.id.span
    }

    pub fn kind(&self) -> FragmentKind {
        self.id.kind
    }
}

/// Everything pass 1 decided about one file.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    pub registry: MessageKeyRegistry,
    pub skips: SkipTable,
    /// Disable-marker comments to strip from the output.
    pub marker_comments: Vec<MarkerComment>,
    /// Sites in document order.
    pub sites: Vec<ExtractionSite>,
    index: HashMap<FragmentId, usize>,
}

impl CollectOutcome {
    /// Extraction decided for the node, if any. Excluded nodes have none.
    pub fn site(&self, id: FragmentId) -> Option<&ExtractionSite> {
        if self.skips.is_excluded(id) {
            return None;
        }
        self.index.get(&id).and_then(|&i| self.sites.get(i))
    }
}

pub fn collect_fragments(
    module: &Module,
    comments: &ExtractedComments,
    source: &dyn SourceText,
    options: &TransformOptions,
) -> CollectOutcome {
    let mut collector = FragmentCollector {
        classifier: SkipClassifier::new(
            comments,
            &options.disable_marker,
            options.target_script,
            &options.ignore_texts,
        ),
        source,
        ctx: SkipContext::default(),
        registry: MessageKeyRegistry::new(),
        sites: Vec::new(),
        index: HashMap::new(),
    };
    module.visit_with(&mut collector);

    let FragmentCollector {
        classifier,
        registry,
        sites,
        index,
        ..
    } = collector;
    let (skips, marker_comments) = classifier.finish();

    CollectOutcome {
        registry,
        skips,
        marker_comments,
        sites,
        index,
    }
}

struct FragmentCollector<'a> {
    classifier: SkipClassifier<'a>,
    source: &'a dyn SourceText,
    ctx: SkipContext,
    registry: MessageKeyRegistry,
    sites: Vec<ExtractionSite>,
    index: HashMap<FragmentId, usize>,
}

impl FragmentCollector<'_> {
    /// Comment and ancestor checks, shared by every candidate kind.
    fn is_excluded_by_position(&mut self, id: FragmentId) -> bool {
        // Run both so a marker comment is always stripped
        let by_comment = self.classifier.check_comments(id);
        let by_ancestor = self.classifier.check_ancestors(id, self.ctx);
        by_comment || by_ancestor
    }

    fn record(&mut self, id: FragmentId, key: String, placeholders: Vec<Placeholder>) {
        self.registry.add(&key);
        self.index.insert(id, self.sites.len());
        self.sites.push(ExtractionSite {
            id,
            key,
            placeholders,
        });
    }

    fn collect_text(&mut self, id: FragmentId, text: Option<&str>) {
        if self.is_excluded_by_position(id) || self.classifier.check_content(id, text) {
            return;
        }
        let key = text.unwrap_or_default().trim().to_string();
        self.record(id, key, Vec::new());
    }

    /// Strings holding a lone surrogate have no UTF-8 form and are skipped.
    fn collect_str(&mut self, node: &Str) {
        let id = FragmentId::new(FragmentKind::Literal, node.span);
        self.collect_text(id, node.value.as_str());
    }

    fn collect_template(&mut self, node: &Tpl) {
        let id = FragmentId::new(FragmentKind::Template, node.span);
        if self.is_excluded_by_position(id) {
            return;
        }
        let message = build_template_message(node, self.source);
        if self.classifier.check_content(id, Some(message.key.as_str())) {
            return;
        }
        self.record(id, message.key, message.placeholders);
    }
}

impl Visit for FragmentCollector<'_> {
    fn visit_import_decl(&mut self, node: &ImportDecl) {
        let prev = self.ctx;
        self.ctx.in_import = true;
        node.visit_children_with(self);
        self.ctx = prev;
    }

    // Type literals hold `TsLit`, never an `Expr`; enum initializers do
    fn visit_ts_enum_member(&mut self, node: &TsEnumMember) {
        let prev = self.ctx;
        self.ctx.in_type_literal = true;
        node.visit_children_with(self);
        self.ctx = prev;
    }

    fn visit_expr(&mut self, node: &Expr) {
        match node {
            Expr::Lit(Lit::Str(s)) => self.collect_str(s),
            Expr::Tpl(tpl) => self.collect_template(tpl),
            _ => {}
        }
        // Interpolations of a template may hold fragments of their own
        node.visit_children_with(self);
    }

    fn visit_jsx_attr_value(&mut self, node: &JSXAttrValue) {
        if let JSXAttrValue::Str(s) = node {
            self.collect_str(s);
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        let id = FragmentId::new(FragmentKind::JsxText, node.span);
        self.collect_text(id, Some(&*node.value));
    }
}
