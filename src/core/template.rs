//! Template literal to placeholder message conversion.
//!
//! `` `你好，${name}！` `` becomes the key `你好，{placeholder1}！` plus the
//! argument `placeholder1 -> name`. Placeholders are numbered from 1 in
//! left-to-right order, one per interpolation.

use swc_common::Spanned;
use swc_ecma_ast::{Tpl, TplElement};

use super::host::SourceText;

/// One numbered substitution point of a template message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// 1-based position among the template's interpolations.
    pub index: usize,
    /// Original source text of the interpolated expression.
    pub expression_source: String,
}

impl Placeholder {
    /// Argument name, e.g. `placeholder1`.
    pub fn name(&self) -> String {
        format!("placeholder{}", self.index)
    }

    /// Token embedded in the key, e.g. `{placeholder1}`.
    pub fn token(&self) -> String {
        format!("{{{}}}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessage {
    /// Trimmed key with placeholder tokens.
    pub key: String,
    pub placeholders: Vec<Placeholder>,
}

/// Build the message key and placeholder list for a template literal.
pub fn build_template_message(tpl: &Tpl, source: &dyn SourceText) -> TemplateMessage {
    let quasis: Vec<&str> = tpl.quasis.iter().map(quasi_text).collect();
    let expression_sources = tpl
        .exprs
        .iter()
        .map(|expr| source.source_text(expr.span()).unwrap_or_default())
        .collect();
    build_message(&quasis, expression_sources)
}

/// Interleave quasis with numbered placeholder tokens.
///
/// `quasis.len()` is expected to be `expression_sources.len() + 1`; the final
/// quasi is not followed by a placeholder.
pub fn build_message(quasis: &[&str], expression_sources: Vec<String>) -> TemplateMessage {
    let mut key = String::new();
    let mut placeholders = Vec::with_capacity(expression_sources.len());

    if let Some(first) = quasis.first() {
        key.push_str(first);
    }
    for (i, expression_source) in expression_sources.into_iter().enumerate() {
        let placeholder = Placeholder {
            index: i + 1,
            expression_source,
        };
        key.push_str(&placeholder.token());
        if let Some(quasi) = quasis.get(i + 1) {
            key.push_str(quasi);
        }
        placeholders.push(placeholder);
    }

    TemplateMessage {
        key: key.trim().to_string(),
        placeholders,
    }
}

/// Cooked text of a quasi, falling back to the raw text for invalid escapes.
pub fn quasi_text(quasi: &TplElement) -> &str {
    quasi
        .cooked
        .as_ref()
        .and_then(|cooked| cooked.as_str())
        .unwrap_or(&*quasi.raw)
}
