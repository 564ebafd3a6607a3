//! Constructors for synthesized nodes.
//!
//! Generated nodes carry `DUMMY_SP` unless they replace an original node, so
//! they never collide with a recorded fragment identity.

use swc_common::{DUMMY_SP, Span, SyntaxContext};
use swc_ecma_ast::{
    CallExpr, Callee, ComputedPropName, Expr, ExprOrSpread, Ident, IdentName, KeyValueProp, Lit,
    MemberExpr, MemberProp, ObjectLit, Prop, PropName, PropOrSpread, Str,
};

use super::names::ImportNames;
use super::options::TransformOptions;

pub fn ident(name: &str) -> Ident {
    Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty())
}

pub fn str_lit(value: &str) -> Str {
    Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }
}

pub fn str_expr(value: &str) -> Expr {
    Expr::Lit(Lit::Str(str_lit(value)))
}

/// `{ key: value, ... }`
pub fn object_lit(props: Vec<(PropName, Box<Expr>)>) -> Expr {
    Expr::Object(ObjectLit {
        span: DUMMY_SP,
        props: props
            .into_iter()
            .map(|(key, value)| {
                PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp { key, value })))
            })
            .collect(),
    })
}

pub fn call(callee: Expr, args: Vec<Expr>, span: Span) -> Expr {
    Expr::Call(CallExpr {
        span,
        ctxt: SyntaxContext::empty(),
        callee: Callee::Expr(Box::new(callee)),
        args: args
            .into_iter()
            .map(|expr| ExprOrSpread {
                spread: None,
                expr: Box::new(expr),
            })
            .collect(),
        type_args: None,
    })
}

/// `catalog["key"]`
pub fn catalog_lookup(catalog: &str, key: &str) -> Expr {
    Expr::Member(MemberExpr {
        span: DUMMY_SP,
        obj: Box::new(Expr::Ident(ident(catalog))),
        prop: MemberProp::Computed(ComputedPropName {
            span: DUMMY_SP,
            expr: Box::new(str_expr(key)),
        }),
    })
}

/// `runtime.format(catalog["key"])` or
/// `runtime.format(catalog["key"], { "placeholder1": expr, ... })`.
pub fn format_call(
    names: &ImportNames,
    options: &TransformOptions,
    key: &str,
    args: Vec<(String, Box<Expr>)>,
    span: Span,
) -> Expr {
    let callee = Expr::Member(MemberExpr {
        span: DUMMY_SP,
        obj: Box::new(Expr::Ident(ident(&names.runtime))),
        prop: MemberProp::Ident(IdentName::new(
            options.format_function.as_str().into(),
            DUMMY_SP,
        )),
    });

    let mut call_args = vec![catalog_lookup(&options.catalog_identifier, key)];
    if !args.is_empty() {
        call_args.push(object_lit(
            args.into_iter()
                .map(|(name, value)| (PropName::Str(str_lit(&name)), value))
                .collect(),
        ));
    }

    call(callee, call_args, span)
}
