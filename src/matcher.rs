use swc_core::{
    common::{Spanned, SyntaxContext, DUMMY_SP},
    ecma::ast::*,
};

use crate::config::HocNames;

/// The unnamed function value passed as a wrapper's first argument.
#[derive(Debug, Clone, Copy)]
pub enum TargetFn<'a> {
    Arrow(&'a ArrowExpr),
    /// `function () {}`, never one that already carries a name.
    Anonymous(&'a Function),
}

/// A declarator of the shape `Name = hoc(fn, ...rest)` that can be rewritten.
#[derive(Debug, Clone, Copy)]
pub struct HocMatch<'a> {
    pub declarator: &'a VarDeclarator,
    pub name: &'a Ident,
    pub call: &'a CallExpr,
    pub target: TargetFn<'a>,
    pub rest: &'a [ExprOrSpread],
}

impl HocMatch<'_> {
    pub fn params(&self) -> Vec<Param> {
        match self.target {
            TargetFn::Arrow(arrow) => arrow
                .params
                .iter()
                .map(|pat| Param {
                    span: pat.span(),
                    decorators: vec![],
                    pat: pat.clone(),
                })
                .collect(),
            TargetFn::Anonymous(function) => function.params.clone(),
        }
    }

    /// Function body as a block; a concise arrow body `expr` becomes `{ return expr; }`.
    pub fn body(&self) -> Option<BlockStmt> {
        match self.target {
            TargetFn::Arrow(arrow) => Some(match &*arrow.body {
                BlockStmtOrExpr::BlockStmt(block) => block.clone(),
                BlockStmtOrExpr::Expr(expr) => BlockStmt {
                    span: DUMMY_SP,
                    ctxt: SyntaxContext::empty(),
                    stmts: vec![Stmt::Return(ReturnStmt {
                        span: DUMMY_SP,
                        arg: Some(expr.clone()),
                    })],
                },
            }),
            TargetFn::Anonymous(function) => function.body.clone(),
        }
    }
}

pub fn is_recognized_callee(callee: &Callee, hocs: &HocNames) -> bool {
    let Callee::Expr(expr) = callee else {
        return false;
    };
    match expr.unwrap_parens() {
        Expr::Ident(ident) => hocs.contains(&ident.sym),
        Expr::Member(MemberExpr {
            prop: MemberProp::Ident(prop),
            ..
        }) => hocs.contains(&prop.sym),
        _ => false,
    }
}

fn target_fn(arg: &ExprOrSpread) -> Option<TargetFn<'_>> {
    if arg.spread.is_some() {
        return None;
    }
    match arg.expr.unwrap_parens() {
        Expr::Arrow(arrow) => Some(TargetFn::Arrow(arrow)),
        Expr::Fn(FnExpr { ident: None, function }) => Some(TargetFn::Anonymous(function)),
        // Named function expressions are left alone, which keeps reruns stable.
        _ => None,
    }
}

pub fn match_declarator<'a>(declarator: &'a VarDeclarator, hocs: &HocNames) -> Option<HocMatch<'a>> {
    let Pat::Ident(binding) = &declarator.name else {
        return None;
    };
    let Expr::Call(call) = declarator.init.as_deref()?.unwrap_parens() else {
        return None;
    };
    if !is_recognized_callee(&call.callee, hocs) {
        return None;
    }
    let (first, rest) = call.args.split_first()?;
    let target = target_fn(first)?;

    Some(HocMatch {
        declarator,
        name: &binding.id,
        call,
        target,
        rest,
    })
}
