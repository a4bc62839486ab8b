use swc_core::{
    common::DUMMY_SP,
    ecma::{ast::*, utils::ExprFactory},
};

use crate::matcher::{HocMatch, TargetFn};

fn named_function(m: &HocMatch<'_>) -> FnExpr {
    let ident = Ident::new(m.name.sym.clone(), DUMMY_SP, m.name.ctxt);
    let function = match m.target {
        TargetFn::Anonymous(function) => function.clone(),
        TargetFn::Arrow(arrow) => Function {
            params: m.params(),
            decorators: vec![],
            span: arrow.span,
            ctxt: arrow.ctxt,
            body: m.body(),
            is_generator: arrow.is_generator,
            is_async: arrow.is_async,
            type_params: arrow.type_params.clone(),
            return_type: arrow.return_type.clone(),
        },
    };
    FnExpr {
        ident: Some(ident),
        function: Box::new(function),
    }
}

/// Builds `Name = hoc(function Name(..) {..}, ...rest)` from a match.
///
/// Only the first argument is new; callee, type arguments and trailing
/// arguments are carried over as they were.
pub fn rewrite(m: &HocMatch<'_>) -> VarDeclarator {
    let mut args = Vec::with_capacity(m.rest.len() + 1);
    args.push(Expr::Fn(named_function(m)).as_arg());
    args.extend(m.rest.iter().cloned());

    VarDeclarator {
        span: m.declarator.span,
        name: m.declarator.name.clone(),
        init: Some(Box::new(Expr::Call(CallExpr {
            span: m.call.span,
            ctxt: m.call.ctxt,
            callee: m.call.callee.clone(),
            args,
            type_args: m.call.type_args.clone(),
        }))),
        definite: m.declarator.definite,
    }
}
