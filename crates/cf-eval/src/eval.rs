//! Formula interpretation over a named-parameter set.

use crate::error::{EvalError, EvalResult};
use crate::parser::{parse, BinaryOp, Expr};
use std::collections::BTreeMap;

/// Evaluate `formula` against `params`.
///
/// Total over well-formed input: every failure is a typed [`EvalError`],
/// never a panic, and no host code is ever executed. Non-finite results
/// (overflow, 0/0 slipping through as infinity) are reported as
/// [`EvalError::DivisionByZero`] rather than propagated.
pub fn evaluate(formula: &str, params: &BTreeMap<String, f64>) -> EvalResult<f64> {
    let expr = parse(formula)?;
    let value = eval_expr(&expr, params)?;
    if !value.is_finite() {
        return Err(EvalError::DivisionByZero);
    }
    Ok(value)
}

fn eval_expr(expr: &Expr, params: &BTreeMap<String, f64>) -> EvalResult<f64> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Ident(name) => params
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownParameter(name.clone())),
        Expr::Neg(inner) => Ok(-eval_expr(inner, params)?),
        Expr::Binary { op, left, right } => {
            let lhs = eval_expr(left, params)?;
            let rhs = eval_expr(right, params)?;
            match op {
                BinaryOp::Add => Ok(lhs + rhs),
                BinaryOp::Sub => Ok(lhs - rhs),
                BinaryOp::Mul => Ok(lhs * rhs),
                BinaryOp::Div => {
                    if rhs == 0.0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(lhs / rhs)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "eval_test.rs"]
mod tests;
