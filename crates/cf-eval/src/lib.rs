//! cf-eval - Safe arithmetic formula evaluator for Costflow
//!
//! Estimate templates store formulas like `san_nha * so_tang * 1.05` that
//! are evaluated against a project's parameter set. Formulas come from
//! user-edited master data, so they are treated as untrusted input: the
//! grammar is fixed to `+ - * /`, parentheses, numeric literals, and
//! whole-identifier parameter references. Nothing is ever executed as
//! host code, and every failure is a typed [`EvalError`].

pub mod error;
pub mod eval;
pub mod parser;
pub mod token;

pub use error::{EvalError, EvalResult};
pub use eval::evaluate;
pub use parser::{parse, Expr};
pub use token::{tokenize, Token, TokenKind};
