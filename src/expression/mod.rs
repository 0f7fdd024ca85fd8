//! Single-variable expression trees: evaluation, symbolic differentiation and rendering

mod ast;
mod batch;
mod binding;
mod derivative;
mod display;
mod errors;
mod eval;
mod latex;

pub use ast::Expression;
pub use binding::Binding;
pub use errors::ExpressionError;
