use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("No value bound for variable x")]
    UnboundVariable,
    #[error("Power {base}^{exponent} is undefined over the reals")]
    DomainError { base: f64, exponent: f64 },
}
