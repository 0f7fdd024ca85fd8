use log::debug;

use crate::expression::ast::Expression;
use crate::expression::binding::Binding;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

fn checked_pow(base: f64, exponent: f64) -> Result<f64, ExpressionError> {
    if base < 0.0 && !is_integer(exponent) {
        debug!(
            "Negative base with fractional exponent: {}^{}",
            base, exponent
        );
        return Err(ExpressionError::DomainError { base, exponent });
    }
    if base == 0.0 && exponent < 0.0 {
        debug!("Zero base with negative exponent: {}^{}", base, exponent);
        return Err(ExpressionError::DomainError { base, exponent });
    }
    if is_integer(exponent) && exponent.abs() <= f64::from(i32::MAX) {
        Ok(base.powi(exponent as i32))
    } else {
        Ok(base.powf(exponent))
    }
}

impl Expression {
    /// Evaluates the expression with `x` taken from `binding`.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - A `Variable` is reached but the binding holds no value for `x`
    /// - A power has a negative base with a fractional exponent, or a zero base
    ///   with a negative exponent
    pub fn evaluate(&self, binding: Binding) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Constant(k) => Ok(*k),
            Expression::Variable => binding.value().ok_or(ExpressionError::UnboundVariable),
            Expression::Add(l, r) => {
                let left = l.evaluate(binding)?;
                let right = r.evaluate(binding)?;
                Ok(left + right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate(binding)?;
                let right = r.evaluate(binding)?;
                Ok(left - right)
            }
            Expression::Mult(l, r) => {
                let left = l.evaluate(binding)?;
                let right = r.evaluate(binding)?;
                Ok(left * right)
            }
            Expression::Pow(base, exponent) => {
                let base = base.evaluate(binding)?;
                let exponent = exponent.evaluate(binding)?;
                checked_pow(base, exponent)
            }
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}
