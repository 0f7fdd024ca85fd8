use log::{debug, warn};

use crate::expression::ast::Expression;

impl Expression {
    /// Returns `true` if `x` occurs anywhere in the subtree
    pub fn contains_variable(&self) -> bool {
        match self {
            Expression::Constant(_) => false,
            Expression::Variable => true,
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mult(l, r)
            | Expression::Pow(l, r) => l.contains_variable() || r.contains_variable(),
        }
    }

    /// Symbolic derivative with respect to `x`.
    ///
    /// The result is not simplified: `d/dx (x + 1)` comes back as `(1 + 0)`.
    ///
    /// Powers use `d/dx b^n = n * b^(n - 1) * b'`, which only holds when the
    /// exponent is free of `x`. A variable exponent is logged and differentiated
    /// with the same rule; the logarithmic term is not produced.
    pub fn differentiate(&self) -> Expression {
        let derivative = self.derive();
        debug!("d/dx {} = {}", self, derivative);
        derivative
    }

    fn derive(&self) -> Expression {
        match self {
            Expression::Constant(_) => Expression::constant(0.0),
            Expression::Variable => Expression::constant(1.0),
            Expression::Add(l, r) => Expression::add(l.derive(), r.derive()),
            Expression::Sub(l, r) => Expression::sub(l.derive(), r.derive()),
            Expression::Mult(l, r) => Expression::add(
                Expression::mult(l.as_ref().clone(), r.derive()),
                Expression::mult(l.derive(), r.as_ref().clone()),
            ),
            Expression::Pow(base, exponent) => {
                if exponent.contains_variable() {
                    warn!(
                        "Exponent {} depends on x; power rule result for {} is incomplete",
                        exponent, self
                    );
                }
                Expression::mult(
                    Expression::mult(
                        exponent.as_ref().clone(),
                        Expression::pow(
                            base.as_ref().clone(),
                            Expression::sub(exponent.as_ref().clone(), Expression::constant(1.0)),
                        ),
                    ),
                    base.derive(),
                )
            }
        }
    }
}
