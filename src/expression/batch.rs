use log::debug;
use rayon::prelude::*;

use crate::expression::ast::Expression;
use crate::expression::binding::Binding;
use crate::expression::errors::ExpressionError;

impl Expression {
    /// Evaluates the tree at every point in parallel. Results keep the input order.
    pub fn evaluate_many(&self, points: &[f64]) -> Vec<Result<f64, ExpressionError>> {
        debug!("Evaluating {} at {} points", self, points.len());

        points
            .par_iter()
            .map(|&x| self.evaluate(Binding::from(x)))
            .collect()
    }
}
