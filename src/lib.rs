//! Symdiff - symbolic differentiation of single-variable expression trees
//!
//! Trees are built directly from constructors (there is no parser) and support
//! three operations: evaluation under a binding of `x`, symbolic differentiation
//! with respect to `x`, and fully parenthesized rendering.
//!
//! # Examples
//!
//! ```
//! use symdiff::{Binding, Expression};
//!
//! // f(x) = (x - 1)^2 + x
//! let f = Expression::add(
//!     Expression::pow(
//!         Expression::sub(Expression::variable(), Expression::constant(1.0)),
//!         Expression::constant(2.0),
//!     ),
//!     Expression::variable(),
//! );
//!
//! assert_eq!(f.render(), "((x - 1)^2 + x)");
//! assert_eq!(f.evaluate(Binding::x(3.0)), Ok(7.0));
//! assert_eq!(f.differentiate().evaluate(Binding::x(3.0)), Ok(5.0));
//! ```

pub mod expression;

pub use expression::{Binding, Expression, ExpressionError};

/// The demonstration function `f(x) = (x - 1)^2 + x`
pub fn sample_function() -> Expression {
    Expression::add(
        Expression::pow(
            Expression::sub(Expression::variable(), Expression::constant(1.0)),
            Expression::constant(2.0),
        ),
        Expression::variable(),
    )
}
