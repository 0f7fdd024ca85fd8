/// A node in a single-variable expression tree.
///
/// Composite nodes own their children exclusively, so a tree is never shared
/// or mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(f64),
    /// The free variable `x`. Its value comes from the binding at evaluation time.
    Variable,
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mult(Box<Expression>, Box<Expression>),
    Pow(Box<Expression>, Box<Expression>), // Pow(base, exponent)
}

impl Expression {
    pub fn constant(k: f64) -> Self {
        Expression::Constant(k)
    }

    pub fn variable() -> Self {
        Expression::Variable
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(Box::new(left), Box::new(right))
    }

    pub fn sub(left: Expression, right: Expression) -> Self {
        Expression::Sub(Box::new(left), Box::new(right))
    }

    pub fn mult(left: Expression, right: Expression) -> Self {
        Expression::Mult(Box::new(left), Box::new(right))
    }

    /// The exponent should be free of `x` if the result is going to be differentiated.
    pub fn pow(base: Expression, exponent: Expression) -> Self {
        Expression::Pow(Box::new(base), Box::new(exponent))
    }
}
