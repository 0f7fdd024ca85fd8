use crate::expression::ast::Expression;

impl Expression {
    /// Render the expression as LaTeX without simplifying it.
    /// - Uses \cdot for multiplication
    /// - Wraps sums and differences that sit under a product or power
    /// - Wraps non-leaf bases of a power
    /// - Wraps negative constants on the right of a binary operator
    pub fn to_latex(&self) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mult(_, _) => 2,
                Expression::Pow(_, _) => 3,
                Expression::Constant(_) | Expression::Variable => 4,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn is_negative_constant(expr: &Expression) -> bool {
            matches!(expr, Expression::Constant(k) if *k < 0.0)
        }

        fn fmt_right(expr: &Expression) -> String {
            let s = fmt(expr);
            if is_negative_constant(expr) {
                wrap_parens(s)
            } else {
                s
            }
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Constant(k) => number_to_string(*k),
                Expression::Variable => String::from("x"),
                Expression::Add(l, r) => format!("{} + {}", fmt(l), fmt_right(r)),
                Expression::Sub(l, r) => {
                    let mut rs = fmt_right(r);
                    if precedence(r) <= 1 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} - {}", fmt(l), rs)
                }
                Expression::Mult(l, r) => {
                    let mut ls = fmt(l);
                    let mut rs = fmt_right(r);
                    if precedence(l) < 2 {
                        ls = wrap_parens(ls);
                    }
                    if precedence(r) < 2 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} \\cdot {}", ls, rs)
                }
                Expression::Pow(base, exponent) => {
                    let mut bs = fmt(base);
                    if precedence(base) < 4 || is_negative_constant(base) {
                        bs = wrap_parens(bs);
                    }
                    format!("{}^{{{}}}", bs, fmt(exponent))
                }
            }
        }

        fn number_to_string(n: f64) -> String {
            if (n.fract() == 0.0) && n.abs() < 1e15 {
                format!("{}", n.trunc() as i128)
            } else if n.is_infinite() {
                if n.is_sign_positive() {
                    String::from("\\infty")
                } else {
                    String::from("-\\infty")
                }
            } else if n.is_nan() {
                String::from("\\mathrm{NaN}")
            } else {
                format!("{}", n)
            }
        }

        fmt(self)
    }
}
