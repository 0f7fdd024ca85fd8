use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Operands of `^` that would read ambiguously without parentheses.
        fn needs_power_parens(expr: &Expression) -> bool {
            match expr {
                Expression::Pow(_, _) => true,
                Expression::Constant(k) => k.is_sign_negative(),
                _ => false,
            }
        }

        fn write_power_operand(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            if needs_power_parens(expr) {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Constant(k) => write!(f, "{}", k),
                Expression::Variable => write!(f, "x"),
                Expression::Add(l, r) => write!(f, "({} + {})", l, r),
                Expression::Sub(l, r) => write!(f, "({} - {})", l, r),
                Expression::Mult(l, r) => write!(f, "({} * {})", l, r),
                Expression::Pow(base, exponent) => {
                    write_power_operand(f, base)?;
                    write!(f, "^")?;
                    write_power_operand(f, exponent)
                }
            }
        }

        fmt_expression(f, self)
    }
}

impl Expression {
    /// Fully parenthesized infix form, e.g. `((x - 1)^2 + x)`
    pub fn render(&self) -> String {
        self.to_string()
    }
}
