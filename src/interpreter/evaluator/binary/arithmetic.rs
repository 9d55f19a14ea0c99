use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Two integers use checked 64 bit arithmetic. Division truncates toward
    /// zero and `%%` yields the remainder with the sign of the dividend, so
    /// `a == (a / b) * b + a %% b` always holds. Two texts may be joined with
    /// `+`. Every other combination of kinds is a type error; nothing is
    /// coerced.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// `TypeError` for unsupported operands, `DivisionByZero` for a zero
    /// divisor and `Overflow` when the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use rscript::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_arithmetic(BinaryOperator::Div,
    ///                                       &Value::Integer(-7),
    ///                                       &Value::Integer(2),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Integer(-3));
    ///
    /// let joined = Context::eval_arithmetic(BinaryOperator::Add,
    ///                                       &Value::from("ab"),
    ///                                       &Value::from("cd"),
    ///                                       1);
    /// assert_eq!(joined.unwrap(), Value::from("abcd"));
    ///
    /// let mixed = Context::eval_arithmetic(BinaryOperator::Add,
    ///                                      &Value::from("ab"),
    ///                                      &Value::Integer(1),
    ///                                      1);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use Value::{Integer, Text};

        match (left, right) {
            (Integer(a), Integer(b)) => Ok(Integer(Self::eval_integer_op(op, *a, *b, line)?)),
            (Text(a), Text(b)) if op == BinaryOperator::Add => Ok(Text(format!("{a}{b}"))),
            _ => Err(RuntimeError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                                left.kind_name(),
                                                                right.kind_name()),
                                               line }),
        }
    }

    /// Applies an arithmetic operator to two integers.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Mod => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                if op == Div { a.checked_div(b) } else { a.checked_rem(b) }
            },
        };

        result.ok_or(RuntimeError::Overflow { line })
    }
}
