use crate::{
    ast::ComparisonOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Integers compare numerically and texts compare lexicographically by
    /// code point. Comparing an integer with a text is a type error for every
    /// operator, `==` and `!=` included.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Errors
    /// `TypeError` when the operands are of different kinds.
    ///
    /// # Example
    /// ```
    /// use rscript::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let less = Context::eval_comparison(ComparisonOperator::Less,
    ///                                     &Value::Integer(1),
    ///                                     &Value::Integer(2),
    ///                                     1);
    /// assert!(less.unwrap());
    ///
    /// let text = Context::eval_comparison(ComparisonOperator::Equal,
    ///                                     &Value::from("a"),
    ///                                     &Value::from("a"),
    ///                                     1);
    /// assert!(text.unwrap());
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<bool> {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let ordering = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => {
                return Err(RuntimeError::TypeError { details: format!("Cannot compare {} with {} using {op}",
                                                                      left.kind_name(),
                                                                      right.kind_name()),
                                                     line });
            },
        };

        Ok(match op {
               Less => ordering.is_lt(),
               Greater => ordering.is_gt(),
               LessEqual => ordering.is_le(),
               GreaterEqual => ordering.is_ge(),
               Equal => ordering.is_eq(),
               NotEqual => ordering.is_ne(),
           })
    }
}
