use std::{fmt, io::Write};

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A `Context` borrows the [`Environment`] it evaluates against and the sink
/// that `print`, `cat` and diagnostics are written to. It holds no other
/// state: everything a program changes lives in the environment, so a caller
/// can inspect it once the context is dropped.
///
/// ## Usage
///
/// Create one `Context` per program run and call [`Context::run`].
///
/// ```
/// use rscript::{
///     interpreter::{environment::Environment, evaluator::core::Context, value::core::Value},
///     parse,
/// };
///
/// let program = parse("x <- 6 * 7\nprint(x)").unwrap();
/// let mut env = Environment::new();
/// let mut out = Vec::new();
///
/// Context::new(&mut env, &mut out).run(&program).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
/// assert_eq!(env.get("x"), Some(&Value::Integer(42)));
/// ```
pub struct Context<'a> {
    /// The variable store of the current run.
    pub environment: &'a mut Environment,
    output:          &'a mut dyn Write,
}

impl<'a> Context<'a> {
    /// Creates a context that evaluates against `environment` and writes to
    /// `output`.
    #[must_use]
    pub fn new(environment: &'a mut Environment, output: &'a mut dyn Write) -> Self {
        Self { environment,
               output }
    }

    /// Runs every top-level statement of `program` in order.
    ///
    /// # Errors
    /// Stops at the first fatal `RuntimeError`. Output written before the
    /// failure stays in the sink.
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        debug!(statements = program.statements.len(), "evaluating program");
        self.eval_statements(&program.statements)
            .inspect_err(|e| debug!(line = e.line_number(), error = %e, "evaluation aborted"))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands of a binary operation are evaluated left to right before the
    /// operator is applied.
    ///
    /// # Errors
    /// Returns a `RuntimeError` when an operator rejects its operands or
    /// output cannot be written.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_arithmetic(*op, &left, &right, *line)
            },
        }
    }

    /// Looks up a variable.
    ///
    /// An unknown name is not fatal: the diagnostic is written to the output
    /// sink and the lookup yields `0`.
    fn eval_variable(&mut self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.environment.get(name) {
            return Ok(value.clone());
        }

        debug!(name, line, "undefined variable, using 0");
        let diagnostic = RuntimeError::UnknownVariable { name: name.to_string(),
                                                         line };
        self.write_output(format_args!("{diagnostic}\n"), line)?;
        Ok(Value::default())
    }

    /// Appends formatted text to the output sink.
    pub(crate) fn write_output(&mut self, args: fmt::Arguments<'_>, line: usize) -> EvalResult<()> {
        self.output
            .write_fmt(args)
            .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                line })
    }
}
