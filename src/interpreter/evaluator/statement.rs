use tracing::{debug, trace};

use crate::{
    ast::{Block, Comparison, Statement},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a single statement.
    ///
    /// Assignments bind into the shared environment, `print` and `cat` write
    /// to the output sink, and `if`/`while` run their blocks against the same
    /// environment; there are no nested scopes.
    ///
    /// # Errors
    /// Propagates the first fatal `RuntimeError`.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                trace!(name = name.as_str(), %value, line, "assign");
                self.environment.assign(name, value);
                Ok(())
            },
            Statement::Print { value, line } => {
                let value = self.eval(value)?;
                self.write_output(format_args!("{value}\n"), *line)
            },
            Statement::Cat { values, line } => {
                for expr in values {
                    let value = self.eval(expr)?;
                    self.write_output(format_args!("{value}"), *line)?;
                }
                Ok(())
            },
            Statement::If { condition,
                            then_block,
                            else_block,
                            .. } => {
                if self.eval_condition(condition)? {
                    self.eval_block(then_block)
                } else if let Some(else_block) = else_block {
                    self.eval_block(else_block)
                } else {
                    Ok(())
                }
            },
            Statement::While { condition,
                               body,
                               line, } => {
                debug!(line, "entering while loop");
                let mut iterations: u64 = 0;
                while self.eval_condition(condition)? {
                    self.eval_block(body)?;
                    iterations += 1;
                }
                debug!(line, iterations, "while loop finished");
                Ok(())
            },
        }
    }

    /// Evaluates the statements of a block in order.
    ///
    /// # Errors
    /// Propagates the first fatal `RuntimeError`.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<()> {
        self.eval_statements(&block.statements)
    }

    /// Evaluates a sequence of statements in order.
    pub(crate) fn eval_statements(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            trace!(line = statement.line_number(), "statement");
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates the condition of an `if` or `while`.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if an operand fails to evaluate or the
    /// operands cannot be compared.
    pub fn eval_condition(&mut self, condition: &Comparison) -> EvalResult<bool> {
        let left = self.eval(&condition.left)?;
        let right = self.eval(&condition.right)?;
        Self::eval_comparison(condition.op, &left, &right, condition.line)
    }
}
