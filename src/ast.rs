/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: non-negative integers and double-quoted strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, with `\n` already decoded.
    Text(String),
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Expressions only ever produce integers or text. Comparisons are not
/// expressions; see [`Comparison`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value (number or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use rscript::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::Variable { line, .. } | Self::BinaryOp { line, .. } => {
                *line
            },
        }
    }
}

/// A relational test between two expressions.
///
/// Only valid as the condition of an `if` or `while` statement; the grammar
/// never nests a comparison inside an arithmetic expression or another
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// The relational operator.
    pub op:    ComparisonOperator,
    /// Left operand.
    pub left:  Expr,
    /// Right operand.
    pub right: Expr,
    /// Line number of the operator in the source code.
    pub line:  usize,
}

/// A brace-delimited sequence of statements. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Statements inside the block, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression (`x <- expr`).
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print(expr)`: writes the value followed by a newline.
    Print {
        /// The expression to print.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `cat(expr, ...)`: writes every value with no separator.
    Cat {
        /// The expressions to write, left to right. Never empty.
        values: Vec<Expr>,
        /// Line number in the source code.
        line:   usize,
    },
    /// `if (cond) { ... }` with an optional `else { ... }`.
    If {
        /// The condition.
        condition:  Comparison,
        /// Statements run when the condition holds.
        then_block: Block,
        /// Statements run when it does not, if an `else` was written.
        else_block: Option<Block>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `while (cond) { ... }`.
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Comparison,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::Cat { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. } => *line,
        }
    }
}

/// A whole parsed program: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents an arithmetic binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Remainder (`%%`)
    Mod,
}

/// Represents a relational operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ComparisonOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};
        let operator = match self {
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
