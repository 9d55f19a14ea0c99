use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// Every variable binding and every evaluated expression holds exactly one of
/// these. Re-assigning a variable may change its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A text value.
    Text(String),
}

impl Default for Value {
    /// The value an undefined variable evaluates to.
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Text(s) => s.as_str().into(),
        }
    }
}

impl Value {
    /// Names the kind of the value, for type error messages.
    ///
    /// # Example
    /// ```
    /// use rscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).kind_name(), "integer");
    /// assert_eq!(Value::from("abc").kind_name(), "text");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}

/// Formats the value the way `print` and `cat` write it: integers in decimal,
/// text verbatim without quotes.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
