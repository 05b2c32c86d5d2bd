//! Call-site argument expressions, as seen by a bind callback.

use super::types::{LogicalType, Value};

/// Shape of an argument expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentExpr {
    /// A literal.
    Constant(Value),
    /// A prepared-statement placeholder (`$1`, `?`) that has no value yet.
    Parameter(usize),
    /// A reference to an input column; only known per row.
    Column(String),
    /// A list constructor such as `['.html', '.htm']`.
    ListValue(Vec<ArgumentExpr>),
}

impl ArgumentExpr {
    /// Whether the expression can be reduced to a constant at bind time.
    pub fn is_foldable(&self) -> bool {
        match self {
            Self::Constant(_) => true,
            Self::Parameter(_) | Self::Column(_) => false,
            Self::ListValue(children) => children.iter().all(Self::is_foldable),
        }
    }

    /// Whether an unresolved placeholder appears anywhere in the expression.
    pub fn has_parameter(&self) -> bool {
        match self {
            Self::Parameter(_) => true,
            Self::Constant(_) | Self::Column(_) => false,
            Self::ListValue(children) => children.iter().any(Self::has_parameter),
        }
    }

    /// Fold the expression to a value; `None` when it is not foldable.
    pub fn fold(&self) -> Option<Value> {
        match self {
            Self::Constant(value) => Some(value.clone()),
            Self::Parameter(_) | Self::Column(_) => None,
            Self::ListValue(children) => children
                .iter()
                .map(Self::fold)
                .collect::<Option<Vec<_>>>()
                .map(Value::list),
        }
    }
}

/// One argument at a call site: expression, declared type and optional name tag.
///
/// Named arguments come from `name := value` syntax; the name is carried as the
/// expression alias.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgument {
    pub expr: ArgumentExpr,
    pub return_type: LogicalType,
    pub alias: Option<String>,
}

impl CallArgument {
    pub fn constant(value: Value) -> Self {
        let return_type = value.logical_type();
        Self {
            expr: ArgumentExpr::Constant(value),
            return_type,
            alias: None,
        }
    }

    pub fn column(name: impl Into<String>, return_type: LogicalType) -> Self {
        Self {
            expr: ArgumentExpr::Column(name.into()),
            return_type,
            alias: None,
        }
    }

    pub fn parameter(index: usize) -> Self {
        Self {
            expr: ArgumentExpr::Parameter(index),
            return_type: LogicalType::Unknown,
            alias: None,
        }
    }

    /// A list constructor over the given element expressions.
    pub fn list(children: Vec<ArgumentExpr>) -> Self {
        let return_type = match ArgumentExpr::ListValue(children.clone()).fold() {
            Some(value) => value.logical_type(),
            None => LogicalType::list_of(LogicalType::Unknown),
        };
        Self {
            expr: ArgumentExpr::ListValue(children),
            return_type,
            alias: None,
        }
    }

    /// Attach a name tag (`name := ...`).
    pub fn named(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_foldable(&self) -> bool {
        self.expr.is_foldable()
    }

    pub fn has_parameter(&self) -> bool {
        self.expr.has_parameter()
    }

    /// Evaluate a foldable argument. Side-effect free and deterministic.
    pub fn evaluate_constant(&self) -> Option<Value> {
        self.expr.fold()
    }
}
