//! Named options accepted by `tera_render`.
//!
//! The set is closed: every recognized name is a variant with its own type check, and
//! anything else is rejected at bind time.

use std::fmt;
use std::str::FromStr;

use crate::error::BindError;
use crate::host::{LogicalType, Value};

/// A recognized `name := value` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedOption {
    /// `autoescape := BOOLEAN`, default `true`.
    Autoescape,
    /// `template_path := VARCHAR`, default `''` (inline templates).
    TemplatePath,
    /// `autoescape_extensions := VARCHAR[]`, default `[]`.
    AutoescapeExtensions,
}

/// Type a named option must have, as worded in bind errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    Boolean,
    Varchar,
    ListOfStrings,
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Varchar => f.write_str("VARCHAR"),
            Self::ListOfStrings => f.write_str("list of strings"),
        }
    }
}

/// A named option's value after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Autoescape(bool),
    TemplatePath(String),
    AutoescapeExtensions(Vec<String>),
}

impl NamedOption {
    pub const ALL: [NamedOption; 3] = [
        Self::Autoescape,
        Self::TemplatePath,
        Self::AutoescapeExtensions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Autoescape => "autoescape",
            Self::TemplatePath => "template_path",
            Self::AutoescapeExtensions => "autoescape_extensions",
        }
    }

    pub fn expected_type(self) -> ExpectedType {
        match self {
            Self::Autoescape => ExpectedType::Boolean,
            Self::TemplatePath => ExpectedType::Varchar,
            Self::AutoescapeExtensions => ExpectedType::ListOfStrings,
        }
    }

    /// Check the declared type of an argument before it is evaluated.
    pub fn check_type(self, declared: &LogicalType) -> Result<(), BindError> {
        let matches = match self {
            Self::Autoescape => *declared == LogicalType::Boolean,
            Self::TemplatePath => *declared == LogicalType::Varchar,
            Self::AutoescapeExtensions => declared.is_list(),
        };
        if matches {
            Ok(())
        } else {
            Err(self.mismatch(declared.clone()))
        }
    }

    /// Convert an evaluated constant into this option's value.
    pub fn convert(self, value: Value) -> Result<OptionValue, BindError> {
        match (self, value) {
            (Self::Autoescape, Value::Boolean(b)) => Ok(OptionValue::Autoescape(b)),
            (Self::TemplatePath, Value::Varchar(s)) => {
                self.reject_nul(&s)?;
                Ok(OptionValue::TemplatePath(s))
            }
            (Self::AutoescapeExtensions, Value::List { items, .. }) => items
                .into_iter()
                .map(|item| match item {
                    Value::Varchar(s) => self.reject_nul(&s).map(|()| s),
                    other => Err(BindError::ListElementTypeMismatch {
                        argument: self.as_str(),
                        actual: other.logical_type(),
                        value: other.to_string(),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(OptionValue::AutoescapeExtensions),
            (_, other) => Err(self.mismatch(other.logical_type())),
        }
    }

    /// Option strings are handed to the engine as C strings.
    fn reject_nul(self, s: &str) -> Result<(), BindError> {
        if s.contains('\0') {
            Err(BindError::NulByte {
                argument: self.as_str(),
            })
        } else {
            Ok(())
        }
    }

    fn mismatch(self, actual: LogicalType) -> BindError {
        BindError::TypeMismatch {
            argument: self.as_str(),
            expected: self.expected_type(),
            actual,
        }
    }
}

impl FromStr for NamedOption {
    type Err = BindError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == name)
            .ok_or_else(|| BindError::UnknownArgument(name.to_string()))
    }
}

impl fmt::Display for NamedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
