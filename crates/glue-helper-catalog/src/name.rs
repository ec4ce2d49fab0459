use std::fmt;

/// A `database.name` reference to a catalog object.
///
/// The database is empty when the reference has no `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub database: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name: name.into(),
        }
    }

    /// Splits a reference on its first `.`.
    ///
    /// This never fails. Everything after the first `.` is the name, so
    /// `a.b.c` refers to `b.c` in database `a`, and empty segments stay empty.
    pub fn parse(value: &str) -> Self {
        match value.split_once('.') {
            Some((database, name)) => Self::new(database, name),
            None => Self::new("", value),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.database.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.database, self.name)
        }
    }
}
