use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Index {
    /// Indexed column names, in order
    pub columns: Vec<String>,

    /// When `true`, indexed entries are unique
    pub unique: bool,
}

impl Index {
    pub fn new<I, S>(columns: I, unique: bool) -> Index
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Index {
            columns: columns.into_iter().map(Into::into).collect(),
            unique,
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.columns.join(", ");

        if self.unique {
            write!(f, "UNIQUE ({columns})")
        } else {
            write!(f, "({columns})")
        }
    }
}
