mod extractor;

pub use extractor::{
    cell_texts, collect_entries, entries_from_markup, extract_entries, find_entries_table,
    ENTRIES_TABLE_ID, NAMES_TBA,
};

use crate::EntriesError;

use serde::Serialize;
use std::fmt;

/// A two-person debate team registered under one school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partnership {
    school: String,
    names: [String; 2],
}

impl Partnership {
    /// Fails with [`EntriesError::MalformedPartnership`] unless exactly two names are given.
    pub fn new<S: Into<String>>(school: S, names: Vec<String>) -> Result<Self, EntriesError> {
        let school = school.into();
        match <[String; 2]>::try_from(names) {
            Ok(names) => Ok(Partnership { school, names }),
            Err(names) => Err(EntriesError::MalformedPartnership { school, names }),
        }
    }

    pub fn school(&self) -> &str {
        self.school.as_str()
    }

    pub fn names(&self) -> (&str, &str) {
        (self.names[0].as_str(), self.names[1].as_str())
    }

    /// Initials of both debaters, e.g. `SJ` for Smith & Jones.
    pub fn code(&self) -> String {
        self.names.iter().filter_map(|n| n.chars().next()).collect()
    }
}

impl fmt::Display for Partnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.names();
        write!(
            f,
            "{} {} - {} & {}",
            self.school,
            self.code(),
            first,
            second
        )
    }
}
