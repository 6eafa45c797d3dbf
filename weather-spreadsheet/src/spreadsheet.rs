use indexmap::IndexMap;

use crate::{sheet::RawSheet, Error, Result};

/// Access to the worksheets of a spreadsheet document.
pub trait Spreadsheet {
    /// Handle to a resolved worksheet.
    type Worksheet;

    /// Resolve the worksheet named `name`.
    fn worksheet(&mut self, name: &str) -> Result<Self::Worksheet>;

    /// Read all the values of `worksheet` as text.
    fn all_values(&mut self, worksheet: &Self::Worksheet) -> Result<RawSheet>;
}

/// A spreadsheet held in memory, worksheets kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySpreadsheet {
    worksheets: IndexMap<String, RawSheet>,
}

impl MemorySpreadsheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worksheet(mut self, name: impl Into<String>, sheet: RawSheet) -> Self {
        self.insert(name, sheet);
        self
    }

    /// Insert a worksheet, replacing any existing worksheet with the same name.
    pub fn insert(&mut self, name: impl Into<String>, sheet: RawSheet) -> Option<RawSheet> {
        self.worksheets.insert(name.into(), sheet)
    }

    pub fn worksheet_names(&self) -> impl Iterator<Item = &str> {
        self.worksheets.keys().map(String::as_str)
    }
}

impl Spreadsheet for MemorySpreadsheet {
    type Worksheet = String;

    fn worksheet(&mut self, name: &str) -> Result<Self::Worksheet> {
        if self.worksheets.contains_key(name) {
            Ok(name.to_owned())
        } else {
            Err(Error::WorksheetMissing(name.to_owned()))
        }
    }

    fn all_values(&mut self, worksheet: &Self::Worksheet) -> Result<RawSheet> {
        self.worksheets
            .get(worksheet)
            .cloned()
            .ok_or_else(|| Error::WorksheetMissing(worksheet.clone()))
    }
}
