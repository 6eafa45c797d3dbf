use crate::position::CellPosition;

/// All the values of a worksheet as text, row by row, the first row being
/// row 1 of the worksheet. Rows are not required to be the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whitespace trimmed value of the cell at `position`, or [`None`] if the
    /// sheet or the row is too short to contain it.
    pub fn cell_at(&self, position: CellPosition) -> Option<&str> {
        self.rows
            .get(usize::try_from(position.row).ok()?)?
            .get(usize::try_from(position.column).ok()?)
            .map(|value| value.trim())
    }
}

impl<R, C> FromIterator<R> for RawSheet
where
    R: IntoIterator<Item = C>,
    C: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RawSheet;
    use crate::position::CellPosition;

    #[test]
    fn test_cell_at() {
        let sheet: RawSheet = [vec!["Status", "  Sunny "], vec![], vec!["Temperature"]]
            .into_iter()
            .collect();

        let cases = vec![
            ("A1", Some("Status")),
            ("B1", Some("Sunny")),
            ("C1", None),
            ("A2", None),
            ("A3", Some("Temperature")),
            ("B3", None),
            ("A4", None),
            ("ZZ1000", None),
        ];

        for (position, expected) in cases {
            dbg!(position);
            let position: CellPosition = position.parse().unwrap();
            assert_eq!(sheet.cell_at(position), expected);
        }
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = RawSheet::default();
        assert!(sheet.is_empty());
        assert_eq!(sheet.cell_at(CellPosition::new(0, 0)), None);
    }
}
