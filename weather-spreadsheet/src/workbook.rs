//! [`Spreadsheet`] implementation for workbook files read with [calamine].

use std::{fs::File, io::BufReader, iter::repeat, path::Path};

use calamine::{open_workbook_auto, DataType, Range, Reader, Sheets};
use time::{
    macros::{datetime, format_description},
    Duration, PrimitiveDateTime,
};

use crate::{sheet::RawSheet, spreadsheet::Spreadsheet, Error, Result};

const EXCEL_EPOCH: PrimitiveDateTime = datetime!(1899-12-30 0:00);
const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;
/// Serial of the day after 9999-12-31, the last date a workbook can hold.
const MAX_SERIAL: f64 = 2_958_466.0;

/// Open a `.xlsx`, `.xlsm`, `.xlsb`, `.xls` or `.ods` workbook.
pub fn open_workbook<P: AsRef<Path>>(path: P) -> Result<Sheets<BufReader<File>>> {
    Ok(open_workbook_auto(path)?)
}

impl<RS> Spreadsheet for Sheets<RS>
where
    RS: std::io::Read + std::io::Seek,
{
    type Worksheet = Range<DataType>;

    fn worksheet(&mut self, name: &str) -> Result<Self::Worksheet> {
        self.worksheet_range(name)
            .ok_or_else(|| Error::WorksheetMissing(name.to_owned()))?
            .map_err(Error::from)
    }

    fn all_values(&mut self, worksheet: &Self::Worksheet) -> Result<RawSheet> {
        Ok(range_values(worksheet))
    }
}

/// Values of `range` as text. calamine trims empty leading rows and columns
/// from a range, they are restored so that the first row and column of the
/// result are those of the worksheet.
pub fn range_values(range: &Range<DataType>) -> RawSheet {
    let (row_offset, column_offset) = range.start().unwrap_or((0, 0));
    let column_offset = column_offset as usize;
    let width = column_offset + range.width();

    let leading_rows = (0..row_offset).map(|_| vec![String::new(); width]);
    let rows = range.rows().map(|row| {
        repeat(String::new())
            .take(column_offset)
            .chain(row.iter().map(cell_value))
            .collect()
    });

    RawSheet::new(leading_rows.chain(rows).collect())
}

fn cell_value(value: &DataType) -> String {
    match value {
        DataType::Empty => String::new(),
        DataType::String(value) => value.clone(),
        DataType::DateTime(serial) => {
            format_serial_date_time(*serial).unwrap_or_else(|| serial.to_string())
        }
        value => value.to_string(),
    }
}

/// Format a date and/or time stored as days since [`EXCEL_EPOCH`]. Only the
/// parts that are present are formatted, seconds included only when not zero.
/// [`None`] for serials outside of the dates a workbook can hold.
fn format_serial_date_time(serial: f64) -> Option<String> {
    if !(0.0..MAX_SERIAL).contains(&serial) {
        return None;
    }

    let days = serial.floor();
    let seconds = ((serial - days) * SECONDS_PER_DAY).round() as i64;
    let date_time = EXCEL_EPOCH
        .checked_add(Duration::days(days as i64))?
        .checked_add(Duration::seconds(seconds))?;
    let whole_minute = date_time.second() == 0;

    let format = if days == 0.0 && whole_minute {
        format_description!("[hour]:[minute]")
    } else if days == 0.0 {
        format_description!("[hour]:[minute]:[second]")
    } else if seconds == 0 {
        format_description!("[year]-[month]-[day]")
    } else if whole_minute {
        format_description!("[year]-[month]-[day] [hour]:[minute]")
    } else {
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")
    };

    date_time.format(format).ok()
}
