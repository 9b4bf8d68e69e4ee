use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Worksheet};

use super::formats::WorkbookFormats;
use crate::RenderError;

/// Writes a sheet top to bottom, one row at a time.
///
/// Cell writers fill the current row; [`SheetCursor::next_row`] moves down.
pub(crate) struct SheetCursor<'a> {
    sheet: &'a mut Worksheet,
    pub formats: &'a WorkbookFormats,
    row: u32,
}

impl<'a> SheetCursor<'a> {
    pub fn new(
        sheet: &'a mut Worksheet,
        formats: &'a WorkbookFormats,
    ) -> Self {
        Self {
            sheet,
            formats,
            row: 0,
        }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn next_row(&mut self) {
        self.row += 1;
    }

    pub fn skip_rows(
        &mut self,
        rows: u32,
    ) {
        self.row += rows;
    }

    pub fn sheet(&mut self) -> &mut Worksheet {
        &mut *self.sheet
    }

    /// Title merged across `0..=last_col`, followed by a blank row.
    pub fn title(
        &mut self,
        text: &str,
        last_col: u16,
    ) -> Result<(), RenderError> {
        self.sheet
            .merge_range(self.row, 0, self.row, last_col, text, &self.formats.title)?;
        self.skip_rows(2);
        Ok(())
    }

    pub fn section(
        &mut self,
        text: &str,
    ) -> Result<(), RenderError> {
        self.sheet
            .write_string_with_format(self.row, 0, text, &self.formats.section)?;
        self.next_row();
        Ok(())
    }

    pub fn headers(
        &mut self,
        headers: &[&str],
    ) -> Result<(), RenderError> {
        for (col, header) in (0u16..).zip(headers) {
            self.sheet
                .write_string_with_format(self.row, col, *header, &self.formats.header)?;
        }
        self.next_row();
        Ok(())
    }

    /// Writes `text` in the current row. Empty text leaves a blank cell that
    /// still carries the format.
    pub fn text(
        &mut self,
        col: u16,
        text: &str,
        format: &Format,
    ) -> Result<(), RenderError> {
        if text.is_empty() {
            self.sheet.write_blank(self.row, col, format)?;
        } else {
            self.sheet
                .write_string_with_format(self.row, col, text, format)?;
        }
        Ok(())
    }

    pub fn number(
        &mut self,
        col: u16,
        value: Decimal,
        format: &Format,
    ) -> Result<(), RenderError> {
        self.sheet
            .write_number_with_format(self.row, col, to_number(value)?, format)?;
        Ok(())
    }

    /// A label in column A and an amount in column B, then the next row.
    pub fn labelled_amount(
        &mut self,
        label: &str,
        amount: Decimal,
        label_format: &Format,
        amount_format: &Format,
    ) -> Result<(), RenderError> {
        self.text(0, label, label_format)?;
        self.number(1, amount, amount_format)?;
        self.next_row();
        Ok(())
    }

    pub fn column_widths(
        &mut self,
        widths: &[f64],
    ) -> Result<(), RenderError> {
        for (col, width) in (0u16..).zip(widths) {
            self.sheet.set_column_width(col, *width)?;
        }
        Ok(())
    }
}

/// Cell value for a decimal amount.
pub(crate) fn to_number(value: Decimal) -> Result<f64, RenderError> {
    value.to_f64().ok_or(RenderError::NumberOutOfRange(value))
}
