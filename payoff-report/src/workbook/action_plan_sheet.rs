//! "Action Plan": the narrative steps, one row each.
use payoff_core::{ActionItem, Emphasis};

use super::cursor::SheetCursor;
use crate::RenderError;

pub(crate) const SHEET_NAME: &str = "Action Plan";

pub(crate) fn write(
    cursor: &mut SheetCursor<'_>,
    title: &str,
    items: &[ActionItem],
) -> Result<(), RenderError> {
    let formats = cursor.formats;
    cursor.column_widths(&[18.0, 90.0])?;

    cursor.title(&format!("YOUR ACTION PLAN - {title}"), 1)?;

    for item in items {
        let (period_format, text_format) = match item.emphasis {
            Emphasis::None => (&formats.bold, &formats.text),
            Emphasis::Alert => (&formats.alert_text, &formats.alert_text),
            Emphasis::Success => (&formats.success_text, &formats.success_text),
        };
        cursor.text(0, &item.period, period_format)?;
        cursor.text(1, &item.text, text_format)?;
        cursor.next_row();
    }

    Ok(())
}
