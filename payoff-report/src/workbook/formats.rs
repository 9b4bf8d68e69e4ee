use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

const NAVY: u32 = 0x1F4E79;
const WHITE: u32 = 0xFFFFFF;
const BLUE: u32 = 0x0000FF;
const GREEN: u32 = 0x008000;
const ALERT_FILL: u32 = 0xFFCCCC;
const SUCCESS_FILL: u32 = 0xCCFFCC;
const INPUT_FILL: u32 = 0xFFFFCC;
const PRIORITY_FILL: u32 = 0xFFE4B5;

const CURRENCY: &str = "\"$\"#,##0.00";
const PERCENT: &str = "0.00%";

/// Every cell format used by the workbook, created once per render.
pub(crate) struct WorkbookFormats {
    pub title: Format,
    pub section: Format,
    pub note: Format,
    pub header: Format,
    pub text: Format,
    pub bold: Format,
    pub money: Format,
    pub money_bold: Format,
    pub money_green: Format,
    pub percent: Format,
    pub integer: Format,
    pub input_money: Format,
    pub alert_text: Format,
    pub alert_money: Format,
    pub alert_percent: Format,
    pub alert_integer: Format,
    pub success_text: Format,
    pub success_money: Format,
    pub priority_text: Format,
}

impl WorkbookFormats {
    pub fn new() -> Self {
        let money = Format::new().set_num_format(CURRENCY);

        Self {
            title: Format::new().set_bold().set_font_size(16).set_font_color(NAVY),
            section: Format::new().set_bold().set_font_size(12).set_font_color(NAVY),
            note: Format::new().set_italic(),
            header: Format::new()
                .set_bold()
                .set_font_color(WHITE)
                .set_background_color(NAVY)
                .set_align(FormatAlign::Center)
                .set_border(FormatBorder::Thin),
            text: Format::new(),
            bold: Format::new().set_bold(),
            money_bold: money.clone().set_bold(),
            money_green: money.clone().set_font_color(GREEN),
            percent: Format::new().set_num_format(PERCENT),
            integer: Format::new().set_num_format("0").set_align(FormatAlign::Center),
            input_money: money
                .clone()
                .set_font_color(BLUE)
                .set_background_color(INPUT_FILL),
            alert_text: Format::new().set_background_color(ALERT_FILL),
            alert_money: money.clone().set_background_color(ALERT_FILL),
            alert_percent: Format::new()
                .set_num_format(PERCENT)
                .set_background_color(ALERT_FILL),
            alert_integer: Format::new()
                .set_num_format("0")
                .set_align(FormatAlign::Center)
                .set_background_color(ALERT_FILL),
            success_text: Format::new().set_bold().set_background_color(SUCCESS_FILL),
            success_money: money.clone().set_bold().set_background_color(SUCCESS_FILL),
            priority_text: Format::new().set_background_color(PRIORITY_FILL),
            money,
        }
    }
}
