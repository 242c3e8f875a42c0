use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CHIP_BACKGROUND: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const CHIP_BORDER: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const CHIP_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const CHIP_INSERTED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const CHIP_MOVED: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const FOCUS_BORDER: Color = ACCENT;
