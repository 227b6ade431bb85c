use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 94, g: 175, b: 255 };
pub const SECONDARY: Color = Color::TrueColor { r: 187, g: 154, b: 247 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 203, b: 107 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 205, g: 214, b: 244 };
