use crossterm::style::Color;

pub fn title_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn panel_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn label_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn value_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn option_fg() -> Color {
    Color::AnsiValue(250)
} // Light grey
pub fn notice_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
