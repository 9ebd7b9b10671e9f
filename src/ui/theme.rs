use ratatui::style::Color;

pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub breakpoint: Color,
    pub bar: Color,
    pub bar_active: Color, // Pair under comparison
}

pub static DARK_THEME: Theme = Theme {
    name: "dark",
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(203, 166, 247),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    breakpoint: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(137, 180, 250),
    bar_active: Color::Rgb(249, 226, 175),
};

pub static LIGHT_THEME: Theme = Theme {
    name: "light",
    bg: Color::Rgb(239, 241, 245),
    fg: Color::Rgb(76, 79, 105),
    primary: Color::Rgb(30, 102, 245),
    secondary: Color::Rgb(254, 100, 11),
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    error: Color::Rgb(210, 15, 57),
    keyword: Color::Rgb(136, 57, 239),
    number: Color::Rgb(254, 100, 11),
    border_focused: Color::Rgb(223, 142, 29),
    border_normal: Color::Rgb(156, 160, 176),
    current_line_bg: Color::Rgb(204, 208, 218),
    breakpoint: Color::Rgb(210, 15, 57),
    bar: Color::Rgb(30, 102, 245),
    bar_active: Color::Rgb(223, 142, 29),
};
