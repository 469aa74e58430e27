use plotters::prelude::*;
use plotters::style::FontStyle;

pub const FONT: &str = "sans-serif";

/// Ten-colour categorical palette used for bars.
pub const TAB10: [RGBColor; 10] = [
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// Paired palette used for pie slices.
pub const PAIRED: [RGBColor; 12] = [
    RGBColor(0xa6, 0xce, 0xe3),
    RGBColor(0x1f, 0x78, 0xb4),
    RGBColor(0xb2, 0xdf, 0x8a),
    RGBColor(0x33, 0xa0, 0x2c),
    RGBColor(0xfb, 0x9a, 0x99),
    RGBColor(0xe3, 0x1a, 0x1c),
    RGBColor(0xfd, 0xbf, 0x6f),
    RGBColor(0xff, 0x7f, 0x00),
    RGBColor(0xca, 0xb2, 0xd6),
    RGBColor(0x6a, 0x3d, 0x9a),
    RGBColor(0xff, 0xff, 0x99),
    RGBColor(0xb1, 0x59, 0x28),
];

pub const HIST_BLUE: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

pub fn cycle(palette: &[RGBColor], n: usize) -> Vec<RGBColor> {
    palette.iter().copied().cycle().take(n).collect()
}

pub fn title_font() -> FontDesc<'static> {
    (FONT, 36).into_font().style(FontStyle::Italic)
}

pub fn axis_font() -> FontDesc<'static> {
    (FONT, 24).into_font().style(FontStyle::Bold)
}

pub fn tick_font() -> FontDesc<'static> {
    (FONT, 16).into_font().style(FontStyle::Bold)
}

pub fn grid_style() -> RGBAColor {
    BLACK.mix(0.15)
}
