use ansi_to_style::{ColorTag, StyledSpan};
use peniko::Color;

pub const WEIGHT_NORMAL: u16 = 400;
pub const WEIGHT_BOLD: u16 = 700;

pub fn tag_color(tag: ColorTag) -> Color {
    let (r, g, b) = tag.rgb();
    Color::from_rgb8(r, g, b)
}

pub fn span_color(span: &StyledSpan) -> Color {
    tag_color(span.style().color)
}

pub fn span_weight(span: &StyledSpan) -> u16 {
    if span.style().bold {
        WEIGHT_BOLD
    } else {
        WEIGHT_NORMAL
    }
}
