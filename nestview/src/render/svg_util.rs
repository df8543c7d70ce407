use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
#[serde(default)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    pub theme: SvgLayoutTheme,
    ///Draw the precise outline of a placement on top, when the packing engine supplied one
    pub precise_outline: bool,
    ///Draw a label at the center of every placement's slot
    pub labels: bool,
    ///Labels longer than this (plus the ellipsis) are abbreviated to their last characters
    pub label_suffix_len: usize,
    ///CSS max-height of the drawing, in pixels
    pub max_display_height: f64,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            precise_outline: true,
            labels: true,
            label_suffix_len: 10,
            max_display_height: 500.0,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub sheet_fill: Color,
    pub sheet_stroke: Color,
    pub sheet_stroke_width: f32,
    pub part_fill: Color,
    pub part_stroke: Color,
    pub part_stroke_width: f32,
    pub part_opacity: f32,
    pub label_fill: Color,
    pub label_font_size: f32,
    pub overlay_stroke: Color,
    pub overlay_stroke_width: f32,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::PASTEL
    }
}

impl SvgLayoutTheme {
    pub const PASTEL: SvgLayoutTheme = SvgLayoutTheme {
        sheet_fill: Color(0xFD, 0xFD, 0xFE),
        sheet_stroke: Color(0xA0, 0xA0, 0xA0),
        sheet_stroke_width: 1.0,
        part_fill: Color(0xCF, 0xE2, 0xFF),
        part_stroke: Color(0x05, 0x2C, 0x65),
        part_stroke_width: 0.7,
        part_opacity: 0.85,
        label_fill: Color(0x33, 0x33, 0x33),
        label_font_size: 10.0,
        overlay_stroke: Color(0xFF, 0x00, 0x00), // RED
        overlay_stroke_width: 1.0,
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        sheet_fill: Color(0xD3, 0xD3, 0xD3),
        sheet_stroke: Color(0x63, 0x63, 0x63),
        sheet_stroke_width: 1.0,
        part_fill: Color(0x7A, 0x7A, 0x7A),
        part_stroke: Color(0x2D, 0x2D, 0x2D),
        part_stroke_width: 0.7,
        part_opacity: 0.9,
        label_fill: Color(0x00, 0x00, 0x00),
        label_font_size: 10.0,
        overlay_stroke: Color(0xD0, 0x00, 0x00),
        overlay_stroke_width: 1.0,
    };

    /// Stylesheet embedded in every rendered sheet, keyed on the element classes.
    pub fn stylesheet(&self) -> String {
        format!(
            ".svg-sheet{{fill:{};stroke:{};stroke-width:{}px;}} \
             .svg-part-profile{{fill:{};stroke:{};stroke-width:{}px;opacity:{};}} \
             .svg-part-label{{font-size:{}px;font-family:sans-serif;fill:{};text-anchor:middle;dominant-baseline:central;pointer-events:none;}} \
             .svg-precise-outline{{fill:none;stroke:{};stroke-width:{}px;}}",
            self.sheet_fill,
            self.sheet_stroke,
            self.sheet_stroke_width,
            self.part_fill,
            self.part_stroke,
            self.part_stroke_width,
            self.part_opacity,
            self.label_font_size,
            self.label_fill,
            self.overlay_stroke,
            self.overlay_stroke_width,
        )
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected a color of the form #RRGGBB, got {s:?}"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("invalid color {s:?}: {e}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

pub fn data_to_path(data: String, class: &str, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new().set("class", class);
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
