use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Foreground colour of a console span, rendered as a class tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter,
)]
pub enum ColorTag {
    #[strum(serialize = "text-gray-900")]
    Black,
    #[strum(serialize = "text-red-400")]
    Red,
    #[strum(serialize = "text-green-400")]
    Green,
    #[strum(serialize = "text-yellow-400")]
    Yellow,
    #[strum(serialize = "text-blue-400")]
    Blue,
    #[strum(serialize = "text-purple-400")]
    Magenta,
    #[strum(serialize = "text-cyan-400")]
    Cyan,
    #[strum(serialize = "text-white")]
    White,
    #[strum(serialize = "text-gray-500")]
    BrightBlack,
    #[strum(serialize = "text-red-300")]
    BrightRed,
    #[strum(serialize = "text-green-300")]
    BrightGreen,
    #[strum(serialize = "text-yellow-300")]
    BrightYellow,
    #[strum(serialize = "text-blue-300")]
    BrightBlue,
    #[strum(serialize = "text-purple-300")]
    BrightMagenta,
    #[strum(serialize = "text-cyan-300")]
    BrightCyan,
    #[strum(serialize = "text-gray-100")]
    BrightWhite,
    /// Plain log text, used only for chunks that produced no span.
    #[strum(serialize = "text-gray-300")]
    LogText,
}

impl ColorTag {
    /// Representative sRGB value for renderers that do not understand class
    /// tags.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTag::Black => (17, 24, 39),
            ColorTag::Red => (248, 113, 113),
            ColorTag::Green => (74, 222, 128),
            ColorTag::Yellow => (250, 204, 21),
            ColorTag::Blue => (96, 165, 250),
            ColorTag::Magenta => (192, 132, 252),
            ColorTag::Cyan => (34, 211, 238),
            ColorTag::White => (255, 255, 255),
            ColorTag::BrightBlack => (107, 114, 128),
            ColorTag::BrightRed => (252, 165, 165),
            ColorTag::BrightGreen => (134, 239, 172),
            ColorTag::BrightYellow => (253, 224, 71),
            ColorTag::BrightBlue => (147, 197, 253),
            ColorTag::BrightMagenta => (216, 180, 254),
            ColorTag::BrightCyan => (103, 232, 249),
            ColorTag::BrightWhite => (243, 244, 246),
            ColorTag::LogText => (209, 213, 219),
        }
    }
}

impl Serialize for ColorTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for ColorTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse()
            .map_err(|_| de::Error::custom(format!("unknown color tag `{tag}`")))
    }
}

/// Effect of a colour code from [`COLOR_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrColor {
    Tag(ColorTag),
    /// 39: back to the session's default foreground.
    Default,
}

/// SGR foreground codes, keyed by their textual form.
pub const COLOR_TABLE: [(&str, SgrColor); 17] = [
    ("30", SgrColor::Tag(ColorTag::Black)),
    ("31", SgrColor::Tag(ColorTag::Red)),
    ("32", SgrColor::Tag(ColorTag::Green)),
    ("33", SgrColor::Tag(ColorTag::Yellow)),
    ("34", SgrColor::Tag(ColorTag::Blue)),
    ("35", SgrColor::Tag(ColorTag::Magenta)),
    ("36", SgrColor::Tag(ColorTag::Cyan)),
    ("37", SgrColor::Tag(ColorTag::White)),
    ("39", SgrColor::Default),
    ("90", SgrColor::Tag(ColorTag::BrightBlack)),
    ("91", SgrColor::Tag(ColorTag::BrightRed)),
    ("92", SgrColor::Tag(ColorTag::BrightGreen)),
    ("93", SgrColor::Tag(ColorTag::BrightYellow)),
    ("94", SgrColor::Tag(ColorTag::BrightBlue)),
    ("95", SgrColor::Tag(ColorTag::BrightMagenta)),
    ("96", SgrColor::Tag(ColorTag::BrightCyan)),
    ("97", SgrColor::Tag(ColorTag::BrightWhite)),
];

pub fn color_for_code(code: &str) -> Option<SgrColor> {
    COLOR_TABLE
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, color)| *color)
}
