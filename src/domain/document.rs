//! Typed block model for rendered reports.
//!
//! A [`ReportDocument`] is an ordered list of [`Block`]s plus page setup. It
//! carries enough styling for an encoder to reproduce the layout, but says
//! nothing about any particular output format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const WHITE_SMOKE: Color = Color::rgb(245, 245, 245);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f32,
    pub leading: f32,
    pub color: Color,
    pub alignment: Alignment,
    pub space_after: f32,
}

impl TextStyle {
    pub fn title() -> Self {
        Self {
            font_size: 20.0,
            leading: 24.0,
            color: Color::rgb(0x2E, 0x86, 0xC1),
            alignment: Alignment::Center,
            space_after: 20.0,
        }
    }

    pub fn subtitle() -> Self {
        Self {
            font_size: 14.0,
            leading: 18.0,
            color: Color::rgb(0x11, 0x7A, 0x65),
            alignment: Alignment::Left,
            space_after: 10.0,
        }
    }

    pub fn body() -> Self {
        Self {
            font_size: 11.0,
            leading: 14.0,
            color: Color::BLACK,
            alignment: Alignment::Left,
            space_after: 0.0,
        }
    }

    pub fn footer() -> Self {
        Self {
            font_size: 10.0,
            leading: 12.0,
            color: Color::GRAY,
            alignment: Alignment::Center,
            space_after: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStyle {
    pub column_widths: Vec<f32>,
    pub font: String,
    pub font_size: f32,
    pub bottom_padding: f32,
    pub header_background: Color,
    pub body_background: Color,
    pub grid_width: f32,
    pub grid_color: Color,
}

impl TableStyle {
    pub fn identity() -> Self {
        Self {
            column_widths: vec![150.0, 350.0],
            font: "Helvetica".to_string(),
            font_size: 11.0,
            bottom_padding: 8.0,
            header_background: Color::rgb(0xAE, 0xD6, 0xF1),
            body_background: Color::WHITE_SMOKE,
            grid_width: 0.5,
            grid_color: Color::GRAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderGraphic {
    pub path: PathBuf,
    pub width: f32,
    pub height: f32,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Image {
        graphic: HeaderGraphic,
    },
    Heading {
        text: String,
        style: TextStyle,
    },
    Subheading {
        text: String,
        style: TextStyle,
    },
    KeyValueTable {
        rows: Vec<(String, String)>,
        style: TableStyle,
    },
    Paragraph {
        spans: Vec<Span>,
        style: TextStyle,
    },
    ItemizedList {
        bullet: String,
        items: Vec<String>,
        style: TextStyle,
    },
    Spacer {
        height: f32,
    },
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Image { .. } => "image",
            Block::Heading { .. } => "heading",
            Block::Subheading { .. } => "subheading",
            Block::KeyValueTable { .. } => "key_value_table",
            Block::Paragraph { .. } => "paragraph",
            Block::ItemizedList { .. } => "itemized_list",
            Block::Spacer { .. } => "spacer",
        }
    }

    /// Visible text of the block, spans joined without markup.
    pub fn text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::Subheading { text, .. } => text.clone(),
            Block::Paragraph { spans, .. } => spans.iter().map(|s| s.text.as_str()).collect(),
            Block::ItemizedList { items, .. } => items.join("\n"),
            Block::KeyValueTable { rows, .. } => rows
                .iter()
                .map(|(key, value)| format!("{} {}", key, value))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Image { .. } | Block::Spacer { .. } => String::new(),
        }
    }
}

/// US letter in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageSetup {
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 72.0,
        }
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::letter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub page: PageSetup,
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page: PageSetup::letter(),
            blocks: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
