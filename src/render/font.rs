// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! Bitmap fonts: glyphs are cells of a Spritesheet.
//!
//! A FontLayout maps characters to sheet cells, with an advance width and
//! an optional sink (pixels a descender hangs below the baseline row).
//! Layouts are plain data and can be loaded from JSON:
//!
//! ```json
//! { "line_height": 9, "space_advance": 4,
//!   "glyphs": [ { "ch": "A", "col": 0, "row": 0, "advance": 6 },
//!               { "ch": "g", "col": 6, "row": 1, "sink": 2 } ] }
//! ```

use crate::{
    error::{invalid, Result},
    render::sprite::{Sprite, Spritesheet},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphDef {
    pub ch: char,
    pub col: u32,
    pub row: u32,
    /// defaults to the cell width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance: Option<u32>,
    #[serde(default)]
    pub sink: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontLayout {
    pub line_height: u32,
    /// advance of ' ' when the font has no space glyph; defaults to the cell width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_advance: Option<u32>,
    pub glyphs: Vec<GlyphDef>,
}

impl FontLayout {
    pub fn from_json(json: &str) -> Result<FontLayout> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &str) -> Result<FontLayout> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Maps `chars` onto consecutive cells, left to right, wrapping every
    /// `columns` cells. Handy for fonts drawn in character order.
    pub fn grid(chars: &str, columns: u32, line_height: u32) -> FontLayout {
        let columns = columns.max(1);
        let glyphs = chars
            .chars()
            .enumerate()
            .map(|(i, ch)| GlyphDef {
                ch,
                col: i as u32 % columns,
                row: i as u32 / columns,
                advance: None,
                sink: 0,
            })
            .collect();
        FontLayout {
            line_height,
            space_advance: None,
            glyphs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub sprite: Sprite,
    pub advance: u32,
    pub sink: i32,
}

#[derive(Debug, Clone)]
pub struct BitmapFont {
    glyphs: HashMap<char, Glyph>,
    line_height: u32,
    space_advance: u32,
}

impl BitmapFont {
    pub fn from_sheet(sheet: &Spritesheet, layout: &FontLayout) -> Result<BitmapFont> {
        if layout.line_height == 0 {
            return invalid("font line height must be positive");
        }
        let cell_w = sheet.layout().cell_width;
        let mut glyphs = HashMap::with_capacity(layout.glyphs.len());
        for g in &layout.glyphs {
            let sprite = sheet.crop(g.col, g.row)?;
            let glyph = Glyph {
                sprite,
                advance: g.advance.unwrap_or(cell_w),
                sink: g.sink,
            };
            if glyphs.insert(g.ch, glyph).is_some() {
                return invalid(format!("glyph {:?} mapped twice", g.ch));
            }
        }
        let space_advance = match glyphs.get(&' ') {
            Some(g) => g.advance,
            None => layout.space_advance.unwrap_or(cell_w),
        };
        info!(
            "bitmap font built: {} glyphs, line height {}",
            glyphs.len(),
            layout.line_height
        );
        Ok(BitmapFont {
            glyphs,
            line_height: layout.line_height,
            space_advance,
        })
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    pub fn space_advance(&self) -> u32 {
        self.space_advance
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Width and height `text` occupies at scale 1, following the same
    /// cursor rules as RenderContext::render_text.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let (mut w, mut lines, mut line_w) = (0u32, 1u32, 0u32);
        for ch in text.chars() {
            match ch {
                '\n' => {
                    w = w.max(line_w);
                    line_w = 0;
                    lines += 1;
                }
                ' ' => line_w += self.space_advance,
                _ => {
                    if let Some(g) = self.glyphs.get(&ch) {
                        line_w += g.advance;
                    }
                }
            }
        }
        (w.max(line_w), lines * self.line_height)
    }
}
