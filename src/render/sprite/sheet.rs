// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! sheet.rs slices one source Bitmap into a uniform grid of Sprites.
//! Every cell is a deep copy, so cells can be handed out, scaled or
//! flipped without touching the sheet.
//!
//! Cell (col, row) starts at
//! (offset_x + col * (cell_width + v_gap), offset_y + row * (cell_height + h_gap)).

use crate::{
    error::{invalid, out_of_bounds, Result},
    render::{
        animation::{Animation, AnimationFrame},
        bitmap::Bitmap,
        sprite::Sprite,
    },
};
use log::info;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Which strip of the sheet `generate_strip_animation` walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// row 0, left to right
    Horizontal,
    /// column 0, top to bottom
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub cell_width: u32,
    pub cell_height: u32,
    #[serde(default)]
    pub offset_x: u32,
    #[serde(default)]
    pub offset_y: u32,
    /// gap between columns
    #[serde(default)]
    pub v_gap: u32,
    /// gap between rows
    #[serde(default)]
    pub h_gap: u32,
    #[serde(default)]
    pub pixel_perfect: bool,
}

impl SheetLayout {
    pub fn new(cell_width: u32, cell_height: u32) -> SheetLayout {
        SheetLayout {
            cell_width,
            cell_height,
            offset_x: 0,
            offset_y: 0,
            v_gap: 0,
            h_gap: 0,
            pixel_perfect: false,
        }
    }

    pub fn offset(mut self, x: u32, y: u32) -> SheetLayout {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn gaps(mut self, v_gap: u32, h_gap: u32) -> SheetLayout {
        self.v_gap = v_gap;
        self.h_gap = h_gap;
        self
    }

    pub fn pixel_perfect(mut self, flag: bool) -> SheetLayout {
        self.pixel_perfect = flag;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return invalid(format!(
                "cell size {}x{} must be positive",
                self.cell_width, self.cell_height
            ));
        }
        Ok(())
    }

    /// Grid size (columns, rows) this layout yields on a source bitmap.
    pub fn grid_size(&self, src_w: u32, src_h: u32) -> (u32, u32) {
        let cols = src_w.saturating_sub(self.offset_x) as u64
            / (self.cell_width as u64 + self.v_gap as u64);
        let rows = src_h.saturating_sub(self.offset_y) as u64
            / (self.cell_height as u64 + self.h_gap as u64);
        (cols as u32, rows as u32)
    }
}

#[derive(Debug, Clone)]
pub struct Spritesheet {
    source: Bitmap,
    layout: SheetLayout,
    columns: u32,
    rows: u32,
    // column major: cells[col * rows + row]
    cells: Vec<Sprite>,
}

impl Spritesheet {
    pub fn new(source: Bitmap, layout: SheetLayout) -> Result<Spritesheet> {
        layout.validate()?;
        let (columns, rows) = layout.grid_size(source.width(), source.height());
        let mut cells = Vec::with_capacity(columns as usize * rows as usize);
        for col in 0..columns {
            let x = layout.offset_x + col * (layout.cell_width + layout.v_gap);
            for row in 0..rows {
                let y = layout.offset_y + row * (layout.cell_height + layout.h_gap);
                let bmp = source.crop(x, y, layout.cell_width, layout.cell_height)?;
                cells.push(if layout.pixel_perfect {
                    Sprite::pixel_perfect(bmp)
                } else {
                    Sprite::new(bmp)
                });
            }
        }
        info!(
            "spritesheet {}x{} sliced into {}x{} cells of {}x{}",
            source.width(),
            source.height(),
            columns,
            rows,
            layout.cell_width,
            layout.cell_height
        );
        Ok(Spritesheet {
            source,
            layout,
            columns,
            rows,
            cells,
        })
    }

    pub fn source(&self) -> &Bitmap {
        &self.source
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Borrows a cell without copying it.
    pub fn cell(&self, col: u32, row: u32) -> Result<&Sprite> {
        if col >= self.columns || row >= self.rows {
            return out_of_bounds(format!(
                "cell ({}, {}) outside {}x{} grid",
                col, row, self.columns, self.rows
            ));
        }
        Ok(&self.cells[(col * self.rows + row) as usize])
    }

    pub fn crop(&self, col: u32, row: u32) -> Result<Sprite> {
        self.cell(col, row).cloned()
    }

    /// One frame per (col, row), every frame lasting `duration_ms`.
    pub fn generate_animation(
        &self,
        name: &str,
        duration_ms: u32,
        coords: &[(u32, u32)],
    ) -> Result<Animation> {
        let durations = vec![duration_ms; coords.len()];
        self.generate_animation_timed(name, &durations, coords)
    }

    /// Per-frame durations; `durations` and `coords` are parallel arrays.
    pub fn generate_animation_timed(
        &self,
        name: &str,
        durations: &[u32],
        coords: &[(u32, u32)],
    ) -> Result<Animation> {
        if coords.is_empty() {
            return invalid(format!("animation '{}' has no cells", name));
        }
        if durations.len() != coords.len() {
            return invalid(format!(
                "animation '{}': {} durations for {} cells",
                name,
                durations.len(),
                coords.len()
            ));
        }
        let mut frames = Vec::with_capacity(coords.len());
        for (&(col, row), &ms) in coords.iter().zip(durations) {
            let bmp = self.crop(col, row)?.into_bitmap();
            frames.push(AnimationFrame::new(Rc::new(bmp), ms)?);
        }
        Animation::new(name, frames)
    }

    /// Treats the sheet as a single strip and plays every cell of it in order.
    pub fn generate_strip_animation(
        &self,
        name: &str,
        orientation: Orientation,
        duration_ms: u32,
    ) -> Result<Animation> {
        let coords: Vec<(u32, u32)> = match orientation {
            Orientation::Horizontal => (0..self.columns).map(|c| (c, 0)).collect(),
            Orientation::Vertical => (0..self.rows).map(|r| (0, r)).collect(),
        };
        self.generate_animation(name, duration_ms, &coords)
    }
}
