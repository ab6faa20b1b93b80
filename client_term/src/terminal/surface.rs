//! Half-block pixel surface
//!
//! Each terminal cell holds two vertical pixels drawn with `▀`, so a
//! `cols × rows` terminal gives a `cols × 2·rows` pixel grid. Text is kept in
//! a separate glyph layer on top of the pixels.

use std::io::{self, Write};

use crossterm::style::{self, Color as TermColor};
use crossterm::{cursor, queue, terminal};
use game_core::Aabb;
use glam::Vec2;

use super::loader::Skin;
use crate::assets::TextureId;
use crate::renderer::{Color, Surface};

const UPPER_HALF: char = '\u{2580}';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    top: Color,
    bottom: Color,
    glyph: Option<(char, Color)>,
}

pub struct TerminalSurface {
    cols: usize,
    rows: usize,
    arena: Vec2,
    pixels: Vec<Color>,
    glyphs: Vec<Option<(char, Color)>>,
    previous: Vec<Cell>,
    skins: Vec<Skin>,
}

impl TerminalSurface {
    /// `arena` is the playfield size everything is drawn in
    pub fn new(cols: u16, rows: u16, arena: Vec2, skins: Vec<Skin>) -> Self {
        let mut surface = Self {
            cols: 0,
            rows: 0,
            arena,
            pixels: Vec::new(),
            glyphs: Vec::new(),
            previous: Vec::new(),
            skins,
        };
        surface.resize(cols, rows);
        surface
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1) as usize;
        self.rows = rows.max(1) as usize;
        self.pixels = vec![Color::rgb(0, 0, 0); self.cols * self.rows * 2];
        self.glyphs = vec![None; self.cols * self.rows];
        // Forces a full repaint on the next present
        self.previous.clear();
    }

    fn pixel_height(&self) -> usize {
        self.rows * 2
    }

    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 / self.arena.x,
            self.pixel_height() as f32 / self.arena.y,
        )
    }

    /// Playfield position of a pixel's center
    fn pixel_center(&self, x: usize, y: usize) -> Vec2 {
        (Vec2::new(x as f32, y as f32) + 0.5) / self.scale()
    }

    /// Pixel columns and rows overlapped by a playfield rectangle
    fn pixel_span(&self, rect: Aabb) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let scale = self.scale();
        let min = (rect.min * scale).floor().max(Vec2::ZERO);
        let max = (rect.max * scale).ceil();
        let x_end = (max.x.max(0.0) as usize).min(self.cols);
        let y_end = (max.y.max(0.0) as usize).min(self.pixel_height());
        (
            (min.x as usize).min(x_end)..x_end,
            (min.y as usize).min(y_end)..y_end,
        )
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.cols && y < self.pixel_height() {
            self.pixels[y * self.cols + x] = color;
        }
    }

    fn plot(&mut self, point: Vec2, color: Color) {
        let p = (point * self.scale()).floor();
        if p.x >= 0.0 && p.y >= 0.0 {
            self.set_pixel(p.x as usize, p.y as usize, color);
        }
    }

    fn fill_with(&mut self, rect: Aabb, mut shade: impl FnMut(Vec2) -> Option<Color>) {
        let (xs, ys) = self.pixel_span(rect);
        for y in ys {
            for x in xs.clone() {
                if let Some(color) = shade(self.pixel_center(x, y)) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    fn cell(&self, col: usize, row: usize) -> Cell {
        Cell {
            top: self.pixels[(row * 2) * self.cols + col],
            bottom: self.pixels[(row * 2 + 1) * self.cols + col],
            glyph: self.glyphs[row * self.cols + col],
        }
    }

    /// Write changed cells since the last present
    pub fn present(&mut self, out: &mut impl Write) -> io::Result<()> {
        let full = self.previous.len() != self.cols * self.rows;
        if full {
            queue!(out, terminal::Clear(terminal::ClearType::All))?;
        }

        let mut frame = Vec::with_capacity(self.cols * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = self.cell(col, row);
                if full || self.previous[row * self.cols + col] != cell {
                    queue!(out, cursor::MoveTo(col as u16, row as u16))?;
                    write_cell(out, cell)?;
                }
                frame.push(cell);
            }
        }

        queue!(out, style::ResetColor)?;
        self.previous = frame;
        out.flush()
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn write_cell(out: &mut impl Write, cell: Cell) -> io::Result<()> {
    match cell.glyph {
        Some((ch, fg)) => queue!(
            out,
            style::SetForegroundColor(term_color(fg)),
            style::SetBackgroundColor(term_color(cell.top)),
            style::Print(ch)
        ),
        None if cell.top == cell.bottom => queue!(
            out,
            style::SetBackgroundColor(term_color(cell.top)),
            style::Print(' ')
        ),
        None => queue!(
            out,
            style::SetForegroundColor(term_color(cell.top)),
            style::SetBackgroundColor(term_color(cell.bottom)),
            style::Print(UPPER_HALF)
        ),
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
        self.glyphs.fill(None);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let bounds = Aabb::new(center - radius, center + radius);
        self.fill_with(bounds, |p| (p.distance(center) <= radius).then_some(color));
        // Small balls still show up on coarse grids
        self.plot(center, color);
    }

    fn fill_rounded_rect(&mut self, rect: Aabb, roundness: f32, color: Color) {
        let corner = roundness.clamp(0.0, 1.0) * rect.width().min(rect.height()) / 2.0;
        let inner = Aabb::new(rect.min + corner, rect.max - corner);
        self.fill_with(rect, |p| {
            let nearest = p.clamp(inner.min, inner.max);
            (rect.contains(p) && p.distance(nearest) <= corner).then_some(color)
        });
        let center = rect.min + Vec2::new(rect.width(), rect.height()) / 2.0;
        self.plot(center, color);
    }

    fn fill_gradient_rect(&mut self, rect: Aabb, corners: [Color; 4]) {
        let [top_left, bottom_left, top_right, bottom_right] = corners;
        let size = Vec2::new(rect.width(), rect.height()).max(Vec2::splat(f32::EPSILON));
        self.fill_with(rect, |p| {
            let t = (p - rect.min) / size;
            let top = top_left.lerp(top_right, t.x);
            let bottom = bottom_left.lerp(bottom_right, t.x);
            rect.contains(p).then(|| top.lerp(bottom, t.y))
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let span = (to - from) * self.scale();
        let steps = span.x.abs().max(span.y.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.plot(from.lerp(to, t), color);
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        let scale = self.scale();
        let row = ((pos.y + size / 2.0) * scale.y / 2.0).floor();
        let col = (pos.x * scale.x).round();
        if row < 0.0 || row as usize >= self.rows {
            return;
        }
        let row = row as usize;
        for (i, ch) in text.chars().enumerate() {
            let x = col + i as f32;
            if x >= 0.0 && (x as usize) < self.cols {
                self.glyphs[row * self.cols + x as usize] = Some((ch, color));
            }
        }
    }

    fn measure_text(&self, text: &str, _size: f32) -> f32 {
        text.chars().count() as f32 / self.scale().x
    }

    fn texture(&mut self, texture: TextureId, pos: Vec2, tint: Color) {
        let Some(skin) = self.skins.get(texture.0).copied() else {
            return;
        };
        let rect = Aabb::from_corner_size(pos, skin.size);
        let fill = skin.fill.modulate(tint);
        self.fill_with(rect, |p| rect.contains(p).then_some(fill));

        if let Some(border) = skin.border {
            let border = border.modulate(tint);
            let corners = [
                rect.min,
                Vec2::new(rect.max.x, rect.min.y),
                rect.max,
                Vec2::new(rect.min.x, rect.max.y),
            ];
            for (i, &corner) in corners.iter().enumerate() {
                self.line(corner, corners[(i + 1) % 4], border);
            }
        }
    }
}
