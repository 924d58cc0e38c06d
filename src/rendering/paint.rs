/// Paint command set for the icon display list

use image::Rgba;

/// Fill color of the background disc (`#1a73e8`)
pub const CIRCLE_BLUE: Rgba<u8> = Rgba([26, 115, 232, 255]);
/// Fill color of every glyph drawn on top of the disc
pub const GLYPH_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Initial canvas color
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Pixel box whose end coordinates are painted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square box of half-width `radius` around `(cx, cy)`.
    pub fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1).max(0) as u32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Smallest box covering every point.
    pub fn enclosing(points: &[(i32, i32)]) -> Option<Self> {
        let (&(fx, fy), rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(fx, fy, fx, fy), |b, &(x, y)| Self {
            x0: b.x0.min(x),
            y0: b.y0.min(y),
            x1: b.x1.max(x),
            y1: b.y1.max(y),
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Ellipse inscribed in `bounds`
    Ellipse { bounds: Bounds, rgba: Rgba<u8> },
    /// Closed polygon, edges included
    Polygon { points: Vec<(i32, i32)>, rgba: Rgba<u8> },
    Rectangle { bounds: Bounds, rgba: Rgba<u8> },
    RoundedRectangle {
        bounds: Bounds,
        radius: i32,
        rgba: Rgba<u8>,
    },
}

impl PaintCommand {
    pub fn rgba(&self) -> Rgba<u8> {
        match self {
            PaintCommand::Ellipse { rgba, .. }
            | PaintCommand::Polygon { rgba, .. }
            | PaintCommand::Rectangle { rgba, .. }
            | PaintCommand::RoundedRectangle { rgba, .. } => *rgba,
        }
    }

    /// Box that holds every pixel the command may touch.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            PaintCommand::Ellipse { bounds, .. }
            | PaintCommand::Rectangle { bounds, .. }
            | PaintCommand::RoundedRectangle { bounds, .. } => Some(*bounds),
            PaintCommand::Polygon { points, .. } => Bounds::enclosing(points),
        }
    }
}
