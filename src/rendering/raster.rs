/// Hard-edged rasterizer for the paint command set

use image::{Rgba, RgbaImage};

use crate::rendering::paint::{Bounds, PaintCommand, TRANSPARENT};

/// Drawing target for a single render. Starts fully transparent; every fill
/// replaces the destination pixel (no blending, no anti-aliasing).
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Rasterize one command. Pixels outside the canvas are dropped.
    pub fn fill(&mut self, cmd: &PaintCommand) {
        let Some(area) = cmd.bounds().and_then(|b| self.clip(b)) else {
            return;
        };
        let rgba = cmd.rgba();
        for y in area.y0..=area.y1 {
            for x in area.x0..=area.x1 {
                if covers(cmd, x, y) {
                    self.image.put_pixel(x as u32, y as u32, rgba);
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn clip(&self, b: Bounds) -> Option<Bounds> {
        if self.image.width() == 0 || self.image.height() == 0 {
            return None;
        }
        let max_x = self.image.width() as i32 - 1;
        let max_y = self.image.height() as i32 - 1;
        let clipped = Bounds::new(b.x0.max(0), b.y0.max(0), b.x1.min(max_x), b.y1.min(max_y));
        (clipped.x0 <= clipped.x1 && clipped.y0 <= clipped.y1).then_some(clipped)
    }
}

/// Whether `cmd` paints pixel `(x, y)`, ignoring canvas bounds.
pub fn covers(cmd: &PaintCommand, x: i32, y: i32) -> bool {
    match cmd {
        PaintCommand::Rectangle { bounds, .. } => bounds.contains(x, y),
        PaintCommand::Ellipse { bounds, .. } => ellipse_covers(bounds, x, y),
        PaintCommand::RoundedRectangle { bounds, radius, .. } => {
            rounded_rect_covers(bounds, *radius, x, y)
        }
        PaintCommand::Polygon { points, .. } => polygon_covers(points, x, y),
    }
}

/// Pixel center inside the ellipse inscribed in the box's outer edges.
fn ellipse_covers(b: &Bounds, x: i32, y: i32) -> bool {
    let rx = b.width() as f64 / 2.0;
    let ry = b.height() as f64 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (x as f64 + 0.5 - (b.x0 as f64 + rx)) / rx;
    let dy = (y as f64 + 0.5 - (b.y0 as f64 + ry)) / ry;
    dx * dx + dy * dy <= 1.0
}

fn rounded_rect_covers(b: &Bounds, radius: i32, x: i32, y: i32) -> bool {
    if !b.contains(x, y) {
        return false;
    }
    let w = b.width() as f64;
    let h = b.height() as f64;
    let r = (radius as f64).min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        return true;
    }
    let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
    let nx = px.clamp(b.x0 as f64 + r, b.x0 as f64 + w - r);
    let ny = py.clamp(b.y0 as f64 + r, b.y0 as f64 + h - r);
    let (dx, dy) = (px - nx, py - ny);
    dx * dx + dy * dy <= r * r
}

/// Even-odd fill on integer pixel coordinates; points on an edge count.
fn polygon_covers(points: &[(i32, i32)], x: i32, y: i32) -> bool {
    let n = points.len();
    if n == 0 {
        return false;
    }
    let (px, py) = (x as f64, y as f64);
    let mut inside = false;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if on_segment(a, b, (x, y)) {
            return true;
        }
        let (ax, ay) = (a.0 as f64, a.1 as f64);
        let (bx, by) = (b.0 as f64, b.1 as f64);
        if (ay > py) != (by > py) {
            let xi = ax + (py - ay) * (bx - ax) / (by - ay);
            if px < xi {
                inside = !inside;
            }
        }
    }
    inside
}

fn on_segment(a: (i32, i32), b: (i32, i32), p: (i32, i32)) -> bool {
    let (ax, ay) = (a.0 as i64, a.1 as i64);
    let (bx, by) = (b.0 as i64, b.1 as i64);
    let (px, py) = (p.0 as i64, p.1 as i64);
    let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
    cross == 0
        && px >= ax.min(bx)
        && px <= ax.max(bx)
        && py >= ay.min(by)
        && py <= ay.max(by)
}
