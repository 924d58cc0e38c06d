/// Reference icon design, authored at 128x128 and scaled per size

use crate::rendering::paint::{Bounds, PaintCommand, CIRCLE_BLUE, GLYPH_WHITE};
use crate::rendering::IconSize;

/// Edge length the design coordinates are authored for
pub const REFERENCE_SIZE: u32 = 128;

/// Uniform scale from reference coordinates to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f64);

impl Scale {
    pub fn for_size(size: IconSize) -> Self {
        Scale(size.get() as f64 / REFERENCE_SIZE as f64)
    }

    /// Scaled reference coordinate, truncated toward zero.
    pub fn px(&self, reference: f64) -> i32 {
        (reference * self.0) as i32
    }
}

/// Subtitle bars as `(y, x_start, x_end)` in reference coordinates.
const SUBTITLE_BARS: [(f64, f64, f64); 3] = [
    (95.0, 25.0, 103.0),
    (103.0, 25.0, 85.0),
    (111.0, 25.0, 95.0),
];

/// Build the display list for one icon, in paint order.
pub fn layout_icon(size: IconSize) -> Vec<PaintCommand> {
    let s = Scale::for_size(size);
    let mut cmds = Vec::with_capacity(8);

    let center = (size.get() / 2) as i32;
    cmds.push(PaintCommand::Ellipse {
        bounds: Bounds::around(center, center, s.px(60.0)),
        rgba: CIRCLE_BLUE,
    });

    // play glyph
    cmds.push(PaintCommand::Polygon {
        points: vec![(s.px(50.0), s.px(40.0)), (s.px(50.0), s.px(88.0)), (s.px(85.0), s.px(64.0))],
        rgba: GLYPH_WHITE,
    });

    let line_height = s.px(4.0);
    for (y, x0, x1) in SUBTITLE_BARS {
        let line_y = s.px(y);
        cmds.push(PaintCommand::RoundedRectangle {
            bounds: Bounds::new(s.px(x0), line_y, s.px(x1), line_y + line_height),
            radius: s.px(2.0),
            rgba: GLYPH_WHITE,
        });
    }

    // download arrow: shaft, then head
    let arrow_x = s.px(100.0);
    let arrow_y = s.px(25.0);
    let arrow_size = s.px(20.0);
    cmds.push(PaintCommand::Rectangle {
        bounds: Bounds::new(arrow_x - s.px(5.0), arrow_y, arrow_x + s.px(5.0), arrow_y + arrow_size),
        rgba: GLYPH_WHITE,
    });
    let head_y = arrow_y + arrow_size - s.px(5.0);
    cmds.push(PaintCommand::Polygon {
        points: vec![
            (arrow_x - s.px(10.0), head_y),
            (arrow_x + s.px(10.0), head_y),
            (arrow_x, arrow_y + arrow_size + s.px(10.0)),
        ],
        rgba: GLYPH_WHITE,
    });

    cmds
}
