//! SVG drawing surface
//!
//! The canvas is the only mutable resource in the system: every renderer
//! receives it explicitly and appends geometry to it. Coordinates arrive in
//! page units (72 per inch); the normalized `[0,1]` interaction space is
//! mapped through [`Canvas::px`] / [`Canvas::py`], with y growing upward as
//! in the layout model and downward in the emitted SVG.

use std::fmt::Write;

/// Points per inch of page size
const UNITS_PER_INCH: f64 = 72.0;

/// Margin added around the content bounds when cropping the document
const CROP_MARGIN: f64 = 6.0;

/// A bounded 2D drawing surface accumulating SVG geometry.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f64,
    height: f64,
    defs: String,
    background: String,
    body: String,
    bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Canvas {
    /// Create a canvas for a page of `width_in` x `height_in` inches.
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width: width_in * UNITS_PER_INCH,
            height: height_in * UNITS_PER_INCH,
            defs: String::new(),
            background: "#fff".to_string(),
            body: String::new(),
            bounds: None,
        }
    }

    /// Page width in user units
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Page height in user units
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Map a normalized x coordinate to page units
    pub fn px(&self, x: f64) -> f64 {
        x * self.width
    }

    /// Map a normalized y coordinate (growing upward) to page units
    pub fn py(&self, y: f64) -> f64 {
        (1.0 - y) * self.height
    }

    /// Install the `<defs>` block (styles and markers). Written once by the
    /// diagram builder before any geometry.
    pub fn set_defs(&mut self, defs: String) {
        self.defs = defs;
    }

    /// Set the background color painted under the content.
    pub fn set_background(&mut self, color: &str) {
        self.background = color.to_string();
    }

    /// Straight line between two points, styled by CSS class.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, class: &str) {
        writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" class="{class}"/>"#
        )
        .unwrap();
        self.cover(x1, y1);
        self.cover(x2, y2);
    }

    /// Straight line with a terminal arrowhead marker.
    pub fn arrow_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, class: &str) {
        writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" class="{class}" marker-end="url(#arrow-head)"/>"#
        )
        .unwrap();
        self.cover(x1, y1);
        self.cover(x2, y2);
    }

    /// Rounded rectangle given its top-left corner and size.
    pub fn rounded_rect(&mut self, x: f64, y: f64, w: f64, h: f64, rx: f64, class: &str) {
        writeln!(
            self.body,
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" rx="{rx:.2}" ry="{rx:.2}" class="{class}"/>"#
        )
        .unwrap();
        self.cover(x, y);
        self.cover(x + w, y + h);
    }

    /// Center-anchored text with its baseline at `y`.
    pub fn text(&mut self, x: f64, y: f64, font_size: f64, class: &str, text: &str) {
        writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" class="{class}">{t}</text>"#,
            t = escape_xml(text)
        )
        .unwrap();
        let half = estimate_text_width(text, font_size) / 2.0;
        self.cover(x - half, y - font_size);
        self.cover(x + half, y + font_size * 0.3);
    }

    fn cover(&mut self, x: f64, y: f64) {
        let b = self.bounds.get_or_insert(Bounds {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        });
        b.min_x = b.min_x.min(x);
        b.min_y = b.min_y.min(y);
        b.max_x = b.max_x.max(x);
        b.max_y = b.max_y.max(y);
    }

    /// Serialize the canvas to an SVG document, tightly cropped to the
    /// content bounds.
    pub fn to_svg(&self) -> String {
        let (min_x, min_y, w, h) = match self.bounds {
            Some(b) => (
                b.min_x - CROP_MARGIN,
                b.min_y - CROP_MARGIN,
                b.max_x - b.min_x + 2.0 * CROP_MARGIN,
                b.max_y - b.min_y + 2.0 * CROP_MARGIN,
            ),
            None => (0.0, 0.0, self.width, self.height),
        };

        let mut svg = String::with_capacity(self.body.len() + self.defs.len() + 512);
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{min_x:.2} {min_y:.2} {w:.2} {h:.2}" width="{w:.2}" height="{h:.2}">"#
        )
        .unwrap();
        svg.push_str(&self.defs);
        writeln!(
            svg,
            r#"<rect x="{min_x:.2}" y="{min_y:.2}" width="{w:.2}" height="{h:.2}" fill="{bg}"/>"#,
            bg = self.background
        )
        .unwrap();
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

/// Estimate text width in user units (rough approximation).
///
/// ASCII lowercase counts as half an em, uppercase a bit wider, anything
/// else (CJK and friends) a full em.
pub(crate) fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    let units: f64 = text
        .chars()
        .map(|c| {
            if c.is_ascii() {
                if c.is_uppercase() {
                    0.7
                } else {
                    0.5
                }
            } else {
                1.0
            }
        })
        .sum();
    units * font_size
}

pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
