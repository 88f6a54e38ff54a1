//! Diagram building: lane guides, arrows and caption boxes
//!
//! The builder walks a fixed state machine: lanes are registered first,
//! guide-lines and titles are drawn once, then the ordered step sequence is
//! consumed one vertical slot at a time. Any failure aborts the whole
//! build; a partially drawn canvas is never handed to the exporter.

use std::fmt::Write;

use crate::canvas::{estimate_text_width, Canvas};
use crate::error::BuildError;
use crate::lanes::LaneModel;
use crate::layout::PositionAllocator;
use crate::model::{Lane, Step};
use crate::theme::{GuideLineStyle, Theme};
use crate::wrap::wrap;

/// Guide-lines span this normalized vertical range
const GUIDE_TOP: f64 = 0.98;
const GUIDE_BOTTOM: f64 = 0.02;
/// Lane titles anchor just above the guide-lines
const TITLE_Y: f64 = 0.99;
/// Captions sit slightly below their arrow to clear the arrowhead
const CAPTION_DROP: f64 = 0.006;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Page width in inches
    pub page_width: f64,
    /// Page height in inches
    pub page_height: f64,
    /// Lane title font size in points
    pub title_font: f64,
    /// Caption font size in points
    pub caption_font: f64,
    /// Caption wrap width in characters
    pub wrap_width: usize,
    /// Normalized y of the first vertical slot
    pub top_margin: f64,
    /// Normalized y below which no slot is placed
    pub bottom_margin: f64,
    /// Normalized spacing between consecutive slots
    pub step_spacing: f64,
    /// Theme for styling
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_width: 20.0,
            page_height: 14.0,
            title_font: 16.0,
            caption_font: 12.0,
            wrap_width: 50,
            top_margin: 0.96,
            bottom_margin: 0.04,
            step_spacing: 0.04,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Accepting lane registrations
    Registering,
    /// Guide-lines drawn; consuming steps
    Consuming,
}

/// Orchestrates one diagram build from lane registration to sealed canvas.
#[derive(Debug)]
pub struct DiagramBuilder {
    config: Config,
    canvas: Canvas,
    lanes: LaneModel,
    slots: PositionAllocator,
    stage: Stage,
}

impl DiagramBuilder {
    pub fn new(config: Config) -> Self {
        let mut canvas = Canvas::new(config.page_width, config.page_height);
        canvas.set_defs(style_defs(&config));
        canvas.set_background(&config.theme.background);
        let slots = PositionAllocator::new(
            config.top_margin,
            config.bottom_margin,
            config.step_spacing,
        );
        Self {
            config,
            canvas,
            lanes: LaneModel::new(),
            slots,
            stage: Stage::Registering,
        }
    }

    /// Register a lane. Fails with [`BuildError::LateLaneRegistration`] once
    /// the guide-lines have been drawn.
    pub fn lane(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        x: f64,
    ) -> Result<(), BuildError> {
        let id = id.into();
        if self.stage == Stage::Consuming {
            return Err(BuildError::LateLaneRegistration(id));
        }
        self.lanes.register(id, name, x)
    }

    /// Draw every lane's guide-line and bold title, then move to the
    /// step-consuming stage. Consuming the first step performs this
    /// implicitly; calling it again is a no-op.
    pub fn draw_lanes(&mut self) {
        if self.stage == Stage::Consuming {
            return;
        }
        let (y1, y2) = (self.canvas.py(GUIDE_TOP), self.canvas.py(GUIDE_BOTTOM));
        let title_y = self.canvas.py(TITLE_Y) + self.config.title_font * 0.8;
        for lane in self.lanes.lanes() {
            let x = self.canvas.px(lane.x);
            self.canvas.line(x, y1, x, y2, "lane");
            self.canvas
                .text(x, title_y, self.config.title_font, "lane-title", &lane.name);
        }
        tracing::debug!(lanes = self.lanes.len(), "lane guides drawn");
        self.stage = Stage::Consuming;
    }

    /// Consume the next step: pull one y from the allocator and dispatch to
    /// the arrow or caption-box renderer.
    pub fn step(&mut self, step: &Step) -> Result<(), BuildError> {
        self.draw_lanes();
        let y = self.slots.next()?;
        match step {
            Step::Arrow { from, to, caption } => draw_arrow(
                &mut self.canvas,
                &self.lanes,
                from,
                to,
                y,
                caption,
                self.config.caption_font,
                self.config.wrap_width,
            ),
            Step::Annotation { lane, caption } => {
                let x = self.lanes.x_of(lane)?;
                draw_caption_box(
                    &mut self.canvas,
                    x,
                    y,
                    caption,
                    self.config.caption_font,
                    self.config.wrap_width,
                );
                Ok(())
            }
        }
    }

    /// Seal the build and hand the canvas over for export.
    pub fn finish(mut self) -> Canvas {
        self.draw_lanes();
        self.canvas
    }
}

/// Build a whole diagram in one pass.
pub fn build(config: Config, lanes: &[Lane], steps: &[Step]) -> Result<Canvas, BuildError> {
    let mut builder = DiagramBuilder::new(config);
    for lane in lanes {
        builder.lane(lane.id.as_str(), lane.name.as_str(), lane.x)?;
    }
    builder.draw_lanes();
    for step in steps {
        builder.step(step)?;
    }
    tracing::debug!(lanes = lanes.len(), steps = steps.len(), "diagram built");
    Ok(builder.finish())
}

/// Draw a directed horizontal arrow between two lanes at height `y`, then
/// place the caption box at the arrow midpoint, slightly below the line.
#[allow(clippy::too_many_arguments)]
pub fn draw_arrow(
    canvas: &mut Canvas,
    lanes: &LaneModel,
    from: &str,
    to: &str,
    y: f64,
    caption: &str,
    font_size: f64,
    wrap_width: usize,
) -> Result<(), BuildError> {
    let from_x = lanes.x_of(from)?;
    let to_x = lanes.x_of(to)?;
    let (x1, x2, py) = (canvas.px(from_x), canvas.px(to_x), canvas.py(y));
    canvas.arrow_line(x1, py, x2, py, "arrow");
    draw_caption_box(
        canvas,
        (from_x + to_x) / 2.0,
        y - CAPTION_DROP,
        caption,
        font_size,
        wrap_width,
    );
    Ok(())
}

/// Draw a rounded, bordered, filled caption box centered at the normalized
/// point `(x, y)`, with the wrapped caption lines centered inside.
pub fn draw_caption_box(
    canvas: &mut Canvas,
    x: f64,
    y: f64,
    caption: &str,
    font_size: f64,
    wrap_width: usize,
) {
    let lines = wrap(caption, wrap_width);
    let line_height = font_size + 4.0;
    let pad = font_size * 0.5;
    let widest = lines
        .iter()
        .map(|line| estimate_text_width(line, font_size))
        .fold(0.0, f64::max);
    let w = widest + 2.0 * pad;
    let h = lines.len() as f64 * line_height + 2.0 * pad;
    let (cx, cy) = (canvas.px(x), canvas.py(y));

    canvas.rounded_rect(
        cx - w / 2.0,
        cy - h / 2.0,
        w,
        h,
        font_size * 0.35,
        "caption-box",
    );
    for (i, line) in lines.iter().enumerate() {
        let ty = cy - h / 2.0 + pad + (i as f64 + 0.8) * line_height;
        canvas.text(cx, ty, font_size, "caption", line);
    }
}

fn style_defs(config: &Config) -> String {
    let theme = &config.theme;
    let lane_dash = match theme.lane_style {
        GuideLineStyle::Dashed => " stroke-dasharray: 6,6;",
        GuideLineStyle::Solid => "",
    };

    let mut defs = String::new();
    defs.push_str("<defs>\n<style>\n");
    writeln!(
        defs,
        ".lane {{ stroke: {c}; stroke-width: 1.5; fill: none;{dash} }}",
        c = theme.lane_color,
        dash = lane_dash
    )
    .unwrap();
    writeln!(
        defs,
        ".lane-title {{ font-family: {f}; font-size: {s}px; font-weight: bold; text-anchor: middle; fill: {c}; }}",
        f = theme.font_family,
        s = config.title_font,
        c = theme.lane_title_color
    )
    .unwrap();
    writeln!(
        defs,
        ".arrow {{ stroke: {c}; stroke-width: 2.5; fill: none; }}",
        c = theme.arrow_color
    )
    .unwrap();
    writeln!(
        defs,
        ".caption-box {{ fill: {fill}; stroke: {stroke}; stroke-width: 1; }}",
        fill = theme.box_fill,
        stroke = theme.box_stroke
    )
    .unwrap();
    writeln!(
        defs,
        ".caption {{ font-family: {f}; font-size: {s}px; text-anchor: middle; fill: {c}; }}",
        f = theme.font_family,
        s = config.caption_font,
        c = theme.caption_color
    )
    .unwrap();
    defs.push_str("</style>\n");

    // Marker units default to strokeWidth, so the head scales with line weight.
    writeln!(
        defs,
        r##"<marker id="arrow-head" markerWidth="6" markerHeight="4.5" refX="5.4" refY="2.25" orient="auto">"##
    )
    .unwrap();
    writeln!(
        defs,
        r##"<polygon points="0 0, 6 2.25, 0 4.5" fill="{c}"/>"##,
        c = theme.arrow_color
    )
    .unwrap();
    defs.push_str("</marker>\n</defs>\n");
    defs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_lanes() -> LaneModel {
        let mut lanes = LaneModel::new();
        lanes.register("client", "Client", 0.2).unwrap();
        lanes.register("server", "Server", 0.8).unwrap();
        lanes
    }

    fn caption_box_lines(svg: &str) -> Vec<String> {
        svg.lines()
            .filter(|line| line.contains("caption-box"))
            .map(|line| line.to_string())
            .collect()
    }

    #[test]
    fn reversed_arrows_swap_endpoints_but_share_caption_placement() {
        let lanes = two_lanes();

        let mut forward = Canvas::new(10.0, 10.0);
        draw_arrow(&mut forward, &lanes, "client", "server", 0.5, "GET /", 12.0, 50).unwrap();
        let mut backward = Canvas::new(10.0, 10.0);
        draw_arrow(&mut backward, &lanes, "server", "client", 0.5, "GET /", 12.0, 50).unwrap();

        let fwd = forward.to_svg();
        let bwd = backward.to_svg();
        assert!(
            fwd.contains(r#"x1="144.00" y1="360.00" x2="576.00" y2="360.00""#),
            "{fwd}"
        );
        assert!(
            bwd.contains(r#"x1="576.00" y1="360.00" x2="144.00" y2="360.00""#),
            "{bwd}"
        );
        // Same midpoint, same vertical offset: identical caption boxes.
        assert_eq!(caption_box_lines(&fwd), caption_box_lines(&bwd));
    }

    #[test]
    fn arrow_to_unregistered_lane_fails() {
        let lanes = two_lanes();
        let mut canvas = Canvas::new(10.0, 10.0);
        let err = draw_arrow(&mut canvas, &lanes, "client", "gateway", 0.5, "x", 12.0, 50);
        assert_eq!(err, Err(BuildError::UnknownLane("gateway".to_string())));
    }

    #[test]
    fn caption_box_draw_is_idempotent() {
        let mut once = Canvas::new(10.0, 10.0);
        draw_caption_box(&mut once, 0.5, 0.5, "Check cache", 12.0, 50);
        let mut twice = Canvas::new(10.0, 10.0);
        draw_caption_box(&mut twice, 0.5, 0.5, "Check cache", 12.0, 50);
        draw_caption_box(&mut twice, 0.5, 0.5, "Check cache", 12.0, 50);

        let single = caption_box_lines(&once.to_svg());
        let double = caption_box_lines(&twice.to_svg());
        assert_eq!(single.len(), 1);
        assert_eq!(double, vec![single[0].clone(), single[0].clone()]);
    }

    #[test]
    fn lane_registration_after_drawing_fails() {
        let mut builder = DiagramBuilder::new(Config::default());
        builder.lane("client", "Client", 0.2).unwrap();
        builder.draw_lanes();
        assert_eq!(
            builder.lane("late", "Late", 0.9),
            Err(BuildError::LateLaneRegistration("late".to_string()))
        );
    }

    #[test]
    fn builder_draws_guides_titles_and_steps() {
        let mut builder = DiagramBuilder::new(Config::default());
        builder.lane("client", "Client", 0.2).unwrap();
        builder.lane("server", "Server", 0.8).unwrap();
        builder
            .step(&Step::arrow("client", "server", "GET /resource"))
            .unwrap();
        let svg = builder.finish().to_svg();
        assert!(svg.contains(r#"class="lane""#));
        assert!(svg.contains("Client"));
        assert!(svg.contains("Server"));
        assert!(svg.contains("GET /resource"));
        assert!(svg.contains(r#"marker-end="url(#arrow-head)""#));
    }
}
