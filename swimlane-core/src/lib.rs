//! swimlane-core: layout and vector rendering for swimlane interaction diagrams
//!
//! A diagram is a fixed set of vertical lanes plus an ordered sequence of
//! steps (cross-lane arrows and lane-local annotations). Steps stack
//! top-to-bottom in call order, each caption word-wrapped inside a rounded
//! box, and the finished canvas exports to a tightly cropped SVG or PDF.
//!
//! # Example
//!
//! ```
//! use swimlane_core::{build, Config, Lane, Step};
//!
//! let lanes = vec![
//!     Lane::new("client", "Client", 0.2),
//!     Lane::new("server", "Server", 0.8),
//! ];
//! let steps = vec![
//!     Step::arrow("client", "server", "GET /resource"),
//!     Step::annotation("server", "Check cache"),
//!     Step::arrow("server", "client", "200 OK"),
//! ];
//!
//! let canvas = build(Config::default(), &lanes, &steps).unwrap();
//! assert!(canvas.to_svg().starts_with("<svg"));
//! ```

pub mod canvas;
pub mod error;
pub mod export;
pub mod lanes;
pub mod layout;
pub mod model;
pub mod renderer;
pub mod theme;
pub mod wrap;

pub use canvas::Canvas;
pub use error::{BuildError, ExportError};
pub use export::export;
pub use lanes::LaneModel;
pub use layout::PositionAllocator;
pub use model::{Lane, Step};
pub use renderer::{build, draw_arrow, draw_caption_box, Config, DiagramBuilder};
pub use theme::{GuideLineStyle, Theme};
pub use wrap::wrap;
