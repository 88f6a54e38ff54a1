//! Data model for swimlane interaction diagrams

/// A vertical lane representing one actor/system.
///
/// Lanes are positioned on a normalized `[0,1]` horizontal axis and are
/// expected to be listed left-to-right by ascending `x`. The order is
/// purely visual; arrows may point either direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    /// Stable identity used by steps to reference this lane
    pub id: String,
    /// Display name drawn above the guide-line
    pub name: String,
    /// Horizontal position in normalized canvas space
    pub x: f64,
}

impl Lane {
    pub fn new(id: impl Into<String>, name: impl Into<String>, x: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
        }
    }
}

/// One entry in the ordered interaction sequence.
///
/// Order is the only thing that determines vertical position: step N always
/// renders strictly above step N+1.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Directed interaction between two lanes
    Arrow {
        from: String,
        to: String,
        caption: String,
    },
    /// Event local to a single lane, rendered as a caption box only
    Annotation { lane: String, caption: String },
}

impl Step {
    pub fn arrow(
        from: impl Into<String>,
        to: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Step::Arrow {
            from: from.into(),
            to: to.into(),
            caption: caption.into(),
        }
    }

    pub fn annotation(lane: impl Into<String>, caption: impl Into<String>) -> Self {
        Step::Annotation {
            lane: lane.into(),
            caption: caption.into(),
        }
    }

    /// The caption text carried by either variant
    pub fn caption(&self) -> &str {
        match self {
            Step::Arrow { caption, .. } | Step::Annotation { caption, .. } => caption,
        }
    }
}
