//! Theme definitions for swimlane diagrams

/// Line style for lane guide-lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuideLineStyle {
    /// Dashed line (default)
    #[default]
    Dashed,
    /// Solid line
    Solid,
}

/// Theme colors and styles
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Background color
    pub background: String,
    /// Lane guide-line color
    pub lane_color: String,
    /// Lane guide-line style
    pub lane_style: GuideLineStyle,
    /// Lane title text color
    pub lane_title_color: String,
    /// Arrow line and arrowhead color
    pub arrow_color: String,
    /// Caption box fill color
    pub box_fill: String,
    /// Caption box keyline color
    pub box_stroke: String,
    /// Caption text color
    pub caption_color: String,
    /// Font family
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Default theme: black-on-white with white caption boxes, matching the
    /// classic printed swimlane look.
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            background: "#fff".to_string(),
            lane_color: "#000".to_string(),
            lane_style: GuideLineStyle::Dashed,
            lane_title_color: "#000".to_string(),
            arrow_color: "#000".to_string(),
            box_fill: "#fff".to_string(),
            box_stroke: "#000".to_string(),
            caption_color: "#000".to_string(),
            font_family: "sans-serif".to_string(),
        }
    }

    /// Gray professional theme
    pub fn gray() -> Self {
        Self {
            name: "gray".to_string(),
            background: "#fafafa".to_string(),
            lane_color: "#757575".to_string(),
            lane_style: GuideLineStyle::Solid,
            lane_title_color: "#212121".to_string(),
            arrow_color: "#424242".to_string(),
            box_fill: "#eeeeee".to_string(),
            box_stroke: "#757575".to_string(),
            caption_color: "#212121".to_string(),
            font_family: "sans-serif".to_string(),
        }
    }

    /// Modern blue theme
    pub fn modern_blue() -> Self {
        Self {
            name: "modern-blue".to_string(),
            background: "#fff".to_string(),
            lane_color: "#4a90d9".to_string(),
            lane_style: GuideLineStyle::Dashed,
            lane_title_color: "#2a5a8a".to_string(),
            arrow_color: "#333".to_string(),
            box_fill: "#e8f4fd".to_string(),
            box_stroke: "#4a90d9".to_string(),
            caption_color: "#000".to_string(),
            font_family: "sans-serif".to_string(),
        }
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "gray" | "grey" => Some(Self::gray()),
            "modern-blue" | "modernblue" | "blue" => Some(Self::modern_blue()),
            _ => None,
        }
    }

    /// List all available theme names
    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gray", "modern-blue"]
    }
}
