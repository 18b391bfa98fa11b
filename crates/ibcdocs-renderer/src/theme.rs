//! Theme values shared by the components.

/// Text color on dark backgrounds.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Text color on bright backgrounds.
pub const DARK_TEXT: &str = "#000000";

/// Theme settings consumed by components at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Link color injected into anchors inside highlight boxes.
    ///
    /// When `None`, links use the box text color.
    pub link_color: Option<String>,
    /// CSS custom property holding the code highlight background.
    pub code_highlight_var: String,
    /// Angle of the highlight box gradient.
    pub gradient_angle: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            link_color: None,
            code_highlight_var: "--ifm-code-background".to_owned(),
            gradient_angle: "90deg".to_owned(),
        }
    }
}

impl Theme {
    /// Text color for a background of the given brightness.
    #[must_use]
    pub fn text_color(dark_background: bool) -> &'static str {
        if dark_background {
            LIGHT_TEXT
        } else {
            DARK_TEXT
        }
    }

    /// `var(...)` reference to the code highlight background.
    #[must_use]
    pub fn code_background(&self) -> String {
        format!("var({})", self.code_highlight_var)
    }
}
