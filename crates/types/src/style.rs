use serde::{Deserialize, Serialize};

/// Stroke pattern for a drawn divergence line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Continuous line.
    #[default]
    Solid,
    /// Dotted line.
    Dots,
    /// Dashed line.
    Lines,
    /// Alternating dashes and dots.
    LinesDots,
    /// Sparse dots.
    DotsRare,
    /// Very sparse dots.
    DotsVeryRare,
}

impl LineStyle {
    /// Returns snake-case string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dots => "dots",
            LineStyle::Lines => "lines",
            LineStyle::LinesDots => "lines_dots",
            LineStyle::DotsRare => "dots_rare",
            LineStyle::DotsVeryRare => "dots_very_rare",
        }
    }
}

impl std::fmt::Display for LineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLineStyleError;

impl std::fmt::Display for ParseLineStyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid line style")
    }
}

impl std::error::Error for ParseLineStyleError {}

impl std::str::FromStr for LineStyle {
    type Err = ParseLineStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "solid" => Ok(LineStyle::Solid),
            "dots" => Ok(LineStyle::Dots),
            "lines" => Ok(LineStyle::Lines),
            "lines_dots" | "linesdots" => Ok(LineStyle::LinesDots),
            "dots_rare" | "dotsrare" => Ok(LineStyle::DotsRare),
            "dots_very_rare" | "dotsveryrare" => Ok(LineStyle::DotsVeryRare),
            _ => Err(ParseLineStyleError),
        }
    }
}

/// Rendering attributes for one divergence type.
///
/// `color` is handed to the renderer untouched (`"#RRGGBB"` or a color name);
/// nothing in the detection path reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergenceStyle {
    /// Color as understood by the renderer.
    pub color: String,
    /// Line thickness in pixels.
    #[serde(default = "default_thickness")]
    pub thickness: u32,
    /// Stroke pattern.
    #[serde(default)]
    pub style: LineStyle,
}

fn default_thickness() -> u32 {
    1
}

impl DivergenceStyle {
    /// Creates a solid style of thickness 1.
    #[must_use]
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            thickness: default_thickness(),
            style: LineStyle::Solid,
        }
    }

    /// Default style for up divergences.
    #[must_use]
    pub fn default_up() -> Self {
        Self::solid("Lime")
    }

    /// Default style for down divergences.
    #[must_use]
    pub fn default_down() -> Self {
        Self::solid("Red")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_style_as_str() {
        assert_eq!(LineStyle::Solid.as_str(), "solid");
        assert_eq!(LineStyle::DotsVeryRare.to_string(), "dots_very_rare");
    }

    #[test]
    fn test_line_style_from_str() {
        assert_eq!("solid".parse::<LineStyle>(), Ok(LineStyle::Solid));
        assert_eq!("LinesDots".parse::<LineStyle>(), Ok(LineStyle::LinesDots));
        assert_eq!("dots-rare".parse::<LineStyle>(), Ok(LineStyle::DotsRare));
        assert!("wavy".parse::<LineStyle>().is_err());
    }

    #[test]
    fn test_style_defaults() {
        let up = DivergenceStyle::default_up();
        assert_eq!(up.color, "Lime");
        assert_eq!(up.thickness, 1);
        assert_eq!(up.style, LineStyle::Solid);
        assert_eq!(DivergenceStyle::default_down().color, "Red");
    }

    #[test]
    fn test_style_deserialize_fills_defaults() {
        let style: DivergenceStyle = serde_json::from_str(r##"{"color":"#FF00FF"}"##).unwrap();
        assert_eq!(style.color, "#FF00FF");
        assert_eq!(style.thickness, 1);
        assert_eq!(style.style, LineStyle::Solid);
    }
}
