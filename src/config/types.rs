use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Settings for the GitHub events request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// API root, without trailing slash (default: https://api.github.com)
    pub base_url: String,
    /// User-Agent header; the GitHub API rejects requests without one
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            user_agent: "GitHub-Activity-CLI/1.0".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Settings for terminal output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of activities shown when neither --limit nor --all is given
    pub default_limit: usize,
    /// Print statistics after the feed even without --stats
    pub show_stats: bool,
    /// Print commit / issue / pull request detail lines
    pub show_details: bool,
    /// Colorize timestamps and detail lines
    pub color: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_color: Option<AnsiColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_color: Option<AnsiColor>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            show_stats: false,
            show_details: true,
            color: false,
            timestamp_color: Some(AnsiColor::Color16 { c16: 8 }), // Bright black (gray)
            detail_color: Some(AnsiColor::Color16 { c16: 6 }),    // Cyan
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnsiColor {
    Color16 { c16: u8 },
    Color256 { c256: u8 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl AnsiColor {
    /// Wrap `text` in the escape sequence for this color
    pub fn paint(&self, text: &str) -> String {
        match self {
            AnsiColor::Color16 { c16 } => {
                let code = if *c16 < 8 {
                    30 + u32::from(*c16)
                } else {
                    90 + u32::from(c16 - 8)
                };
                format!("\x1b[{}m{}\x1b[0m", code, text)
            }
            AnsiColor::Color256 { c256 } => format!("\x1b[38;5;{}m{}\x1b[0m", c256, text),
            AnsiColor::Rgb { r, g, b } => {
                format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
            }
        }
    }
}

/// Apply an optional color to text
pub fn apply_color(text: &str, color: Option<&AnsiColor>) -> String {
    match color {
        Some(color) => color.paint(text),
        None => text.to_string(),
    }
}
