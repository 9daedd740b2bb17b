use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Minimal,
    Compact,
    #[default]
    Standard,
    Verbose,
}

impl From<crate::types::DisplayMode> for ViewMode {
    fn from(mode: crate::types::DisplayMode) -> Self {
        match mode {
            crate::types::DisplayMode::Minimal => Self::Minimal,
            crate::types::DisplayMode::Compact => Self::Compact,
            crate::types::DisplayMode::Standard => Self::Standard,
            crate::types::DisplayMode::Verbose => Self::Verbose,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<crate::types::OutputFormat> for OutputFormat {
    fn from(format: crate::types::OutputFormat) -> Self {
        match format {
            crate::types::OutputFormat::Plain => Self::Text,
            crate::types::OutputFormat::Json => Self::Json,
        }
    }
}
