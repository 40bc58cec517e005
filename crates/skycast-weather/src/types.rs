use serde::{Deserialize, Serialize};

/// Measurement units forwarded to the weather upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kelvin, the upstream default
    Standard,
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Parse a configured unit name; `None` for unknown names so the
    /// caller can fall back to the default.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::Standard),
            "metric" => Some(Self::Metric),
            "imperial" => Some(Self::Imperial),
            _ => None,
        }
    }

    /// Value for the upstream's `units` query parameter
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}
