//! Road classification.
//!
//! Carried for display only; no routing cost ever reads it.

use std::convert::Infallible;
use std::str::FromStr;

/// The class of a road segment.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadType {
    #[default]
    Arterial,
    Highway,
    Local,
    Expressway,
    /// Any class not known to the engine, kept verbatim.
    Other(String),
}

impl RoadType {
    pub fn as_str(&self) -> &str {
        match self {
            RoadType::Arterial   => "arterial",
            RoadType::Highway    => "highway",
            RoadType::Local      => "local",
            RoadType::Expressway => "expressway",
            RoadType::Other(s)   => s,
        }
    }
}

impl FromStr for RoadType {
    type Err = Infallible;

    /// Case-insensitive; unknown names become [`RoadType::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.to_ascii_lowercase().as_str() {
            "arterial"   => RoadType::Arterial,
            "highway"    => RoadType::Highway,
            "local"      => RoadType::Local,
            "expressway" => RoadType::Expressway,
            _            => RoadType::Other(s.to_owned()),
        })
    }
}

impl std::fmt::Display for RoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
