//! Measurements supplied by an external design-analysis step.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoMeasurement {
    pub width: f64,
    pub clear_space: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Page margins, one per side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Sides in evaluation order: top, right, bottom, left.
    #[must_use]
    pub fn sides(&self) -> [(Side, f64); 4] {
        [
            (Side::Top, self.top),
            (Side::Right, self.right),
            (Side::Bottom, self.bottom),
            (Side::Left, self.left),
        ]
    }

    #[must_use]
    pub fn average(&self) -> f64 {
        (self.top + self.right + self.bottom + self.left) / 4.0
    }
}

impl std::str::FromStr for Margins {
    type Err = String;

    /// Parses `T,R,B,L` or a single value applied to all sides.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Vec<f64> = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| format!("bad margin {part:?}: {e}"))
            })
            .collect::<Result<_, _>>()?;
        match values.as_slice() {
            [v] => Ok(Self::uniform(*v)),
            [top, right, bottom, left] => Ok(Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(format!(
                "expected 1 or 4 comma-separated margins, got {}",
                values.len()
            )),
        }
    }
}
