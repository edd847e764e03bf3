use std::fmt;
use std::str::FromStr;

use candle_core::DType;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Half,
    Single,
}

impl Precision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Half => "half",
            Precision::Single => "single",
        }
    }

    /// Tensor element type the inference collaborator should run with.
    pub fn dtype(&self) -> DType {
        match self {
            Precision::Half => DType::F16,
            Precision::Single => DType::F32,
        }
    }

    pub fn is_half(&self) -> bool {
        matches!(self, Precision::Half)
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "half" | "fp16" | "f16" => Ok(Precision::Half),
            "single" | "fp32" | "f32" => Ok(Precision::Single),
            other => Err(format!(
                "Invalid precision: {}. Expected: half or single",
                other
            )),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
