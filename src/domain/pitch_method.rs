use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PitchMethod {
    Pm,
    Harvest,
    Crepe,
    CrepeTiny,
    MangioCrepe,
    MangioCrepeTiny,
    Rmvpe,
    Fcpe,
}

impl PitchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PitchMethod::Pm => "pm",
            PitchMethod::Harvest => "harvest",
            PitchMethod::Crepe => "crepe",
            PitchMethod::CrepeTiny => "crepe-tiny",
            PitchMethod::MangioCrepe => "mangio-crepe",
            PitchMethod::MangioCrepeTiny => "mangio-crepe-tiny",
            PitchMethod::Rmvpe => "rmvpe",
            PitchMethod::Fcpe => "fcpe",
        }
    }

    /// Crepe variants are the only estimators that honour a hop length.
    pub fn uses_hop_length(&self) -> bool {
        matches!(
            self,
            PitchMethod::Crepe
                | PitchMethod::CrepeTiny
                | PitchMethod::MangioCrepe
                | PitchMethod::MangioCrepeTiny
        )
    }
}

impl FromStr for PitchMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pm" => Ok(PitchMethod::Pm),
            "harvest" => Ok(PitchMethod::Harvest),
            "crepe" => Ok(PitchMethod::Crepe),
            "crepe-tiny" => Ok(PitchMethod::CrepeTiny),
            "mangio-crepe" => Ok(PitchMethod::MangioCrepe),
            "mangio-crepe-tiny" => Ok(PitchMethod::MangioCrepeTiny),
            "rmvpe" => Ok(PitchMethod::Rmvpe),
            "fcpe" => Ok(PitchMethod::Fcpe),
            other => Err(format!("Invalid pitch method: {}", other)),
        }
    }
}

impl fmt::Display for PitchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
