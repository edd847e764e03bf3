use std::fmt;
use std::str::FromStr;

/// Device named by the caller, e.g. `cuda:0` or `cpu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceRequest {
    Accelerator(usize),
    Cpu,
}

impl Default for DeviceRequest {
    fn default() -> Self {
        Self::Accelerator(0)
    }
}

impl FromStr for DeviceRequest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "cpu" => return Ok(Self::Cpu),
            "cuda" | "gpu" => return Ok(Self::Accelerator(0)),
            _ => {}
        }

        let index = normalized
            .strip_prefix("cuda:")
            .or_else(|| normalized.strip_prefix("gpu:"))
            .ok_or_else(|| format!("Invalid device: {}. Expected: cpu or cuda:<index>", s))?;

        index
            .parse::<usize>()
            .map(Self::Accelerator)
            .map_err(|_| format!("Invalid device index in {}", s))
    }
}

impl fmt::Display for DeviceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accelerator(index) => write!(f, "cuda:{}", index),
            Self::Cpu => f.write_str("cpu"),
        }
    }
}
