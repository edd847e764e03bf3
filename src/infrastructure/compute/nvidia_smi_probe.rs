use std::path::PathBuf;
use std::process::Command;

use crate::application::ports::{AcceleratorInfo, AcceleratorProbe};

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Dedicated accelerators via `nvidia-smi`; unified memory via candle's Metal check.
pub struct NvidiaSmiProbe {
    binary: PathBuf,
}

impl NvidiaSmiProbe {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for NvidiaSmiProbe {
    fn default() -> Self {
        Self::new("nvidia-smi")
    }
}

impl AcceleratorProbe for NvidiaSmiProbe {
    fn dedicated_accelerators(&self) -> Vec<AcceleratorInfo> {
        let output = match Command::new(&self.binary)
            .args([
                "--query-gpu=name,memory.total",
                "--format=csv,noheader,nounits",
            ])
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(error = %e, "nvidia-smi not available");
                return Vec::new();
            }
        };

        if !output.status.success() {
            tracing::debug!(status = %output.status, "nvidia-smi reported no usable devices");
            return Vec::new();
        }

        parse_gpu_listing(&String::from_utf8_lossy(&output.stdout))
    }

    fn unified_memory_available(&self) -> bool {
        candle_core::utils::metal_is_available()
    }
}

/// Parses `name, memory_mib` rows; rows that do not parse are skipped.
pub fn parse_gpu_listing(listing: &str) -> Vec<AcceleratorInfo> {
    listing
        .lines()
        .filter_map(|line| {
            let (name, memory) = line.trim().rsplit_once(',')?;
            let name = name.trim();
            let memory_mib = memory.trim().parse::<u64>().ok()?;
            if name.is_empty() {
                return None;
            }
            Some(AcceleratorInfo {
                name: name.to_string(),
                total_memory_bytes: memory_mib * BYTES_PER_MIB,
            })
        })
        .collect()
}
