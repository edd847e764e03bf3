use super::DeviceKind;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Accelerator families whose half-precision throughput is unusable.
const LOW_PRECISION_FAMILIES: [&str; 3] = ["1060", "1070", "1080"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    pub kind: DeviceKind,
    pub name: Option<String>,
    pub memory_gb: Option<u64>,
    pub forced_single_precision: bool,
}

impl DeviceProfile {
    pub fn cpu() -> Self {
        Self {
            kind: DeviceKind::Cpu,
            name: None,
            memory_gb: None,
            forced_single_precision: false,
        }
    }

    pub fn unified_memory() -> Self {
        Self {
            kind: DeviceKind::AppleAcceleratedGpu,
            name: None,
            memory_gb: None,
            forced_single_precision: false,
        }
    }

    pub fn accelerator(name: String, total_memory_bytes: u64) -> Self {
        let forced_single_precision = is_low_precision_unfriendly(&name);
        Self {
            kind: DeviceKind::GenericGpu,
            memory_gb: Some(memory_gb_from_bytes(total_memory_bytes)),
            name: Some(name),
            forced_single_precision,
        }
    }
}

/// Rounds total device memory to whole GiB, biased upwards by 0.4 GiB.
pub fn memory_gb_from_bytes(bytes: u64) -> u64 {
    (bytes as f64 / BYTES_PER_GIB + 0.4).floor() as u64
}

pub fn is_low_precision_unfriendly(name: &str) -> bool {
    let upper = name.to_uppercase();
    (name.contains("16") && !upper.contains("V100"))
        || upper.contains("P40")
        || LOW_PRECISION_FAMILIES
            .iter()
            .any(|family| name.contains(family))
}
