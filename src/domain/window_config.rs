use super::Precision;

const LOW_MEMORY_THRESHOLD_GB: u64 = 4;

/// Frame-sizing parameters handed to the inference collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferenceWindowConfig {
    pub pad: u32,
    pub query: u32,
    pub center: u32,
    pub max: u32,
}

impl InferenceWindowConfig {
    pub const LOW_MEMORY: Self = Self {
        pad: 1,
        query: 5,
        center: 30,
        max: 32,
    };

    pub const HALF_PRECISION: Self = Self {
        pad: 3,
        query: 10,
        center: 60,
        max: 65,
    };

    pub const SINGLE_PRECISION: Self = Self {
        pad: 1,
        query: 6,
        center: 38,
        max: 41,
    };

    /// Picks a preset; a known memory size of 4 GB or less wins over precision.
    pub fn for_device(precision: Precision, memory_gb: Option<u64>) -> Self {
        match (memory_gb, precision) {
            (Some(gb), _) if gb <= LOW_MEMORY_THRESHOLD_GB => Self::LOW_MEMORY,
            (_, Precision::Half) => Self::HALF_PRECISION,
            (_, Precision::Single) => Self::SINGLE_PRECISION,
        }
    }
}
