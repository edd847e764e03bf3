/// Name and memory of one dedicated accelerator as reported by its driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceleratorInfo {
    pub name: String,
    pub total_memory_bytes: u64,
}

/// Read-only view of the compute hardware. Implementations never fail: an
/// absent or unreadable backend is reported as "not available".
pub trait AcceleratorProbe: Send + Sync {
    fn dedicated_accelerators(&self) -> Vec<AcceleratorInfo>;

    fn unified_memory_available(&self) -> bool;
}
