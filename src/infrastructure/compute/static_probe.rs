use crate::application::ports::{AcceleratorInfo, AcceleratorProbe};

/// Fixed hardware description, for tests and hosts without a driver to query.
#[derive(Debug, Clone, Default)]
pub struct StaticAcceleratorProbe {
    accelerators: Vec<AcceleratorInfo>,
    unified_memory: bool,
}

impl StaticAcceleratorProbe {
    pub fn cpu_only() -> Self {
        Self::default()
    }

    pub fn with_accelerator(mut self, name: &str, total_memory_bytes: u64) -> Self {
        self.accelerators.push(AcceleratorInfo {
            name: name.to_string(),
            total_memory_bytes,
        });
        self
    }

    pub fn with_unified_memory(mut self) -> Self {
        self.unified_memory = true;
        self
    }
}

impl AcceleratorProbe for StaticAcceleratorProbe {
    fn dedicated_accelerators(&self) -> Vec<AcceleratorInfo> {
        self.accelerators.clone()
    }

    fn unified_memory_available(&self) -> bool {
        self.unified_memory
    }
}
