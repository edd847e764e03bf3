use std::sync::Arc;

use crate::application::AppContext;
use crate::application::ports::AcceleratorProbe;
use crate::domain::{DeviceProfile, DeviceRequest, InferenceWindowConfig, Precision};

pub struct ConfigDeriver {
    probe: Arc<dyn AcceleratorProbe>,
}

impl ConfigDeriver {
    pub fn new(probe: Arc<dyn AcceleratorProbe>) -> Self {
        Self { probe }
    }

    /// Classifies the compute device and picks the window preset for it.
    ///
    /// Missing hardware is a normal branch and falls back to unified memory or
    /// CPU. Only an accelerator index beyond the detected devices is an error.
    pub fn derive(
        &self,
        requested_device: DeviceRequest,
        requested_precision: Precision,
        cpu_threads: Option<usize>,
    ) -> Result<AppContext, InvalidDeviceError> {
        let (device, precision) = self.classify(requested_device, requested_precision)?;
        let window = InferenceWindowConfig::for_device(precision, device.memory_gb);
        let cpu_threads = cpu_threads
            .filter(|threads| *threads > 0)
            .unwrap_or_else(logical_cores);

        tracing::info!(
            device = %device.kind,
            name = ?device.name,
            memory_gb = ?device.memory_gb,
            precision = %precision,
            forced_single_precision = device.forced_single_precision,
            cpu_threads,
            x_pad = window.pad,
            x_query = window.query,
            x_center = window.center,
            x_max = window.max,
            "Derived inference configuration"
        );

        Ok(AppContext {
            device,
            precision,
            window,
            cpu_threads,
        })
    }

    fn classify(
        &self,
        requested_device: DeviceRequest,
        requested_precision: Precision,
    ) -> Result<(DeviceProfile, Precision), InvalidDeviceError> {
        let DeviceRequest::Accelerator(index) = requested_device else {
            return Ok((DeviceProfile::cpu(), Precision::Single));
        };

        let accelerators = self.probe.dedicated_accelerators();
        if !accelerators.is_empty() {
            let info = accelerators.get(index).ok_or(InvalidDeviceError {
                index,
                available: accelerators.len(),
            })?;
            let device = DeviceProfile::accelerator(info.name.clone(), info.total_memory_bytes);

            if device.forced_single_precision {
                tracing::warn!(
                    name = %info.name,
                    "Accelerator family performs poorly at half precision, forcing single precision"
                );
                return Ok((device, Precision::Single));
            }
            return Ok((device, requested_precision));
        }

        if self.probe.unified_memory_available() {
            tracing::info!("No dedicated accelerator found, using unified-memory backend");
            return Ok((DeviceProfile::unified_memory(), requested_precision));
        }

        tracing::info!("No supported accelerator found, using CPU");
        Ok((DeviceProfile::cpu(), Precision::Single))
    }
}

fn logical_cores() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[derive(Debug, thiserror::Error)]
#[error("invalid device index {index}: {available} accelerator(s) detected")]
pub struct InvalidDeviceError {
    pub index: usize,
    pub available: usize,
}
