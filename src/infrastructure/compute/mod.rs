mod nvidia_smi_probe;
mod static_probe;

pub use nvidia_smi_probe::{NvidiaSmiProbe, parse_gpu_listing};
pub use static_probe::StaticAcceleratorProbe;
