// Accelerator probing for the candle numeric stack
// Checks that tensors can be built on the CPU and, when present, on the Metal GPU

pub mod metal;
pub mod report;
pub mod runner;
pub mod sample;

pub use metal::MetalProbe;
pub use report::{AcceleratorStatus, ProbeReport, SampleSummary};
pub use runner::{run, RunOptions};

use anyhow::Result;
use candle_core::{Device, DeviceLocation};

/// Trait for accelerator backends that can be probed
pub trait AcceleratorProbe {
    /// Capability flag: can this backend host tensors right now
    fn is_available(&self) -> bool;

    /// Device handle for the backend
    fn device(&self) -> Result<Device>;

    /// Get backend name for diagnostics
    fn backend_name(&self) -> &str;

    /// Label reported for tensors on this backend's device
    fn device_label(&self, device: &Device) -> String {
        device_label(device)
    }
}

/// Short device identifier, e.g. `cpu` or `cuda:0`
///
/// Metal devices report their IOKit registry id as `gpu_id`, not the ordinal,
/// so probes that know their ordinal should label the device themselves.
pub fn device_label(device: &Device) -> String {
    match device.location() {
        DeviceLocation::Cpu => "cpu".to_string(),
        DeviceLocation::Cuda { gpu_id } => format!("cuda:{}", gpu_id),
        DeviceLocation::Metal { gpu_id } => format!("metal:{}", gpu_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_label() {
        assert_eq!(device_label(&Device::Cpu), "cpu");
    }
}
