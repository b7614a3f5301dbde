use anyhow::{Context, Result};
use candle_core::Device;
use once_cell::unsync::OnceCell;

use super::AcceleratorProbe;
use crate::config::accelerator;
use crate::log_debug;

/// Probe for Apple's Metal GPU backend (MPS)
pub struct MetalProbe {
    ordinal: usize,
    // Device opened by the availability check, reused for allocation
    opened: OnceCell<Device>,
}

impl MetalProbe {
    pub fn new(ordinal: usize) -> Self {
        Self {
            ordinal,
            opened: OnceCell::new(),
        }
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    fn open(&self) -> Result<&Device> {
        self.opened.get_or_try_init(|| {
            Device::new_metal(self.ordinal)
                .with_context(|| format!("failed to open metal device {}", self.ordinal))
        })
    }
}

impl Default for MetalProbe {
    fn default() -> Self {
        Self::new(accelerator::DEFAULT_ORDINAL)
    }
}

impl AcceleratorProbe for MetalProbe {
    fn is_available(&self) -> bool {
        // Compiled without the `metal` feature: nothing to open
        if !candle_core::utils::metal_is_available() {
            log_debug!("metal support not compiled in");
            return false;
        }

        match self.open() {
            Ok(_) => true,
            Err(e) => {
                log_debug!("metal:{} not usable: {:#}", self.ordinal, e);
                false
            }
        }
    }

    fn device(&self) -> Result<Device> {
        self.open().cloned()
    }

    fn backend_name(&self) -> &str {
        "metal"
    }

    // gpu_id of a Metal location is the registry id, so name it by ordinal
    fn device_label(&self, _device: &Device) -> String {
        format!("metal:{}", self.ordinal)
    }
}
