use anyhow::{bail, Context, Result};
use candle_core::{DType, Device, Tensor};
use std::io::Write;

use super::report::{AcceleratorStatus, ProbeReport};
use super::{sample, AcceleratorProbe};
use crate::config::{self, accelerator};
use crate::log_debug;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Fail when the accelerator is missing instead of only reporting it
    pub require_accelerator: bool,
    /// Append the report as JSON after the text lines
    pub json: bool,
}

/// Run the diagnostic: random CPU tensor, then the accelerator check
pub fn run<W: Write>(
    out: &mut W,
    probe: &dyn AcceleratorProbe,
    options: &RunOptions,
) -> Result<ProbeReport> {
    let x = sample::random_sample(&Device::Cpu)?;
    writeln!(out, "{}", x)?;
    let sample = sample::summarize(&x)?;
    log_debug!("sample {:?} in [{}, {}]", sample.shape, sample.min, sample.max);

    let backend = probe.backend_name().to_string();
    let accelerator = if probe.is_available() {
        let device = probe.device()?;
        let label = probe.device_label(&device);

        let x = Tensor::ones(1, DType::F32, &device)
            .with_context(|| format!("failed to allocate tensor on {}", label))?;
        writeln!(out, "{}", x)?;

        let value = x
            .to_device(&Device::Cpu)?
            .to_vec1::<f32>()?
            .first()
            .copied()
            .with_context(|| format!("empty tensor read back from {}", label))?;
        log_debug!("{} returned {}", label, value);

        AcceleratorStatus::Available { backend, device: label, value }
    } else {
        writeln!(out, "{}", accelerator::NOT_FOUND_MESSAGE)?;
        log_debug!("{} backend not available", backend);

        AcceleratorStatus::Unavailable {
            backend,
            message: accelerator::NOT_FOUND_MESSAGE.to_string(),
        }
    };

    let report = ProbeReport {
        sample,
        accelerator,
        compiled_backends: config::compiled_backends()
            .into_iter()
            .map(String::from)
            .collect(),
    };

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    }

    if options.require_accelerator && !report.accelerator.is_available() {
        bail!("{} backend is required but not available", probe.backend_name());
    }

    Ok(report)
}
