use anyhow::{Context, Result};
use candle_core::{Device, Tensor};

use super::device_label;
use super::report::SampleSummary;
use crate::config::sample;

/// Uniform random `ROWS x COLS` tensor in `[LOW, HIGH)`
pub fn random_sample(device: &Device) -> Result<Tensor> {
    Tensor::rand(sample::LOW, sample::HIGH, (sample::ROWS, sample::COLS), device)
        .with_context(|| format!("failed to create random tensor on {}", device_label(device)))
}

pub fn summarize(tensor: &Tensor) -> Result<SampleSummary> {
    let values = tensor
        .flatten_all()?
        .to_device(&Device::Cpu)?
        .to_vec1::<f32>()?;

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    Ok(SampleSummary {
        shape: tensor.dims().to_vec(),
        device: device_label(tensor.device()),
        min,
        max,
    })
}
