use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

const CHUNK_SIZE: usize = 1024;

/// Band-limited mono resampling; the output is delay-compensated and holds
/// exactly `len * to_rate / from_rate` samples.
pub fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, String> {
    if from_rate == 0 || to_rate == 0 {
        return Err(format!("invalid sample rates {} -> {}", from_rate, to_rate));
    }
    if from_rate == to_rate || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let ratio = to_rate as f64 / from_rate as f64;
    let expected_len = (samples.len() as u64 * to_rate as u64 / from_rate as u64) as usize;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, CHUNK_SIZE, 1)
        .map_err(|e| format!("resampler init: {}", e))?;
    let delay = resampler.output_delay();

    let mut output = Vec::with_capacity(expected_len + delay + CHUNK_SIZE);
    let mut position = 0;

    while output.len() < expected_len + delay {
        let mut input = if position < samples.len() {
            let end = (position + CHUNK_SIZE).min(samples.len());
            samples[position..end].to_vec()
        } else {
            Vec::new()
        };
        input.resize(CHUNK_SIZE, 0.0);
        position += CHUNK_SIZE;

        let result = resampler
            .process(&[input], None)
            .map_err(|e| format!("resample: {}", e))?;

        if let Some(channel) = result.first() {
            output.extend_from_slice(channel);
        }
    }

    output.drain(..delay);
    output.truncate(expected_len);

    Ok(output)
}
