use serde::Serialize;

use super::PitchMethod;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitchParams {
    pub shift_semitones: i32,
    pub method: PitchMethod,
    pub hop_length: u32,
    pub autotune: bool,
    pub min_pitch_hz: f32,
    pub max_pitch_hz: f32,
}

impl Default for PitchParams {
    fn default() -> Self {
        Self {
            shift_semitones: 0,
            method: PitchMethod::Rmvpe,
            hop_length: 128,
            autotune: false,
            min_pitch_hz: 50.0,
            max_pitch_hz: 1100.0,
        }
    }
}

impl PitchParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.hop_length == 0 {
            return Err("hop_length must be positive".to_string());
        }
        if !(self.min_pitch_hz > 0.0 && self.min_pitch_hz < self.max_pitch_hz) {
            return Err(format!(
                "pitch bounds must satisfy 0 < min < max, got {}..{}",
                self.min_pitch_hz, self.max_pitch_hz
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MixParams {
    pub index_rate: f32,
    pub filter_radius: u32,
    pub rms_mix_rate: f32,
    pub protect: f32,
}

impl Default for MixParams {
    fn default() -> Self {
        Self {
            index_rate: 0.75,
            filter_radius: 3,
            rms_mix_rate: 0.25,
            protect: 0.33,
        }
    }
}

impl MixParams {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("index_rate", self.index_rate),
            ("rms_mix_rate", self.rms_mix_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within 0..=1, got {}", name, value));
            }
        }
        if !(0.0..=0.5).contains(&self.protect) {
            return Err(format!("protect must be within 0..=0.5, got {}", self.protect));
        }
        Ok(())
    }
}
