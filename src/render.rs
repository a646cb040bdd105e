//! Offline chord rendering: the full pitch → PCM pipeline in fixed order.

use std::path::Path;

use tracing::{debug, info};

use crate::config::SynthConfig;
use crate::dsp::{filter::LowPassFilter, mix, oscillator, quantize, Spectrum};
use crate::error::{Result, SynthError};
use crate::io::wav;
use crate::sequencing::{NoteLength, Pitch, PitchTable};
use crate::signal::{PcmBuffer, Signal};

/*
Pipeline
========

    pitches ──→ PitchTable.resolve ──→ sawtooth (one per voice)
                                            │
                                            ▼
                                          mix      (left to right)
                                            │
                                            ▼
                                      [ low-pass ]  (optional)
                                            │
                                            ▼
                                        normalize ──→ quantize ──→ PCM

Filtering happens after the mix, on the summed signal, so one filter
instance serves the whole chord. Normalizing after the filter puts the
filtered peak at full scale.
*/

/// What to render: a chord held for one note length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub pitches: Vec<Pitch>,
    pub length: NoteLength,
    /// Low-pass cutoff in Hz, `None` to skip filtering
    pub cutoff_hz: Option<f64>,
}

impl RenderRequest {
    pub fn new(pitches: Vec<Pitch>, length: NoteLength) -> Self {
        Self {
            pitches,
            length,
            cutoff_hz: None,
        }
    }

    pub fn cutoff(mut self, cutoff_hz: f64) -> Self {
        self.cutoff_hz = Some(cutoff_hz);
        self
    }
}

/// Renders chords to PCM with a fixed configuration.
///
/// ```
/// use saavy_synth::{ChordRenderer, NoteLength, Pitch, RenderRequest, SynthConfig};
///
/// let renderer = ChordRenderer::new(SynthConfig::default())?;
/// let chord: Vec<Pitch> = ["C4", "E4", "G4"].iter().map(|p| p.parse()).collect::<Result<_, _>>()?;
/// let pcm = renderer.render(&RenderRequest::new(chord, NoteLength::Seconds(0.1)).cutoff(2000.0))?;
/// assert_eq!(pcm.len(), 4410);
/// # Ok::<(), saavy_synth::SynthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChordRenderer {
    config: SynthConfig,
    table: PitchTable,
}

impl ChordRenderer {
    pub fn new(config: SynthConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            table: PitchTable::new(&config),
        })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// One unmixed sawtooth per pitch, in request order.
    pub fn voices(&self, request: &RenderRequest) -> Result<Vec<Signal>> {
        if request.pitches.is_empty() {
            return Err(SynthError::EmptyMix);
        }
        let duration = request.length.seconds()?;

        request
            .pitches
            .iter()
            .map(|pitch| {
                let frequency = self.table.resolve_pitch(pitch)?;
                let saw = oscillator::Sawtooth::new(frequency, self.config.sample_rate)?;
                debug!(
                    %pitch,
                    frequency,
                    effective = saw.effective_frequency(),
                    period = saw.period(),
                    duration,
                    "synthesizing voice"
                );
                saw.render(duration)
            })
            .collect()
    }

    /// Mixed, optionally filtered and normalized float signal.
    pub fn render_signal(&self, request: &RenderRequest) -> Result<Signal> {
        let voices = self.voices(request)?;
        let mut signal = mix::mix(&voices)?;
        debug!(
            voices = voices.len(),
            samples = signal.len(),
            peak = mix::peak(&signal),
            "mixed voices"
        );

        if let Some(cutoff_hz) = request.cutoff_hz {
            let mut filter = LowPassFilter::from_config(cutoff_hz, &self.config)?;
            let filtered = filter.apply(&signal);
            if tracing::enabled!(tracing::Level::DEBUG) {
                let before = Spectrum::new(&signal, self.config.sample_rate).energy_above(cutoff_hz);
                let after = Spectrum::new(&filtered, self.config.sample_rate).energy_above(cutoff_hz);
                debug!(
                    cutoff_hz,
                    order = filter.spec().order,
                    attenuation_db = 10.0 * (before / after).log10(),
                    "applied low-pass"
                );
            }
            signal = filtered;
        }

        mix::normalize(&signal)
    }

    /// Full pipeline down to 16-bit PCM.
    pub fn render(&self, request: &RenderRequest) -> Result<PcmBuffer> {
        let signal = self.render_signal(request)?;
        let pcm = quantize::quantize(&signal);
        info!(
            voices = request.pitches.len(),
            samples = pcm.len(),
            sample_rate = self.config.sample_rate,
            "rendered chord"
        );
        Ok(pcm)
    }

    /// Render and write a mono WAV file.
    pub fn render_to_file(
        &self,
        request: &RenderRequest,
        path: impl AsRef<Path>,
    ) -> Result<PcmBuffer> {
        let pcm = self.render(request)?;
        wav::write_wav(&path, &pcm, self.config.sample_rate)?;
        info!(path = %path.as_ref().display(), "wrote wav");
        Ok(pcm)
    }
}
