//! Sound effects
//!
//! The simulation fires effects through [`AudioSink`] and never waits on them.
//! [`AudioManager`] resolves the sample files once at startup; a missing file
//! only disables that effect.

use std::cell::Cell;
#[cfg(test)]
use std::cell::RefCell;
use std::path::PathBuf;

use crate::settings::AudioSettings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// An emitter released a batch
    EmitParticle,
    /// An emitter became stable
    EmitterStable,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::EmitParticle, SoundEffect::EmitterStable];

    /// Sample path relative to the asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::EmitParticle => "sfx/laser.wav",
            SoundEffect::EmitterStable => "sfx/explosion.wav",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Fire-and-forget sound output
pub trait AudioSink {
    fn play(&self, effect: SoundEffect);
}

/// Audio manager for the game
pub struct AudioManager {
    samples: [Option<PathBuf>; SoundEffect::ALL.len()],
    plays: [Cell<u32>; SoundEffect::ALL.len()],
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &AudioSettings) -> Self {
        let samples = SoundEffect::ALL.map(|effect| {
            let path = settings.asset_dir.join(effect.file_name());
            if path.is_file() {
                Some(path)
            } else {
                log::warn!("Couldn't load '{}' - {:?} disabled", path.display(), effect);
                None
            }
        });

        Self {
            samples,
            plays: Default::default(),
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    pub fn is_loaded(&self, effect: SoundEffect) -> bool {
        self.samples[effect.index()].is_some()
    }

    /// How many times `effect` actually played
    pub fn play_count(&self, effect: SoundEffect) -> u32 {
        self.plays[effect.index()].get()
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(path) = &self.samples[effect.index()] else {
            log::debug!("Can't play {:?}: sample not loaded", effect);
            return;
        };

        let count = &self.plays[effect.index()];
        count.set(count.get() + 1);
        log::trace!("Playing '{}' at volume {:.2}", path.display(), vol);
    }
}

/// Records every effect it is asked to play
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingAudio {
    played: RefCell<Vec<SoundEffect>>,
}

#[cfg(test)]
impl RecordingAudio {
    pub fn played(&self) -> Vec<SoundEffect> {
        self.played.borrow().clone()
    }
}

#[cfg(test)]
impl AudioSink for RecordingAudio {
    fn play(&self, effect: SoundEffect) {
        self.played.borrow_mut().push(effect);
    }
}
