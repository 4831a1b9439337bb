use embedded_hal_async::delay::DelayNs;

use super::note::{Song, Tempo};
use super::AudioError;
use crate::drivers::audio::ToneOutput;

/// What happened during one pass over a song.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackSummary {
    pub notes_played: usize,
    /// Notes whose frequency the driver refused. Their time slot stayed silent.
    pub rejected_tones: usize,
}

pub struct TonePlayer<D: ToneOutput, T: DelayNs> {
    audio_driver: D,
    delay: T,
    tempo: Tempo,
}

impl<D: ToneOutput, T: DelayNs> TonePlayer<D, T> {
    /// The driver is expected to be initialized already.
    pub fn new(audio_driver: D, delay: T, tempo: Tempo) -> Self {
        TonePlayer {
            audio_driver,
            delay,
            tempo,
        }
    }

    pub fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub fn driver(&self) -> &D {
        &self.audio_driver
    }

    pub fn free(self) -> (D, T) {
        (self.audio_driver, self.delay)
    }

    /// Check every note against the driver's range without producing sound.
    pub fn validate_song(&self, song: &Song) -> Result<(), AudioError> {
        for note in song.iter() {
            if !self.audio_driver.can_play_frequency(note.frequency_hz) {
                return Err(AudioError::UnplayablePitch);
            }
        }

        Ok(())
    }

    /// Play every note of `song` once, in order.
    ///
    /// Each note sounds for its length minus the gap, then the output is silenced
    /// for the gap. A note the driver rejects is logged and skipped over in time,
    /// it never aborts the song.
    pub async fn play_song(&mut self, song: &Song) -> PlaybackSummary {
        let mut summary = PlaybackSummary::default();

        for note in song.iter() {
            if let Err(err) = self.audio_driver.set_frequency(note.frequency_hz) {
                warn!(
                    "{}: note {} ({} Hz) not played: {:?}",
                    song.name(),
                    summary.notes_played,
                    note.frequency_hz,
                    err
                );
                summary.rejected_tones += 1;
            }
            self.delay.delay_ms(self.tempo.on_time_ms(note.length)).await;

            self.silence();
            self.delay.delay_ms(self.tempo.gap_ms()).await;

            summary.notes_played += 1;
        }

        summary
    }

    /// Play `song` over and over with `inter_song_delay_ms` of silence between passes.
    /// Never returns.
    pub async fn run_forever(&mut self, song: &Song, inter_song_delay_ms: u32) {
        info!("playing {} in a loop", song.name());

        loop {
            let summary = self.play_song(song).await;
            debug!(
                "{} done, {} notes, {} rejected",
                song.name(),
                summary.notes_played,
                summary.rejected_tones
            );

            self.delay.delay_ms(inter_song_delay_ms).await;
        }
    }

    fn silence(&mut self) {
        // 0 Hz is always in range
        if let Err(err) = self.audio_driver.set_frequency(0) {
            error!("failed to silence output: {:?}", err);
        }
    }
}
