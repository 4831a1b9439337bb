use embassy_time::Duration;

use super::pitches::REST;
use super::AudioError;

/// Length of one whole note in ms.
pub const PLAY_SPEED_MS: u32 = 4000;

/// Fraction of a whole note kept silent at the end of every note.
pub const NOTE_GAP_DIVISOR: u32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoteLength {
    Full,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteLength {
    pub const ALL: [NoteLength; 5] = [
        NoteLength::Full,
        NoteLength::Half,
        NoteLength::Quarter,
        NoteLength::Eighth,
        NoteLength::Sixteenth,
    ];

    pub const fn divisor(self) -> u32 {
        match self {
            NoteLength::Full => 1,
            NoteLength::Half => 2,
            NoteLength::Quarter => 4,
            NoteLength::Eighth => 8,
            NoteLength::Sixteenth => 16,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub frequency_hz: u32,
    pub length: NoteLength,
}

impl Note {
    pub const fn new(frequency_hz: u32, length: NoteLength) -> Self {
        Note {
            frequency_hz,
            length,
        }
    }

    pub const fn rest(length: NoteLength) -> Self {
        Note {
            frequency_hz: REST,
            length,
        }
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == REST
    }
}

/// A named, non-empty note table.
#[derive(Clone, Copy, Debug)]
pub struct Song {
    name: &'static str,
    notes: &'static [Note],
}

impl Song {
    /// Panics (at compile time when used in a `const`) if `notes` is empty.
    pub const fn new(name: &'static str, notes: &'static [Note]) -> Self {
        assert!(!notes.is_empty(), "a song needs at least one note");
        Song { name, notes }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn notes(&self) -> &'static [Note] {
        self.notes
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'static, Note> {
        self.notes.iter()
    }
}

/// Milliseconds per whole note. Every note timing is derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tempo {
    whole_note_ms: u32,
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Tempo {
    pub const DEFAULT: Tempo = Tempo {
        whole_note_ms: PLAY_SPEED_MS,
    };

    /// Below one gap unit the gap would round to zero, so such tempos are refused.
    pub const fn from_whole_note_ms(whole_note_ms: u32) -> Result<Self, AudioError> {
        if whole_note_ms < NOTE_GAP_DIVISOR {
            return Err(AudioError::InvalidTempo);
        }

        Ok(Tempo { whole_note_ms })
    }

    pub const fn whole_note_ms(&self) -> u32 {
        self.whole_note_ms
    }

    /// Full time budget of a note, tone plus gap.
    pub const fn note_ms(&self, length: NoteLength) -> u32 {
        self.whole_note_ms / length.divisor()
    }

    pub const fn gap_ms(&self) -> u32 {
        self.whole_note_ms / NOTE_GAP_DIVISOR
    }

    /// Audible part of a note: its budget minus the fixed gap.
    pub const fn on_time_ms(&self, length: NoteLength) -> u32 {
        self.note_ms(length) - self.gap_ms()
    }

    pub fn note_duration(&self, length: NoteLength) -> Duration {
        Duration::from_millis(self.note_ms(length) as u64)
    }

    pub fn song_duration(&self, song: &Song) -> Duration {
        song.iter()
            .fold(Duration::from_ticks(0), |acc, note| acc + self.note_duration(note.length))
    }
}
