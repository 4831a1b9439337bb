pub mod note;
pub mod pitches;
pub mod songs;
pub mod tone_player;

pub use note::{Note, NoteLength, Song, Tempo};
pub use songs::SongId;
pub use tone_player::{PlaybackSummary, TonePlayer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioError {
    /// The requested frequency maps to a PWM period the timer cannot hold.
    InvalidArgument,
    /// A song contains a note the output driver would reject.
    UnplayablePitch,
    /// Whole note shorter than the inter-note gap granularity.
    InvalidTempo,
}
