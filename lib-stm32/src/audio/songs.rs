use super::note::{
    Note,
    NoteLength::{Eighth, Full, Half, Quarter, Sixteenth},
    Song,
};
use super::pitches::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SongId {
    ImperialMarch,
    WsrodNocnejCiszy,
    WeAreTheChampions,
}

impl SongId {
    pub const ALL: [SongId; 3] = [
        SongId::ImperialMarch,
        SongId::WsrodNocnejCiszy,
        SongId::WeAreTheChampions,
    ];

    pub const fn song(self) -> &'static Song {
        match self {
            SongId::ImperialMarch => &IMPERIAL_MARCH,
            SongId::WsrodNocnejCiszy => &WSROD_NOCNEJ_CISZY,
            SongId::WeAreTheChampions => &WE_ARE_THE_CHAMPIONS,
        }
    }
}

pub const IMPERIAL_MARCH: Song = Song::new("Imperial March", &IMPERIAL_MARCH_NOTES);
pub const WSROD_NOCNEJ_CISZY: Song = Song::new("Wsrod nocnej ciszy", &WSROD_NOCNEJ_CISZY_NOTES);
pub const WE_ARE_THE_CHAMPIONS: Song =
    Song::new("We are the champions", &WE_ARE_THE_CHAMPIONS_NOTES);

pub const IMPERIAL_MARCH_NOTES: [Note; 66] = [
    Note::new(G4, Quarter),
    Note::new(G4, Quarter),
    Note::new(G4, Quarter),
    Note::new(DS4, Eighth),
    Note::new(AS4, Eighth),
    Note::new(G4, Quarter),
    Note::new(DS4, Eighth),
    Note::new(AS4, Eighth),
    Note::new(G4, Half),

    Note::new(D5, Quarter),
    Note::new(D5, Quarter),
    Note::new(D5, Quarter),
    Note::new(DS5, Eighth),
    Note::new(AS4, Eighth),
    Note::new(FS4, Quarter),
    Note::new(DS4, Eighth),
    Note::new(AS4, Eighth),
    Note::new(G4, Half),

    Note::new(G5, Quarter),
    Note::new(G4, Eighth),
    Note::new(G4, Eighth),
    Note::new(G5, Quarter),
    Note::new(FS5, Eighth),
    Note::new(F5, Eighth),
    Note::new(E5, Sixteenth),
    Note::new(DS5, Eighth),
    Note::new(E5, Quarter),
    Note::new(GS4, Eighth),
    Note::new(CS5, Quarter),
    Note::new(C5, Eighth),
    Note::new(B4, Sixteenth),

    Note::new(AS4, Sixteenth),
    Note::new(A4, Eighth),
    Note::new(AS4, Quarter),
    Note::new(DS4, Eighth),
    Note::new(FS4, Quarter),
    Note::new(DS4, Eighth),
    Note::new(FS4, Sixteenth),

    Note::new(AS4, Quarter),
    Note::new(G4, Eighth),
    Note::new(AS4, Eighth),
    Note::new(D5, Half),

    Note::new(G5, Quarter),
    Note::new(G4, Eighth),
    Note::new(G4, Eighth),
    Note::new(G5, Quarter),
    Note::new(FS5, Eighth),
    Note::new(F5, Eighth),
    Note::new(E5, Sixteenth),
    Note::new(DS5, Eighth),
    Note::new(E5, Quarter),
    Note::new(GS4, Eighth),
    Note::new(CS5, Quarter),
    Note::new(C5, Eighth),
    Note::new(B4, Sixteenth),

    Note::new(AS4, Sixteenth),
    Note::new(A4, Eighth),
    Note::new(AS4, Quarter),
    Note::new(DS4, Eighth),
    Note::new(FS4, Quarter),
    Note::new(DS4, Eighth),
    Note::new(AS4, Sixteenth),

    Note::new(G4, Quarter),
    Note::new(DS4, Eighth),
    Note::new(AS4, Eighth),
    Note::new(G4, Half),
];

pub const WSROD_NOCNEJ_CISZY_NOTES: [Note; 46] = [
    Note::new(G4, Half),
    Note::new(A4, Quarter),
    Note::new(FS4, Quarter),
    Note::new(G4, Half),
    Note::new(D4, Half),
    Note::new(B4, Quarter),
    Note::new(B4, Quarter),
    Note::new(C5, Quarter),
    Note::new(A4, Quarter),
    Note::new(B4, Full),

    Note::new(G4, Half),
    Note::new(A4, Quarter),
    Note::new(FS4, Quarter),
    Note::new(G4, Half),
    Note::new(D4, Half),
    Note::new(B4, Quarter),
    Note::new(B4, Quarter),
    Note::new(C5, Quarter),
    Note::new(A4, Quarter),
    Note::new(B4, Full),

    Note::new(G4, Quarter),
    Note::new(B4, Quarter),
    Note::new(G4, Quarter),
    Note::new(B4, Quarter),
    Note::new(C5, Quarter),
    Note::new(A4, Quarter),
    Note::new(FS4, Quarter),
    Note::new(D4, Quarter),

    Note::new(G4, Quarter),
    Note::new(B4, Quarter),
    Note::new(G4, Quarter),
    Note::new(B4, Quarter),
    Note::new(C5, Quarter),
    Note::new(A4, Quarter),
    Note::new(FS4, Quarter),
    Note::new(D4, Quarter),

    Note::new(G4, Quarter),
    Note::new(G4, Quarter),
    Note::new(A4, Quarter),
    Note::new(A4, Quarter),
    Note::new(B4, Full),

    Note::new(G4, Quarter),
    Note::new(G4, Quarter),
    Note::new(A4, Quarter),
    Note::new(A4, Quarter),
    Note::new(G4, Full),
];

pub const WE_ARE_THE_CHAMPIONS_NOTES: [Note; 155] = [
    Note::rest(Quarter),
    Note::rest(Eighth),
    Note::new(FS4, Eighth),
    Note::new(AS4, Eighth),
    Note::new(C5, Eighth),
    Note::new(C5, Half),
    Note::rest(Quarter),

    Note::rest(Quarter),
    Note::rest(Eighth),
    Note::new(FS4, Eighth),
    Note::new(AS4, Eighth),
    Note::new(C5, Eighth),
    Note::new(C5, Half),
    Note::rest(Quarter),

    Note::rest(Quarter),
    Note::rest(Eighth),
    Note::new(FS4, Eighth),
    Note::new(AS4, Eighth),
    Note::new(C5, Eighth),
    Note::new(C5, Eighth),
    Note::new(C5, Eighth),
    Note::new(FS4, Quarter),
    Note::rest(Quarter),

    Note::rest(Quarter),
    Note::new(FS4, Sixteenth),
    Note::new(FS4, Sixteenth),
    Note::new(D5, Sixteenth),
    Note::new(C5, Eighth),
    Note::new(AS4, Sixteenth),
    Note::new(C5, Eighth),
    Note::new(C5, Quarter),
    Note::rest(Quarter),
    Note::rest(Quarter),

    Note::rest(Quarter),
    Note::rest(Eighth),
    Note::new(AS4, Eighth),
    Note::new(D5, Eighth),
    Note::new(DS5, Eighth),
    Note::new(DS5, Half),
    Note::rest(Quarter),

    Note::rest(Quarter),
    Note::rest(Eighth),
    Note::new(AS4, Eighth),
    Note::new(D5, Sixteenth),
    Note::new(DS5, Eighth),
    Note::new(DS5, Sixteenth),
    Note::new(DS5, Half),
    Note::rest(Quarter),

    Note::rest(Quarter),
    Note::rest(Eighth),
    Note::new(AS4, Eighth),
    Note::new(D5, Eighth),
    Note::new(DS5, Eighth),
    Note::new(DS5, Sixteenth),
    Note::new(DS5, Eighth),
    Note::new(F5, Eighth),
    Note::new(F5, Sixteenth),
    Note::new(F5, Sixteenth),
    Note::new(F5, Eighth),
    Note::new(G5, Eighth),
    Note::new(G5, Sixteenth),

    Note::new(G5, Quarter),
    Note::rest(Sixteenth),
    Note::new(G5, Sixteenth),
    Note::new(AS5, Quarter),
    Note::new(A5, Eighth),
    Note::new(B5, Eighth),
    Note::new(B5, Quarter),
    Note::new(B5, Quarter),
    Note::rest(Eighth),

    Note::new(DS5, Quarter),
    Note::rest(Eighth),
    Note::new(E5, Quarter),
    Note::rest(Eighth),
    Note::new(F5, Quarter),
    Note::rest(Eighth),
    Note::new(G5, Quarter),
    Note::rest(Eighth),

    Note::new(F5, Quarter),
    Note::rest(Eighth),
    Note::new(F5, Eighth),
    Note::new(E5, Eighth),
    Note::new(F5, Eighth),
    Note::new(E5, Quarter),
    Note::new(C5, Eighth),
    Note::new(C5, Eighth),
    Note::rest(Eighth),
    Note::new(A4, Eighth),

    Note::new(D5, Quarter),
    Note::new(A4, Eighth),
    Note::new(GS4, Eighth),
    Note::rest(Quarter),

    Note::rest(Half),
    Note::rest(Eighth),
    Note::new(C5, Eighth),
    Note::new(F5, Quarter),
    Note::rest(Eighth),
    Note::new(F5, Eighth),
    Note::new(G5, Eighth),
    Note::new(AS5, Eighth),
    Note::new(C6, Quarter),
    Note::new(AS5, Eighth),
    Note::new(A5, Eighth),
    Note::new(D5, Eighth),
    Note::new(F5, Eighth),

    Note::new(D5, Half),
    Note::rest(Quarter),
    Note::rest(Half),
    Note::rest(Quarter),

    Note::new(D5, Quarter),
    Note::rest(Eighth),
    Note::new(C5, Quarter),
    Note::new(D5, Eighth),
    Note::new(C5, Quarter),
    Note::rest(Eighth),
    Note::new(AS4, Quarter),
    Note::rest(Eighth),

    Note::new(B5, Quarter),
    Note::rest(Eighth),
    Note::new(AS5, Quarter),
    Note::new(B5, Eighth),
    Note::new(AS5, Quarter),
    Note::rest(Eighth),
    Note::new(G5, Quarter),
    Note::rest(Eighth),

    Note::new(AS5, Quarter),
    Note::rest(Eighth),
    Note::new(F5, Quarter),
    Note::new(B5, Eighth),
    Note::new(AS5, Quarter),
    Note::rest(Eighth),
    Note::new(F5, Eighth),
    Note::rest(Eighth),
    Note::new(B5, Eighth),

    Note::new(A5, Quarter),
    Note::rest(Eighth),
    Note::new(F5, Quarter),
    Note::new(B5, Eighth),
    Note::new(A5, Quarter),
    Note::rest(Eighth),
    Note::new(F5, Quarter),
    Note::rest(Eighth),

    Note::rest(Half),
    Note::new(DS5, Eighth),
    Note::new(C5, Sixteenth),
    Note::new(F5, Sixteenth),
    Note::new(F5, Full),
    Note::rest(Quarter),
    Note::rest(Quarter),
    Note::rest(Half),
    Note::rest(Quarter),
    Note::rest(Half),
    Note::rest(Quarter),
    Note::rest(Half),
    Note::rest(Quarter),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::audio::tb6612::{frequency_to_period_us, PERIOD_MAX_US};

    #[test]
    fn song_ids_resolve_to_their_tables() {
        assert_eq!(SongId::ImperialMarch.song().len(), 66);
        assert_eq!(SongId::WsrodNocnejCiszy.song().len(), 46);
        assert_eq!(SongId::WeAreTheChampions.song().len(), 155);
        assert_eq!(SongId::ImperialMarch.song().name(), "Imperial March");
    }

    #[test]
    fn every_built_in_note_fits_the_timer() {
        for id in SongId::ALL {
            for note in id.song().iter() {
                assert!(
                    frequency_to_period_us(note.frequency_hz) <= PERIOD_MAX_US,
                    "{:?}: {:?}",
                    id,
                    note
                );
            }
        }
    }

    #[test]
    fn champions_opens_with_rests() {
        let notes = WE_ARE_THE_CHAMPIONS.notes();
        assert_eq!(notes[0], Note::rest(Quarter));
        assert_eq!(notes[1], Note::rest(Eighth));
        assert_eq!(notes[2], Note::new(FS4, Eighth));
        assert!(notes[..2].iter().all(Note::is_rest));
        assert!(!notes[2].is_rest());
    }

    #[test]
    fn only_champions_has_rests() {
        let rests = |song: &Song| song.iter().filter(|n| n.is_rest()).count();
        assert_eq!(rests(&IMPERIAL_MARCH), 0);
        assert_eq!(rests(&WSROD_NOCNEJ_CISZY), 0);
        assert!(rests(&WE_ARE_THE_CHAMPIONS) > 0);
    }
}
