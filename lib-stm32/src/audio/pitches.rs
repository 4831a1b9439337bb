//! Equal-tempered pitches in whole Hz, truncated toward zero.
//!
//! Sharps are spelled `S` (`CS4` is C#4). Octave numbers follow scientific pitch notation.

pub const REST: u32 = 0;

pub const C3: u32 = 130;
pub const CS3: u32 = 138;
pub const D3: u32 = 146;
pub const DS3: u32 = 155;
pub const E3: u32 = 164;
pub const F3: u32 = 174;
pub const FS3: u32 = 185;
pub const G3: u32 = 196;
pub const GS3: u32 = 207;
pub const A3: u32 = 220;
pub const AS3: u32 = 233;
pub const B3: u32 = 246;

pub const C4: u32 = 261;
pub const CS4: u32 = 277;
pub const D4: u32 = 293;
pub const DS4: u32 = 311;
pub const E4: u32 = 329;
pub const F4: u32 = 349;
pub const FS4: u32 = 369;
pub const G4: u32 = 392;
pub const GS4: u32 = 415;
pub const A4: u32 = 440;
pub const AS4: u32 = 466;
pub const B4: u32 = 493;

pub const C5: u32 = 523;
pub const CS5: u32 = 554;
pub const D5: u32 = 587;
pub const DS5: u32 = 622;
pub const E5: u32 = 659;
pub const F5: u32 = 698;
pub const FS5: u32 = 739;
pub const G5: u32 = 783;
pub const GS5: u32 = 830;
pub const A5: u32 = 880;
pub const AS5: u32 = 932;
pub const B5: u32 = 987;

pub const C6: u32 = 1046;
pub const CS6: u32 = 1108;
pub const D6: u32 = 1174;
pub const DS6: u32 = 1244;
pub const E6: u32 = 1318;
pub const F6: u32 = 1396;
pub const FS6: u32 = 1479;
pub const G6: u32 = 1567;
pub const GS6: u32 = 1661;
pub const A6: u32 = 1760;
pub const AS6: u32 = 1864;
pub const B6: u32 = 1975;
