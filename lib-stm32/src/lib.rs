#![cfg_attr(not(test), no_std)]

// must come first so the logging macros are visible to the modules below
pub(crate) mod fmt;

pub mod audio;
pub mod drivers;
