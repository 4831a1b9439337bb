use crate::audio::AudioError;

pub mod tb6612;

pub use tb6612::Tb6612;

/// Something that can turn a frequency into sound.
///
/// Implementations must be stateless from the caller's point of view: every
/// `set_frequency` call fully determines the output.
pub trait ToneOutput {
    /// Bring the output hardware up in the silent state. Called once, before any tone.
    fn initialize(&mut self);

    /// Start a tone at `freq_hz`, or stop output when `freq_hz` is 0.
    ///
    /// On `Err` the previous output is left untouched.
    fn set_frequency(&mut self, freq_hz: u32) -> Result<(), AudioError>;

    fn can_play_frequency(&self, freq_hz: u32) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    Ch1,
    Ch2,
}

/// Register-level access to a timer with two PWM compare channels.
///
/// Values are in timer ticks.
pub trait PwmTimer {
    /// Free-running center-aligned counting, PWM mode 1 and output enable on both
    /// channels, prescaler set so the counter advances at `tick_hz`.
    fn configure_center_aligned(&mut self, tick_hz: u32);

    /// Auto-reload value, i.e. one PWM period.
    fn set_period(&mut self, ticks: u32);

    fn set_compare(&mut self, channel: PwmChannel, ticks: u32);

    /// Restart the period from zero. Period and compare values written before
    /// this call must drive the output from the first tick after it, even on
    /// timers that buffer them until an update event.
    fn reset_counter(&mut self);

    /// Start the counter.
    fn enable(&mut self);
}
