//! TB6612 dual H-bridge used as a speaker.
//!
//! Both motors get the same PWM signal from one timer (channel 1 and 2) and are
//! driven forward while a tone plays, so the coils vibrate in phase. The timer
//! counts at 1 MHz, which makes the reload value the tone period in µs.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use super::{PwmChannel, PwmTimer, ToneOutput};
use crate::audio::AudioError;

pub const TIMER_TICK_HZ: u32 = 1_000_000;

/// Longest period accepted by default (1 Hz).
pub const PERIOD_MAX_US: u32 = 1_000_000;

/// Reload value programmed by `initialize`, before any tone is requested.
pub const INIT_PERIOD_US: u32 = 100;

/// Compare = period >> 3, a 12.5% duty cycle. Keeps motor current low while still audible.
pub const DUTY_SHIFT: u32 = 3;

/// Period in µs for a tone, truncated, so the played pitch is never above the requested one.
/// 0 Hz maps to a 0 period.
pub const fn frequency_to_period_us(freq_hz: u32) -> u32 {
    if freq_hz == 0 {
        0
    } else {
        TIMER_TICK_HZ / freq_hz
    }
}

pub const fn duty_threshold(period_us: u32) -> u32 {
    period_us >> DUTY_SHIFT
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// IN1 = IN2 = low
    Stop,
    /// IN1 = low, IN2 = high
    Forward,
}

/// The two direction inputs of one TB6612 channel.
pub struct HBridge<P> {
    in1: P,
    in2: P,
}

impl<P: OutputPin<Error = Infallible>> HBridge<P> {
    pub fn new(in1: P, in2: P) -> Self {
        HBridge { in1, in2 }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        let (in1_high, in2_high) = match direction {
            Direction::Stop => (false, false),
            Direction::Forward => (false, true),
        };

        drive(&mut self.in1, in1_high);
        drive(&mut self.in2, in2_high);
    }

    pub fn free(self) -> (P, P) {
        (self.in1, self.in2)
    }
}

fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, high: bool) {
    let res = if high { pin.set_high() } else { pin.set_low() };
    match res {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

pub struct Tb6612<T, P> {
    timer: T,
    motor_left: HBridge<P>,
    motor_right: HBridge<P>,
    max_period_us: u32,
}

impl<T: PwmTimer, P: OutputPin<Error = Infallible>> Tb6612<T, P> {
    /// `motor_left` is driven from timer channel 1, `motor_right` from channel 2.
    pub fn new(timer: T, motor_left: HBridge<P>, motor_right: HBridge<P>) -> Self {
        Tb6612 {
            timer,
            motor_left,
            motor_right,
            max_period_us: PERIOD_MAX_US,
        }
    }

    /// Lower the longest accepted period, rejecting low tones earlier.
    pub fn with_max_period_us(mut self, max_period_us: u32) -> Self {
        self.max_period_us = max_period_us;
        self
    }

    pub fn max_period_us(&self) -> u32 {
        self.max_period_us
    }

    pub fn free(self) -> (T, HBridge<P>, HBridge<P>) {
        (self.timer, self.motor_left, self.motor_right)
    }

    fn set_direction(&mut self, direction: Direction) {
        self.motor_left.set_direction(direction);
        self.motor_right.set_direction(direction);
    }
}

impl<T: PwmTimer, P: OutputPin<Error = Infallible>> ToneOutput for Tb6612<T, P> {
    fn initialize(&mut self) {
        self.set_direction(Direction::Stop);

        self.timer.configure_center_aligned(TIMER_TICK_HZ);
        self.timer.set_period(INIT_PERIOD_US);
        self.timer.set_compare(PwmChannel::Ch1, 0);
        self.timer.set_compare(PwmChannel::Ch2, 0);
        self.timer.enable();

        debug!("tb6612 up, max period {} us", self.max_period_us);
    }

    fn set_frequency(&mut self, freq_hz: u32) -> Result<(), AudioError> {
        let period_us = frequency_to_period_us(freq_hz);
        if period_us > self.max_period_us {
            return Err(AudioError::InvalidArgument);
        }

        let duty = duty_threshold(period_us);
        self.timer.set_period(period_us);
        self.timer.set_compare(PwmChannel::Ch1, duty);
        self.timer.set_compare(PwmChannel::Ch2, duty);
        self.timer.reset_counter();

        if period_us == 0 {
            self.set_direction(Direction::Stop);
        } else {
            self.set_direction(Direction::Forward);
        }

        trace!("tone {} Hz, period {} us", freq_hz, period_us);

        Ok(())
    }

    fn can_play_frequency(&self, freq_hz: u32) -> bool {
        frequency_to_period_us(freq_hz) <= self.max_period_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, rc::Rc};

    use embedded_hal::digital::ErrorType;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Registers {
        tick_hz: u32,
        center_aligned: bool,
        enabled: bool,
        reload: u32,
        compare: [u32; 2],
        counter: u32,
        // left IN1, left IN2, right IN1, right IN2
        pins: [bool; 4],
    }

    type Shared = Rc<RefCell<Registers>>;

    struct FakeTimer(Shared);

    impl PwmTimer for FakeTimer {
        fn configure_center_aligned(&mut self, tick_hz: u32) {
            let mut regs = self.0.borrow_mut();
            regs.tick_hz = tick_hz;
            regs.center_aligned = true;
        }

        fn set_period(&mut self, ticks: u32) {
            self.0.borrow_mut().reload = ticks;
        }

        fn set_compare(&mut self, channel: PwmChannel, ticks: u32) {
            let idx = match channel {
                PwmChannel::Ch1 => 0,
                PwmChannel::Ch2 => 1,
            };
            self.0.borrow_mut().compare[idx] = ticks;
        }

        fn reset_counter(&mut self) {
            self.0.borrow_mut().counter = 0;
        }

        fn enable(&mut self) {
            self.0.borrow_mut().enabled = true;
        }
    }

    struct FakePin {
        regs: Shared,
        idx: usize,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.regs.borrow_mut().pins[self.idx] = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.regs.borrow_mut().pins[self.idx] = true;
            Ok(())
        }
    }

    const STOPPED: [bool; 4] = [false, false, false, false];
    const FORWARD: [bool; 4] = [false, true, false, true];

    fn driver() -> (Tb6612<FakeTimer, FakePin>, Shared) {
        let regs = Rc::new(RefCell::new(Registers {
            // free-running counter somewhere mid-period
            counter: 37,
            // pins left high to see initialize pull them down
            pins: [true; 4],
            ..Default::default()
        }));
        let pin = |idx| FakePin {
            regs: regs.clone(),
            idx,
        };

        let mut tb = Tb6612::new(
            FakeTimer(regs.clone()),
            HBridge::new(pin(0), pin(1)),
            HBridge::new(pin(2), pin(3)),
        );
        tb.initialize();

        (tb, regs)
    }

    fn snapshot(regs: &Shared) -> Registers {
        regs.borrow().clone()
    }

    #[test]
    fn initialize_leaves_output_silent() {
        let (_tb, regs) = driver();
        let regs = snapshot(&regs);

        assert_eq!(regs.tick_hz, 1_000_000);
        assert!(regs.center_aligned);
        assert!(regs.enabled);
        assert_eq!(regs.reload, INIT_PERIOD_US);
        assert_eq!(regs.compare, [0, 0]);
        assert_eq!(regs.pins, STOPPED);
    }

    #[test]
    fn a4_sets_period_and_eighth_duty() {
        let (mut tb, regs) = driver();
        regs.borrow_mut().counter = 812;

        tb.set_frequency(440).unwrap();

        let regs = snapshot(&regs);
        assert_eq!(regs.reload, 2272);
        assert_eq!(regs.compare, [284, 284]);
        assert_eq!(regs.counter, 0);
        assert_eq!(regs.pins, FORWARD);
    }

    #[test]
    fn period_is_truncated_for_every_audible_frequency() {
        let (mut tb, regs) = driver();

        for freq in (1..=20_000).step_by(7) {
            tb.set_frequency(freq).unwrap();

            let regs = snapshot(&regs);
            assert_eq!(regs.reload, 1_000_000 / freq);
            assert_eq!(regs.compare, [regs.reload / 8, regs.reload / 8]);
        }
    }

    #[test]
    fn zero_stops_both_motors_from_any_state() {
        let (mut tb, regs) = driver();

        tb.set_frequency(0).unwrap();
        assert_eq!(snapshot(&regs).pins, STOPPED);

        tb.set_frequency(1046).unwrap();
        regs.borrow_mut().counter = 99;
        tb.set_frequency(0).unwrap();

        let regs = snapshot(&regs);
        assert_eq!(regs.reload, 0);
        assert_eq!(regs.compare, [0, 0]);
        assert_eq!(regs.counter, 0);
        assert_eq!(regs.pins, STOPPED);
    }

    #[test]
    fn one_hz_is_exactly_the_longest_period() {
        let (mut tb, regs) = driver();

        assert!(tb.can_play_frequency(1));
        assert_eq!(tb.set_frequency(1), Ok(()));
        assert_eq!(snapshot(&regs).reload, PERIOD_MAX_US);
    }

    #[test]
    fn too_long_period_is_rejected_without_touching_output() {
        let (tb, regs) = driver();
        assert_eq!(tb.max_period_us(), PERIOD_MAX_US);
        // 1 kHz and up only
        let mut tb = tb.with_max_period_us(1000);
        assert_eq!(tb.max_period_us(), 1000);

        tb.set_frequency(1760).unwrap();
        regs.borrow_mut().counter = 123;
        let before = snapshot(&regs);

        assert!(!tb.can_play_frequency(999));
        assert_eq!(tb.set_frequency(999), Err(AudioError::InvalidArgument));
        assert_eq!(tb.set_frequency(440), Err(AudioError::InvalidArgument));
        assert_eq!(snapshot(&regs), before);

        // boundary: period 1000 is still allowed
        assert_eq!(tb.set_frequency(1000), Ok(()));
        assert_eq!(snapshot(&regs).reload, 1000);
    }

    #[test]
    fn silence_is_never_out_of_range() {
        let (tb, _regs) = driver();
        let mut tb = tb.with_max_period_us(10);

        assert!(tb.can_play_frequency(0));
        assert_eq!(tb.set_frequency(0), Ok(()));
    }

    #[test]
    fn repeated_frequency_is_idempotent() {
        let (mut tb, regs) = driver();

        tb.set_frequency(587).unwrap();
        let once = snapshot(&regs);
        tb.set_frequency(587).unwrap();

        assert_eq!(snapshot(&regs), once);
    }

    #[test]
    fn free_hands_back_pins() {
        let (mut tb, regs) = driver();
        tb.set_frequency(392).unwrap();

        let (_timer, left, right) = tb.free();
        let ((mut l1, _l2), (_r1, _r2)) = (left.free(), right.free());
        l1.set_high().unwrap();

        assert_eq!(snapshot(&regs).pins, [true, true, false, true]);
    }
}
