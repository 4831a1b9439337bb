//! TIM2 as the tone timer for the TB6612.
//!
//! TIM2 is a 32-bit timer, which the 1 MHz tick needs to hold periods down to
//! 1 Hz. `SimplePwm` only exposes 16-bit reload and compare values, so it is
//! used to claim the timer, route the pins and select PWM mode, and the
//! reload/compare/counter registers are written directly.
//!
//! A tone change must reach the pins at once. `SimplePwm` turns on compare
//! preload, which would hold each new compare value back until the next update
//! event and run the first half period of a note with the previous note's
//! duty. Preload is cleared on both channels, and `reset_counter` also issues
//! a software update event so any buffered register is latched together with
//! the counter reset.

use embassy_stm32::{
    gpio::OutputType,
    time::{hz, Hertz},
    timer::{
        simple_pwm::{PwmPin, SimplePwm},
        Channel, CountingMode,
    },
};
use motorsong_lib_stm32::drivers::audio::{PwmChannel, PwmTimer};

use crate::pins::{MotorLeftPwmPin, MotorRightPwmPin, MotorTimer, MOTOR_TIMER_REGS};

pub struct Tim2PwmTimer {
    pwm: SimplePwm<'static, MotorTimer>,
    timer_clock: Hertz,
}

impl Tim2PwmTimer {
    pub fn new(
        timer: MotorTimer,
        left_pwm_pin: MotorLeftPwmPin,
        right_pwm_pin: MotorRightPwmPin,
        timer_clock: Hertz,
    ) -> Self {
        let ch1 = PwmPin::new_ch1(left_pwm_pin, OutputType::PushPull);
        let ch2 = PwmPin::new_ch2(right_pwm_pin, OutputType::PushPull);

        // CMS can only be changed while the counter is stopped, so pick center
        // aligned mode 3 here. The frequency is overwritten by the driver.
        let pwm = SimplePwm::new(
            timer,
            Some(ch1),
            Some(ch2),
            None,
            None,
            hz(10_000),
            CountingMode::CenterAlignedBothInterrupts,
        );

        Tim2PwmTimer { pwm, timer_clock }
    }
}

fn channel_index(channel: PwmChannel) -> usize {
    match channel {
        PwmChannel::Ch1 => 0,
        PwmChannel::Ch2 => 1,
    }
}

impl PwmTimer for Tim2PwmTimer {
    fn configure_center_aligned(&mut self, tick_hz: u32) {
        let regs = MOTOR_TIMER_REGS;

        regs.cr1().modify(|w| {
            w.set_cen(false);
            w.set_arpe(false);
        });

        // CCR1/CCR2 writes go straight to the active registers
        regs.ccmr_output(0).modify(|w| {
            w.set_ocpe(0, false);
            w.set_ocpe(1, false);
        });

        let psc = (self.timer_clock.0 / tick_hz).saturating_sub(1);
        regs.psc().write_value(u16::try_from(psc).unwrap_or(u16::MAX));
        // latch the prescaler now instead of at the next update event
        regs.egr().write(|w| w.set_ug(true));

        self.pwm.enable(Channel::Ch1);
        self.pwm.enable(Channel::Ch2);
    }

    fn set_period(&mut self, ticks: u32) {
        MOTOR_TIMER_REGS.arr().write_value(ticks);
    }

    fn set_compare(&mut self, channel: PwmChannel, ticks: u32) {
        MOTOR_TIMER_REGS.ccr(channel_index(channel)).write_value(ticks);
    }

    fn reset_counter(&mut self) {
        // UG clears CNT and reloads every shadow register
        MOTOR_TIMER_REGS.egr().write(|w| w.set_ug(true));
    }

    fn enable(&mut self) {
        MOTOR_TIMER_REGS.cr1().modify(|w| w.set_cen(true));
    }
}
