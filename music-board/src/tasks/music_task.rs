use embassy_executor::Spawner;
use embassy_stm32::gpio::{AnyPin, Level, Output, Pin, Speed};
use embassy_time::Delay;
use motorsong_lib_stm32::{
    audio::{Song, TonePlayer},
    drivers::audio::{tb6612::HBridge, Tb6612, ToneOutput},
};

use crate::{
    config::{INTER_SONG_DELAY_MS, MOTOR_TIMER_CLOCK, SELECTED_SONG, TEMPO},
    motor_timer::Tim2PwmTimer,
    pins::*,
};

pub type MotorToneDriver = Tb6612<Tim2PwmTimer, Output<'static, AnyPin>>;

#[macro_export]
macro_rules! create_music_task {
    ($main_spawner:ident, $p:ident) => {
        motorsong_music_board::tasks::music_task::start_music_task(
            &$main_spawner,
            $p.TIM2,
            $p.PA0,
            $p.PA1,
            $p.PC2,
            $p.PC0,
            $p.PC3,
            $p.PC1,
        );
    };
}

#[embassy_executor::task]
async fn music_task_entry(
    mut tone_player: TonePlayer<MotorToneDriver, Delay>,
    song: &'static Song,
) {
    tone_player.run_forever(song, INTER_SONG_DELAY_MS).await;
}

#[allow(clippy::too_many_arguments)]
pub fn start_music_task(
    task_spawner: &Spawner,
    motor_timer: MotorTimer,
    left_pwm_pin: MotorLeftPwmPin,
    right_pwm_pin: MotorRightPwmPin,
    left_in1_pin: MotorLeftIn1Pin,
    left_in2_pin: MotorLeftIn2Pin,
    right_in1_pin: MotorRightIn1Pin,
    right_in2_pin: MotorRightIn2Pin,
) {
    // start low so the motors stay stopped until the timer is up
    let dir_pin = |pin: AnyPin| Output::new(pin, Level::Low, Speed::Low);
    let motor_left = HBridge::new(
        dir_pin(left_in1_pin.degrade()),
        dir_pin(left_in2_pin.degrade()),
    );
    let motor_right = HBridge::new(
        dir_pin(right_in1_pin.degrade()),
        dir_pin(right_in2_pin.degrade()),
    );

    let timer = Tim2PwmTimer::new(motor_timer, left_pwm_pin, right_pwm_pin, MOTOR_TIMER_CLOCK);
    let mut audio_driver = Tb6612::new(timer, motor_left, motor_right);
    audio_driver.initialize();

    let song = SELECTED_SONG.song();
    let tone_player = TonePlayer::new(audio_driver, Delay, TEMPO);
    if let Err(err) = tone_player.validate_song(song) {
        defmt::warn!(
            "{} has notes the motors cannot play ({}), they will be skipped",
            song.name(),
            err
        );
    }
    defmt::info!(
        "{}: {} notes, {} ms per pass",
        song.name(),
        song.len(),
        TEMPO.song_duration(song).as_millis()
    );

    task_spawner.spawn(music_task_entry(tone_player, song)).unwrap();
}
