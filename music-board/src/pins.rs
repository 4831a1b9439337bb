#![allow(dead_code)]

use embassy_stm32::{pac, peripherals::*};

//////////////////
//  Motor PWM   //
//////////////////

pub type MotorTimer = TIM2;
// register block of MotorTimer, for the 32-bit writes SimplePwm does not expose
pub const MOTOR_TIMER_REGS: pac::timer::TimGp32 = pac::TIM2;
// TIM2_CH1, PWMA on the TB6612
pub type MotorLeftPwmPin = PA0;
// TIM2_CH2, PWMB on the TB6612
pub type MotorRightPwmPin = PA1;

////////////////////////
//  Motor Direction   //
////////////////////////

pub type MotorLeftIn1Pin = PC2;
pub type MotorLeftIn2Pin = PC0;
pub type MotorRightIn1Pin = PC3;
pub type MotorRightIn2Pin = PC1;
