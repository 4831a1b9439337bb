#![no_std]

pub mod config;
pub mod motor_timer;
pub mod pins;
pub mod tasks;
