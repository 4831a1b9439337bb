#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use motorsong_music_board::{config::get_system_config, create_music_task};

#[embassy_executor::main]
async fn main(main_spawner: Spawner) {
    let p = embassy_stm32::init(get_system_config());
    info!("system core initialized");

    create_music_task!(main_spawner, p);
    info!("music task started");
}
