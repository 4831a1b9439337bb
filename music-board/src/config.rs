use embassy_stm32::{
    rcc::{
        AHBPrescaler, APBPrescaler, Hse, HseMode, Pll, PllMul, PllPDiv, PllPreDiv, PllQDiv,
        PllSource, Sysclk,
    },
    time::Hertz,
    Config,
};
use motorsong_lib_stm32::{
    audio::{SongId, Tempo},
    drivers::audio::tb6612::TIMER_TICK_HZ,
};

// song played in a loop after boot
pub const SELECTED_SONG: SongId = SongId::WeAreTheChampions;

// silence between two passes of the song
pub const INTER_SONG_DELAY_MS: u32 = 1000;

pub const TEMPO: Tempo = Tempo::DEFAULT;

//////////////////
//  Clock Tree  //
//////////////////

// 8 MHz crystal on the discovery board
const HSE_FREQ: Hertz = Hertz(8_000_000);

const PLL_PREDIV: u32 = 4; // 2 MHz into the VCO
const PLL_MUL: u32 = 168; // 336 MHz VCO
const PLL_P_DIV: u32 = 2; // 168 MHz sysclk
const PLL_Q_DIV: u32 = 7; // 48 MHz

const AHB_DIV: u32 = 1; // 168 MHz
const APB1_DIV: u32 = 4; // 42 MHz
const APB2_DIV: u32 = 2; // 84 MHz

pub const SYSCLK: Hertz = Hertz(HSE_FREQ.0 / PLL_PREDIV * PLL_MUL / PLL_P_DIV);
pub const APB1_CLOCK: Hertz = Hertz(SYSCLK.0 / AHB_DIV / APB1_DIV);

/// Kernel clock of the APB1 timers, TIM2 included.
pub const MOTOR_TIMER_CLOCK: Hertz = timer_kernel_clock(APB1_CLOCK, APB1_DIV);

// the prescaler can only divide by whole numbers
const _: () = assert!(MOTOR_TIMER_CLOCK.0 % TIMER_TICK_HZ == 0);

// timers run at twice PCLK whenever their APB prescaler is not 1
const fn timer_kernel_clock(pclk: Hertz, apb_div: u32) -> Hertz {
    if apb_div == 1 {
        pclk
    } else {
        Hertz(pclk.0 * 2)
    }
}

const SYSTEM_PLL: Pll = Pll {
    prediv: pll_prediv(PLL_PREDIV),
    mul: pll_mul(PLL_MUL),
    divp: Some(pll_p_div(PLL_P_DIV)),
    divq: Some(pll_q_div(PLL_Q_DIV)),
    divr: None,
};

const AHB_PRE: AHBPrescaler = ahb_prescaler(AHB_DIV);
const APB1_PRE: APBPrescaler = apb_prescaler(APB1_DIV);
const APB2_PRE: APBPrescaler = apb_prescaler(APB2_DIV);

const fn pll_prediv(div: u32) -> PllPreDiv {
    match div {
        4 => PllPreDiv::DIV4,
        8 => PllPreDiv::DIV8,
        _ => panic!("unsupported PLL pre-divider"),
    }
}

const fn pll_mul(mul: u32) -> PllMul {
    match mul {
        168 => PllMul::MUL168,
        336 => PllMul::MUL336,
        _ => panic!("unsupported PLL multiplier"),
    }
}

const fn pll_p_div(div: u32) -> PllPDiv {
    match div {
        2 => PllPDiv::DIV2,
        4 => PllPDiv::DIV4,
        6 => PllPDiv::DIV6,
        8 => PllPDiv::DIV8,
        _ => panic!("invalid PLL P divider"),
    }
}

const fn pll_q_div(div: u32) -> PllQDiv {
    match div {
        7 => PllQDiv::DIV7,
        14 => PllQDiv::DIV14,
        _ => panic!("unsupported PLL Q divider"),
    }
}

const fn ahb_prescaler(div: u32) -> AHBPrescaler {
    match div {
        1 => AHBPrescaler::DIV1,
        2 => AHBPrescaler::DIV2,
        4 => AHBPrescaler::DIV4,
        8 => AHBPrescaler::DIV8,
        _ => panic!("unsupported AHB prescaler"),
    }
}

const fn apb_prescaler(div: u32) -> APBPrescaler {
    match div {
        1 => APBPrescaler::DIV1,
        2 => APBPrescaler::DIV2,
        4 => APBPrescaler::DIV4,
        8 => APBPrescaler::DIV8,
        16 => APBPrescaler::DIV16,
        _ => panic!("invalid APB prescaler"),
    }
}

pub fn get_system_config() -> Config {
    let mut config = Config::default();

    config.rcc.hse = Some(Hse {
        freq: HSE_FREQ,
        mode: HseMode::Oscillator,
    });

    config.rcc.pll_src = PllSource::HSE;
    config.rcc.pll = Some(SYSTEM_PLL);

    config.rcc.sys = Sysclk::PLL1_P;
    config.rcc.ahb_pre = AHB_PRE;
    config.rcc.apb1_pre = APB1_PRE;
    config.rcc.apb2_pre = APB2_PRE;

    config
}
