#![no_std]
#![no_main]

mod bridge;
mod channels;
mod peripherals;
mod system;
mod ui;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::{SPI2, TWISPI1},
    spim,
    twim::{self, Twim},
};
use embassy_time::{Duration, Ticker, Timer};

bind_interrupts!(struct Irqs {
    SPIM1_SPIS1_TWIM1_TWIS1_SPI1_TWI1 => twim::InterruptHandler<TWISPI1>;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use bridge::TaskBridge;
use channels::{EVENTS, TAP_SUBSCRIPTION, TICK_SUBSCRIPTION};
use peripherals::{
    accelerometer::Accelerometer,
    backlight::Backlight,
    button::Button,
    display::Display,
    touch::TouchController,
};
use system::{config, i2c};
use ui::Screen;

// App logic
use jumptimer_core::{
    config::{Config, TapConfig},
    input::{touch_button, SIDE_BUTTON},
    tap::TapDetector,
    Event, JumpTimer,
};

/// Accelerometer poll period, matches its 100 Hz output rate
const SAMPLE_PERIOD_MS: u64 = 10;

/// Apply events to the stopwatch, the only task that touches its state
#[embassy_executor::task(pool_size = 1)]
async fn run_app(screen: Screen<SPI2>) {
    let mut app = JumpTimer::new(TaskBridge, screen);
    if let Err(e) = app.show() {
        defmt::error!("Failed to draw screen: {}", e);
    }

    loop {
        let event = EVENTS.receive().await;
        defmt::debug!("Event: {}", event);

        if let Err(e) = app.handle(event) {
            defmt::warn!("Failed to update screen: {}", e);
        }
        if !event.is_subscribed_source() {
            let state = app.state();
            defmt::info!(
                "{} at {}s, {} jumps",
                if state.is_running() { "Running" } else { "Paused" },
                state.elapsed_seconds(),
                state.jump_count(),
            );
        }
    }
}

/// Send a tick every second while subscribed
#[embassy_executor::task(pool_size = 1)]
async fn tick_source() {
    loop {
        // Idle until subscribed
        while !TICK_SUBSCRIPTION.wait().await {}

        let mut ticker = Ticker::every(Duration::from_secs(1));
        loop {
            match select(ticker.next(), TICK_SUBSCRIPTION.wait()).await {
                Either::First(()) => EVENTS.send(Event::Tick).await,
                Either::Second(true) => {}
                Either::Second(false) => break,
            }
        }
    }
}

/// Poll the accelerometer while subscribed and send detected taps
#[embassy_executor::task(pool_size = 1)]
async fn tap_source(mut accelerometer: Accelerometer, config: TapConfig) {
    let mut detector = TapDetector::new(config);
    loop {
        while !TAP_SUBSCRIPTION.wait().await {}

        detector.reset();

        let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));
        loop {
            match select(ticker.next(), TAP_SUBSCRIPTION.wait()).await {
                Either::First(()) => match accelerometer.read() {
                    Ok(sample) => {
                        if let Some(tap) = detector.update(sample) {
                            EVENTS.send(tap.into()).await;
                        }
                    }
                    Err(e) => defmt::warn!("Accelerometer read failed: {}", e),
                },
                Either::Second(true) => {}
                Either::Second(false) => break,
            }
        }
    }
}

/// Polls the button state every 10ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button<'static>) {
    loop {
        if button.pressed().await {
            EVENTS.send(SIDE_BUTTON.into()).await;
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after(Duration::from_millis(10)).await;
    }
}

/// Polls the touch interrupt pin every 2ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_touch(mut touch: TouchController<'static>) {
    loop {
        // Check for touch event
        if let Some(button) = touch.try_event_detected().as_ref().and_then(touch_button) {
            defmt::debug!("Touch input: {}", button);
            EVENTS.send(button.into()).await;
        }

        // Re-schedule the timer interrupt in 2ms
        Timer::after(Duration::from_millis(2)).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(config::system());
    let config = Config::default();
    defmt::info!("Initializing");

    // Initialize Backlight
    let backlight = Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
    );

    // Initialize Button
    let button = Button::init(
        Input::new(p.P0_13, Pull::None),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
    );

    // Initialize I2C
    let mut i2c_config = twim::Config::default();
    // Use I2C at 400KHz (the fastest clock available on the nRF52832),
    i2c_config.frequency = twim::Frequency::K400;
    let i2c_bus = i2c::share(Twim::new(p.TWISPI1, Irqs, p.P0_06, p.P0_07, i2c_config));

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));
    let screen = unwrap!(Screen::init(display, backlight, config.brightness));

    // Initialize touch controller
    let touch = unwrap!(TouchController::init(
        i2c::device(i2c_bus),
        Input::new(p.P0_28, Pull::Up), // Touchpad external interrupt pin: P0.28/AIN4 (TP_INT)
        Output::new(p.P0_10, Level::High, OutputDrive::Standard), // Touchpad reset pin: P0.10/NFC2 (TP_RESET)
    ));

    // Initialize accelerometer, the app still works as a stopwatch without it
    let accelerometer = Accelerometer::init(i2c::device(i2c_bus));

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(run_app(screen)));
    unwrap!(spawner.spawn(tick_source()));
    unwrap!(spawner.spawn(poll_button(button)));
    unwrap!(spawner.spawn(poll_touch(touch)));
    match accelerometer {
        Ok(accelerometer) => unwrap!(spawner.spawn(tap_source(accelerometer, config.tap))),
        Err(e) => defmt::error!("Accelerometer unavailable, jumps will not count: {}", e),
    }
}
