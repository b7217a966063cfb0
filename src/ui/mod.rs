//! Jump timer screen
//!
//! Four centered text rows: a small caption above each large value.

use embassy_nrf::spim;
use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_10X20, MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use jumptimer_core::{Region, TextDisplay};
use profont::PROFONT_24_POINT;

use crate::peripherals::{
    backlight::Backlight,
    display::{self, Display, LCD_W},
};

const BACKGROUND_COLOR: Rgb565 = Rgb565::BLACK;
const TEXT_COLOR: Rgb565 = Rgb565::WHITE;

/// Where and how a region is drawn
struct Slot {
    /// Top edge of the row
    top: i32,
    /// Row height
    height: u32,
    font: &'static MonoFont<'static>,
}

impl Slot {
    fn of(region: Region) -> Self {
        match region {
            Region::TimeLabel => Self {
                top: 40,
                height: 24,
                font: &FONT_10X20,
            },
            Region::TimeValue => Self {
                top: 64,
                height: 36,
                font: &PROFONT_24_POINT,
            },
            Region::JumpsLabel => Self {
                top: 124,
                height: 24,
                font: &FONT_10X20,
            },
            Region::JumpsValue => Self {
                top: 148,
                height: 48,
                font: &PROFONT_24_POINT,
            },
        }
    }

    fn area(&self) -> Rectangle {
        Rectangle::new(Point::new(0, self.top), Size::new(LCD_W as u32, self.height))
    }
}

/// The LCD together with its backlight
pub struct Screen<SPI>
where
    SPI: spim::Instance,
{
    display: Display<SPI>,
    /// Held so the pins keep driving the backlight
    #[allow(unused)]
    backlight: Backlight<'static>,
}

impl<SPI> Screen<SPI>
where
    SPI: spim::Instance,
{
    /// Blank the panel, then switch the backlight on
    pub fn init(
        mut display: Display<SPI>,
        mut backlight: Backlight<'static>,
        brightness: u8,
    ) -> Result<Self, display::Error> {
        display.clear(BACKGROUND_COLOR)?;
        if backlight.set(brightness).is_err() {
            defmt::warn!("Brightness {} out of range, keeping backlight off", brightness);
        }
        defmt::debug!("Screen up, brightness {}", backlight.brightness());

        Ok(Self { display, backlight })
    }
}

impl<SPI> TextDisplay for Screen<SPI>
where
    SPI: spim::Instance,
{
    type Error = display::Error;

    fn set_text(&mut self, region: Region, text: &str) -> Result<(), Self::Error> {
        let slot = Slot::of(region);
        self.clear(region)?;

        let character_style = MonoTextStyle::new(slot.font, TEXT_COLOR);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        self.display.draw(&Text::with_text_style(
            text,
            slot.area().center(),
            character_style,
            text_style,
        ))
    }

    fn clear(&mut self, region: Region) -> Result<(), Self::Error> {
        self.display.draw(
            &Slot::of(region)
                .area()
                .into_styled(PrimitiveStyle::with_fill(BACKGROUND_COLOR)),
        )
    }
}
