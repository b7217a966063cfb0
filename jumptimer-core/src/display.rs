//! Text region seam to the screen

/// The four text regions of the app, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    TimeLabel,
    TimeValue,
    JumpsLabel,
    JumpsValue,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::TimeLabel,
        Region::TimeValue,
        Region::JumpsLabel,
        Region::JumpsValue,
    ];
}

/// Text caption of the time value
pub const TIME_LABEL: &str = "TIME";

/// Text caption of the jump value
pub const JUMPS_LABEL: &str = "JUMPS";

/// Screen with independently updatable text regions
///
/// Layout and fonts belong to the implementation.
pub trait TextDisplay {
    type Error;

    /// Replace the text shown in `region`
    fn set_text(&mut self, region: Region, text: &str) -> Result<(), Self::Error>;

    /// Blank `region`
    fn clear(&mut self, region: Region) -> Result<(), Self::Error>;
}
