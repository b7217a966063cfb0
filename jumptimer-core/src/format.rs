//! Text rendering of the counters
//!
//! Both formatters write into caller-provided stack buffers through
//! `format_no_std`, so nothing here allocates.

use core::fmt;

/// Buffer size that fits any `u32` second count as `H..H:MM:SS`
pub const DURATION_TEXT_LEN: usize = 16;

/// Buffer size that fits any `u32` jump count
pub const JUMPS_TEXT_LEN: usize = 10;

/// Elapsed time split into hours, minutes and seconds
///
/// Hours do not wrap at 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hms {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
}

impl Hms {
    pub const fn from_seconds(total_seconds: u32) -> Self {
        Self {
            hours: total_seconds / 3600,
            minutes: ((total_seconds % 3600) / 60) as u8,
            seconds: (total_seconds % 60) as u8,
        }
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Render `total_seconds` as zero-padded `HH:MM:SS`
pub fn format_duration(buf: &mut [u8], total_seconds: u32) -> Result<&str, fmt::Error> {
    format_no_std::show(buf, format_args!("{}", Hms::from_seconds(total_seconds)))
}

/// Render the jump count as a plain decimal
pub fn format_jumps(buf: &mut [u8], count: u32) -> Result<&str, fmt::Error> {
    format_no_std::show(buf, format_args!("{}", count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn duration(n: u32) -> String {
        let mut buf = [0u8; DURATION_TEXT_LEN];
        format_duration(&mut buf, n).unwrap().to_string()
    }

    fn jumps(n: u32) -> String {
        let mut buf = [0u8; JUMPS_TEXT_LEN];
        format_jumps(&mut buf, n).unwrap().to_string()
    }

    #[test]
    fn test_duration_boundaries() {
        assert_eq!(duration(0), "00:00:00");
        assert_eq!(duration(59), "00:00:59");
        assert_eq!(duration(60), "00:01:00");
        assert_eq!(duration(3599), "00:59:59");
        assert_eq!(duration(3600), "01:00:00");
        assert_eq!(duration(36000), "10:00:00");
        assert_eq!(duration(125), "00:02:05");
    }

    #[test]
    fn test_duration_hours_widen() {
        assert_eq!(duration(359_999), "99:59:59");
        assert_eq!(duration(360_000), "100:00:00");
        assert_eq!(duration(u32::MAX), "1193046:28:15");
    }

    #[test]
    fn test_duration_buffer_too_small() {
        let mut buf = [0u8; 4];
        assert!(format_duration(&mut buf, 0).is_err());
    }

    #[test]
    fn test_hms_split() {
        assert_eq!(
            Hms::from_seconds(3661),
            Hms {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_jumps() {
        assert_eq!(jumps(0), "0");
        assert_eq!(jumps(7), "7");
        assert_eq!(jumps(42), "42");
        assert_eq!(jumps(u32::MAX), "4294967295");
    }

    proptest! {
        #[test]
        fn prop_duration_decomposes(n in any::<u32>()) {
            let text = duration(n);
            let fields: Vec<&str> = text.split(':').collect();
            prop_assert_eq!(fields.len(), 3);

            prop_assert_eq!(fields[0].parse::<u32>().unwrap(), n / 3600);
            prop_assert_eq!(fields[1].parse::<u32>().unwrap(), (n % 3600) / 60);
            prop_assert_eq!(fields[2].parse::<u32>().unwrap(), n % 60);

            prop_assert_eq!(fields[1].len(), 2);
            prop_assert_eq!(fields[2].len(), 2);
            if n < 360_000 {
                prop_assert_eq!(fields[0].len(), 2);
            } else {
                prop_assert!(fields[0].len() > 2);
            }
        }
    }
}
