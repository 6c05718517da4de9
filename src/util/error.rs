use thiserror::Error;

/// Configuration values the trainer cannot run with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("joystick center {center} is outside the sample range 0..={full_scale}")]
    CenterOutOfRange { center: u16, full_scale: u16 },

    #[error(
        "dead band {dead_band} around center {center} does not fit in the sample range 0..={full_scale}"
    )]
    DeadBandTooWide {
        center: u16,
        dead_band: u16,
        full_scale: u16,
    },

    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("{field} must be an audible frequency, got 0 Hz")]
    SilentCue { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::DeadBandTooWide {
            center: 2048,
            dead_band: 3000,
            full_scale: 4095,
        };
        assert!(err.to_string().contains("dead band 3000"));

        let err = ConfigError::ZeroDuration {
            field: "timing.note_ms",
        };
        assert_eq!(err.to_string(), "timing.note_ms must be greater than zero");
    }
}
