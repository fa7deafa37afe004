/// Converts a raw sensor code to degrees Celsius.
pub fn raw_to_celsius(raw: u16) -> f32 {
    (raw as u32 * 175) as f32 / 65535.0 - 45.0
}

/// Converts degrees Celsius to the raw sensor code, truncating to the
/// 16-bit code range. Inputs below -45 map to 0.
pub fn celsius_to_raw(celsius: f32) -> u16 {
    ((celsius + 45.0) * 65535.0 / 175.0) as u16
}

#[cfg(test)]
mod tests {
    use super::{celsius_to_raw, raw_to_celsius};

    #[test]
    fn scale_anchors() {
        assert_eq!(raw_to_celsius(0), -45.0);
        assert_eq!(raw_to_celsius(65535), 130.0);
        assert_eq!(celsius_to_raw(-45.0), 0);
        assert_eq!(celsius_to_raw(130.0), 65535);
    }

    #[test]
    fn below_scale_input_truncates_to_zero() {
        assert_eq!(celsius_to_raw(-45.001), 0);
    }

    #[test]
    fn round_trip_stays_within_one_code() {
        for raw in 0..=u16::MAX {
            let back = celsius_to_raw(raw_to_celsius(raw));
            let diff = (raw as i32 - back as i32).abs();
            assert!(diff <= 1, "raw {} came back as {}", raw, back);
        }
    }
}
