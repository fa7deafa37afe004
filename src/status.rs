// Bit masks over the two status bytes, most significant byte first on the wire.
const STATUS_ALERT_PENDING: u8 = 1 << (15 - 8);
const STATUS_HEATER: u8 = 1 << (13 - 8);
const STATUS_ALERT_TEMPERATURE: u8 = 1 << (10 - 8);
const STATUS_SYSTEM_RESET: u8 = 1 << 4;
const STATUS_COMMAND_ERROR: u8 = 1 << 1;
const STATUS_CRC_ERROR: u8 = 1 << 0;

/// Snapshot of the status register, decoded anew on every read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorStatus {
    /// Checksum of the last write did not match
    pub checksum_error: bool,
    /// Last command was not processed
    pub command_error: bool,
    /// A reset occurred since the status was last cleared
    pub system_reset: bool,
    /// Temperature alert is tripped
    pub alert_temperature: bool,
    /// At least one alert is pending
    pub alert_pending: bool,
    /// Internal heater is on
    pub heater_enabled: bool,
}

impl SensorStatus {
    /// Decodes the two status bytes as read back from the sensor.
    pub fn from_bytes(msb: u8, lsb: u8) -> Self {
        SensorStatus {
            checksum_error: lsb & STATUS_CRC_ERROR != 0,
            command_error: lsb & STATUS_COMMAND_ERROR != 0,
            system_reset: lsb & STATUS_SYSTEM_RESET != 0,
            alert_temperature: msb & STATUS_ALERT_TEMPERATURE != 0,
            alert_pending: msb & STATUS_ALERT_PENDING != 0,
            heater_enabled: msb & STATUS_HEATER != 0,
        }
    }
}
