use byteorder::{BigEndian, ByteOrder};
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::alert::{decode_limit, encode_limit};
use crate::command::periodic_command;
use crate::temperature::raw_to_celsius;
use crate::{
    crc8, AlertLimits, Command, Error, MeasurementsPerSecond, OpCode, Repeatability, SensorStatus,
};

/// Factory-default bus address (ADDR pin low).
pub const DEFAULT_ADDRESS: u8 = 0x4A;
/// Strap-selectable second bus address (ADDR pin high).
pub const ALTERNATE_ADDRESS: u8 = 0x4B;

// Device-mandated minimum waits after the respective command.
const SOFT_RESET_TIME_MS: u32 = 1;
const BREAK_TIME_MS: u32 = 1;
const HEATER_SWITCH_TIME_US: u32 = 10;
const CLEAR_STATUS_TIME_US: u32 = 10;
const READ_SERIAL_TIME_US: u32 = 1000;

/// STS3x sensor on an I2C bus.
///
/// All operations are blocking: a command frame is written, the
/// operation-specific minimum wait elapses on the passed delay provider,
/// then the response is read back and validated. The bus is owned for the
/// duration of each call; sharing it between sensors is the platform's
/// concern.
pub struct Sts3x<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<E: Debug, I2C: I2c<Error = E>> Sts3x<I2C> {
    pub fn new(i2c: I2C, address: SevenBitAddress) -> Self {
        Sts3x { i2c, address }
    }

    /// Releases the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Soft-resets the sensor and waits for it to return to idle.
    ///
    /// The device ignores the reset while a conversion is running; issue
    /// [`Sts3x::stop_conversion`] first when periodic sampling may be
    /// active.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        self.write_command(Command::SoftReset)?;
        delay.delay_ms(SOFT_RESET_TIME_MS);
        Ok(())
    }

    /// Halts periodic sampling.
    pub fn stop_conversion(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        self.write_command(Command::Break)?;
        delay.delay_ms(BREAK_TIME_MS);
        Ok(())
    }

    /// Switches the internal heater on or off.
    pub fn set_heater_state(
        &mut self,
        delay: &mut impl DelayNs,
        enable: bool,
    ) -> Result<(), Error<E>> {
        self.write_command(if enable {
            Command::HeaterEnable
        } else {
            Command::HeaterDisable
        })?;
        delay.delay_us(HEATER_SWITCH_TIME_US);
        Ok(())
    }

    /// Reads and decodes the status register.
    pub fn read_status(&mut self, delay: &mut impl DelayNs) -> Result<SensorStatus, Error<E>> {
        let word = self.query_word(delay, Command::ReadStatus, 0)?;
        let [msb, lsb] = word.to_be_bytes();
        Ok(SensorStatus::from_bytes(msb, lsb))
    }

    /// Clears the latched status bits.
    pub fn clear_status(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        self.write_command(Command::ClearStatus)?;
        delay.delay_us(CLEAR_STATUS_TIME_US);
        Ok(())
    }

    /// Reads the 32-bit serial number, one checksum-validated word at a
    /// time.
    pub fn read_serial(&mut self, delay: &mut impl DelayNs) -> Result<u32, Error<E>> {
        self.write_command(Command::ReadSerial)?;
        delay.delay_us(READ_SERIAL_TIME_US);

        let mut frame = [0u8; 6];
        self.i2c.read(self.address, &mut frame)?;

        let mut serial = 0u32;
        for group in frame.chunks_exact(3) {
            let computed = crc8(&group[..2]);
            if computed != group[2] {
                return Err(Error::CrcMismatch(computed, group[2]));
            }
            serial = serial << 16 | BigEndian::read_u16(&group[..2]) as u32;
        }
        Ok(serial)
    }

    /// Runs a single-shot measurement and returns the validated raw code.
    pub fn read_temp_raw(
        &mut self,
        delay: &mut impl DelayNs,
        repeatability: Repeatability,
    ) -> Result<u16, Error<E>> {
        self.query_word(
            delay,
            repeatability.command(),
            repeatability.measurement_time_us(),
        )
    }

    /// Single-shot measurement in degrees Celsius.
    ///
    /// Returns `f32::NAN` when the bus transfer or the response checksum
    /// fails; use [`Sts3x::read_temp_raw`] when the failure cause matters.
    pub fn read_temp(&mut self, delay: &mut impl DelayNs, repeatability: Repeatability) -> f32 {
        self.read_temp_raw(delay, repeatability)
            .map(raw_to_celsius)
            .unwrap_or(f32::NAN)
    }

    /// Retrieves the latest result of a running periodic sampling as the
    /// validated raw code. No settling wait is applied.
    pub fn fetch_temp_raw(&mut self, delay: &mut impl DelayNs) -> Result<u16, Error<E>> {
        self.query_word(delay, Command::FetchPeriodicResult, 0)
    }

    /// Latest periodic result in degrees Celsius, `f32::NAN` on failure.
    pub fn fetch_temp(&mut self, delay: &mut impl DelayNs) -> f32 {
        self.fetch_temp_raw(delay)
            .map(raw_to_celsius)
            .unwrap_or(f32::NAN)
    }

    /// Starts continuous sampling at the given cadence and repeatability.
    ///
    /// Results are retrieved with [`Sts3x::fetch_temp_raw`] and the mode is
    /// left with [`Sts3x::stop_conversion`].
    pub fn set_continuous_sampling(
        &mut self,
        mps: MeasurementsPerSecond,
        repeatability: Repeatability,
    ) -> Result<(), Error<E>> {
        self.write_command(periodic_command(mps, repeatability))
    }

    /// Reads the high-alert set and clear points.
    ///
    /// The clear register is only queried once the set register validated.
    pub fn read_alert_limits_high(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<AlertLimits, Error<E>> {
        self.read_alert_limits(
            delay,
            Command::ReadAlertLimitHighSet,
            Command::ReadAlertLimitHighClear,
        )
    }

    /// Reads the low-alert set and clear points.
    pub fn read_alert_limits_low(
        &mut self,
        delay: &mut impl DelayNs,
    ) -> Result<AlertLimits, Error<E>> {
        self.read_alert_limits(
            delay,
            Command::ReadAlertLimitLowSet,
            Command::ReadAlertLimitLowClear,
        )
    }

    /// Writes the high-alert set and clear points as raw codes.
    ///
    /// The low seven bits of each value are not representable in the
    /// register and are dropped by the encoding.
    pub fn set_alert_limits_high(&mut self, set: u16, clear: u16) -> Result<(), Error<E>> {
        self.write_alert_limits(
            Command::WriteAlertLimitHighSet,
            Command::WriteAlertLimitHighClear,
            set,
            clear,
        )
    }

    /// Writes the low-alert set and clear points as raw codes.
    pub fn set_alert_limits_low(&mut self, set: u16, clear: u16) -> Result<(), Error<E>> {
        self.write_alert_limits(
            Command::WriteAlertLimitLowSet,
            Command::WriteAlertLimitLowClear,
            set,
            clear,
        )
    }

    fn read_alert_limits(
        &mut self,
        delay: &mut impl DelayNs,
        set_cmd: Command,
        clear_cmd: Command,
    ) -> Result<AlertLimits, Error<E>> {
        let set = decode_limit(self.query_word(delay, set_cmd, 0)?.to_be_bytes());
        let clear = decode_limit(self.query_word(delay, clear_cmd, 0)?.to_be_bytes());
        Ok(AlertLimits { set, clear })
    }

    fn write_alert_limits(
        &mut self,
        set_cmd: Command,
        clear_cmd: Command,
        set: u16,
        clear: u16,
    ) -> Result<(), Error<E>> {
        self.write_command_with_data(set_cmd, encode_limit(set))?;
        self.write_command_with_data(clear_cmd, encode_limit(clear))
    }

    fn write_command(&mut self, cmd: impl OpCode) -> Result<(), Error<E>> {
        let mut frame = [0u8; 2];
        BigEndian::write_u16(&mut frame, cmd.op_code());
        self.i2c.write(self.address, &frame)?;
        Ok(())
    }

    fn write_command_with_data(&mut self, cmd: impl OpCode, data: [u8; 2]) -> Result<(), Error<E>> {
        let mut frame = [0u8; 4];
        BigEndian::write_u16(&mut frame[..2], cmd.op_code());
        frame[2..].copy_from_slice(&data);
        self.i2c.write(self.address, &frame)?;
        Ok(())
    }

    /// Writes a command, waits the settling time, then reads back one
    /// 3-byte group and validates its trailing checksum.
    fn query_word(
        &mut self,
        delay: &mut impl DelayNs,
        cmd: impl OpCode,
        settle_us: u32,
    ) -> Result<u16, Error<E>> {
        self.write_command(cmd)?;
        delay.delay_us(settle_us);

        let mut frame = [0u8; 3];
        self.i2c.read(self.address, &mut frame)?;
        let computed = crc8(&frame[..2]);
        if computed != frame[2] {
            return Err(Error::CrcMismatch(computed, frame[2]));
        }
        Ok(BigEndian::read_u16(&frame[..2]))
    }
}
