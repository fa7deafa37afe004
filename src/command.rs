pub trait OpCode {
    fn op_code(&self) -> u16;
}

/// Command words as fixed by the datasheet. Never recompute these values.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Command {
    SoftReset = 0x30A2,
    Break = 0x3093,
    HeaterEnable = 0x306D,
    HeaterDisable = 0x3066,
    ReadStatus = 0xF32D,
    ClearStatus = 0x3041,
    ReadSerial = 0x3780,
    MeasureHighRepeatability = 0x2400,
    MeasureMediumRepeatability = 0x240B,
    MeasureLowRepeatability = 0x2416,
    FetchPeriodicResult = 0xE000,
    ReadAlertLimitHighSet = 0xE11F,
    ReadAlertLimitHighClear = 0xE114,
    ReadAlertLimitLowSet = 0xE102,
    ReadAlertLimitLowClear = 0xE109,
    WriteAlertLimitHighSet = 0x611D,
    WriteAlertLimitHighClear = 0x6116,
    WriteAlertLimitLowSet = 0x6100,
    WriteAlertLimitLowClear = 0x610B,
}

impl OpCode for Command {
    fn op_code(&self) -> u16 {
        *self as _
    }
}

/// Periodic-mode command words are composed at runtime, so a raw word is a
/// valid op code too.
impl OpCode for u16 {
    fn op_code(&self) -> u16 {
        *self
    }
}

/// Measurement noise/duration trade-off of one acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repeatability {
    Low,
    Medium,
    High,
}

impl Default for Repeatability {
    fn default() -> Self {
        Repeatability::High
    }
}

impl Repeatability {
    /// Single-shot measurement command for this level.
    pub fn command(&self) -> Command {
        match self {
            Repeatability::Low => Command::MeasureLowRepeatability,
            Repeatability::Medium => Command::MeasureMediumRepeatability,
            Repeatability::High => Command::MeasureHighRepeatability,
        }
    }

    /// Worst-case conversion time in microseconds; the result must not be
    /// read back before this has elapsed.
    pub fn measurement_time_us(&self) -> u32 {
        match self {
            Repeatability::Low => 4_000,
            Repeatability::Medium => 6_000,
            Repeatability::High => 15_000,
        }
    }

    fn index(&self) -> usize {
        match self {
            Repeatability::Low => 0,
            Repeatability::Medium => 1,
            Repeatability::High => 2,
        }
    }
}

/// Sampling cadence in continuous mode. The numeric value is the high byte
/// of the composed command word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MeasurementsPerSecond {
    Half = 0x20,
    One = 0x21,
    Two = 0x22,
    Four = 0x23,
    Ten = 0x27,
}

impl MeasurementsPerSecond {
    fn index(&self) -> usize {
        match self {
            MeasurementsPerSecond::Half => 0,
            MeasurementsPerSecond::One => 1,
            MeasurementsPerSecond::Two => 2,
            MeasurementsPerSecond::Four => 3,
            MeasurementsPerSecond::Ten => 4,
        }
    }
}

// Low command byte per (rate, repeatability) pair, columns Low/Medium/High.
const PERIODIC_SUFFIX: [[u8; 3]; 5] = [
    [0x2F, 0x24, 0x32], // 0.5 mps
    [0x2D, 0x26, 0x30], // 1 mps
    [0x2B, 0x20, 0x36], // 2 mps
    [0x29, 0x22, 0x34], // 4 mps
    [0x2A, 0x21, 0x37], // 10 mps
];

/// Composes the continuous-sampling command word for a cadence and
/// repeatability pair.
pub fn periodic_command(mps: MeasurementsPerSecond, repeatability: Repeatability) -> u16 {
    let suffix = PERIODIC_SUFFIX[mps.index()][repeatability.index()];
    (mps as u16) << 8 | suffix as u16
}

#[cfg(test)]
mod tests {
    use super::{periodic_command, MeasurementsPerSecond::*, Repeatability::*};

    #[test]
    fn periodic_command_words_match_datasheet() {
        assert_eq!(periodic_command(Half, Low), 0x202F);
        assert_eq!(periodic_command(Half, Medium), 0x2024);
        assert_eq!(periodic_command(Half, High), 0x2032);
        assert_eq!(periodic_command(One, Low), 0x212D);
        assert_eq!(periodic_command(One, Medium), 0x2126);
        assert_eq!(periodic_command(One, High), 0x2130);
        assert_eq!(periodic_command(Two, Low), 0x222B);
        assert_eq!(periodic_command(Two, Medium), 0x2220);
        assert_eq!(periodic_command(Two, High), 0x2236);
        assert_eq!(periodic_command(Four, Low), 0x2329);
        assert_eq!(periodic_command(Four, Medium), 0x2322);
        assert_eq!(periodic_command(Four, High), 0x2334);
        assert_eq!(periodic_command(Ten, Low), 0x272A);
        assert_eq!(periodic_command(Ten, Medium), 0x2721);
        assert_eq!(periodic_command(Ten, High), 0x2737);
    }

    #[test]
    fn measurement_command_tracks_repeatability() {
        use super::{Command, OpCode, Repeatability};

        assert_eq!(Repeatability::High.command().op_code(), 0x2400);
        assert_eq!(Repeatability::Medium.command().op_code(), 0x240B);
        assert_eq!(Repeatability::Low.command().op_code(), 0x2416);
        assert_eq!(Command::SoftReset.op_code(), 0x30A2);
    }
}
