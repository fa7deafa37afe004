#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

mod alert;
mod command;
mod result;
mod status;
mod sts3x;
mod temperature;

pub use alert::AlertLimits;
pub use command::{periodic_command, Command, MeasurementsPerSecond, OpCode, Repeatability};
pub use result::Error;
pub use status::SensorStatus;
pub use sts3x::{Sts3x, ALTERNATE_ADDRESS, DEFAULT_ADDRESS};
pub use temperature::{celsius_to_raw, raw_to_celsius};

/// CRC-8 over a byte sequence: polynomial 0x31, initial value 0xFF,
/// no reflection, no final xor. Every response word carries this checksum
/// in its trailing byte.
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc = 0xFFu8;
    for byte in data.iter() {
        crc ^= *byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0x00 {
                (crc << 1) ^ 0x31
            } else {
                crc << 1
            };
        }
    }
    crc
}
