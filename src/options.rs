//! Configuration option records.
//!
//! A [`ConfigOption`] is one TLV record of a controller configuration
//! stream: a one-byte type code, a one-byte payload length, and up to 255
//! payload bytes. Payloads are owned: bytes are copied in on construction
//! and copied out again on serialization, so an option never aliases a
//! caller's buffer.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::field;
use crate::types;

/// A single configuration option (one TLV record).
///
/// The type code is opaque to this crate: any value is legal, known or not.
/// Payload contents are equally opaque; their byte order and meaning belong
/// to the controller. The only wire constraint is the payload length, which
/// must fit the single-byte length field when the option is serialized.
///
/// # Examples
///
/// ```
/// use nci_config_wire::options::ConfigOption;
///
/// let option = ConfigOption::new(0x33, &[0xAA, 0xBB, 0xCC, 0xDD]);
/// assert_eq!(option.name(), "LA_NFCID1");
/// assert_eq!(option.wire_size(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    type_code: u8,
    value: Vec<u8>,
}

impl ConfigOption {
    /// Maximum payload length one record can carry on the wire.
    ///
    /// The length field is a single byte. Longer payloads are rejected at
    /// serialization time rather than truncated.
    pub const MAX_VALUE_LEN: usize = 255;

    /// Create a new option, copying `value` into owned storage.
    ///
    /// # Parameters
    /// * `type_code` - The RF configuration parameter code
    /// * `value` - The payload bytes to copy
    pub fn new(type_code: u8, value: &[u8]) -> Self {
        ConfigOption {
            type_code,
            value: value.to_vec(),
        }
    }

    /// Get the type code.
    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// Get the payload length in bytes.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Check whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the payload bytes.
    ///
    /// # Returns
    /// The payload as a slice, empty for a zero-length option
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Replace the payload, copying `value` into owned storage.
    ///
    /// No length check happens here; an over-long payload is rejected when
    /// the option is serialized.
    ///
    /// # Parameters
    /// * `value` - The new payload bytes to copy
    pub fn set_value(&mut self, value: &[u8]) {
        self.value = value.to_vec();
    }

    /// Get the human-readable name of the type code.
    ///
    /// # Returns
    /// The well-known parameter name, or `Unknown(0xNN)` for codes missing
    /// from the name table
    pub fn name(&self) -> String {
        match types::name_of(self.type_code) {
            Some(name) => String::from(name),
            None => format!("Unknown(0x{:02X})", self.type_code),
        }
    }

    /// Get the wire format size of this record (header plus payload).
    ///
    /// # Returns
    /// Payload length plus the two header bytes
    pub fn wire_size(&self) -> usize {
        field::record::HEADER_LEN + self.value.len()
    }

    /// Serialize this record into `buf` at `offset`.
    ///
    /// Writes the type code, the payload length, and the payload bytes.
    /// Both checks run before anything is written, so a failed push leaves
    /// `buf` untouched.
    ///
    /// # Parameters
    /// * `buf` - The output buffer
    /// * `offset` - Byte offset at which the record starts
    ///
    /// # Returns
    /// * `Ok(offset)` - The offset just past the written record
    /// * `Err(Error::OversizedOption)` if the payload exceeds [`Self::MAX_VALUE_LEN`]
    /// * `Err(Error::OffsetOutOfRange)` if the record does not fit in `buf` at `offset`
    pub fn push(&self, buf: &mut [u8], offset: usize) -> Result<usize> {
        if self.value.len() > Self::MAX_VALUE_LEN {
            return Err(Error::OversizedOption {
                type_code: self.type_code,
                len: self.value.len(),
            });
        }

        let needed = self.wire_size();
        if offset > buf.len() || needed > buf.len() - offset {
            return Err(Error::OffsetOutOfRange {
                offset,
                needed,
                capacity: buf.len(),
            });
        }

        let record = &mut buf[offset..offset + needed];
        record[field::record::TYPE.start] = self.type_code;
        record[field::record::LENGTH.start] = self.value.len() as u8;
        record[field::record::PAYLOAD(self.value.len())].copy_from_slice(&self.value);

        Ok(offset + needed)
    }
}

/// Renders as `Type: <name>, Value: 0x<hex>`, with the payload length in
/// parentheses after the name when it is more than one byte.
impl core::fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Type: {}", self.name())?;
        if self.value.len() > 1 {
            write!(f, " ({})", self.value.len())?;
        }
        write!(f, ", Value: 0x")?;
        for byte in &self.value {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_accessors() {
        let option = ConfigOption::new(0x33, &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(option.type_code(), 0x33);
        assert_eq!(option.len(), 4);
        assert!(!option.is_empty());
        assert_eq!(option.value(), &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(option.wire_size(), 6);
    }

    #[test]
    fn test_option_owns_its_payload() {
        let mut source = [0x01, 0x02, 0x03];
        let option = ConfigOption::new(0x31, &source);
        source[0] = 0xFF;
        assert_eq!(option.value(), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_set_value_replaces_payload() {
        let mut option = ConfigOption::new(0x00, &[0x01]);
        option.set_value(&[0x0A, 0x0B]);
        assert_eq!(option.value(), &[0x0A, 0x0B]);
        assert_eq!(option.len(), 2);

        option.set_value(&[]);
        assert!(option.is_empty());
        assert_eq!(option.wire_size(), 2);
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(ConfigOption::new(0x01, &[0x05]).name(), "CON_DEVICES_LIMIT");
        assert_eq!(ConfigOption::new(0x90, &[]).name(), "Unknown(0x90)");
        assert_eq!(ConfigOption::new(0x7F, &[]).name(), "Unknown(0x7F)");
        // Zero-padded below 0x10.
        assert_eq!(ConfigOption::new(0x04, &[]).name(), "Unknown(0x04)");
    }

    #[test]
    fn test_push_writes_record() {
        let option = ConfigOption::new(0x33, &[0xAA, 0xBB, 0xCC, 0xDD]);
        let mut buf = [0u8; 6];
        let next = option.push(&mut buf, 0).unwrap();
        assert_eq!(next, 6);
        assert_eq!(buf, [0x33, 0x04, 0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_push_at_offset() {
        let option = ConfigOption::new(0x01, &[0x05]);
        let mut buf = [0u8; 9];
        let next = option.push(&mut buf, 6).unwrap();
        assert_eq!(next, 9);
        assert_eq!(&buf[..6], &[0u8; 6]);
        assert_eq!(&buf[6..], &[0x01, 0x01, 0x05]);
    }

    #[test]
    fn test_push_empty_payload() {
        let option = ConfigOption::new(0x3B, &[]);
        let mut buf = [0u8; 2];
        assert_eq!(option.push(&mut buf, 0), Ok(2));
        assert_eq!(buf, [0x3B, 0x00]);
    }

    #[test]
    fn test_push_offset_out_of_range() {
        let option = ConfigOption::new(0x01, &[0x05]);
        let mut buf = [0xEE; 9];
        let result = option.push(&mut buf, 7);
        assert_eq!(
            result,
            Err(Error::OffsetOutOfRange {
                offset: 7,
                needed: 3,
                capacity: 9
            })
        );
        // A failed push must not touch the buffer.
        assert_eq!(buf, [0xEE; 9]);
    }

    #[test]
    fn test_push_oversized_payload() {
        let option = ConfigOption::new(0x29, &[0u8; 300]);
        let mut buf = [0xEE; 512];
        assert_eq!(
            option.push(&mut buf, 0),
            Err(Error::OversizedOption {
                type_code: 0x29,
                len: 300
            })
        );
        assert_eq!(buf, [0xEE; 512]);
    }

    #[test]
    fn test_push_max_payload() {
        let option = ConfigOption::new(0x61, &[0x5A; 255]);
        let mut buf = [0u8; 257];
        assert_eq!(option.push(&mut buf, 0), Ok(257));
        assert_eq!(buf[0], 0x61);
        assert_eq!(buf[1], 0xFF);
        assert_eq!(&buf[2..], &[0x5A; 255][..]);
    }

    #[test]
    fn test_display() {
        let single = ConfigOption::new(0x01, &[0x05]);
        assert_eq!(format!("{}", single), "Type: CON_DEVICES_LIMIT, Value: 0x05");

        let multi = ConfigOption::new(0x33, &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(format!("{}", multi), "Type: LA_NFCID1 (4), Value: 0xAABBCCDD");

        let unknown = ConfigOption::new(0x90, &[0x00, 0x01]);
        assert_eq!(format!("{}", unknown), "Type: Unknown(0x90) (2), Value: 0x0001");
    }
}
