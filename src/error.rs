/// Error type for configuration stream serialization.
///
/// Serialization can fail in two ways: an option whose payload cannot be
/// represented in the single-byte length field, or a record write that would
/// run past the end of the output buffer. Parsing never produces an error;
/// a truncated stream simply ends the scan early.
///
/// # Examples
///
/// ```
/// use nci_config_wire::config::Config;
/// use nci_config_wire::error::Error;
///
/// let mut config = Config::new();
/// config.add(0x29, &[0u8; 300]); // PN_ATR_REQ_GEN_BYTES, too long
/// let result = config.build();
/// assert_eq!(result, Err(Error::OversizedOption { type_code: 0x29, len: 300 }));
/// ```
#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum Error {
    /// Option payload is too long for the wire format.
    ///
    /// The length field is a single byte, so one record carries at most
    /// 255 payload bytes. This occurs when:
    /// - An option was constructed with a payload longer than 255 bytes
    /// - `set_value` replaced a payload with one longer than 255 bytes
    ///
    /// The check runs before any buffer is allocated or written, so an
    /// over-long payload is never silently truncated to its low length byte.
    OversizedOption {
        /// Type code of the offending option.
        type_code: u8,
        /// Actual payload length in bytes.
        len: usize,
    },

    /// A record write would run past the end of the output buffer.
    ///
    /// This occurs when:
    /// - `push` is called with an offset too close to the buffer end
    /// - The buffer handed to `push` is smaller than the record
    ///
    /// `Config::build` sizes its buffer from the options it is about to
    /// write, so seeing this from `build` indicates a bookkeeping bug.
    OffsetOutOfRange {
        /// Offset at which the record write was attempted.
        offset: usize,
        /// Bytes required for the record.
        needed: usize,
        /// Total capacity of the output buffer.
        capacity: usize,
    },
}

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OversizedOption { type_code, len } => write!(
                f,
                "option 0x{:02x} payload of {} bytes exceeds the 255 byte wire limit",
                type_code, len
            ),
            Error::OffsetOutOfRange {
                offset,
                needed,
                capacity,
            } => write!(
                f,
                "record needs {} bytes at offset {} but buffer capacity is {}",
                needed, offset, capacity
            ),
        }
    }
}
