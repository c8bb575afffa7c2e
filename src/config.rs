//! Configuration option collection and stream codec.
//!
//! [`Config`] accumulates [`ConfigOption`] records in insertion order,
//! serializes them into a single owned buffer with [`Config::build`], and
//! rebuilds the collection from a raw stream with [`Config::parse`].
//! [`RecordIter`] is the underlying zero-copy scanner over a raw stream.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::field;
use crate::options::ConfigOption;

/// Iterator over TLV records in a raw configuration stream.
///
/// Yields `(type_code, payload)` pairs without copying. Scanning is forward
/// only and stops at the first record whose header or payload runs past the
/// end of the stream, so a trailing truncated record is dropped silently
/// rather than reported as an error.
///
/// # Examples
///
/// ```
/// use nci_config_wire::config::RecordIter;
///
/// // One complete record followed by a truncated one.
/// let stream = [0x01, 0x01, 0x05, 0x33, 0x04, 0xAA];
/// let mut records = RecordIter::new(&stream);
/// assert_eq!(records.next(), Some((0x01, &stream[2..3])));
/// assert_eq!(records.next(), None);
/// ```
pub struct RecordIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RecordIter<'a> {
    /// Create a new iterator over a raw configuration stream.
    ///
    /// # Parameters
    /// * `data` - The buffer containing back-to-back TLV records
    pub fn new(data: &'a [u8]) -> Self {
        RecordIter { data, pos: 0 }
    }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = (u8, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let record = &self.data[self.pos..];

        // A record needs its complete two-byte header.
        if record.len() < field::record::HEADER_LEN {
            return None;
        }

        let length = record[field::record::LENGTH.start] as usize;
        let payload = field::record::PAYLOAD(length);

        // An incomplete payload ends the scan.
        if record.len() < payload.end {
            return None;
        }

        self.pos += payload.end;
        Some((record[field::record::TYPE.start], &record[payload]))
    }
}

/// An ordered collection of configuration options with a TLV stream codec.
///
/// Options keep insertion order; duplicate type codes are allowed and
/// preserved. [`Config::build`] serializes the collection into a single
/// owned buffer, [`Config::parse`] rebuilds the collection from one.
///
/// # Examples
///
/// ```
/// use nci_config_wire::config::Config;
///
/// let mut config = Config::new();
/// config.add_byte(0x01, 0x05);
/// config.add(0x33, &[0xAA, 0xBB, 0xCC, 0xDD]);
///
/// let stream = config.build().unwrap();
/// assert_eq!(stream, [0x01, 0x01, 0x05, 0x33, 0x04, 0xAA, 0xBB, 0xCC, 0xDD]);
/// assert_eq!(config.total(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    options: Vec<ConfigOption>,
    total: usize,
}

impl Config {
    /// Create an empty collection.
    pub fn new() -> Self {
        Config::default()
    }

    /// Parse a raw stream into a new collection.
    ///
    /// Equivalent to [`Config::new`] followed by [`Config::parse`].
    ///
    /// # Parameters
    /// * `stream` - The buffer containing back-to-back TLV records
    pub fn from_stream(stream: &[u8]) -> Self {
        let mut config = Config::new();
        config.parse(stream);
        config
    }

    /// Append an option with the given payload.
    ///
    /// Appends unconditionally: no deduplication, no reordering. A repeated
    /// type code produces a repeated record on the wire.
    ///
    /// # Parameters
    /// * `type_code` - The RF configuration parameter code
    /// * `value` - The payload bytes to copy
    pub fn add(&mut self, type_code: u8, value: &[u8]) {
        self.options.push(ConfigOption::new(type_code, value));
    }

    /// Append an option with a single-byte payload.
    ///
    /// # Parameters
    /// * `type_code` - The RF configuration parameter code
    /// * `value` - The one payload byte
    pub fn add_byte(&mut self, type_code: u8, value: u8) {
        self.add(type_code, &[value]);
    }

    /// Append an existing option.
    pub fn add_option(&mut self, option: ConfigOption) {
        self.options.push(option);
    }

    /// Get the collected options in insertion order.
    pub fn options(&self) -> &[ConfigOption] {
        &self.options
    }

    /// Get mutable access to the collected options.
    ///
    /// Supports edit-then-rebuild flows; removing or reordering options is
    /// fine. Changes take effect on the wire at the next [`Config::build`].
    pub fn options_mut(&mut self) -> &mut Vec<ConfigOption> {
        &mut self.options
    }

    /// Get the number of collected options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get the byte size of the stream produced by the last successful
    /// [`Config::build`].
    ///
    /// Zero until a build succeeds, and reset to zero by [`Config::parse`]
    /// and by failed builds. For the live size of the current collection use
    /// [`Config::wire_size`].
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get the byte size the current collection would occupy on the wire.
    ///
    /// # Returns
    /// Sum over all options of payload length plus the two header bytes
    pub fn wire_size(&self) -> usize {
        self.options.iter().map(ConfigOption::wire_size).sum()
    }

    /// Serialize every option into a single owned buffer.
    ///
    /// Records are laid out back to back in insertion order. An empty
    /// collection builds an empty buffer. Payload lengths are validated
    /// before the buffer is allocated: if any option is over-long, nothing
    /// is allocated and nothing is written.
    ///
    /// # Returns
    /// * `Ok(stream)` - The serialized records, owned by the caller
    /// * `Err(Error::OversizedOption)` if any payload exceeds
    ///   [`ConfigOption::MAX_VALUE_LEN`]
    /// * `Err(Error::OffsetOutOfRange)` if a record write runs past the
    ///   buffer end (internal consistency check)
    pub fn build(&mut self) -> Result<Vec<u8>> {
        self.total = 0;

        for option in &self.options {
            if option.len() > ConfigOption::MAX_VALUE_LEN {
                return Err(Error::OversizedOption {
                    type_code: option.type_code(),
                    len: option.len(),
                });
            }
        }

        if self.options.is_empty() {
            return Ok(Vec::new());
        }

        let total = self.wire_size();
        let mut stream = vec![0u8; total];
        let mut offset = 0;
        for option in &self.options {
            offset = option.push(&mut stream, offset)?;
        }

        self.total = total;
        Ok(stream)
    }

    /// Rebuild the collection from a raw stream.
    ///
    /// Any previously collected options are discarded first. Scanning is
    /// forward only and never fails: an empty stream leaves the collection
    /// empty, and a trailing truncated record is dropped silently. Payload
    /// bytes are copied out of `stream`, which is not retained.
    ///
    /// # Parameters
    /// * `stream` - The buffer containing back-to-back TLV records
    ///
    /// # Examples
    ///
    /// ```
    /// use nci_config_wire::config::Config;
    ///
    /// let mut config = Config::new();
    /// // The second record claims 4 payload bytes but only 2 are present.
    /// config.parse(&[0x01, 0x01, 0x05, 0x33, 0x04, 0xAA, 0xBB]);
    ///
    /// assert_eq!(config.len(), 1);
    /// assert_eq!(config.options()[0].type_code(), 0x01);
    /// ```
    pub fn parse(&mut self, stream: &[u8]) {
        self.options.clear();
        self.total = 0;

        for (type_code, payload) in RecordIter::new(stream) {
            self.options.push(ConfigOption::new(type_code, payload));
        }
    }
}

/// Renders one option per line, in insertion order.
impl core::fmt::Display for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, option) in self.options.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", option)?;
        }
        Ok(())
    }
}
