//! Field offset definitions for the configuration record wire format.
//!
//! This module defines the byte offset ranges used to read and write TLV
//! records. Following the smoltcp pattern, all offsets are defined as const
//! ranges or const functions, so record access stays bounds-checked slice
//! indexing rather than manual offset arithmetic.
//!
//! # Wire Format Structure
//!
//! Configuration record:
//! ```text
//! +----------------+-----------------+-------------------------+
//! | TYPE (1 byte)  | LENGTH (1 byte) | PAYLOAD (LENGTH bytes)  |
//! +----------------+-----------------+-------------------------+
//! ```
//!
//! A stream is a back-to-back sequence of such records with no separator,
//! header, or terminator.

#![allow(non_snake_case)]

/// Type alias for a byte range (slice index range).
pub type Field = ::core::ops::Range<usize>;

/// Configuration record field offsets (relative to the record start).
pub mod record {
    use crate::field::Field;

    /// Type code field (1 byte at offset 0).
    ///
    /// Identifies the RF configuration parameter. Unknown codes are valid.
    pub const TYPE: Field = 0..1;

    /// Payload length field (1 byte at offset 1).
    ///
    /// Counts payload bytes only, excluding this two-byte header.
    pub const LENGTH: Field = 1..2;

    /// Record header length in bytes (TYPE + LENGTH).
    pub const HEADER_LEN: usize = LENGTH.end;

    /// Payload field (variable length starting at offset 2).
    ///
    /// # Parameters
    ///
    /// * `length` - The payload length in bytes (from the LENGTH field)
    ///
    /// # Returns
    ///
    /// Field range covering the payload
    pub const fn PAYLOAD(length: usize) -> Field {
        HEADER_LEN..(HEADER_LEN + length)
    }
}
