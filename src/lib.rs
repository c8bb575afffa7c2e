#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! # nci-config-wire
//!
//! This crate provides the means for building and parsing the TLV encoded
//! configuration option streams exchanged with an NCI (NFC Controller Interface)
//! radio controller. It is designed to be used in embedded environments and is a
//! `no_std` crate (with `alloc`) by default.
//!
//! ## Features
//!
//! - `no_std` compatible by default (requires `alloc`)
//! - Owned, copy-in/copy-out payloads with no lifetime entanglement
//! - Truncation-tolerant parsing that never reads out of bounds
//! - Static name table covering every known RF configuration parameter
//! - Wire format access through bounds-checked field ranges
//!
//! ## Architecture
//!
//! - `config` - Option collection with the stream build/parse codec
//! - `options` - Single TLV record type and its wire serialization
//! - `types` - Static type code to parameter name table
//! - `error` - Error type for serialization failures
//! - `field` - Field offset definitions
//!
//! ## Wire Format
//!
//! ```text
//! record := type(1 byte) length(1 byte) payload(length bytes)
//! stream := record*
//! ```
//!
//! Records follow each other back to back with no separator, header, or
//! terminator. A stream that ends in the middle of a record is treated as
//! ending before that record.

extern crate alloc;

/// Option collection with the stream build/parse codec.
pub mod config;

/// Error type for serialization failures.
pub mod error;

/// Field offset definitions for the record wire format.
pub mod field;

/// Single TLV record type and its wire serialization.
pub mod options;

/// Static type code to parameter name table.
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude;
