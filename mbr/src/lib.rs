//! Master Boot Record Codec
//!
//! A `no_std` codec for the 512-byte Master Boot Record sector.
//!
//! # Overview
//!
//! The MBR is the first sector of a BIOS-partitioned disk. This crate provides:
//! - Parsing of a raw sector into boot code, partition table and signature
//! - Composition back into a byte-exact sector
//! - Validation that refuses to emit a structure which would not re-parse
//! - A filesystem-type code table and a small boot-code catalog
//!
//! # Architecture
//!
//! The implementation is layered, each level delegating to the one below:
//! 1. **Record layer** - 446 bytes boot code, 64-byte table, 2-byte signature
//! 2. **Table layer** - up to four 16-byte entries in slot order
//! 3. **Entry layer** - boot flag, type code, LBA range and two CHS tuples
//! 4. **CHS layer** - packed 3-byte cylinder/head/sector geometry
//!
//! Parsing is permissive: only the buffer length is checked, decoded values
//! are stored as found. Composition is strict: every level validates before
//! encoding, so a composed buffer never carries an out-of-range field.
//!
//! # Usage
//!
//! ```ignore
//! use mbr::{MasterBootRecord, PartitionEntry, ChsTuple};
//!
//! let mut record = MasterBootRecord::parse(&sector)?;
//!
//! let mut entry = PartitionEntry::new(2048, 204800);
//! entry.bootflag = true;
//! entry.partition_type = mbr::FilesystemType::NTFS.code();
//! entry.start_chs = ChsTuple::new(0, 0, 1);
//! record.partition_table.add_partition(entry)?;
//!
//! let bytes = record.compose()?;
//! ```
//!
//! # Advisories
//!
//! A table with zero or several bootable entries still composes. The
//! condition is returned by `validate()` and written to the [`logger`]
//! buffer whenever the table is composed.

#![no_std]

extern crate alloc;

pub mod logger;

pub mod bootcode;
pub mod chs;
pub mod error;
pub mod filesystem;
pub mod partition;
pub mod record;
pub mod types;

pub use bootcode::Bootcode;
pub use chs::ChsTuple;
pub use error::{MbrError, Result, Structure};
pub use filesystem::FilesystemType;
pub use partition::{Advisory, PartitionEntry, PartitionTable};
pub use record::MasterBootRecord;
