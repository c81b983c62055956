//! Partition table and its entries
//!
//! The 64-byte region at offset 446 holds four 16-byte entries. Each entry
//! embeds two CHS tuples alongside its LBA range.

pub mod entry;
pub mod table;

pub use entry::PartitionEntry;
pub use table::{Advisory, PartitionTable};
