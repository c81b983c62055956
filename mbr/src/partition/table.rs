//! Partition table (up to four entries, 64 bytes on disk)

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{MbrError, Result, Structure};
use crate::log_warn;
use crate::partition::entry::PartitionEntry;
use crate::types::{MAX_PARTITIONS, PARTITION_ENTRY_SIZE, PARTITION_TABLE_SIZE};

/// Non-fatal finding about a partition table
///
/// Advisories never block composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// No entry has the boot flag set
    NoBootPartition,
    /// More than one entry has the boot flag set
    MultipleBootPartitions(usize),
}

impl Advisory {
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoBootPartition => "No boot partition defined",
            Self::MultipleBootPartitions(_) => "Multiple boot partitions defined",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBootPartition => f.write_str(self.message()),
            Self::MultipleBootPartitions(count) => write!(f, "{} ({})", self.message(), count),
        }
    }
}

/// Partition table, entries kept in disk slot order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartitionTable {
    partitions: [Option<PartitionEntry>; MAX_PARTITIONS],
    count: usize,
}

impl PartitionTable {
    pub const fn new() -> Self {
        Self {
            partitions: [None; MAX_PARTITIONS],
            count: 0,
        }
    }

    /// Parse a partition table from binary form
    ///
    /// Accepts 1 to 4 whole entries, so a partial table region can be
    /// parsed on its own. Slot index is the chunk index.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.is_empty()
            || data.len() % PARTITION_ENTRY_SIZE != 0
            || data.len() > PARTITION_TABLE_SIZE
        {
            return Err(MbrError::InvalidLength {
                structure: Structure::PartitionTable,
                actual: data.len(),
            });
        }

        let mut table = Self::new();
        for chunk in data.chunks_exact(PARTITION_ENTRY_SIZE) {
            table.add_partition(PartitionEntry::parse(chunk)?)?;
        }
        Ok(table)
    }

    /// Compose the table into its 64-byte form
    ///
    /// Advisories go to the log buffer. Any entry failing validation aborts
    /// the whole table. Unused slots are zero.
    pub fn compose(&self) -> Result<[u8; PARTITION_TABLE_SIZE]> {
        for advisory in self.validate() {
            log_warn!(advisory.message());
        }

        let mut out = [0u8; PARTITION_TABLE_SIZE];
        for (slot, entry) in self.iter().enumerate() {
            let offset = slot * PARTITION_ENTRY_SIZE;
            out[offset..offset + PARTITION_ENTRY_SIZE].copy_from_slice(&entry.compose()?);
        }
        Ok(out)
    }

    /// Count boot flags. Anything other than exactly one is reported, never
    /// rejected.
    pub fn validate(&self) -> Vec<Advisory> {
        match self.iter().filter(|p| p.bootflag).count() {
            0 => vec![Advisory::NoBootPartition],
            1 => Vec::new(),
            n => vec![Advisory::MultipleBootPartitions(n)],
        }
    }

    /// First entry (lowest slot) with the boot flag set
    pub fn boot_partition(&self) -> Option<&PartitionEntry> {
        self.iter().find(|p| p.bootflag)
    }

    /// Append an entry to the next free slot
    pub fn add_partition(&mut self, entry: PartitionEntry) -> Result<()> {
        if self.count >= MAX_PARTITIONS {
            return Err(MbrError::TableFull);
        }

        self.partitions[self.count] = Some(entry);
        self.count += 1;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.partitions = [None; MAX_PARTITIONS];
        self.count = 0;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, slot: usize) -> Option<&PartitionEntry> {
        if slot < self.count {
            self.partitions[slot].as_ref()
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut PartitionEntry> {
        if slot < self.count {
            self.partitions[slot].as_mut()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartitionEntry> {
        self.partitions[..self.count]
            .iter()
            .filter_map(|p| p.as_ref())
    }
}

impl fmt::Display for PartitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Partitions:{}", self.count)
    }
}
