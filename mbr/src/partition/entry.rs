//! Partition table entry (16 bytes)
//!
//! ```text
//! 0      boot indicator (0x80 = active)
//! 1..4   start CHS
//! 4      partition type
//! 5..8   end CHS
//! 8..12  starting LBA (u32 LE)
//! 12..16 sector count (u32 LE)
//! ```

use core::fmt;

use gpt_disk_types::{BlockSize, U32Le};

use crate::chs::ChsTuple;
use crate::error::{MbrError, Result, Structure};
use crate::filesystem::FilesystemType;
use crate::types::{BOOTABLE, CHS_SIZE, NOT_BOOTABLE, PARTITION_ENTRY_SIZE};

const BOOT_INDICATOR_OFFSET: usize = 0;
const START_CHS_OFFSET: usize = 1;
const TYPE_OFFSET: usize = 4;
const END_CHS_OFFSET: usize = 5;
const LBA_OFFSET: usize = 8;
const SIZE_OFFSET: usize = 12;

/// One row of the partition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionEntry {
    /// Active partition flag
    pub bootflag: bool,
    /// CHS address of the first sector
    pub start_chs: ChsTuple,
    /// Partition type code, see [`FilesystemType`]
    pub partition_type: u8,
    /// CHS address of the last sector
    pub end_chs: ChsTuple,
    /// First sector (LBA)
    pub lba: u32,
    /// Number of sectors
    pub size: u32,
}

impl PartitionEntry {
    /// Create an entry covering `size` sectors from `lba`
    ///
    /// CHS, type and boot flag start zeroed and are assigned afterwards.
    pub const fn new(lba: u32, size: u32) -> Self {
        Self {
            bootflag: false,
            start_chs: ChsTuple::new(0, 0, 0),
            partition_type: 0,
            end_chs: ChsTuple::new(0, 0, 0),
            lba,
            size,
        }
    }

    /// Parse an entry from its 16-byte form
    ///
    /// Only 0x80 marks the entry bootable; every other indicator value
    /// decodes as inactive.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let bytes: &[u8; PARTITION_ENTRY_SIZE] =
            data.try_into().map_err(|_| MbrError::InvalidLength {
                structure: Structure::PartitionEntry,
                actual: data.len(),
            })?;

        Ok(Self {
            bootflag: bytes[BOOT_INDICATOR_OFFSET] == BOOTABLE,
            start_chs: ChsTuple::decode(read_chs(bytes, START_CHS_OFFSET)),
            partition_type: bytes[TYPE_OFFSET],
            end_chs: ChsTuple::decode(read_chs(bytes, END_CHS_OFFSET)),
            lba: read_u32(bytes, LBA_OFFSET),
            size: read_u32(bytes, SIZE_OFFSET),
        })
    }

    /// Compose the entry into its 16-byte form, validating first
    pub fn compose(&self) -> Result<[u8; PARTITION_ENTRY_SIZE]> {
        self.validate()?;

        let mut out = [0u8; PARTITION_ENTRY_SIZE];
        out[BOOT_INDICATOR_OFFSET] = if self.bootflag { BOOTABLE } else { NOT_BOOTABLE };
        out[START_CHS_OFFSET..START_CHS_OFFSET + CHS_SIZE]
            .copy_from_slice(&self.start_chs.compose()?);
        out[TYPE_OFFSET] = self.partition_type;
        out[END_CHS_OFFSET..END_CHS_OFFSET + CHS_SIZE].copy_from_slice(&self.end_chs.compose()?);
        out[LBA_OFFSET..LBA_OFFSET + 4].copy_from_slice(&U32Le::from_u32(self.lba).0);
        out[SIZE_OFFSET..SIZE_OFFSET + 4].copy_from_slice(&U32Le::from_u32(self.size).0);
        Ok(out)
    }

    /// Validate both CHS tuples
    ///
    /// Type and size ranges are carried by the `u8`/`u32` field types.
    pub fn validate(&self) -> Result<()> {
        self.start_chs.validate()?;
        self.end_chs.validate()
    }

    /// Partition size in bytes (sector count * 512)
    pub fn real_size_bytes(&self) -> u64 {
        u64::from(self.size) * BlockSize::BS_512.to_u64()
    }

    /// Slot holds a partition (non-zero type or size)
    pub fn is_used(&self) -> bool {
        self.partition_type != 0 || self.size != 0
    }

    pub fn filesystem_type(&self) -> FilesystemType {
        FilesystemType(self.partition_type)
    }
}

fn read_chs(bytes: &[u8; PARTITION_ENTRY_SIZE], offset: usize) -> [u8; CHS_SIZE] {
    [bytes[offset], bytes[offset + 1], bytes[offset + 2]]
}

fn read_u32(bytes: &[u8; PARTITION_ENTRY_SIZE], offset: usize) -> u32 {
    U32Le([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]]).to_u32()
}

impl fmt::Display for PartitionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LBA:{}, Size:{}, Boot:{}, Type:{:#04x}",
            self.lba, self.size, self.bootflag, self.partition_type
        )
    }
}
