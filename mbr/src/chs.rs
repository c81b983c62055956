//! Cylinder-Head-Sector geometry tuple
//!
//! Each partition entry carries two of these. The 3-byte layout packs a
//! 10-bit cylinder around a 6-bit sector:
//!
//! ```text
//! byte 0: head
//! byte 1: bits 0-5 = sector, bits 6-7 = cylinder bits 8-9
//! byte 2: cylinder bits 0-7
//! ```

use core::fmt;

use crate::error::{MbrError, Result, Structure};
use crate::types::{CHS_SIZE, MAX_CYLINDER, MAX_HEAD, MAX_SECTOR};

/// Low 6 bits of byte 1
const SECTOR_MASK: u8 = 0x3F;

/// Cylinder bits 8-9 sit in the top of byte 1
const CYLINDER_HIGH_SHIFT: u32 = 6;

/// CHS disk geometry tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChsTuple {
    /// Cylinder, 0-1023
    pub cylinder: u16,
    /// Head, 0-254
    pub head: u8,
    /// Sector, 0-63
    pub sector: u8,
}

impl ChsTuple {
    /// Create a tuple from raw values. Ranges are checked on compose.
    pub const fn new(cylinder: u16, head: u8, sector: u8) -> Self {
        Self {
            cylinder,
            head,
            sector,
        }
    }

    /// Parse a CHS tuple from its 3-byte form
    ///
    /// Only the length is checked. Decoded values are kept as found.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let bytes: [u8; CHS_SIZE] = data.try_into().map_err(|_| MbrError::InvalidLength {
            structure: Structure::ChsTuple,
            actual: data.len(),
        })?;
        Ok(Self::decode(bytes))
    }

    pub(crate) const fn decode(bytes: [u8; CHS_SIZE]) -> Self {
        let [head, packed, cylinder_low] = bytes;
        let cylinder_high = (packed >> CYLINDER_HIGH_SHIFT) as u16;
        Self {
            cylinder: cylinder_low as u16 | (cylinder_high << 8),
            head,
            sector: packed & SECTOR_MASK,
        }
    }

    /// Compose the tuple into its 3-byte form, validating first
    pub fn compose(&self) -> Result<[u8; CHS_SIZE]> {
        self.validate()?;

        let cylinder_high = (self.cylinder >> 8) as u8;
        Ok([
            self.head,
            self.sector | (cylinder_high << CYLINDER_HIGH_SHIFT),
            (self.cylinder & 0xFF) as u8,
        ])
    }

    /// Check every field is within its encodable range
    pub fn validate(&self) -> Result<()> {
        if self.head > MAX_HEAD {
            return Err(MbrError::HeadOutOfRange(self.head));
        }
        if self.sector > MAX_SECTOR {
            return Err(MbrError::SectorOutOfRange(self.sector));
        }
        if self.cylinder > MAX_CYLINDER {
            return Err(MbrError::CylinderOutOfRange(self.cylinder));
        }
        Ok(())
    }

    /// True when the tuple sits at the 8.4GB CHS ceiling
    ///
    /// All three fields must be saturated; partitions past the limit store
    /// this value and rely on LBA instead.
    pub const fn is_beyond_limit(&self) -> bool {
        self.cylinder >= MAX_CYLINDER && self.head >= MAX_HEAD && self.sector >= MAX_SECTOR
    }
}

impl fmt::Display for ChsTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C:{}, H:{}, S:{}", self.cylinder, self.head, self.sector)
    }
}
