//! Error types for MBR operations

use core::fmt;

/// Result type for MBR operations
pub type Result<T> = core::result::Result<T, MbrError>;

/// Binary structure an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// 3-byte CHS tuple
    ChsTuple,
    /// 16-byte partition entry
    PartitionEntry,
    /// Partition table region (1 to 4 entries)
    PartitionTable,
    /// Full 512-byte boot record
    BootRecord,
}

impl Structure {
    /// Human-readable name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ChsTuple => "CHS tuple",
            Self::PartitionEntry => "Partition entry",
            Self::PartitionTable => "Partition table",
            Self::BootRecord => "Boot record",
        }
    }

    /// Accepted input sizes, for error messages
    pub const fn expected_len(&self) -> &'static str {
        match self {
            Self::ChsTuple => "3 bytes",
            Self::PartitionEntry => "16 bytes",
            Self::PartitionTable => "16, 32, 48 or 64 bytes",
            Self::BootRecord => "512 bytes",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while parsing or composing an MBR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbrError {
    /// Input buffer size does not match the structure being parsed
    InvalidLength {
        /// Structure that was being parsed
        structure: Structure,
        /// Length of the buffer handed in
        actual: usize,
    },

    /// CHS head above 254
    HeadOutOfRange(u8),

    /// CHS sector above 63
    SectorOutOfRange(u8),

    /// CHS cylinder above 1023
    CylinderOutOfRange(u16),

    /// Boot code longer than 446 bytes
    BootcodeTooLong(usize),

    /// Signature is not 0xAA55
    InvalidSignature(u16),

    /// All four partition slots are taken
    TableFull,
}

impl MbrError {
    /// Buffer had the wrong size for the structure
    pub const fn is_length_error(&self) -> bool {
        matches!(self, Self::InvalidLength { .. })
    }

    /// A field is out of range, or the signature or boot code is invalid
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::HeadOutOfRange(_)
                | Self::SectorOutOfRange(_)
                | Self::CylinderOutOfRange(_)
                | Self::BootcodeTooLong(_)
                | Self::InvalidSignature(_)
        )
    }
}

impl fmt::Display for MbrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { structure, actual } => write!(
                f,
                "{} data must be {}, got {} bytes",
                structure,
                structure.expected_len(),
                actual
            ),
            Self::HeadOutOfRange(head) => {
                write!(f, "Head value must be between 0 and 254, got {}", head)
            }
            Self::SectorOutOfRange(sector) => {
                write!(f, "Sector value must be between 0 and 63, got {}", sector)
            }
            Self::CylinderOutOfRange(cylinder) => {
                write!(f, "Cylinder value must be between 0 and 1023, got {}", cylinder)
            }
            Self::BootcodeTooLong(len) => {
                write!(f, "Bootcode must be 446 bytes or less, got {}", len)
            }
            Self::InvalidSignature(sig) => write!(f, "Incorrect MBR signature {:#06x}", sig),
            Self::TableFull => write!(f, "Partition table already holds 4 entries"),
        }
    }
}
