//! Partition type codes
//!
//! Display lookup only. Parsing and composing never consult this table, so
//! unknown codes round-trip unchanged.

use core::fmt;

/// MBR partition type code (byte 4 of an entry)
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilesystemType(pub u8);

impl FilesystemType {
    pub const EMPTY: Self = Self(0x00);
    pub const FAT_12: Self = Self(0x01);
    pub const FAT_16_SMALL: Self = Self(0x04);
    pub const EXTENDED: Self = Self(0x05);
    pub const FAT_16: Self = Self(0x06);
    pub const NTFS: Self = Self(0x07);
    pub const FAT_32: Self = Self(0x0B);
    pub const FAT_32_LBA: Self = Self(0x0C);
    pub const FAT_16_LBA: Self = Self(0x0E);
    pub const EXTENDED_LBA: Self = Self(0x0F);
    pub const LINUX_SWAP: Self = Self(0x82);
    pub const LINUX: Self = Self(0x83);
    pub const LINUX_LVM: Self = Self(0x8E);
    pub const GPT_PROTECTIVE: Self = Self(0xEE);
    pub const EFI_SYSTEM: Self = Self(0xEF);

    const KNOWN: [(Self, &'static str); 15] = [
        (Self::EMPTY, "Empty"),
        (Self::FAT_12, "FAT12"),
        (Self::FAT_16_SMALL, "FAT16 (<32MB)"),
        (Self::EXTENDED, "Extended"),
        (Self::FAT_16, "FAT16"),
        (Self::NTFS, "NTFS/exFAT"),
        (Self::FAT_32, "FAT32"),
        (Self::FAT_32_LBA, "FAT32 (LBA)"),
        (Self::FAT_16_LBA, "FAT16 (LBA)"),
        (Self::EXTENDED_LBA, "Extended (LBA)"),
        (Self::LINUX_SWAP, "Linux Swap"),
        (Self::LINUX, "Linux"),
        (Self::LINUX_LVM, "Linux LVM"),
        (Self::GPT_PROTECTIVE, "GPT Protective"),
        (Self::EFI_SYSTEM, "EFI System"),
    ];

    pub const fn code(&self) -> u8 {
        self.0
    }

    /// Display name, if the code is known
    pub fn name(&self) -> Option<&'static str> {
        Self::KNOWN
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, name)| *name)
    }

    pub fn is_extended(&self) -> bool {
        *self == Self::EXTENDED || *self == Self::EXTENDED_LBA
    }
}

impl From<u8> for FilesystemType {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<FilesystemType> for u8 {
    fn from(kind: FilesystemType) -> Self {
        kind.0
    }
}

impl fmt::Display for FilesystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown ({:#04x})", self.0),
        }
    }
}
