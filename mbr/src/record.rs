//! Master Boot Record (512 bytes)
//!
//! ```text
//! 0..446   boot code
//! 446..510 partition table
//! 510..512 signature (u16 LE, 0xAA55)
//! ```

use alloc::vec::Vec;
use core::fmt;

use gpt_disk_types::U16Le;

use crate::error::{MbrError, Result, Structure};
use crate::log_info;
use crate::partition::{Advisory, PartitionTable};
use crate::types::{
    BOOTCODE_SIZE, BOOT_SIGNATURE, PARTITION_TABLE_OFFSET, PARTITION_TABLE_SIZE, SECTOR_SIZE,
    SIGNATURE_OFFSET,
};

/// Boot code, partition table and signature of sector 0
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MasterBootRecord {
    /// Raw boot code, padded with zeros to 446 bytes on compose
    pub bootcode: Vec<u8>,
    pub partition_table: PartitionTable,
    pub signature: u16,
}

impl MasterBootRecord {
    /// Blank record: no boot code, empty table, zero signature
    pub const fn new() -> Self {
        Self {
            bootcode: Vec::new(),
            partition_table: PartitionTable::new(),
            signature: 0,
        }
    }

    /// Parse a record from a 512-byte sector
    ///
    /// The signature is stored as found; a wrong one only fails on compose.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() != SECTOR_SIZE {
            return Err(MbrError::InvalidLength {
                structure: Structure::BootRecord,
                actual: data.len(),
            });
        }

        let table_end = PARTITION_TABLE_OFFSET + PARTITION_TABLE_SIZE;
        let record = Self {
            bootcode: data[..BOOTCODE_SIZE].to_vec(),
            partition_table: PartitionTable::parse(&data[PARTITION_TABLE_OFFSET..table_end])?,
            signature: U16Le([data[SIGNATURE_OFFSET], data[SIGNATURE_OFFSET + 1]]).to_u16(),
        };

        if !record.is_valid_signature() {
            log_info!("Parsed boot record has no 0xAA55 signature");
        }
        Ok(record)
    }

    /// Compose the record into a 512-byte sector
    ///
    /// Short boot code is zero-padded, never truncated. Nothing is returned
    /// unless every level validates.
    pub fn compose(&self) -> Result<[u8; SECTOR_SIZE]> {
        self.validate()?;

        let mut out = [0u8; SECTOR_SIZE];
        out[..self.bootcode.len()].copy_from_slice(&self.bootcode);
        out[PARTITION_TABLE_OFFSET..SIGNATURE_OFFSET]
            .copy_from_slice(&self.partition_table.compose()?);
        out[SIGNATURE_OFFSET..].copy_from_slice(&U16Le::from_u16(self.signature).0);
        Ok(out)
    }

    pub fn is_valid_signature(&self) -> bool {
        self.signature == BOOT_SIGNATURE
    }

    /// Validate boot code length and signature
    ///
    /// Returns the table's boot flag advisories on success. Entry ranges are
    /// checked by [`PartitionTable::compose`].
    pub fn validate(&self) -> Result<Vec<Advisory>> {
        let advisories = self.partition_table.validate();

        if self.bootcode.len() > BOOTCODE_SIZE {
            return Err(MbrError::BootcodeTooLong(self.bootcode.len()));
        }
        if !self.is_valid_signature() {
            return Err(MbrError::InvalidSignature(self.signature));
        }
        Ok(advisories)
    }
}

impl fmt::Display for MasterBootRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bootcode length:{}, Sig:{:#06x}",
            self.bootcode.len(),
            self.signature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::PartitionEntry;
    use alloc::string::ToString;
    use alloc::vec;

    fn signed_sector() -> [u8; SECTOR_SIZE] {
        let mut sector = [0u8; SECTOR_SIZE];
        sector[510] = 0x55;
        sector[511] = 0xAA;
        sector
    }

    #[test]
    fn test_parse_regions() {
        let mut sector = signed_sector();
        sector[0] = 0xEB;
        sector[445] = 0x90;
        sector[446] = 0x80;

        let record = MasterBootRecord::parse(&sector).unwrap();
        assert_eq!(record.bootcode.len(), BOOTCODE_SIZE);
        assert_eq!(record.bootcode[0], 0xEB);
        assert_eq!(record.bootcode[445], 0x90);
        assert_eq!(record.partition_table.count(), 4);
        assert!(record.partition_table.get(0).unwrap().bootflag);
        assert_eq!(record.signature, 0xAA55);
        assert!(record.is_valid_signature());
    }

    #[test]
    fn test_parse_wrong_length() {
        for len in [0usize, 511, 513] {
            let data = vec![0u8; len];
            assert_eq!(
                MasterBootRecord::parse(&data),
                Err(MbrError::InvalidLength {
                    structure: Structure::BootRecord,
                    actual: len,
                })
            );
        }
    }

    #[test]
    fn test_parse_keeps_bad_signature() {
        let record = MasterBootRecord::parse(&[0u8; SECTOR_SIZE]).unwrap();
        assert_eq!(record.signature, 0);
        assert_eq!(record.compose(), Err(MbrError::InvalidSignature(0)));
    }

    #[test]
    fn test_bootcode_padding() {
        let mut record = MasterBootRecord::new();
        record.bootcode = vec![0xAB; 10];
        record.signature = BOOT_SIGNATURE;

        let bytes = record.compose().unwrap();
        assert!(bytes[..10].iter().all(|&b| b == 0xAB));
        assert!(bytes[10..BOOTCODE_SIZE].iter().all(|&b| b == 0));
        assert_eq!(record.bootcode.len(), 10);
    }

    #[test]
    fn test_bootcode_too_long() {
        let mut record = MasterBootRecord::new();
        record.bootcode = vec![0; BOOTCODE_SIZE + 1];
        record.signature = BOOT_SIGNATURE;
        assert_eq!(record.validate(), Err(MbrError::BootcodeTooLong(447)));
        assert_eq!(record.compose(), Err(MbrError::BootcodeTooLong(447)));

        record.bootcode.truncate(BOOTCODE_SIZE);
        assert!(record.compose().is_ok());
    }

    #[test]
    fn test_validate_returns_advisories() {
        let mut record = MasterBootRecord::new();
        record.signature = BOOT_SIGNATURE;
        assert_eq!(record.validate(), Ok(vec![Advisory::NoBootPartition]));

        let mut entry = PartitionEntry::new(2048, 1024);
        entry.bootflag = true;
        record.partition_table.add_partition(entry).unwrap();
        assert_eq!(record.validate(), Ok(Vec::new()));
    }

    #[test]
    fn test_display() {
        let mut record = MasterBootRecord::new();
        record.signature = BOOT_SIGNATURE;
        assert_eq!(record.to_string(), "Bootcode length:0, Sig:0xaa55");
    }
}
