//! Layout constants for the MBR sector

/// Size of the whole boot sector
pub const SECTOR_SIZE: usize = 512;

/// Boot code region at the start of the sector
pub const BOOTCODE_SIZE: usize = 446;

/// Partition table starts right after the boot code
pub const PARTITION_TABLE_OFFSET: usize = BOOTCODE_SIZE;

/// Four entries of 16 bytes
pub const PARTITION_TABLE_SIZE: usize = 64;

/// Size of one partition table row
pub const PARTITION_ENTRY_SIZE: usize = 16;

/// Number of primary partition slots
pub const MAX_PARTITIONS: usize = PARTITION_TABLE_SIZE / PARTITION_ENTRY_SIZE;

/// Signature occupies the last two bytes
pub const SIGNATURE_OFFSET: usize = PARTITION_TABLE_OFFSET + PARTITION_TABLE_SIZE;

/// Boot signature, stored little-endian as 0x55 0xAA
pub const BOOT_SIGNATURE: u16 = 0xAA55;

/// Packed CHS tuple size
pub const CHS_SIZE: usize = 3;

/// Boot indicator for an active partition
pub const BOOTABLE: u8 = 0x80;

/// Boot indicator for an inactive partition
pub const NOT_BOOTABLE: u8 = 0x00;

/// Highest cylinder a CHS tuple can address (10 bits)
pub const MAX_CYLINDER: u16 = 1023;

/// Highest head value accepted on compose
pub const MAX_HEAD: u8 = 254;

/// Highest sector value a CHS tuple can hold (6 bits)
pub const MAX_SECTOR: u8 = 63;

const _: () = assert!(SIGNATURE_OFFSET + 2 == SECTOR_SIZE);
const _: () = assert!(MAX_PARTITIONS == 4);
