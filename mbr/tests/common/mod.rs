//! Common test utilities and mock block devices

#![allow(dead_code)]

pub mod builder;
pub use builder::SectorBuilder;

use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};
use std::io;

/// In-memory block device for testing
#[derive(Debug, Clone)]
pub struct MemoryBlockDevice {
    pub data: Vec<u8>,
    pub block_size: usize,
}

impl MemoryBlockDevice {
    /// Create a new memory block device from raw data
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            block_size: 512,
        }
    }

    /// Disk of `blocks` sectors with `sector0` as its first block
    pub fn with_boot_sector(sector0: &[u8; 512], blocks: usize) -> Self {
        let mut data = vec![0u8; blocks * 512];
        data[..512].copy_from_slice(sector0);
        Self::new(data)
    }

    /// Read sector 0 the way a caller hands it to the codec
    pub fn read_sector0(&mut self) -> [u8; 512] {
        let mut sector = [0u8; 512];
        self.read_blocks(Lba(0), &mut sector)
            .expect("sector 0 readable");
        sector
    }

    pub fn write_sector0(&mut self, sector: &[u8; 512]) {
        self.write_blocks(Lba(0), sector).expect("sector 0 writable");
        self.flush().expect("flush");
    }
}

impl BlockIo for MemoryBlockDevice {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::new(self.block_size as u32).expect("valid block size")
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok((self.data.len() / self.block_size) as u64)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + dst.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read beyond end of device",
            ));
        }
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
        Ok(())
    }

    fn write_blocks(&mut self, start_lba: Lba, src: &[u8]) -> Result<(), Self::Error> {
        let offset = start_lba.0 as usize * self.block_size;
        if offset + src.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "write beyond end of device",
            ));
        }
        self.data[offset..offset + src.len()].copy_from_slice(src);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
