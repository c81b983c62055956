/// Builds raw boot sectors byte by byte, without going through the codec
pub struct SectorBuilder {
    data: [u8; 512],
}

impl SectorBuilder {
    pub fn new() -> Self {
        Self { data: [0u8; 512] }
    }

    pub fn bootcode(mut self, code: &[u8]) -> Self {
        self.data[..code.len()].copy_from_slice(code);
        self
    }

    /// Raw 16-byte entry at `slot`; CHS values given as (cylinder, head, sector)
    #[allow(clippy::too_many_arguments)]
    pub fn entry(
        mut self,
        slot: usize,
        indicator: u8,
        start: (u16, u8, u8),
        kind: u8,
        end: (u16, u8, u8),
        lba: u32,
        size: u32,
    ) -> Self {
        let base = 446 + slot * 16;
        self.data[base] = indicator;
        Self::write_chs(&mut self.data[base + 1..base + 4], start);
        self.data[base + 4] = kind;
        Self::write_chs(&mut self.data[base + 5..base + 8], end);
        self.data[base + 8..base + 12].copy_from_slice(&lba.to_le_bytes());
        self.data[base + 12..base + 16].copy_from_slice(&size.to_le_bytes());
        self
    }

    pub fn signature(mut self, signature: u16) -> Self {
        self.data[510..512].copy_from_slice(&signature.to_le_bytes());
        self
    }

    pub fn build(self) -> [u8; 512] {
        self.data
    }

    fn write_chs(dst: &mut [u8], (cylinder, head, sector): (u16, u8, u8)) {
        dst[0] = head;
        dst[1] = (sector & 0x3F) | (((cylinder >> 8) as u8 & 0x03) << 6);
        dst[2] = (cylinder & 0xFF) as u8;
    }
}
