use crate::{
    impl_read_for_datatype, impl_read_slice,
    qoi::grammar::{Opcode, QoiHeader, TagStats, QOI_HEADER_SIZE},
};
use anyhow::{ensure, Result};
use log::warn;

#[derive(Debug)]
pub struct QoiDecoder<'a> {
    cursor: usize,
    data: &'a [u8],
}

impl<'a> QoiDecoder<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { cursor: 0, data }
    }

    impl_read_slice!();

    impl_read_for_datatype!(read_u8, u8);
    impl_read_for_datatype!(read_u32, u32);

    /// Parses the fixed 14-byte header, leaving the cursor on the first
    /// opcode byte.
    pub fn decode_header(&mut self) -> Result<QoiHeader> {
        ensure!(
            self.data.len() >= QOI_HEADER_SIZE,
            "EOF: QOI header needs {} bytes, found {}.",
            QOI_HEADER_SIZE,
            self.data.len()
        );

        ensure!(
            self.read_slice(4)? == b"qoif",
            "Invalid QOI file: incorrect magic bytes."
        );

        let width = self.read_u32()?;
        let height = self.read_u32()?;
        let channels = self.read_u8()?;
        let colorspace = self.read_u8()?;

        if !matches!(channels, 3 | 4) {
            warn!("Unrecognized channel count {channels}, expected 3 or 4");
        }

        if !matches!(colorspace, 0 | 1) {
            warn!("Unrecognized colorspace {colorspace}, expected 0 or 1");
        }

        Ok(QoiHeader {
            width,
            height,
            channels,
            colorspace,
        })
    }

    /// Walks the opcode stream until the image's pixel budget is spent,
    /// tallying each chunk into `stats`. Bytes past the budget (the end
    /// marker) are left unread.
    pub fn scan_opcodes(&mut self, header: &QoiHeader, stats: &mut TagStats) -> Result<()> {
        let mut pixel_budget = header.pixel_count();

        while pixel_budget > 0 {
            ensure!(
                self.cursor < self.data.len(),
                "EOF: opcode stream ended with {pixel_budget} pixels unaccounted for."
            );

            let tag = self.read_u8()?;
            let opcode = Opcode::classify(tag);

            ensure!(
                self.cursor + opcode.payload_len() <= self.data.len(),
                "EOF: truncated {:?} chunk at offset {}.",
                opcode,
                self.cursor
            );
            self.cursor += opcode.payload_len();

            let pixels = opcode.pixels_covered(tag);
            stats.record(opcode, pixels)?;

            // A malformed run may promise more pixels than the image has
            // left; clamp instead of wrapping.
            pixel_budget = pixel_budget.saturating_sub(u64::from(pixels));
        }

        Ok(())
    }
}
