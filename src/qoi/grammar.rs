use anyhow::{anyhow, Result};

/// Fixed byte length of the QOI header: magic, dimensions, channels,
/// colorspace.
pub const QOI_HEADER_SIZE: usize = 14;

pub const QOI_OP_RGB: u8 = 0xFE;
pub const QOI_OP_RGBA: u8 = 0xFF;
pub const QOI_OP_INDEX: u8 = 0x00;
pub const QOI_OP_DIFF: u8 = 0x40;
pub const QOI_OP_LUMA: u8 = 0x80;
pub const QOI_MASK_2: u8 = 0xC0;

#[derive(Debug)]
pub struct QoiHeader {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) channels: u8,
    pub(crate) colorspace: u8,
}

impl QoiHeader {
    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels the opcode stream owes. u32 x u32 always fits.
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn channel_label(&self) -> &'static str {
        if self.channels == 3 {
            "RGB"
        } else {
            "RGBA"
        }
    }

    pub const fn colorspace_label(&self) -> &'static str {
        if self.colorspace == 0 {
            "sRGB with linear alpha"
        } else {
            "all channels linear"
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Opcode {
    Rgb,
    Rgba,
    Index,
    Diff,
    Luma,
    Run,
}

impl Opcode {
    /// The two full-byte tags sit inside the RUN bit range and must be
    /// matched before the two-bit prefixes.
    pub const fn classify(tag: u8) -> Self {
        match tag {
            QOI_OP_RGB => Self::Rgb,
            QOI_OP_RGBA => Self::Rgba,
            _ => match tag & QOI_MASK_2 {
                QOI_OP_INDEX => Self::Index,
                QOI_OP_DIFF => Self::Diff,
                QOI_OP_LUMA => Self::Luma,
                _ => Self::Run,
            },
        }
    }

    pub const fn payload_len(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
            Self::Luma => 1,
            Self::Index | Self::Diff | Self::Run => 0,
        }
    }

    /// RUN lengths are biased by one; every other chunk emits a single
    /// pixel.
    pub const fn pixels_covered(self, tag: u8) -> u32 {
        match self {
            Self::Run => (tag & 0x3F) as u32 + 1,
            _ => 1,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TagStats {
    pub total: u32,
    pub rgb: u32,
    pub rgba: u32,
    pub index: u32,
    pub diff: u32,
    pub luma: u32,
    pub run: u32,
    pub run_pxls: u32,
}

impl TagStats {
    pub(crate) fn record(&mut self, opcode: Opcode, pixels: u32) -> Result<()> {
        // Each category counter is bounded by `total`, so checking `total`
        // covers them all.
        self.total = self
            .total
            .checked_add(1)
            .ok_or_else(|| anyhow!("tag counter overflowed"))?;

        match opcode {
            Opcode::Rgb => self.rgb += 1,
            Opcode::Rgba => self.rgba += 1,
            Opcode::Index => self.index += 1,
            Opcode::Diff => self.diff += 1,
            Opcode::Luma => self.luma += 1,
            Opcode::Run => {
                self.run += 1;
                self.run_pxls = self
                    .run_pxls
                    .checked_add(pixels)
                    .ok_or_else(|| anyhow!("run pixel counter overflowed"))?;
            }
        }

        Ok(())
    }

    /// Integer-truncated average RUN coverage, 0 when no runs were seen.
    pub const fn average_run_length(&self) -> u32 {
        if self.run == 0 {
            0
        } else {
            self.run_pxls / self.run
        }
    }
}
