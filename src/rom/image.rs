//! Zero-padded view over a ROM byte image.
//!
//! The image is split into 512-byte banks, each of which is split into sixteen 32-byte
//! init blocks. The last bank usually runs past the end of the data; every read through
//! this view beyond `len()` yields zero instead of touching memory it does not own.

use crate::core::format::hex_word;

/// Bytes held by one `SB_ROM512x8` primitive.
pub const BANK_SIZE: usize = 512;

/// `INIT_<k>` parameters per ROM primitive.
pub const INIT_BLOCKS_PER_BANK: usize = 16;

/// Bytes packed into one 256-bit init block.
pub const INIT_BLOCK_BYTES: usize = BANK_SIZE / INIT_BLOCKS_PER_BANK;

/// 32-bit words per init block.
pub const WORDS_PER_INIT_BLOCK: usize = INIT_BLOCK_BYTES / 4;

/// Immutable byte image with a zero-padded logical extent.
#[derive(Debug, Clone, Copy)]
pub struct ByteImage<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteImage<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at a flat offset, or zero past the end of the image.
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.bytes.get(offset).copied().unwrap_or(0)
    }

    /// Number of banks needed to hold the image, `ceil(len / 512)`.
    pub fn num_banks(&self) -> usize {
        self.bytes.len().div_ceil(BANK_SIZE)
    }

    /// Bank `index`; valid for any index, banks past the image are all zero.
    pub fn bank(&self, index: usize) -> RomBank<'a> {
        RomBank {
            image: *self,
            index,
        }
    }

    /// All banks that cover the image, in index order.
    pub fn banks(&self) -> impl Iterator<Item = RomBank<'a>> + '_ {
        (0..self.num_banks()).map(move |index| self.bank(index))
    }
}

/// One 512-byte slice of the image, mapped to a single ROM primitive.
#[derive(Debug, Clone, Copy)]
pub struct RomBank<'a> {
    image: ByteImage<'a>,
    index: usize,
}

impl<'a> RomBank<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Flat image offset of this bank's first byte.
    pub fn base_offset(&self) -> usize {
        self.index * BANK_SIZE
    }

    /// Init block `k` (0..16) of this bank.
    pub fn init_block(&self, k: usize) -> InitBlock {
        debug_assert!(k < INIT_BLOCKS_PER_BANK);
        let base = self.base_offset() + k * INIT_BLOCK_BYTES;
        let mut words = [0u32; WORDS_PER_INIT_BLOCK];
        for (j, word) in words.iter_mut().enumerate() {
            let offset = base + j * 4;
            *word = u32::from_be_bytes([
                self.image.byte_at(offset),
                self.image.byte_at(offset + 1),
                self.image.byte_at(offset + 2),
                self.image.byte_at(offset + 3),
            ]);
        }
        InitBlock { index: k, words }
    }

    pub fn init_blocks(&self) -> impl Iterator<Item = InitBlock> + '_ {
        (0..INIT_BLOCKS_PER_BANK).map(move |k| self.init_block(k))
    }
}

/// A 256-bit init value: eight big-endian words, first word most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitBlock {
    pub index: usize,
    pub words: [u32; WORDS_PER_INIT_BLOCK],
}

impl InitBlock {
    /// The 64 uppercase hex digits of the block, no prefix.
    pub fn to_hex(&self) -> String {
        self.words.iter().map(|&word| hex_word(word)).collect()
    }

    /// Parameter name suffix; SB_ROM512x8 numbers its init parameters in hex.
    pub fn param_suffix(&self) -> String {
        format!("{:X}", self.index)
    }
}
