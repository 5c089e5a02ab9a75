//! ROM image encoding.
//!
//! - [`image`] - zero-padded byte view split into banks and init blocks
//! - [`encoder`] - Verilog text generation for `SB_ROM512x8` primitives

pub mod encoder;
pub mod image;

pub use encoder::{address_width, encode, RomEncoder};
pub use image::{
    ByteImage, InitBlock, RomBank, BANK_SIZE, INIT_BLOCKS_PER_BANK, INIT_BLOCK_BYTES,
    WORDS_PER_INIT_BLOCK,
};
