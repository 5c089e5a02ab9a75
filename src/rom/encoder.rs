// This module generates the Verilog ROM module for mkrom. RomEncoder walks a ByteImage bank
// by bank and writes one SB_ROM512x8 instantiation per 512-byte bank, each with sixteen
// 256-bit INIT_<k> parameters holding the bank's data as uppercase hex. The module header
// declares clk, an addr bus sized from the bank count, and an 8-bit dout port. The final
// always block only forwards bank 0's read data: output multiplexing across banks is not
// generated, so images larger than 512 bytes instantiate every bank but only the first
// one is readable through dout. Output is fully deterministic for a given image and name.

//! Verilog generation for SB_ROM512x8 based ROMs.

use std::fmt::{self, Write};

use super::image::ByteImage;

/// Width of the `addr` bus for a given number of banks.
///
/// `floor(log2(num_banks)) + 8`, with an empty image treated as needing 8 bits.
pub fn address_width(num_banks: usize) -> u32 {
    num_banks.checked_ilog2().map_or(8, |log2| log2 + 8)
}

/// Emits a Verilog module that serves a byte image from iCE40 ROM primitives.
pub struct RomEncoder<'a> {
    image: ByteImage<'a>,
    module_name: &'a str,
}

impl<'a> RomEncoder<'a> {
    pub fn new(image: ByteImage<'a>, module_name: &'a str) -> Self {
        Self { image, module_name }
    }

    pub fn num_banks(&self) -> usize {
        self.image.num_banks()
    }

    pub fn address_width(&self) -> u32 {
        address_width(self.num_banks())
    }

    /// Render the whole module into a new string.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.encode_to(&mut out);
        out
    }

    /// Render the whole module into `out`.
    pub fn encode_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_header(out)?;
        for bank in self.image.banks() {
            let i = bank.index();
            log::trace!("Emitting ROM bank {} at offset {:#x}", i, bank.base_offset());

            writeln!(out, "\treg [7:0] dout_rom{};", i)?;
            writeln!(out, "SB_ROM512x8 #(")?;
            let fields: Vec<String> = bank
                .init_blocks()
                .map(|block| format!(".INIT_{}(256'h{})", block.param_suffix(), block.to_hex()))
                .collect();
            writeln!(out, "{}", fields.join(",\n"))?;
            writeln!(out, ") _rom{} (", i)?;
            writeln!(out, ".RDATA(dout_rom{}),", i)?;
            writeln!(out, ".RADDR(addr[8:0]),")?;
            writeln!(out, ".RCLK(clk), .RCLKE(1'b1), .RE(1'b1)")?;
            writeln!(out, ");")?;
        }
        self.write_footer(out)
    }

    fn write_header<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "module {}(", self.module_name)?;
        writeln!(out, "\tinput clk,")?;
        writeln!(out, "\tinput [addr_width-1:0] addr,")?;
        writeln!(out, "\toutput [7:0] dout);")?;
        writeln!(out, "\tparameter addr_width = {};", self.address_width())?;
        writeln!(out, "\treg [7:0] dout;")
    }

    fn write_footer<W: Write>(&self, out: &mut W) -> fmt::Result {
        // TODO: select dout_rom<n> from the high address bits once multi-bank reads are wired.
        writeln!(out, "always @(posedge clk) begin")?;
        if self.num_banks() == 0 {
            // No ROM instantiated, so there is no dout_rom0 to read from.
            writeln!(out, "\tdout <= 8'h00;")?;
        } else {
            writeln!(out, "\tdout <= dout_rom0;")?;
        }
        writeln!(out, "end")?;
        writeln!(out, "endmodule")
    }
}

/// Encode `bytes` as a Verilog module called `module_name`.
pub fn encode(bytes: &[u8], module_name: &str) -> String {
    RomEncoder::new(ByteImage::new(bytes), module_name).encode()
}
