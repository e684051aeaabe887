//! Single-instruction disassembly, grounded on the NESticle-style tracer
//! this core's teacher used for its instruction log, generalized here from
//! a fixed NES-opcode subset to the full 65C02 table and its extra
//! addressing modes.

use core::fmt;

use super::{AddressingMode, Cpu};

/// A decoded-but-not-yet-executed instruction, suitable for `{}`-formatting
/// into a trace line. Building one never mutates `cpu`, unlike
/// [`Cpu::step`], which consumes operand bytes as it decodes.
pub struct Trace<'a> {
    cpu: &'a Cpu,
    pc: u16,
    opcode: u8,
    name: &'static str,
    mode: AddressingMode,
}

impl<'a> Trace<'a> {
    /// Disassembles the instruction at `cpu`'s current program counter.
    /// Returns `None` if the opcode byte has no table entry (it would run
    /// as a bare NOP, with nothing to disassemble).
    #[must_use]
    pub fn at_pc(cpu: &'a Cpu) -> Option<Self> {
        let opcode = cpu.read(cpu.pc);
        let info = crate::opcode::OPCODES.get(&opcode)?;
        Some(Self {
            cpu,
            pc: cpu.pc,
            opcode,
            name: info.name,
            mode: info.mode,
        })
    }
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}  {:02X} ", self.pc, self.opcode)?;
        match self.mode {
            AddressingMode::Implied | AddressingMode::Accumulator => {
                write!(f, "      {}", self.name)
            }
            AddressingMode::Immediate => {
                let val = self.cpu.read(self.pc.wrapping_add(1));
                write!(f, "{val:02X}    {} #${val:02X}", self.name)
            }
            AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::ZeroPageIndirectX
            | AddressingMode::ZeroPageIndirectY
            | AddressingMode::ZeroPageIndirect
            | AddressingMode::Relative => {
                let zp = self.cpu.read(self.pc.wrapping_add(1));
                write!(f, "{zp:02X}    {} ${zp:02X}", self.name)
            }
            AddressingMode::ZeroPageRelative => {
                let zp = self.cpu.read(self.pc.wrapping_add(1));
                let rel = self.cpu.read(self.pc.wrapping_add(2));
                write!(f, "{zp:02X} {rel:02X} {} ${zp:02X}, ${rel:02X}", self.name)
            }
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect
            | AddressingMode::AbsoluteIndexedIndirect => {
                let lo = self.cpu.read(self.pc.wrapping_add(1));
                let hi = self.cpu.read(self.pc.wrapping_add(2));
                write!(
                    f,
                    "{lo:02X} {hi:02X} {} ${:04X}",
                    self.name,
                    u16::from_le_bytes([lo, hi])
                )
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn traces_an_immediate_load() {
        let mut image = [0u8; 0x1_0000];
        image[0x0200] = 0xA9;
        image[0x0201] = 0x42;
        image[0xFFFC] = 0x00;
        image[0xFFFD] = 0x02;
        let cpu = Cpu::new(image);

        let trace = Trace::at_pc(&cpu).unwrap();
        assert_eq!(format!("{trace}"), "0200  A9 42    lda #$42");
    }
}
