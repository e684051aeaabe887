/// One of the 16 addressing modes the 65C02 dispatch table can name for an
/// opcode. See the WDC 65C02S datasheet, "Table 4: Addressing Modes", for the
/// canonical reference this mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the instruction acts on registers/flags only (e.g. `CLC`, `RTS`).
    Implied,
    /// Operates on the accumulator directly, e.g. `ASL A`.
    Accumulator,
    /// An 8 bit constant embedded in the instruction: `LDA #$05`.
    Immediate,
    /// An 8 bit address, limited to the first page of memory: `LDA $05`.
    ZeroPage,
    /// Zero page address plus X, wrapping within page zero: `LDA $05,X`.
    ZeroPageX,
    /// Zero page address plus Y, wrapping within page zero: `LDX $05,Y`.
    ZeroPageY,
    /// A full 16 bit address: `LDA $1234`.
    Absolute,
    /// 16 bit address plus X: `LDA $1234,X`.
    AbsoluteX,
    /// 16 bit address plus Y: `LDA $1234,Y`.
    AbsoluteY,
    /// `JMP ($1234)`: the operand addresses the low byte of the real target.
    Indirect,
    /// `JMP ($1234,X)`: 65C02 addition, resolves the indirect pointer after
    /// adding X to the 16 bit base address (fixes the NMOS 6502 JMP-indirect
    /// page-wrap bug by construction, since X is applied before, not during,
    /// the two-byte fetch).
    AbsoluteIndexedIndirect,
    /// `LDA ($05,X)`: zero page pointer, X applied (wrapping) before the
    /// indirection.
    ZeroPageIndirectX,
    /// `LDA ($05),Y`: zero page pointer, Y applied (no wrap) after the
    /// indirection.
    ZeroPageIndirectY,
    /// `LDA ($05)`: 65C02 addition, zero page pointer with no index.
    ZeroPageIndirect,
    /// Signed 8 bit offset from the following instruction: `BEQ LABEL`.
    Relative,
    /// 65C02 addition for `BBRn`/`BBSn`: a zero page address followed by a
    /// signed relative offset.
    ZeroPageRelative,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode byte.
    #[must_use]
    pub const fn size(self) -> u8 {
        match self {
            Self::Implied | Self::Accumulator => 0,
            Self::Immediate
            | Self::ZeroPage
            | Self::ZeroPageX
            | Self::ZeroPageY
            | Self::ZeroPageIndirectX
            | Self::ZeroPageIndirectY
            | Self::ZeroPageIndirect
            | Self::Relative => 1,
            Self::Absolute
            | Self::AbsoluteX
            | Self::AbsoluteY
            | Self::Indirect
            | Self::AbsoluteIndexedIndirect
            | Self::ZeroPageRelative => 2,
        }
    }
}
