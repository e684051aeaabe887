//! The dispatch table: one entry per defined opcode byte, pairing a handler
//! function with the addressing mode it expects.

use phf::{phf_map, Map};

use crate::cpu::{AddressingMode, Cpu, Operand};

pub mod arith;
pub mod bitops;
pub mod branch;
pub mod cmp;
pub mod flags;
pub mod inc_dec;
pub mod jmp;
pub mod load;
pub mod logic;
pub mod shift;
pub mod stack;
pub mod sys;
pub mod transfer;

pub struct OpCode {
    pub code: u8,
    pub name: &'static str,
    pub handler: fn(&mut Cpu, Operand),
    pub mode: AddressingMode,
    pub bytes: u8,
    /// Nominal cycle count from the WDC 65C02S datasheet. Not cycle-accurate
    /// (see [`crate::cpu::StepResult::cycles_consumed`]).
    pub cycles: u8,
}

impl OpCode {
    const fn new(
        code: u8,
        name: &'static str,
        handler: fn(&mut Cpu, Operand),
        mode: AddressingMode,
        cycles: u8,
    ) -> Self {
        Self {
            code,
            name,
            handler,
            mode,
            bytes: mode.size() + 1,
            cycles,
        }
    }
}

macro_rules! opcodes {
    ($($code:literal => ($path:ident::$name:ident, $addr_mode:ident, $cycles:literal),)*) => {
        phf_map! {
            $(
                $code => OpCode::new($code, stringify!($name), $path::$name, AddressingMode::$addr_mode, $cycles),
            )*
        }
    };
}

pub static OPCODES: Map<u8, OpCode> = opcodes! {
    // ADC
    0x69u8 => (arith::adc, Immediate, 2),
    0x65u8 => (arith::adc, ZeroPage, 3),
    0x75u8 => (arith::adc, ZeroPageX, 4),
    0x6Du8 => (arith::adc, Absolute, 4),
    0x7Du8 => (arith::adc, AbsoluteX, 4),
    0x79u8 => (arith::adc, AbsoluteY, 4),
    0x61u8 => (arith::adc, ZeroPageIndirectX, 6),
    0x71u8 => (arith::adc, ZeroPageIndirectY, 5),
    0x72u8 => (arith::adc, ZeroPageIndirect, 5),

    // AND
    0x29u8 => (logic::and, Immediate, 2),
    0x25u8 => (logic::and, ZeroPage, 3),
    0x35u8 => (logic::and, ZeroPageX, 4),
    0x2Du8 => (logic::and, Absolute, 4),
    0x3Du8 => (logic::and, AbsoluteX, 4),
    0x39u8 => (logic::and, AbsoluteY, 4),
    0x21u8 => (logic::and, ZeroPageIndirectX, 6),
    0x31u8 => (logic::and, ZeroPageIndirectY, 5),
    0x32u8 => (logic::and, ZeroPageIndirect, 5),

    // ASL
    0x0Au8 => (shift::asl, Accumulator, 2),
    0x06u8 => (shift::asl, ZeroPage, 5),
    0x16u8 => (shift::asl, ZeroPageX, 6),
    0x0Eu8 => (shift::asl, Absolute, 6),
    0x1Eu8 => (shift::asl, AbsoluteX, 7),

    // BBRn / BBSn (zero page, relative)
    0x0Fu8 => (bitops::bbr0, ZeroPageRelative, 5),
    0x1Fu8 => (bitops::bbr1, ZeroPageRelative, 5),
    0x2Fu8 => (bitops::bbr2, ZeroPageRelative, 5),
    0x3Fu8 => (bitops::bbr3, ZeroPageRelative, 5),
    0x4Fu8 => (bitops::bbr4, ZeroPageRelative, 5),
    0x5Fu8 => (bitops::bbr5, ZeroPageRelative, 5),
    0x6Fu8 => (bitops::bbr6, ZeroPageRelative, 5),
    0x7Fu8 => (bitops::bbr7, ZeroPageRelative, 5),
    0x8Fu8 => (bitops::bbs0, ZeroPageRelative, 5),
    0x9Fu8 => (bitops::bbs1, ZeroPageRelative, 5),
    0xAFu8 => (bitops::bbs2, ZeroPageRelative, 5),
    0xBFu8 => (bitops::bbs3, ZeroPageRelative, 5),
    0xCFu8 => (bitops::bbs4, ZeroPageRelative, 5),
    0xDFu8 => (bitops::bbs5, ZeroPageRelative, 5),
    0xEFu8 => (bitops::bbs6, ZeroPageRelative, 5),
    0xFFu8 => (bitops::bbs7, ZeroPageRelative, 5),

    // Branches
    0x90u8 => (branch::bcc, Relative, 2),
    0xB0u8 => (branch::bcs, Relative, 2),
    0xF0u8 => (branch::beq, Relative, 2),
    0x30u8 => (branch::bmi, Relative, 2),
    0xD0u8 => (branch::bne, Relative, 2),
    0x10u8 => (branch::bpl, Relative, 2),
    0x80u8 => (branch::bra, Relative, 3),
    0x50u8 => (branch::bvc, Relative, 2),
    0x70u8 => (branch::bvs, Relative, 2),

    // BIT
    0x89u8 => (logic::bit, Immediate, 2),
    0x24u8 => (logic::bit, ZeroPage, 3),
    0x34u8 => (logic::bit, ZeroPage, 4),
    0x2Cu8 => (logic::bit, Absolute, 4),
    0x3Cu8 => (logic::bit, AbsoluteX, 4),

    // BRK
    0x00u8 => (sys::brk, Implied, 7),

    // Flags
    0x18u8 => (flags::clc, Implied, 2),
    0xD8u8 => (flags::cld, Implied, 2),
    0x58u8 => (flags::cli, Implied, 2),
    0xB8u8 => (flags::clv, Implied, 2),
    0x38u8 => (flags::sec, Implied, 2),
    0xF8u8 => (flags::sed, Implied, 2),
    0x78u8 => (flags::sei, Implied, 2),

    // CMP / CPX / CPY
    0xC9u8 => (cmp::cmp, Immediate, 2),
    0xC5u8 => (cmp::cmp, ZeroPage, 3),
    0xD5u8 => (cmp::cmp, ZeroPageX, 4),
    0xCDu8 => (cmp::cmp, Absolute, 4),
    0xDDu8 => (cmp::cmp, AbsoluteX, 4),
    0xD9u8 => (cmp::cmp, AbsoluteY, 4),
    0xC1u8 => (cmp::cmp, ZeroPageIndirectX, 6),
    0xD1u8 => (cmp::cmp, ZeroPageIndirectY, 5),
    0xD2u8 => (cmp::cmp, ZeroPageIndirect, 5),
    0xE0u8 => (cmp::cpx, Immediate, 2),
    0xE4u8 => (cmp::cpx, ZeroPage, 3),
    0xECu8 => (cmp::cpx, Absolute, 4),
    0xC0u8 => (cmp::cpy, Immediate, 2),
    0xC4u8 => (cmp::cpy, ZeroPage, 3),
    0xCCu8 => (cmp::cpy, Absolute, 4),

    // DEC / DEX / DEY
    0x3Au8 => (inc_dec::dec, Accumulator, 2),
    0xC6u8 => (inc_dec::dec, ZeroPage, 5),
    0xD6u8 => (inc_dec::dec, ZeroPageX, 6),
    0xCEu8 => (inc_dec::dec, Absolute, 6),
    0xDEu8 => (inc_dec::dec, AbsoluteX, 7),
    0xCAu8 => (inc_dec::dex, Implied, 2),
    0x88u8 => (inc_dec::dey, Implied, 2),

    // EOR
    0x49u8 => (logic::eor, Immediate, 2),
    0x45u8 => (logic::eor, ZeroPage, 3),
    0x55u8 => (logic::eor, ZeroPageX, 4),
    0x4Du8 => (logic::eor, Absolute, 4),
    0x5Du8 => (logic::eor, AbsoluteX, 4),
    0x59u8 => (logic::eor, AbsoluteY, 4),
    0x41u8 => (logic::eor, ZeroPageIndirectX, 6),
    0x51u8 => (logic::eor, ZeroPageIndirectY, 5),
    0x52u8 => (logic::eor, ZeroPageIndirect, 5),

    // INC / INX / INY
    0x1Au8 => (inc_dec::inc, Accumulator, 2),
    0xE6u8 => (inc_dec::inc, ZeroPage, 5),
    0xF6u8 => (inc_dec::inc, ZeroPageX, 6),
    0xEEu8 => (inc_dec::inc, Absolute, 6),
    0xFEu8 => (inc_dec::inc, AbsoluteX, 7),
    0xE8u8 => (inc_dec::inx, Implied, 2),
    0xC8u8 => (inc_dec::iny, Implied, 2),

    // JMP / JSR
    0x4Cu8 => (jmp::jmp, Absolute, 3),
    0x6Cu8 => (jmp::jmp, Indirect, 5),
    0x7Cu8 => (jmp::jmp, AbsoluteIndexedIndirect, 6),
    0x20u8 => (jmp::jsr, Absolute, 6),

    // LDA / LDX / LDY
    0xA9u8 => (load::lda, Immediate, 2),
    0xA5u8 => (load::lda, ZeroPage, 3),
    0xB5u8 => (load::lda, ZeroPageX, 4),
    0xADu8 => (load::lda, Absolute, 4),
    0xBDu8 => (load::lda, AbsoluteX, 4),
    0xB9u8 => (load::lda, AbsoluteY, 4),
    0xA1u8 => (load::lda, ZeroPageIndirectX, 6),
    0xB1u8 => (load::lda, ZeroPageIndirectY, 5),
    0xB2u8 => (load::lda, ZeroPageIndirect, 5),
    0xA2u8 => (load::ldx, Immediate, 2),
    0xA6u8 => (load::ldx, ZeroPage, 3),
    0xB6u8 => (load::ldx, ZeroPageY, 4),
    0xAEu8 => (load::ldx, Absolute, 4),
    0xBEu8 => (load::ldx, AbsoluteY, 4),
    0xA0u8 => (load::ldy, Immediate, 2),
    0xA4u8 => (load::ldy, ZeroPage, 3),
    0xB4u8 => (load::ldy, ZeroPageX, 4),
    0xACu8 => (load::ldy, Absolute, 4),
    0xBCu8 => (load::ldy, AbsoluteX, 4),

    // LSR (absolute form is absent upstream, left undefined -> NOP)
    0x4Au8 => (shift::lsr, Accumulator, 2),
    0x46u8 => (shift::lsr, ZeroPage, 5),
    0x56u8 => (shift::lsr, ZeroPageX, 6),
    0x5Eu8 => (shift::lsr, AbsoluteX, 7),

    // NOP
    0xEAu8 => (sys::nop, Implied, 2),

    // ORA
    0x09u8 => (logic::ora, Immediate, 2),
    0x05u8 => (logic::ora, ZeroPage, 3),
    0x15u8 => (logic::ora, ZeroPageX, 4),
    0x0Du8 => (logic::ora, Absolute, 4),
    0x1Du8 => (logic::ora, AbsoluteX, 4),
    0x19u8 => (logic::ora, AbsoluteY, 4),
    0x01u8 => (logic::ora, ZeroPageIndirectX, 6),
    0x11u8 => (logic::ora, ZeroPageIndirectY, 5),
    0x12u8 => (logic::ora, ZeroPageIndirect, 5),

    // Stack
    0x48u8 => (stack::pha, Implied, 3),
    0x08u8 => (stack::php, Implied, 3),
    0xDAu8 => (stack::phx, Implied, 3),
    0x5Au8 => (stack::phy, Implied, 3),
    0x68u8 => (stack::pla, Implied, 4),
    0x28u8 => (stack::plp, Implied, 4),
    0xFAu8 => (stack::plx, Implied, 4),
    0x7Au8 => (stack::ply, Implied, 4),

    // RMBn
    0x07u8 => (bitops::rmb0, ZeroPage, 5),
    0x17u8 => (bitops::rmb1, ZeroPage, 5),
    0x27u8 => (bitops::rmb2, ZeroPage, 5),
    0x37u8 => (bitops::rmb3, ZeroPage, 5),
    0x47u8 => (bitops::rmb4, ZeroPage, 5),
    0x57u8 => (bitops::rmb5, ZeroPage, 5),
    0x67u8 => (bitops::rmb6, ZeroPage, 5),
    0x77u8 => (bitops::rmb7, ZeroPage, 5),

    // ROL / ROR
    0x2Au8 => (shift::rol, Accumulator, 2),
    0x26u8 => (shift::rol, ZeroPage, 5),
    0x36u8 => (shift::rol, ZeroPageX, 6),
    0x2Eu8 => (shift::rol, Absolute, 6),
    0x3Eu8 => (shift::rol, AbsoluteX, 7),
    0x6Au8 => (shift::ror, Accumulator, 2),
    0x66u8 => (shift::ror, ZeroPage, 5),
    0x76u8 => (shift::ror, ZeroPageX, 6),
    0x6Eu8 => (shift::ror, Absolute, 6),
    0x7Eu8 => (shift::ror, AbsoluteX, 7),

    // RTI / RTS
    0x40u8 => (sys::rti, Implied, 6),
    0x60u8 => (sys::rts, Implied, 6),

    // SBC
    0xE9u8 => (arith::sbc, Immediate, 2),
    0xE5u8 => (arith::sbc, ZeroPage, 3),
    0xF5u8 => (arith::sbc, ZeroPageX, 4),
    0xEDu8 => (arith::sbc, Absolute, 4),
    0xFDu8 => (arith::sbc, AbsoluteX, 4),
    0xF9u8 => (arith::sbc, AbsoluteY, 4),
    0xE1u8 => (arith::sbc, ZeroPageIndirectX, 6),
    0xF1u8 => (arith::sbc, ZeroPageIndirectY, 5),
    0xF2u8 => (arith::sbc, ZeroPageIndirect, 5),

    // SMBn
    0x87u8 => (bitops::smb0, ZeroPage, 5),
    0x97u8 => (bitops::smb1, ZeroPage, 5),
    0xA7u8 => (bitops::smb2, ZeroPage, 5),
    0xB7u8 => (bitops::smb3, ZeroPage, 5),
    0xC7u8 => (bitops::smb4, ZeroPage, 5),
    0xD7u8 => (bitops::smb5, ZeroPage, 5),
    0xE7u8 => (bitops::smb6, ZeroPage, 5),
    0xF7u8 => (bitops::smb7, ZeroPage, 5),

    // STA / STX / STY / STZ
    0x85u8 => (load::sta, ZeroPage, 3),
    0x95u8 => (load::sta, ZeroPageX, 4),
    0x8Du8 => (load::sta, Absolute, 4),
    0x9Du8 => (load::sta, AbsoluteX, 5),
    0x99u8 => (load::sta, AbsoluteY, 5),
    0x81u8 => (load::sta, ZeroPageIndirectX, 6),
    0x91u8 => (load::sta, ZeroPageIndirectY, 6),
    0x92u8 => (load::sta, ZeroPageIndirect, 5),
    0x86u8 => (load::stx, ZeroPage, 3),
    0x96u8 => (load::stx, ZeroPageY, 4),
    0x8Eu8 => (load::stx, Absolute, 4),
    0x84u8 => (load::sty, ZeroPage, 3),
    0x94u8 => (load::sty, ZeroPageX, 4),
    0x8Cu8 => (load::sty, Absolute, 4),
    0x64u8 => (load::stz, ZeroPage, 3),
    0x74u8 => (load::stz, ZeroPageX, 4),
    0x9Cu8 => (load::stz, Absolute, 4),
    0x9Eu8 => (load::stz, AbsoluteX, 5),

    // STP / WAI
    0xDBu8 => (sys::stp, Implied, 3),
    0xCBu8 => (sys::wai, Implied, 3),

    // Transfers
    0xAAu8 => (transfer::tax, Implied, 2),
    0xA8u8 => (transfer::tay, Implied, 2),
    0xBAu8 => (transfer::tsx, Implied, 2),
    0x8Au8 => (transfer::tsy, Implied, 2),
    0x9Au8 => (transfer::txs, Implied, 2),
    0x98u8 => (transfer::tya, Implied, 2),

    // TRB / TSB
    0x14u8 => (bitops::trb, ZeroPage, 5),
    0x1Cu8 => (bitops::trb, Absolute, 6),
    0x04u8 => (bitops::tsb, ZeroPage, 5),
    0x0Cu8 => (bitops::tsb, Absolute, 6),
};
