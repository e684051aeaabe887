use super::Cpu;

/// The resolved target of an instruction, produced once by
/// [`Cpu::decode_operand`](super::Cpu::decode_operand) and then consumed by
/// the instruction handler. Making this a sum type (rather than the C
/// original's `operand_t` struct with a `type` tag and an `abort()` on
/// misuse) lets every handler's `load`/`store` be an exhaustive match with
/// no reachable "this should never happen" arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Implied addressing: the instruction has nothing to load or store.
    None,
    /// An immediate constant, already fetched from the instruction stream.
    Immediate(u8),
    /// A resolved 16 bit memory address.
    Address(u16),
    /// The accumulator, for `ASL A`/`ROL A`/etc.
    Accumulator,
    /// `ZeroPageRelative`: the zero page address to test a bit of, and the
    /// branch target already resolved from the trailing relative offset.
    ZeroPageAndRelative { zp_addr: u16, target: u16 },
}

impl Operand {
    /// Reads the value this operand names. Panics on [`Operand::None`],
    /// which no real opcode pairs with a handler that calls `load`.
    #[must_use]
    pub fn load(self, cpu: &Cpu) -> u8 {
        match self {
            Self::Immediate(val) => val,
            Self::Address(addr) => cpu.memory.read(addr),
            Self::Accumulator => cpu.reg_a,
            Self::ZeroPageAndRelative { zp_addr, .. } => cpu.memory.read(zp_addr),
            Self::None => unreachable!("instruction has no operand to load"),
        }
    }

    /// Writes `val` to wherever this operand points.
    pub fn store(self, cpu: &mut Cpu, val: u8) {
        match self {
            Self::Address(addr) => cpu.memory.write(addr, val),
            Self::Accumulator => cpu.reg_a = val,
            Self::ZeroPageAndRelative { zp_addr, .. } => cpu.memory.write(zp_addr, val),
            Self::Immediate(_) | Self::None => unreachable!("operand is not writable"),
        }
    }

    /// The address this operand names, for instructions that only care
    /// about the address itself (`JMP`, `JSR`, the branch target of a
    /// `BBRn`/`BBSn`).
    #[must_use]
    pub fn addr(self) -> u16 {
        match self {
            Self::Address(addr) => addr,
            Self::ZeroPageAndRelative { target, .. } => target,
            Self::Immediate(_) | Self::Accumulator | Self::None => {
                unreachable!("operand has no address")
            }
        }
    }
}
