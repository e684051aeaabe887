use snafu::prelude::*;

use crate::memory::{Memory, VECTOR_IRQ_BRK, VECTOR_NMI, VECTOR_RESET};

pub mod addr_mode;
pub mod operand;
pub mod status;
pub mod trace;

pub use addr_mode::AddressingMode;
pub use operand::Operand;
pub use status::Status;

/// The stack always lives in page one; `sp` is the low byte of the address.
pub const STACK: u16 = 0x0100;

/// The one real failure mode in this crate: an instruction handler asked an
/// [`Operand`] for a read/write it can't provide. Every entry in the opcode
/// table pairs a handler with an addressing mode it's written for, so this
/// should be unreachable outside of a bug in the table itself; it exists as
/// an `Error` (rather than a bare panic) so a consumer embedding the core
/// can choose to catch and report a corrupt table instead of aborting.
#[derive(Snafu)]
pub enum Error {
    #[snafu(display("operand {operand:?} is not valid for this instruction"))]
    InvalidOperandAccess { operand: Operand },
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidOperandAccess { operand } => f
                .debug_struct("InvalidOperandAccess")
                .field("operand", operand)
                .finish(),
        }
    }
}

/// A snapshot of every architectural register, cheap to copy out for test
/// assertions or a debugger without holding a borrow on the running [`Cpu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub status: Status,
    pub sp: u8,
    pub pc: u16,
}

/// Result of a single [`Cpu::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// The declared cycle count of the instruction that ran, or 1 for an
    /// undefined opcode (treated as a one-byte NOP). Not cycle-accurate:
    /// this is the table's nominal count, not a timed count.
    pub cycles_consumed: u8,
    /// Set once `STP` has executed and not yet been cleared by [`Cpu::reset`].
    pub halted: bool,
}

/// Result of [`Cpu::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub steps_executed: u64,
    pub halted: bool,
}

#[derive(Clone)]
pub struct Cpu {
    pub reg_a: u8,
    pub reg_x: u8,
    pub reg_y: u8,
    pub status: Status,
    pub sp: u8,
    pub pc: u16,
    pub memory: Memory,
    stopped: bool,
    waiting: bool,
    irq_pending: bool,
    nmi_pending: bool,
}

impl core::fmt::Debug for Cpu {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cpu")
            .field("reg_a", &format_args!("{:#04X}", self.reg_a))
            .field("reg_x", &format_args!("{:#04X}", self.reg_x))
            .field("reg_y", &format_args!("{:#04X}", self.reg_y))
            .field("status", &self.status)
            .field("sp", &format_args!("{:#04X}", self.sp))
            .field("pc", &format_args!("{:#06X}", self.pc))
            .field("stopped", &self.stopped)
            .field("waiting", &self.waiting)
            .finish()
    }
}

impl Cpu {
    pub const STACK_RESET: u8 = 0xFD;

    /// Builds a CPU over a 64 KiB memory image and loads the program
    /// counter from the reset vector at `$FFFC`/`$FFFD`, exactly as a real
    /// 65C02 does when its `RESB` pin is released.
    #[must_use]
    pub fn new(image: [u8; 0x1_0000]) -> Self {
        let memory = Memory::new(image);
        let pc = memory.read16(VECTOR_RESET);
        Self {
            reg_a: 0,
            reg_x: 0,
            reg_y: 0,
            status: Status::INTERRUPT_DISABLE,
            sp: Self::STACK_RESET,
            pc,
            memory,
            stopped: false,
            waiting: false,
            irq_pending: false,
            nmi_pending: false,
        }
    }

    /// Resets the CPU to its power-on register state. Memory (and therefore
    /// the reset vector) is left untouched.
    pub fn reset(&mut self) {
        replace_with::replace_with(self, || unreachable!(), |self_| Self::new(self_.memory.into_image()));
    }

    /// Reads a snapshot of every architectural register.
    #[must_use]
    pub const fn registers(&self) -> Registers {
        Registers {
            a: self.reg_a,
            x: self.reg_x,
            y: self.reg_y,
            status: self.status,
            sp: self.sp,
            pc: self.pc,
        }
    }

    #[must_use]
    pub fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub fn write(&mut self, addr: u16, val: u8) {
        self.memory.write(addr, val);
    }

    /// Marks a pending maskable interrupt. Serviced before the next
    /// instruction fetch if `I` is clear; otherwise it stays pending until
    /// an instruction clears `I` (`CLI`/`PLP`/`RTI`).
    pub fn inject_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Marks a pending non-maskable interrupt, always serviced before the
    /// next instruction fetch regardless of `I`.
    pub fn inject_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Executes exactly one instruction (or services one pending interrupt,
    /// or does nothing if stopped/waiting), returning its nominal cycle
    /// count.
    pub fn step(&mut self) -> StepResult {
        if self.stopped {
            return StepResult {
                cycles_consumed: 0,
                halted: true,
            };
        }

        if self.waiting {
            if self.nmi_pending || (self.irq_pending && !self.status.contains(Status::INTERRUPT_DISABLE))
            {
                self.waiting = false;
            } else {
                return StepResult {
                    cycles_consumed: 0,
                    halted: false,
                };
            }
        }

        if let Some(cycles) = self.service_pending_interrupt() {
            return StepResult {
                cycles_consumed: cycles,
                halted: self.stopped,
            };
        }

        let opcode = self.fetch();
        let cycles = match crate::opcode::OPCODES.get(&opcode) {
            Some(op) => {
                log::trace!(
                    "{:#06X}: {:#04X} {} {:?}",
                    self.pc - 1,
                    op.code,
                    op.name,
                    op.mode
                );
                let operand = self.decode_operand(op.mode);
                (op.handler)(self, operand);
                op.cycles
            }
            None => {
                log::debug!("undefined opcode {opcode:#04X} at {:#06X}, treated as NOP", self.pc - 1);
                1
            }
        };

        StepResult {
            cycles_consumed: cycles,
            halted: self.stopped,
        }
    }

    /// Runs instructions until `STP` executes or `max_steps` is reached
    /// (unbounded if `None`).
    pub fn run(&mut self, max_steps: Option<u64>) -> RunResult {
        let mut steps_executed = 0u64;
        loop {
            if let Some(max) = max_steps {
                if steps_executed >= max {
                    break;
                }
            }
            let result = self.step();
            steps_executed += 1;
            if result.halted {
                return RunResult {
                    steps_executed,
                    halted: true,
                };
            }
        }
        RunResult {
            steps_executed,
            halted: false,
        }
    }

    fn service_pending_interrupt(&mut self) -> Option<u8> {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.stopped = false;
            self.push16(self.pc);
            self.push(self.status.to_byte(false));
            self.status.insert(Status::INTERRUPT_DISABLE);
            self.pc = self.memory.read16(VECTOR_NMI);
            Some(7)
        } else if self.irq_pending && !self.status.contains(Status::INTERRUPT_DISABLE) {
            self.irq_pending = false;
            self.stopped = false;
            self.push16(self.pc);
            self.push(self.status.to_byte(false));
            self.status.insert(Status::INTERRUPT_DISABLE);
            self.pc = self.memory.read16(VECTOR_IRQ_BRK);
            Some(7)
        } else {
            None
        }
    }

    /// Stops the CPU; only [`Cpu::reset`] resumes it. Used by the `STP`
    /// handler.
    pub(crate) fn stop(&mut self) {
        self.stopped = true;
    }

    /// Suspends the CPU until an interrupt (masked or not) is pending. Used
    /// by the `WAI` handler.
    pub(crate) fn wait_for_interrupt(&mut self) {
        self.waiting = true;
    }

    /// Resolves the operand for `mode` at the current program counter,
    /// advancing `pc` past however many operand bytes that mode consumes.
    pub fn decode_operand(&mut self, mode: AddressingMode) -> Operand {
        let prev_pc = self.pc;
        let operand = match mode {
            AddressingMode::Implied => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch()),
            AddressingMode::ZeroPage => Operand::Address(u16::from(self.fetch())),
            AddressingMode::ZeroPageX => {
                Operand::Address(u16::from(self.fetch().wrapping_add(self.reg_x)))
            }
            AddressingMode::ZeroPageY => {
                Operand::Address(u16::from(self.fetch().wrapping_add(self.reg_y)))
            }
            AddressingMode::Absolute => Operand::Address(self.fetch16()),
            AddressingMode::AbsoluteX => {
                Operand::Address(self.fetch16().wrapping_add(u16::from(self.reg_x)))
            }
            AddressingMode::AbsoluteY => {
                Operand::Address(self.fetch16().wrapping_add(u16::from(self.reg_y)))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch16();
                Operand::Address(self.memory.read16(ptr))
            }
            AddressingMode::AbsoluteIndexedIndirect => {
                let ptr = self.fetch16().wrapping_add(u16::from(self.reg_x));
                Operand::Address(self.memory.read16(ptr))
            }
            AddressingMode::ZeroPageIndirectX => {
                let zp = self.fetch().wrapping_add(self.reg_x);
                Operand::Address(self.memory.read16_zp_wrapped(zp))
            }
            AddressingMode::ZeroPageIndirectY => {
                let zp = self.fetch();
                let base = self.memory.read16_zp_wrapped(zp);
                Operand::Address(base.wrapping_add(u16::from(self.reg_y)))
            }
            AddressingMode::ZeroPageIndirect => {
                let zp = self.fetch();
                Operand::Address(self.memory.read16_zp_wrapped(zp))
            }
            AddressingMode::Relative => {
                let offset = self.fetch() as i8;
                Operand::Address(self.pc.wrapping_add(offset as u16))
            }
            AddressingMode::ZeroPageRelative => {
                let zp_addr = u16::from(self.fetch());
                let offset = self.fetch() as i8;
                let target = self.pc.wrapping_add(offset as u16);
                Operand::ZeroPageAndRelative { zp_addr, target }
            }
        };
        debug_assert_eq!(prev_pc.wrapping_add(u16::from(mode.size())), self.pc);
        operand
    }

    /// Sets the accumulator and updates `Z`/`N` to match.
    pub fn set_reg_a(&mut self, val: u8) {
        self.reg_a = val;
        self.status.set_nz(val);
    }

    /// Sets the X register and updates `Z`/`N` to match.
    pub fn set_reg_x(&mut self, val: u8) {
        self.reg_x = val;
        self.status.set_nz(val);
    }

    /// Sets the Y register and updates `Z`/`N` to match.
    pub fn set_reg_y(&mut self, val: u8) {
        self.reg_y = val;
        self.status.set_nz(val);
    }

    /// Pushes a byte onto the stack.
    pub fn push(&mut self, val: u8) {
        self.memory.write(STACK | u16::from(self.sp), val);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes a 16-bit value onto the stack, high byte first, so that
    /// [`Cpu::pop16`] (low byte first) reconstructs it in the same order a
    /// real 65C02's `JSR`/`BRK` sequence does.
    pub fn push16(&mut self, val: u16) {
        let [lo, hi] = val.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pops a byte from the stack.
    pub fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK | u16::from(self.sp))
    }

    /// Pops a 16-bit value from the stack (low byte first).
    pub fn pop16(&mut self) -> u16 {
        let lo = self.pop();
        let hi = self.pop();
        u16::from_le_bytes([lo, hi])
    }

    /// Reads the byte at `pc` and advances `pc` by one.
    pub fn fetch(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Reads the little-endian word at `pc` and advances `pc` by two.
    pub fn fetch16(&mut self) -> u16 {
        let word = self.memory.read16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        word
    }
}
