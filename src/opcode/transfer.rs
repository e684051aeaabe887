use crate::cpu::{Cpu, Operand};

/// Transfers the accumulator to the X register, setting `Z`/`N`.
pub fn tax(cpu: &mut Cpu, _operand: Operand) {
    cpu.set_reg_x(cpu.reg_a);
}

/// Transfers the accumulator to the Y register, setting `Z`/`N`.
pub fn tay(cpu: &mut Cpu, _operand: Operand) {
    cpu.set_reg_y(cpu.reg_a);
}

/// Transfers the Y register to the accumulator, setting `Z`/`N`.
pub fn tya(cpu: &mut Cpu, _operand: Operand) {
    cpu.set_reg_a(cpu.reg_y);
}

/// Transfers the stack pointer to the X register, setting `Z`/`N`.
pub fn tsx(cpu: &mut Cpu, _operand: Operand) {
    cpu.set_reg_x(cpu.sp);
}

/// Transfers the X register to the stack pointer. Unlike the other
/// transfers, this one leaves `Z`/`N` untouched — `S` isn't a
/// general-purpose register.
pub fn txs(cpu: &mut Cpu, _operand: Operand) {
    cpu.sp = cpu.reg_x;
}

/// Transfers the stack pointer to the Y register, setting `Z`/`N`.
///
/// There is no `TXA` opcode at `$8A`; this table assigns it to `TSY`
/// instead.
pub fn tsy(cpu: &mut Cpu, _operand: Operand) {
    cpu.set_reg_y(cpu.sp);
}
