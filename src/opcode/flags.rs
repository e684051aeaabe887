use crate::cpu::{Cpu, Operand, Status};

/// Sets the carry flag.
pub fn sec(cpu: &mut Cpu, _operand: Operand) {
    cpu.status.insert(Status::CARRY);
}

/// Clears the carry flag.
pub fn clc(cpu: &mut Cpu, _operand: Operand) {
    cpu.status.remove(Status::CARRY);
}

/// Sets the decimal mode flag. Accepted for compatibility; arithmetic
/// handlers never consult it.
pub fn sed(cpu: &mut Cpu, _operand: Operand) {
    cpu.status.insert(Status::DECIMAL_MODE);
}

/// Clears the decimal mode flag.
pub fn cld(cpu: &mut Cpu, _operand: Operand) {
    cpu.status.remove(Status::DECIMAL_MODE);
}

/// Sets the interrupt disable flag, masking `IRQ` (not `NMI`).
pub fn sei(cpu: &mut Cpu, _operand: Operand) {
    cpu.status.insert(Status::INTERRUPT_DISABLE);
}

/// Clears the interrupt disable flag.
pub fn cli(cpu: &mut Cpu, _operand: Operand) {
    cpu.status.remove(Status::INTERRUPT_DISABLE);
}

/// Clears the overflow flag. There's no corresponding `SV`; `V` is only
/// ever set by `ADC`/`SBC`/`BIT`.
pub fn clv(cpu: &mut Cpu, _operand: Operand) {
    cpu.status.remove(Status::OVERFLOW);
}
