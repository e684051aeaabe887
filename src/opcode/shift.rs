use crate::cpu::{Cpu, Operand, Status};

/// Shifts a value (memory or the accumulator) left by one bit. The vacated
/// bit 0 is filled with zero; the bit shifted out becomes the new carry.
///
/// # Examples
/// ```
/// # use pretty_assertions::assert_eq;
/// use w65c02::cpu::{Cpu, Status};
///
/// let mut image = [0u8; 0x1_0000];
/// image[0x0200] = 0xA9; // LDA #$81
/// image[0x0201] = 0x81;
/// image[0x0202] = 0x0A; // ASL A
/// image[0xFFFC] = 0x00;
/// image[0xFFFD] = 0x02;
///
/// let mut cpu = Cpu::new(image);
/// cpu.step();
/// cpu.step();
///
/// assert_eq!(cpu.reg_a, 0x02);
/// assert!(cpu.status.contains(Status::CARRY));
/// ```
pub fn asl(cpu: &mut Cpu, operand: Operand) {
    let val = operand.load(cpu);
    let result = val << 1;
    cpu.status.set(Status::CARRY, val & 0x80 != 0);
    cpu.status.set_nz(result);
    operand.store(cpu, result);
}

/// Shifts a value right by one bit. The vacated bit 7 is filled with zero
/// (so `N` always clears); the bit shifted out becomes the new carry.
pub fn lsr(cpu: &mut Cpu, operand: Operand) {
    let val = operand.load(cpu);
    let result = val >> 1;
    cpu.status.set(Status::CARRY, val & 0x01 != 0);
    cpu.status.set_nz(result);
    operand.store(cpu, result);
}

/// Rotates a value left through carry: bit 7 becomes the new carry, and
/// the old carry becomes the new bit 0.
pub fn rol(cpu: &mut Cpu, operand: Operand) {
    let val = operand.load(cpu);
    let carry_in = u8::from(cpu.status.contains(Status::CARRY));
    let result = (val << 1) | carry_in;
    cpu.status.set(Status::CARRY, val & 0x80 != 0);
    cpu.status.set_nz(result);
    operand.store(cpu, result);
}

/// Rotates a value right through carry: bit 0 becomes the new carry, and
/// the old carry becomes the new bit 7.
pub fn ror(cpu: &mut Cpu, operand: Operand) {
    let val = operand.load(cpu);
    let carry_in = u8::from(cpu.status.contains(Status::CARRY));
    let result = (val >> 1) | (carry_in << 7);
    cpu.status.set(Status::CARRY, val & 0x01 != 0);
    cpu.status.set_nz(result);
    operand.store(cpu, result);
}
