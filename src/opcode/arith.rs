use crate::cpu::{Cpu, Operand, Status};

/// Adds a value in memory (plus the carry flag) to the accumulator, setting
/// `C`/`V`/`Z`/`N`. The overflow flag follows the two's-complement rule:
/// it's set when the two operands share a sign but the result doesn't.
///
/// BCD is not implemented; `D` is accepted on the status register but has
/// no effect on this operation's arithmetic.
///
/// # Examples
/// ```
/// # use pretty_assertions::assert_eq;
/// use w65c02::cpu::{Cpu, Status};
///
/// let mut image = [0u8; 0x1_0000];
/// image[0x0200] = 0xA9; // LDA #$50
/// image[0x0201] = 0x50;
/// image[0x0202] = 0x69; // ADC #$50
/// image[0x0203] = 0x50;
/// image[0xFFFC] = 0x00;
/// image[0xFFFD] = 0x02;
///
/// let mut cpu = Cpu::new(image);
/// cpu.step();
/// cpu.step();
///
/// assert_eq!(cpu.reg_a, 0xA0);
/// assert!(cpu.status.contains(Status::OVERFLOW));
/// assert!(cpu.status.contains(Status::NEGATIVE));
/// ```
pub fn adc(cpu: &mut Cpu, operand: Operand) {
    let val = operand.load(cpu);
    let carry_in = u8::from(cpu.status.contains(Status::CARRY));

    let (partial, carry1) = cpu.reg_a.overflowing_add(val);
    let (sum, carry2) = partial.overflowing_add(carry_in);

    cpu.status.set(Status::CARRY, carry1 || carry2);
    cpu.status
        .set(Status::OVERFLOW, (cpu.reg_a ^ sum) & (val ^ sum) & 0x80 != 0);
    cpu.set_reg_a(sum);
}

/// Subtracts a value in memory (and the borrow, i.e. the complement of
/// carry) from the accumulator, setting `C`/`V`/`Z`/`N`. `C` set going in
/// means "no borrow"; the same overflow rule as [`adc`] applies to `val`'s
/// complement.
pub fn sbc(cpu: &mut Cpu, operand: Operand) {
    let val = operand.load(cpu);
    let borrow_in = u8::from(!cpu.status.contains(Status::CARRY));

    let (partial, carry1) = cpu.reg_a.overflowing_sub(val);
    let (diff, carry2) = partial.overflowing_sub(borrow_in);

    cpu.status.set(Status::CARRY, !(carry1 || carry2));
    cpu.status
        .set(Status::OVERFLOW, (cpu.reg_a ^ diff) & (!val ^ diff) & 0x80 != 0);
    cpu.set_reg_a(diff);
}
