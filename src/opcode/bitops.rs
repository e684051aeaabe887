use crate::cpu::{Cpu, Operand, Status};

fn branch_on_bit(cpu: &mut Cpu, operand: Operand, bit: u8, branch_when_set: bool) {
    let val = operand.load(cpu);
    if (val & (1 << bit) != 0) == branch_when_set {
        cpu.pc = operand.addr();
    }
}

fn reset_bit(cpu: &mut Cpu, operand: Operand, bit: u8) {
    let val = operand.load(cpu) & !(1 << bit);
    operand.store(cpu, val);
}

fn set_bit(cpu: &mut Cpu, operand: Operand, bit: u8) {
    let val = operand.load(cpu) | (1 << bit);
    operand.store(cpu, val);
}

macro_rules! bit_branch_fns {
    ($(($name:ident, $bit:literal, $when_set:literal)),* $(,)?) => {
        $(
            #[doc = concat!(
                "Branches to the zero-page-relative target if bit ",
                stringify!($bit),
                " of the tested zero page byte is ",
                if $when_set { "set" } else { "reset" },
                "."
            )]
            pub fn $name(cpu: &mut Cpu, operand: Operand) {
                branch_on_bit(cpu, operand, $bit, $when_set);
            }
        )*
    };
}

macro_rules! bit_mutate_fns {
    ($fname:ident, $helper:ident, $(($name:ident, $bit:literal)),* $(,)?) => {
        $(
            #[doc = concat!(stringify!($fname), " bit ", stringify!($bit), " of a zero page byte.")]
            pub fn $name(cpu: &mut Cpu, operand: Operand) {
                $helper(cpu, operand, $bit);
            }
        )*
    };
}

bit_branch_fns! {
    (bbr0, 0, false), (bbr1, 1, false), (bbr2, 2, false), (bbr3, 3, false),
    (bbr4, 4, false), (bbr5, 5, false), (bbr6, 6, false), (bbr7, 7, false),
    (bbs0, 0, true), (bbs1, 1, true), (bbs2, 2, true), (bbs3, 3, true),
    (bbs4, 4, true), (bbs5, 5, true), (bbs6, 6, true), (bbs7, 7, true),
}

bit_mutate_fns! {
    Resets, reset_bit,
    (rmb0, 0), (rmb1, 1), (rmb2, 2), (rmb3, 3),
    (rmb4, 4), (rmb5, 5), (rmb6, 6), (rmb7, 7),
}

bit_mutate_fns! {
    Sets, set_bit,
    (smb0, 0), (smb1, 1), (smb2, 2), (smb3, 3),
    (smb4, 4), (smb5, 5), (smb6, 6), (smb7, 7),
}

/// Tests and resets bits: `Z` is set when `A & val == 0`, then every bit
/// set in `A` is cleared in `val`.
///
/// # Examples
/// ```
/// # use pretty_assertions::assert_eq;
/// use w65c02::cpu::{Cpu, Status};
///
/// let mut image = [0u8; 0x1_0000];
/// image[0x0200] = 0xA9; // LDA #$0F
/// image[0x0201] = 0x0F;
/// image[0x0202] = 0x85; // STA $10
/// image[0x0203] = 0x10;
/// image[0x0204] = 0x14; // TRB $10
/// image[0x0205] = 0x10;
/// image[0xFFFC] = 0x00;
/// image[0xFFFD] = 0x02;
///
/// let mut cpu = Cpu::new(image);
/// for _ in 0..3 {
///     cpu.step();
/// }
///
/// assert_eq!(cpu.read(0x0010), 0x00);
/// assert!(cpu.status.contains(Status::ZERO));
/// ```
pub fn trb(cpu: &mut Cpu, operand: Operand) {
    let val = operand.load(cpu);
    cpu.status.set(Status::ZERO, val & cpu.reg_a == 0);
    operand.store(cpu, val & !cpu.reg_a);
}

/// Tests and sets bits: `Z` is set when `A & val == 0`, then every bit set
/// in `A` is set in `val`.
pub fn tsb(cpu: &mut Cpu, operand: Operand) {
    let val = operand.load(cpu);
    cpu.status.set(Status::ZERO, val & cpu.reg_a == 0);
    operand.store(cpu, val | cpu.reg_a);
}
