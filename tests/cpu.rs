use pretty_assertions::assert_eq;
use w65c02::cpu::Status;
use w65c02::testing::cpu_with_program;

#[test]
fn lda_sta_then_stp_halts_execution() {
    let mut cpu = cpu_with_program(
        0x0200,
        &[
            0xA9, 0x42, // LDA #$42
            0x85, 0x10, // STA $10
            0xDB, // STP
            0xA9, 0xFF, // (never reached) LDA #$FF
        ],
    );

    let result = cpu.run(None);

    assert_eq!(cpu.read(0x0010), 0x42);
    assert_eq!(cpu.reg_a, 0x42);
    assert!(result.halted);
    assert_eq!(result.steps_executed, 3);
}

#[test]
fn adc_sets_carry_on_unsigned_overflow() {
    let mut cpu = cpu_with_program(
        0x0200,
        &[
            0xA9, 0xFF, // LDA #$FF
            0x18, // CLC
            0x69, 0x01, // ADC #$01
        ],
    );

    cpu.run(Some(3));

    assert_eq!(cpu.reg_a, 0x00);
    assert!(cpu.status.contains(Status::CARRY | Status::ZERO));
    assert!(!cpu.status.contains(Status::OVERFLOW));
}

#[test]
fn adc_sets_overflow_on_signed_overflow() {
    let mut cpu = cpu_with_program(
        0x0200,
        &[
            0xA9, 0x7F, // LDA #$7F (127)
            0x18, // CLC
            0x69, 0x01, // ADC #$01
        ],
    );

    cpu.run(Some(3));

    assert_eq!(cpu.reg_a, 0x80);
    assert!(cpu.status.contains(Status::OVERFLOW | Status::NEGATIVE));
    assert!(!cpu.status.contains(Status::CARRY));
}

#[test]
fn jsr_then_rts_round_trips_the_return_address() {
    let mut cpu = cpu_with_program(
        0x0200,
        &[
            0x20, 0x06, 0x02, // JSR $0206
            0xA9, 0x01, // (after return) LDA #$01
            0x00, // BRK (padding so the subroutine starts past it)
            0xA9, 0x05, // $0206: LDA #$05
            0x60, // RTS
        ],
    );

    cpu.run(Some(1)); // JSR
    assert_eq!(cpu.pc, 0x0206);

    cpu.run(Some(2)); // LDA #$05, RTS
    assert_eq!(cpu.pc, 0x0203);
    assert_eq!(cpu.reg_a, 0x05);
}

#[test]
fn branch_taken_and_not_taken() {
    let mut taken = cpu_with_program(
        0x0200,
        &[
            0xA9, 0x00, // LDA #$00
            0xF0, 0x02, // BEQ +2
            0xA9, 0xFF, // (skipped) LDA #$FF
            0xA9, 0x05, // LDA #$05
        ],
    );
    taken.run(Some(3));
    assert_eq!(taken.reg_a, 0x05);

    let mut not_taken = cpu_with_program(
        0x0200,
        &[
            0xA9, 0x01, // LDA #$01
            0xF0, 0x02, // BEQ +2 (not taken)
            0xA9, 0xFF, // LDA #$FF
        ],
    );
    not_taken.run(Some(2));
    assert_eq!(not_taken.reg_a, 0xFF);
}

#[test]
fn zero_page_indirect_pointer_wraps_within_page_zero() {
    let mut cpu = cpu_with_program(
        0x0200,
        &[
            0xA9, 0x34, // LDA #$34
            0x85, 0x20, // STA $20
            0xA9, 0x12, // LDA #$12
            0x85, 0xFF, // STA $FF       ; pointer low byte at $FF
            0xA9, 0x00, // LDA #$00
            0x85, 0x00, // STA $00       ; pointer high byte wraps to $00
            0xA9, 0x99, // LDA #$99
            0xB2, 0xFF, // LDA ($FF)     ; should read ($1234) wrapped, not $0100-page
        ],
    );
    cpu.write(0x1234, 0x77);

    cpu.run(Some(7));

    assert_eq!(cpu.reg_a, 0x77);
}

#[test]
fn injected_irq_is_serviced_between_instructions_unless_masked() {
    let mut cpu = cpu_with_program(0x0200, &[0x58, 0xEA, 0xEA, 0xEA]); // CLI NOP NOP NOP
    cpu.write(0xFFFE, 0x00);
    cpu.write(0xFFFF, 0x03); // IRQ/BRK vector -> $0300

    cpu.step(); // CLI: I starts set on reset, so the IRQ would stay masked without this
    assert!(!cpu.status.contains(Status::INTERRUPT_DISABLE));

    cpu.inject_irq();
    cpu.step(); // services the IRQ instead of fetching the next NOP

    assert_eq!(cpu.pc, 0x0300);
    assert!(cpu.status.contains(Status::INTERRUPT_DISABLE));
}

#[test]
fn injected_irq_stays_pending_while_masked() {
    let mut cpu = cpu_with_program(0x0200, &[0xEA, 0xEA]); // NOP NOP
    cpu.write(0xFFFE, 0x00);
    cpu.write(0xFFFF, 0x03); // IRQ/BRK vector -> $0300

    assert!(cpu.status.contains(Status::INTERRUPT_DISABLE)); // set by reset

    cpu.inject_irq();
    cpu.step(); // I is still set, so the pending IRQ is not serviced

    assert_eq!(cpu.pc, 0x0201);
}

#[test]
fn wai_suspends_until_an_interrupt_arrives() {
    let mut cpu = cpu_with_program(0x0200, &[0xCB, 0xEA]); // WAI NOP
    cpu.write(0xFFFA, 0x00);
    cpu.write(0xFFFB, 0x04); // NMI vector -> $0400

    let idle = cpu.step(); // executes WAI, now waiting
    assert!(!idle.halted);

    let still_idle = cpu.step(); // no interrupt pending yet, stays suspended
    assert_eq!(still_idle.cycles_consumed, 0);

    cpu.inject_nmi();
    cpu.step();
    assert_eq!(cpu.pc, 0x0400);
}

#[test]
fn undefined_opcode_behaves_as_a_one_byte_nop() {
    let mut cpu = cpu_with_program(0x0200, &[0x02, 0xA9, 0x05]); // $02 is undefined

    let result = cpu.step();

    assert_eq!(result.cycles_consumed, 1);
    assert_eq!(cpu.pc, 0x0201);
}
