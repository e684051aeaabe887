use bitflags::bitflags;

bitflags! {
    /// Processor status register (`P`).
    ///
    /// ```none
    ///  7 6 5 4 3 2 1 0
    ///  N V 1 B D I Z C
    ///  | |   | | | | +--- Carry
    ///  | |   | | | +----- Zero
    ///  | |   | | +------- Interrupt disable
    ///  | |   | +--------- Decimal mode (accepted, arithmetic not implemented)
    ///  | |   +----------- Break (only meaningful in the byte pushed by BRK/PHP)
    ///  | +--------------- Overflow
    ///  +----------------- Negative
    /// ```
    ///
    /// Bit 5 has no corresponding flag; it always reads back as 1 when `P`
    /// is pushed to the stack. [`Status`] itself only models the seven real
    /// flags, and [`Status::to_byte`]/[`Status::from_byte`] are the explicit
    /// pack/unpack contract that insert or discard bits 4 and 5.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub struct Status: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL_MODE      = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const RESERVED          = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::empty()
    }
}

impl Status {
    /// Packs the flags into a byte suitable for pushing to the stack. Bit 5
    /// always reads as 1. Bit 4 (`B`) reads as 1 only for a software break
    /// (`BRK`/`PHP`); a hardware `IRQ`/`NMI` sequence pushes `B = 0`, which
    /// is how a handler tells the two apart after an `RTI`.
    #[must_use]
    pub const fn to_byte(self, software_break: bool) -> u8 {
        let base = (self.bits() & !0b0011_0000) | 0b0010_0000;
        if software_break {
            base | 0b0001_0000
        } else {
            base
        }
    }

    /// Unpacks a byte popped from the stack (`PLP`, `RTI`) into flags,
    /// discarding bits 4 and 5: neither has a corresponding live flag, so
    /// restoring them from an arbitrary stacked byte would be meaningless.
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        Self::from_bits_truncate(byte & !0b0011_0000)
    }

    /// Sets or clears [`Status::ZERO`] and [`Status::NEGATIVE`] to reflect
    /// `val`, the result of a load/transfer/arithmetic/logic operation.
    pub fn set_nz(&mut self, val: u8) {
        self.set(Self::ZERO, val == 0);
        self.set(Self::NEGATIVE, val & 0x80 != 0);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn to_byte_always_sets_reserved_bit() {
        assert_eq!(Status::empty().to_byte(false), 0b0010_0000);
        assert_eq!(Status::CARRY.to_byte(false), 0b0010_0001);
    }

    #[test]
    fn to_byte_sets_break_only_for_software_break() {
        assert_eq!(Status::empty().to_byte(true), 0b0011_0000);
        assert_eq!(Status::empty().to_byte(false), 0b0010_0000);
    }

    #[test]
    fn from_byte_discards_break_and_reserved() {
        assert_eq!(
            Status::from_byte(0b1111_1111),
            Status::all() & !(Status::BREAK | Status::RESERVED)
        );
        assert_eq!(Status::from_byte(0), Status::empty());
    }

    #[test]
    fn pack_unpack_round_trip_on_the_seven_real_flags() {
        let flags = Status::CARRY | Status::ZERO | Status::NEGATIVE;
        assert_eq!(Status::from_byte(flags.to_byte(true)), flags);
    }

    #[test]
    fn set_nz_tracks_zero_and_sign() {
        let mut s = Status::empty();
        s.set_nz(0);
        assert_eq!(s, Status::ZERO);
        s.set_nz(1);
        assert_eq!(s, Status::empty());
        s.set_nz(0x80);
        assert_eq!(s, Status::NEGATIVE);
    }
}
