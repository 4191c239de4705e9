//! Packed visibility/restriction annotations.
//!
//! Every program element in an API description carries a visibility and a
//! set of usage restrictions. Both axes are small, so they are packed into
//! one integer: bits 0-3 hold the visibility, bits 4-8 the restrictions,
//! bits above 8 are reserved.

use bitflags::bitflags;

bitflags! {
    /// Visibility of a program element relative to the component's API
    /// surface. A 4-bit axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Visibility: u16 {
        /// Part of the public API.
        const API = 0x1;
        /// Service-provider interface: implementable, not general API.
        const SPI = 0x2;
        /// Internal, not intended for consumption.
        const PRIVATE = 0x4;
        /// Internal but tolerated for specific downstream components.
        const PRIVATE_PERMISSIBLE = 0x8;
    }
}

bitflags! {
    /// Declared limitations on how an API element may be used. Independent
    /// flags; a 5-bit mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Restrictions: u16 {
        const NO_EXTEND = 0x01;
        const NO_IMPLEMENT = 0x02;
        const NO_INSTANTIATE = 0x04;
        const NO_REFERENCE = 0x08;
        const NO_OVERRIDE = 0x10;
    }
}

/// Mask selecting the visibility bits of a packed annotation.
pub const VISIBILITY_MASK: u16 = 0x000F;
/// Mask selecting the restriction bits of a packed annotation.
pub const RESTRICTIONS_MASK: u16 = 0x01F0;

const RESTRICTIONS_SHIFT: u16 = 4;

/// A visibility/restrictions pair packed into one integer.
///
/// Equality and hashing are defined purely on the packed bits. Only the 9
/// low bits are meaningful; the flag types make out-of-range values
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiAnnotations {
    bits: u16,
}

impl ApiAnnotations {
    /// Pack a visibility and restriction set.
    pub fn new(visibility: Visibility, restrictions: Restrictions) -> Self {
        Self {
            bits: visibility.bits() | (restrictions.bits() << RESTRICTIONS_SHIFT),
        }
    }

    /// Rebuild from a packed integer. Bits outside the two defined fields
    /// are discarded.
    pub fn from_bits(bits: u16) -> Self {
        let visibility = Visibility::from_bits_truncate(bits & VISIBILITY_MASK);
        let restrictions =
            Restrictions::from_bits_truncate((bits & RESTRICTIONS_MASK) >> RESTRICTIONS_SHIFT);
        Self::new(visibility, restrictions)
    }

    /// The packed integer.
    pub fn bits(&self) -> u16 {
        self.bits
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::from_bits_truncate(self.bits & VISIBILITY_MASK)
    }

    pub fn restrictions(&self) -> Restrictions {
        Restrictions::from_bits_truncate((self.bits & RESTRICTIONS_MASK) >> RESTRICTIONS_SHIFT)
    }
}
