use std::fmt;

/// Length of the encoded mask in a batch reference.
pub const MASK_LEN: usize = 8;

/// A 64 bit membership mask: bit `i` is set iff key set entry `i`
/// contributed to an aggregate.
///
/// The all zero mask does NOT select nobody: it is `ALL_MEMBERS`, the
/// whole committee. Existing references rely on this encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mask(u64);

impl Mask {
    /// Selects every member of the key set.
    pub const ALL_MEMBERS: Mask = Mask(0);

    pub fn from_bits(bits: u64) -> Self {
        Mask(bits)
    }

    /// The raw bits, as they are encoded on the wire.
    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn is_all_members(self) -> bool {
        self.0 == 0
    }

    /// Whether entry `index` of the key set is selected.
    pub fn selects(self, index: usize) -> bool {
        if self.is_all_members() {
            return true;
        }
        index < 64 && (self.0 >> index) & 0x1 == 1
    }

    /// Returns the mask with bit `index` set.
    pub fn with(self, index: usize) -> Self {
        debug_assert!(index < 64);
        Mask(self.0 | (1u64 << index))
    }

    pub fn to_be_bytes(self) -> [u8; MASK_LEN] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; MASK_LEN]) -> Self {
        Mask(u64::from_be_bytes(bytes))
    }
}

impl From<u64> for Mask {
    fn from(bits: u64) -> Self {
        Mask(bits)
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_all_members() {
            write!(f, "Mask(ALL_MEMBERS)")
        } else {
            write!(f, "Mask({:#b})", self.0)
        }
    }
}
