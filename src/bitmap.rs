const WORDS: usize = 4;

/// Fixed 256-bit bitmap addressed by a byte value.
///
/// One flag per possible octet value, packed into four 64-bit words. This is
/// the presence primitive the trie stores at every level; it has plain value
/// semantics and no failure modes since `u8` cannot index out of range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bitmap([u64; WORDS]);

impl Bitmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the flag for `value`.
    #[inline(always)]
    pub fn set(&mut self, value: u8, on: bool) {
        let word = usize::from(value >> 6);
        let mask = 1u64 << (value & 0x3f);
        if on {
            self.0[word] |= mask;
        } else {
            self.0[word] &= !mask;
        }
    }

    /// Returns the flag for `value`.
    #[inline(always)]
    pub fn is_set(&self, value: u8) -> bool {
        let word = usize::from(value >> 6);
        let mask = 1u64 << (value & 0x3f);
        self.0[word] & mask != 0
    }
}
