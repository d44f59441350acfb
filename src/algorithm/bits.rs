//! Bit scanning helpers over board row masks
//!
//! Bit positions are 1-based so that an empty mask can report position 0.

/// Number of set bits
pub const fn popcount(n: u128) -> u32 {
    n.count_ones()
}

/// 1-based index of the highest set bit, 0 when no bit is set
pub const fn find_msb(n: u128) -> u32 {
    u128::BITS - n.leading_zeros()
}

/// 1-based index of the lowest set bit, 0 when no bit is set
pub const fn find_lsb(n: u128) -> u32 {
    if n == 0 { 0 } else { n.trailing_zeros() + 1 }
}

/// Test whether the set bits form one unbroken run
///
/// The empty mask is not a block.
pub const fn is_contiguous_block(n: u128) -> bool {
    n != 0 && popcount(n) - 1 == find_msb(n) - find_lsb(n)
}

/// Test whether exactly one bit is set
pub const fn is_single_bit(n: u128) -> bool {
    n.is_power_of_two()
}
