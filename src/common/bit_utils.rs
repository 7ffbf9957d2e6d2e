use std::fmt::Display;

use num_traits::PrimInt;

// Bit buffer
//------------------------------------------------------------------------------

// Append-only bit buffer, most significant bit first within each byte. Bounded by
// a bit capacity fixed at creation.
#[derive(Debug, Clone)]
pub struct BitStream {
    data: Vec<u8>,
    len: usize,
    capacity: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity.div_ceil(8)), len: 0, capacity }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    // Bits used in the last byte, zero when byte aligned
    pub fn bit_offset(&self) -> usize {
        self.len & 7
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[cfg(test)]
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| (self.data[i >> 3] >> (7 - (i & 7))) & 1 == 1)
    }
}

impl BitStream {
    pub fn push(&mut self, bit: bool) {
        assert!(self.len < self.capacity, "Bit stream overflow: Capacity {}", self.capacity);

        let offset = self.bit_offset();
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    // Appends the low `size` bits of `bits`
    pub fn push_bits<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let width = T::zero().count_zeros() as usize;
        debug_assert!(size <= width, "Size {size} exceeds the {width} bit type");
        debug_assert!(size == width || bits >> size == T::zero(), "{bits} doesn't fit in {size} bits");
        assert!(
            size <= self.remaining(),
            "Bit stream overflow: Capacity {}, Requested {}",
            self.capacity,
            self.len + size
        );

        for i in (0..size).rev() {
            self.push((bits >> i) & T::one() == T::one());
        }
    }
}


#[cfg(test)]
mod bit_stream_proptests {
    use proptest::prelude::*;

    use super::BitStream;

    proptest! {
        #[test]
        fn proptest_push_then_read(chunks in prop::collection::vec((any::<u16>(), 0usize..=16), 0..64)) {
            let capacity = chunks.iter().map(|&(_, sz)| sz).sum::<usize>();
            let mut bs = BitStream::new(capacity);
            let mut exp = Vec::with_capacity(capacity);
            for &(bits, sz) in &chunks {
                let bits = if sz == 16 { bits } else { bits & ((1 << sz) - 1) };
                bs.push_bits(bits, sz);
                exp.extend((0..sz).rev().map(|i| (bits >> i) & 1 == 1));
            }

            prop_assert_eq!(bs.len(), capacity);
            prop_assert_eq!(bs.data().len(), capacity.div_ceil(8));
            prop_assert_eq!(bs.bit_offset(), capacity % 8);
            prop_assert_eq!(bs.bits().collect::<Vec<_>>(), exp);
        }
    }
}
