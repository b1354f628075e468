//! LEB128 variable-length integers.
//!
//! Every integer in a module (counts, lengths, indices and most immediates) is
//! written in this format. Only encoding lives here, decoding is the consuming
//! engine's business.

use super::*;

/// Longest encoding of a 32-bit value.
pub const MAX_LEN_32: usize = 5;
/// Longest encoding of a 64-bit value.
pub const MAX_LEN_64: usize = 10;

/// Writes the minimal unsigned encoding of `value`.
pub fn write_unsigned(w: &mut Vec<u8>, value: u64) {
    let mut x = value;
    loop {
        let is_last = x & !0x7f == 0;
        let b = ((x & 0x7f) as u8) | if is_last { 0x00 } else { 0x80 };
        w.push(b);
        if is_last {
            break;
        }
        x = x >> 7;
    }
}

/// Writes the minimal signed encoding of `value`. Encoding stops once the
/// remaining bits are just the sign extension of the last group written.
pub fn write_signed(w: &mut Vec<u8>, value: i64) {
    let mut x = value;
    loop {
        let b = (x & 0x7f) as u8;
        x = x >> 7;
        if (x == 0 && b & 0x40 == 0) || (x == -1 && b & 0x40 == 0x40) {
            w.push(b);
            break;
        }
        w.push(b | 0x80);
    }
}

/// Like `write_unsigned` but accepts values wider than 64 bits, which are
/// rejected.
pub fn write_unsigned_wide(w: &mut Vec<u8>, value: u128) -> Result<(), EncodingError> {
    let narrow = match u64::try_from(value) {
        Ok(narrow) => narrow,
        Err(_) => return Err(EncodingError::UnsignedOverflow { value }),
    };
    write_unsigned(w, narrow);
    Ok(())
}

/// Like `write_signed` but accepts values wider than 64 bits, which are
/// rejected.
pub fn write_signed_wide(w: &mut Vec<u8>, value: i128) -> Result<(), EncodingError> {
    let narrow = match i64::try_from(value) {
        Ok(narrow) => narrow,
        Err(_) => return Err(EncodingError::SignedOverflow { value }),
    };
    write_signed(w, narrow);
    Ok(())
}

/// The unsigned encoding of `value` as a fresh buffer, for splicing into
/// function bodies.
pub fn unsigned(value: u64) -> Vec<u8> {
    let mut w = Vec::with_capacity(MAX_LEN_64);
    write_unsigned(&mut w, value);
    w
}

/// The signed encoding of `value` as a fresh buffer.
pub fn signed(value: i64) -> Vec<u8> {
    let mut w = Vec::with_capacity(MAX_LEN_64);
    write_signed(&mut w, value);
    w
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    pub fn read_unsigned(bytes: &[u8]) -> (u64, usize) {
        let mut result = 0u64;
        let mut shift = 0u32;
        for (i, b) in bytes.iter().enumerate() {
            result |= u64::from(b & 0x7f) << shift;
            if b & 0x80 == 0 {
                return (result, i + 1);
            }
            shift += 7;
        }
        panic!("unterminated leb128: {:?}", bytes);
    }

    pub fn read_signed(bytes: &[u8]) -> (i64, usize) {
        let mut result = 0i64;
        let mut shift = 0u32;
        for (i, b) in bytes.iter().enumerate() {
            result |= i64::from(b & 0x7f) << shift;
            shift += 7;
            if b & 0x80 == 0 {
                if shift < 64 && b & 0x40 != 0 {
                    result |= -1i64 << shift;
                }
                return (result, i + 1);
            }
        }
        panic!("unterminated leb128: {:?}", bytes);
    }

    fn minimal_unsigned_len(value: u64) -> usize {
        let bits = 64 - value.leading_zeros() as usize;
        std::cmp::max(1, (bits + 6) / 7)
    }

    fn minimal_signed_len(value: i64) -> usize {
        for n in 1..MAX_LEN_64 {
            let bits = 7 * n as u32 - 1;
            let bound = 1i64 << bits;
            if value >= -bound && value < bound {
                return n;
            }
        }
        MAX_LEN_64
    }

    fn check_continuation_bits(bytes: &[u8]) {
        let (last, init) = unwrap!(bytes.split_last());
        assert!(init.iter().all(|b| b & 0x80 != 0));
        assert_eq!(last & 0x80, 0);
    }

    #[test]
    fn unsigned_vectors() {
        assert_eq!(unsigned(0), vec![0x00]);
        assert_eq!(unsigned(1), vec![0x01]);
        assert_eq!(unsigned(127), vec![0x7f]);
        assert_eq!(unsigned(128), vec![0x80, 0x01]);
        assert_eq!(unsigned(624_485), vec![0xe5, 0x8e, 0x26]);
        assert_eq!(unsigned(u64::from(u32::max_value())), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
        assert_eq!(
            unsigned(u64::max_value()),
            vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01],
        );
    }

    #[test]
    fn signed_vectors() {
        assert_eq!(signed(0), vec![0x00]);
        assert_eq!(signed(-1), vec![0x7f]);
        assert_eq!(signed(42), vec![0x2a]);
        assert_eq!(signed(63), vec![0x3f]);
        assert_eq!(signed(64), vec![0xc0, 0x00]);
        assert_eq!(signed(-64), vec![0x40]);
        assert_eq!(signed(-65), vec![0xbf, 0x7f]);
        assert_eq!(signed(-123_456), vec![0xc0, 0xbb, 0x78]);
        assert_eq!(
            signed(i64::min_value()),
            vec![0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7f],
        );
        assert_eq!(
            signed(i64::max_value()),
            vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00],
        );
    }

    #[test]
    fn wide_values_beyond_64_bits_are_rejected() {
        let mut w = Vec::new();
        let too_big = u128::from(u64::max_value()) + 1;
        assert_eq!(
            write_unsigned_wide(&mut w, too_big),
            Err(EncodingError::UnsignedOverflow { value: too_big }),
        );
        let too_small = i128::from(i64::min_value()) - 1;
        assert_eq!(
            write_signed_wide(&mut w, too_small),
            Err(EncodingError::SignedOverflow { value: too_small }),
        );
        assert!(w.is_empty());

        unwrap!(write_unsigned_wide(&mut w, u128::from(u64::max_value())));
        unwrap!(write_signed_wide(&mut w, i128::from(i64::min_value())));
        assert_eq!(w.len(), 2 * MAX_LEN_64);
    }

    proptest! {
        #[test]
        fn unsigned_round_trips(n in any::<u64>()) {
            let bytes = unsigned(n);
            check_continuation_bits(&bytes);
            prop_assert_eq!(read_unsigned(&bytes), (n, bytes.len()));
            prop_assert_eq!(bytes.len(), minimal_unsigned_len(n));
        }

        #[test]
        fn signed_round_trips(n in any::<i64>()) {
            let bytes = signed(n);
            check_continuation_bits(&bytes);
            prop_assert_eq!(read_signed(&bytes), (n, bytes.len()));
            prop_assert_eq!(bytes.len(), minimal_signed_len(n));
        }

        #[test]
        fn small_unsigned_values_fit_32_bit_bound(n in any::<u32>()) {
            prop_assert!(unsigned(u64::from(n)).len() <= MAX_LEN_32);
        }
    }
}
