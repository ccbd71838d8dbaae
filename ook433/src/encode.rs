use bit_vec::BitVec;

use crate::error::OokError;

/// Encodes `code` as a fixed-width, MSB-first bit sequence.
///
/// The sequence is zero-padded on the left when the natural bit
/// length of `code` is shorter than `width`. A code that does not fit
/// fails with [`OokError::CodeTooWide`]; it is never truncated.
pub fn encode(code: u64, width: usize) -> Result<BitVec, OokError> {
    if !(1..=u64::BITS as usize).contains(&width) {
        return Err(OokError::InvalidCodeWidth(width));
    }
    if bit_length(code) > width {
        return Err(OokError::CodeTooWide { code, width });
    }
    Ok((0..width)
        .map(|i| (code >> (width - 1 - i)) & 1 == 1)
        .collect())
}

const fn bit_length(code: u64) -> usize {
    (u64::BITS - code.leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn encode_zero_is_all_zero_bits() -> anyhow::Result<()> {
        let bits = encode(0, 40)?;
        assert_eq!(40, bits.len());
        assert!(bits.iter().all(|b| !b));
        Ok(())
    }

    #[test]
    fn encode_max_is_all_one_bits() -> anyhow::Result<()> {
        let bits = encode((1 << 40) - 1, 40)?;
        assert_eq!(40, bits.len());
        assert!(bits.iter().all(|b| b));
        Ok(())
    }

    #[test]
    fn encode_is_msb_first() -> anyhow::Result<()> {
        let bits = encode(0b1011, 8)?;
        assert_eq!(
            vec![false, false, false, false, true, false, true, true],
            bits.iter().collect::<Vec<_>>()
        );
        Ok(())
    }

    #[rstest]
    #[case(1 << 41, 40)]
    #[case(1 << 40, 40)]
    #[case(2, 1)]
    fn encode_rejects_wide_codes(#[case] code: u64, #[case] width: usize) {
        assert_eq!(Err(OokError::CodeTooWide { code, width }), encode(code, width));
    }

    #[rstest]
    #[case(0)]
    #[case(65)]
    fn encode_rejects_bad_width(#[case] width: usize) {
        assert_eq!(Err(OokError::InvalidCodeWidth(width)), encode(0, width));
    }

    #[test]
    fn encode_full_width() -> anyhow::Result<()> {
        assert!(encode(u64::MAX, 64)?.iter().all(|b| b));
        assert!(encode(1, 1)?[0]);
        Ok(())
    }

    #[test]
    fn encode_pads_sample_code() -> anyhow::Result<()> {
        // 95357333845 needs 37 bits, so a 40 bit encoding starts with
        // three padding zeros.
        let bits = encode(95357333845, 40)?;
        assert!(!bits[0] && !bits[1] && !bits[2]);
        assert!(bits[3]);
        Ok(())
    }
}
