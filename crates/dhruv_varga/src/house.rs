//! Whole-sign houses.

/// Whole-sign house (1-12) of `body_sign` counted from `ascendant_sign`.
///
/// Sign indices are 0-based and reduced mod 12.
pub const fn whole_sign_house(ascendant_sign: u8, body_sign: u8) -> u8 {
    ((body_sign % 12 + 12 - ascendant_sign % 12) % 12) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_sign_is_first_house() {
        for s in 0..12 {
            assert_eq!(whole_sign_house(s, s), 1);
        }
    }

    #[test]
    fn counts_forward_and_wraps() {
        assert_eq!(whole_sign_house(3, 7), 5);
        assert_eq!(whole_sign_house(3, 2), 12);
        assert_eq!(whole_sign_house(11, 0), 2);
        assert_eq!(whole_sign_house(0, 11), 12);
    }

    #[test]
    fn reduces_out_of_range_signs() {
        assert_eq!(whole_sign_house(12, 1), 2);
    }
}
