pub const BYTE_WIDTH: usize = 8;

/// Most significant bits a chunk may carry. Leading zeros do not count.
pub const MAX_CODE_BITS: usize = 32;

/// Smallest multiple of 8 bits that holds `value`.
pub fn width_for(value: u32) -> usize {
    let used = (u32::BITS - value.leading_zeros()) as usize;
    used.max(1).div_ceil(BYTE_WIDTH) * BYTE_WIDTH
}

pub fn to_binary(value: u32, width: usize) -> String {
    (0..width)
        .rev()
        .map(|shift| {
            if shift < u32::BITS as usize && (value >> shift) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

pub fn from_binary(code: &str) -> Option<u32> {
    if !is_binary(code) {
        return None;
    }
    let significant = code.trim_start_matches('0');
    if significant.len() > MAX_CODE_BITS {
        return None;
    }
    significant.bytes().try_fold(0u32, |acc, b| match b {
        b'0' => Some(acc << 1),
        b'1' => Some((acc << 1) | 1),
        _ => None,
    })
}

pub fn is_binary(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'0' || b == b'1')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_for() {
        assert_eq!(width_for(0), 8);
        assert_eq!(width_for(65), 8);
        assert_eq!(width_for(255), 8);
        assert_eq!(width_for(256), 16);
        assert_eq!(width_for(0x20AC), 16);
        assert_eq!(width_for(0x1F600), 24);
    }

    #[test]
    fn test_to_binary() {
        assert_eq!(to_binary(65, 8), "01000001");
        assert_eq!(to_binary(0, 8), "00000000");
        assert_eq!(to_binary(255, 8), "11111111");
        assert_eq!(to_binary(0x20AC, 16), "0010000010101100");
    }

    #[test]
    fn test_to_binary_wider_than_u32() {
        assert_eq!(to_binary(1, 40), format!("{}1", "0".repeat(39)));
    }

    #[test]
    fn test_from_binary() {
        assert_eq!(from_binary("01000001"), Some(65));
        assert_eq!(from_binary("1"), Some(1));
        assert_eq!(from_binary("11111111111111111111111111111111"), Some(u32::MAX));
    }

    #[test]
    fn test_from_binary_rejects() {
        assert_eq!(from_binary(""), None);
        assert_eq!(from_binary("102"), None);
        assert_eq!(from_binary(&"1".repeat(33)), None);
    }

    #[test]
    fn test_from_binary_ignores_leading_zeros() {
        let long = format!("{}1000010", "0".repeat(40));
        assert_eq!(from_binary(&long), Some(66));
        assert_eq!(from_binary(&"0".repeat(64)), Some(0));
        assert_eq!(from_binary(&format!("0{}", "1".repeat(33))), None);
    }

    #[test]
    fn test_all_bytes_match_std_formatting() {
        for v in 0..=255u32 {
            let code = to_binary(v, width_for(v));
            assert_eq!(code, format!("{:08b}", v));
            assert_eq!(from_binary(&code), Some(v));
        }
    }

    #[test]
    fn test_is_binary() {
        assert!(is_binary("0101"));
        assert!(!is_binary(""));
        assert!(!is_binary("0,1"));
        assert!(!is_binary("01 0"));
    }
}
