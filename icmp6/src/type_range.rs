use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeRangeError {
    #[error("Invalid ICMPv6 type range `{0}'")]
    InvalidRange(String),
}

/// ICMPv6タイプの閉区間`[min_type, max_type]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRange {
    min_type: u8,
    max_type: u8,
}

impl TypeRange {
    /// `min_type > max_type`の場合は`None`
    pub const fn new(min_type: u8, max_type: u8) -> Option<Self> {
        if min_type <= max_type {
            Some(TypeRange { min_type, max_type })
        } else {
            None
        }
    }

    pub const fn min_type(&self) -> u8 {
        self.min_type
    }

    pub const fn max_type(&self) -> u8 {
        self.max_type
    }

    /// タイプが範囲に含まれるか
    pub const fn contains(&self, icmp_type: u8) -> bool {
        self.min_type <= icmp_type && icmp_type <= self.max_type
    }
}

/// `min:max`形式の文字列をタイプ範囲として解釈
///
/// 文字列全体が`数字:数字`でなければならず、後続の文字は許可しない
pub fn parse_range(text: &str) -> Result<TypeRange, TypeRangeError> {
    let invalid = || TypeRangeError::InvalidRange(text.to_string());

    let (min, max) = text.split_once(':').ok_or_else(invalid)?;
    let min = parse_decimal(min).ok_or_else(invalid)?;
    let max = parse_decimal(max).ok_or_else(invalid)?;

    let min = u8::try_from(min).map_err(|_| invalid())?;
    let max = u8::try_from(max).map_err(|_| invalid())?;
    TypeRange::new(min, max).ok_or_else(invalid)
}

fn parse_decimal(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        // [正常系] 有効な範囲
        assert_eq!(parse_range("10:20"), Ok(TypeRange { min_type: 10, max_type: 20 }));
        assert_eq!(parse_range("0:255"), Ok(TypeRange { min_type: 0, max_type: 255 }));
        assert_eq!(parse_range("128:128"), Ok(TypeRange { min_type: 128, max_type: 128 }));

        // [異常系] min > max
        assert_eq!(
            parse_range("20:10"),
            Err(TypeRangeError::InvalidRange("20:10".to_string()))
        );

        // [異常系] 範囲外の値
        assert_eq!(
            parse_range("300:400"),
            Err(TypeRangeError::InvalidRange("300:400".to_string()))
        );
        assert!(parse_range("10:256").is_err());
        assert!(parse_range("99999999999:1").is_err());
    }

    #[test]
    fn test_parse_range_malformed() {
        // [異常系] 後続の文字
        assert!(parse_range("10:20abc").is_err());
        assert!(parse_range("10:20$").is_err());
        assert!(parse_range("10:20:30").is_err());
        assert!(parse_range("10:20 ").is_err());

        // [異常系] 区切りや数値の欠落
        assert!(parse_range("10").is_err());
        assert!(parse_range(":20").is_err());
        assert!(parse_range("10:").is_err());
        assert!(parse_range("").is_err());

        // [異常系] 数字以外
        assert!(parse_range("a:b").is_err());
        assert!(parse_range("-1:20").is_err());
        assert!(parse_range("+1:20").is_err());
        assert!(parse_range(" 1:20").is_err());
    }

    #[test]
    fn test_type_range_contains() {
        // [正常系] 境界を含む
        let range = TypeRange::new(133, 137).unwrap();
        assert!(range.contains(133));
        assert!(range.contains(137));
        assert!(!range.contains(132));
        assert!(!range.contains(138));

        // [異常系] min > max
        assert!(TypeRange::new(2, 1).is_none());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            parse_range("20:10").unwrap_err().to_string(),
            "Invalid ICMPv6 type range `20:10'"
        );
    }
}
