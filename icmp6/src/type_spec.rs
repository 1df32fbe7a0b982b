use thiserror::Error;

use crate::name_table::{NAME_TABLE, NameTableEntry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeSpecError {
    #[error("Ambiguous ICMPv6 type `{input}': `{first}' or `{second}'?")]
    Ambiguous {
        input: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("Invalid ICMPv6 type `{0}'")]
    InvalidType(String),
    #[error("Invalid ICMPv6 code `{0}'")]
    InvalidCode(String),
}

/// ICMPv6タイプ指定
///
/// 単一のタイプと、マッチさせるコードの閉区間`[code_min, code_max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSpec {
    pub icmp_type: u8,
    pub code_min: u8,
    pub code_max: u8,
    /// `!`で否定されているか
    pub inverted: bool,
    /// 未知の否定フラグビット
    pub unknown_invert_bits: u8,
}

impl TypeSpec {
    /// 否定フラグのビット
    pub const INVERT: u8 = 0x01;

    pub const fn new(icmp_type: u8, code_min: u8, code_max: u8) -> Self {
        TypeSpec {
            icmp_type,
            code_min,
            code_max,
            inverted: false,
            unknown_invert_bits: 0,
        }
    }

    /// コード範囲が既定値（0-255）か
    pub fn matches_any_code(&self) -> bool {
        self.code_min == 0 && self.code_max == u8::MAX
    }

    /// レコード上の否定フラグバイトを組み立てる
    pub fn invert_flags(&self) -> u8 {
        let invert = if self.inverted { Self::INVERT } else { 0 };
        invert | (self.unknown_invert_bits & !Self::INVERT)
    }

    /// レコード上の否定フラグバイトを展開
    pub fn with_invert_flags(mut self, flags: u8) -> Self {
        self.inverted = flags & Self::INVERT != 0;
        self.unknown_invert_bits = flags & !Self::INVERT;
        self
    }
}

impl Default for TypeSpec {
    fn default() -> Self {
        TypeSpec::new(0, 0, u8::MAX)
    }
}

/// タイプ名または数値表記を`TypeSpec`に解決
///
/// 1. 名前テーブルのエントリ名に対する大文字小文字を無視した前方一致
/// 2. 一致しなければ`type`または`type/code`の数値表記
pub fn resolve(text: &str, inverted: bool) -> Result<TypeSpec, TypeSpecError> {
    let mut spec = match find_by_prefix(text)? {
        Some(entry) => TypeSpec::new(entry.icmp_type, entry.code_min, entry.code_max),
        None => parse_numeric(text)?,
    };
    spec.inverted = inverted;

    Ok(spec)
}

fn find_by_prefix(text: &str) -> Result<Option<&'static NameTableEntry>, TypeSpecError> {
    let mut matches = NAME_TABLE
        .iter()
        .filter(|entry| is_prefix_ignore_case(text, entry.name));

    let Some(first) = matches.next() else {
        return Ok(None);
    };
    if let Some(second) = matches.find(|entry| entry.name != first.name) {
        return Err(TypeSpecError::Ambiguous {
            input: text.to_string(),
            first: first.name,
            second: second.name,
        });
    }

    Ok(Some(first))
}

fn is_prefix_ignore_case(prefix: &str, name: &str) -> bool {
    let (prefix, name) = (prefix.as_bytes(), name.as_bytes());
    name.len() >= prefix.len() && name[..prefix.len()].eq_ignore_ascii_case(prefix)
}

fn parse_numeric(text: &str) -> Result<TypeSpec, TypeSpecError> {
    let (type_part, code_part) = match text.split_once('/') {
        Some((t, c)) => (t, Some(c)),
        None => (text, None),
    };

    let icmp_type =
        parse_u8_auto_radix(type_part).ok_or_else(|| TypeSpecError::InvalidType(text.to_string()))?;
    let spec = match code_part {
        Some(code_part) => {
            let code = parse_u8_auto_radix(code_part)
                .ok_or_else(|| TypeSpecError::InvalidCode(text.to_string()))?;
            TypeSpec::new(icmp_type, code, code)
        }
        None => TypeSpec::new(icmp_type, 0, u8::MAX),
    };

    Ok(spec)
}

/// 数値文字列を0-255の値として解釈
///
/// `0x`/`0X`で始まれば16進数、`0`で始まれば8進数、それ以外は10進数
pub(crate) fn parse_u8_auto_radix(text: &str) -> Option<u8> {
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    // from_str_radixは先頭の符号を受け付けるため、数字のみを許可する
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u8::from_str_radix(digits, radix).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_table_name() {
        // [正常系] テーブルの全エントリ名が自身の組に解決される
        for entry in NAME_TABLE {
            let spec = resolve(entry.name, false).unwrap();
            assert_eq!(
                (spec.icmp_type, spec.code_min, spec.code_max),
                (entry.icmp_type, entry.code_min, entry.code_max),
                "{}",
                entry.name
            );
            assert!(!spec.inverted);
        }
    }

    #[test]
    fn test_resolve_aliases() {
        // [正常系] 正式名と別名が同じ組になる
        assert_eq!(resolve("echo-request", false), Ok(TypeSpec::new(128, 0, 255)));
        assert_eq!(resolve("ping", false), Ok(TypeSpec::new(128, 0, 255)));
        assert_eq!(resolve("pong", false), Ok(TypeSpec::new(129, 0, 255)));
        assert_eq!(
            resolve("ttl-exceeded", false),
            resolve("time-exceeded", false)
        );
    }

    #[test]
    fn test_resolve_prefix() {
        // [正常系] 一意な前方一致
        assert_eq!(resolve("router-s", false), resolve("router-solicitation", false));
        assert_eq!(resolve("red", false), Ok(TypeSpec::new(137, 0, 255)));
        assert_eq!(resolve("packet", false), Ok(TypeSpec::new(2, 0, 255)));

        // [正常系] 大文字小文字を区別しない
        assert_eq!(resolve("Echo-Request", false), Ok(TypeSpec::new(128, 0, 255)));
        assert_eq!(resolve("PORT-UNR", false), Ok(TypeSpec::new(1, 4, 4)));

        // [異常系] 複数のエントリに前方一致する
        assert_eq!(
            resolve("rout", false),
            Err(TypeSpecError::Ambiguous {
                input: "rout".to_string(),
                first: "router-solicitation",
                second: "router-advertisement",
            })
        );
        assert_eq!(
            resolve("echo", false),
            Err(TypeSpecError::Ambiguous {
                input: "echo".to_string(),
                first: "echo-request",
                second: "echo-reply",
            })
        );
        assert!(matches!(
            resolve("", false),
            Err(TypeSpecError::Ambiguous {
                first: "destination-unreachable",
                second: "no-route",
                ..
            })
        ));
    }

    #[test]
    fn test_resolve_numeric() {
        // [正常系] タイプのみ
        assert_eq!(resolve("134", false), Ok(TypeSpec::new(134, 0, 255)));
        assert_eq!(resolve("134", false), resolve("router-advertisement", false));
        assert_eq!(resolve("0", false), Ok(TypeSpec::new(0, 0, 255)));
        assert_eq!(resolve("255", false), Ok(TypeSpec::new(255, 0, 255)));

        // [正常系] タイプとコード
        assert_eq!(resolve("4/2", false), Ok(TypeSpec::new(4, 2, 2)));
        assert_eq!(resolve("1/0", false), Ok(TypeSpec::new(1, 0, 0)));

        // [正常系] 16進数と8進数
        assert_eq!(resolve("0x80", false), Ok(TypeSpec::new(128, 0, 255)));
        assert_eq!(resolve("0X86/0x1", false), Ok(TypeSpec::new(134, 1, 1)));
        assert_eq!(resolve("0200", false), Ok(TypeSpec::new(128, 0, 255)));

        // [異常系] 不正なタイプ
        assert_eq!(
            resolve("256", false),
            Err(TypeSpecError::InvalidType("256".to_string()))
        );
        assert_eq!(
            resolve("foo", false),
            Err(TypeSpecError::InvalidType("foo".to_string()))
        );
        assert_eq!(
            resolve("/3", false),
            Err(TypeSpecError::InvalidType("/3".to_string()))
        );
        assert_eq!(
            resolve("-1", false),
            Err(TypeSpecError::InvalidType("-1".to_string()))
        );
        assert_eq!(
            resolve("+4", false),
            Err(TypeSpecError::InvalidType("+4".to_string()))
        );
        assert_eq!(
            resolve("08", false),
            Err(TypeSpecError::InvalidType("08".to_string()))
        );

        // [異常系] 不正なコード
        assert_eq!(
            resolve("4/", false),
            Err(TypeSpecError::InvalidCode("4/".to_string()))
        );
        assert_eq!(
            resolve("4/256", false),
            Err(TypeSpecError::InvalidCode("4/256".to_string()))
        );
        assert_eq!(
            resolve("4/2/1", false),
            Err(TypeSpecError::InvalidCode("4/2/1".to_string()))
        );
    }

    #[test]
    fn test_resolve_inverted() {
        // [正常系] 否定フラグが引き継がれる
        let spec = resolve("ping", true).unwrap();
        assert!(spec.inverted);
        assert_eq!(spec.invert_flags(), TypeSpec::INVERT);

        let spec = resolve("1/3", true).unwrap();
        assert!(spec.inverted);
        assert_eq!((spec.icmp_type, spec.code_min, spec.code_max), (1, 3, 3));
    }

    #[test]
    fn test_invert_flags() {
        // [正常系] フラグバイトの展開と組み立て
        let spec = TypeSpec::default().with_invert_flags(0x05);
        assert!(spec.inverted);
        assert_eq!(spec.unknown_invert_bits, 0x04);
        assert_eq!(spec.invert_flags(), 0x05);

        let spec = TypeSpec::default().with_invert_flags(0x00);
        assert!(!spec.inverted);
        assert_eq!(spec.invert_flags(), 0x00);
    }

    #[test]
    fn test_type_spec_default() {
        // [正常系] 既定値は全コードにマッチ
        let spec = TypeSpec::default();
        assert_eq!(spec.icmp_type, 0);
        assert!(spec.matches_any_code());
        assert!(!spec.inverted);
    }

    #[test]
    fn test_error_message() {
        // [正常系] エラーメッセージの書式
        let err = resolve("rout", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Ambiguous ICMPv6 type `rout': `router-solicitation' or `router-advertisement'?"
        );
        assert_eq!(
            resolve("999", false).unwrap_err().to_string(),
            "Invalid ICMPv6 type `999'"
        );
    }
}
