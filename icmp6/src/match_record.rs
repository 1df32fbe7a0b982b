use std::fmt::{self, Display};

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

use crate::TryFromBytes;
use crate::format::{MATCH_NAME, TYPE_OPTION, TYPE_RANGE_OPTION};
use crate::type_range::{TypeRange, TypeRangeError, parse_range};
use crate::type_spec::{TypeSpec, TypeSpecError, resolve};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchRecordError {
    #[error(transparent)]
    InvalidTypeSpec(#[from] TypeSpecError),
    #[error(transparent)]
    InvalidTypeRange(#[from] TypeRangeError),
    #[error("Option `--{0}' does not support inversion")]
    InvertNotSupported(MatchOption),
    #[error(
        "Invalid match record length. Expected {len} bytes, but got {0} bytes.",
        len = MatchRecord::LENGTH
    )]
    InvalidRecordLength(usize),
    #[error("Invalid match record discriminant: {0}")]
    InvalidDiscriminant(u8),
    #[error("Invalid code range in match record: {min}-{max}")]
    InvalidRecordCodes { min: u8, max: u8 },
    #[error("Invalid type range in match record: {min}-{max}")]
    InvalidRecordRange { min: u8, max: u8 },
}

/// マッチオプションの種類
///
/// 値はレコード上の識別子としても使用する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOption {
    /// `[!] --icmpv6-type`
    Type = 0,

    /// `--icmpv6-type-range`
    TypeRange = 1,
}

impl MatchOption {
    pub const fn name(&self) -> &'static str {
        match self {
            MatchOption::Type => TYPE_OPTION,
            MatchOption::TypeRange => TYPE_RANGE_OPTION,
        }
    }

    /// `!`による否定を受け付けるか
    pub const fn invertible(&self) -> bool {
        matches!(self, MatchOption::Type)
    }

    /// オプション名から種類を取得
    pub fn from_name(name: &str) -> Option<Self> {
        [MatchOption::Type, MatchOption::TypeRange]
            .into_iter()
            .find(|option| option.name() == name)
    }
}

impl Display for MatchOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u8> for MatchOption {
    type Error = MatchRecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MatchOption::Type),
            1 => Ok(MatchOption::TypeRange),
            _ => Err(MatchRecordError::InvalidDiscriminant(value)),
        }
    }
}

/// ICMPv6マッチレコード
///
/// 最後に指定されたオプションに対応する一方だけを保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRecord {
    Type(TypeSpec),
    Range(TypeRange),
}

impl MatchRecord {
    /// バイナリレコードの長さ
    ///
    /// `[type, code_min, code_max, invert_flags, discriminant, min_type, max_type]`
    pub const LENGTH: usize = 7;

    /// 1つのオプションを解釈してレコードを作成
    pub fn parse(option: MatchOption, arg: &str, invert: bool) -> Result<Self, MatchRecordError> {
        match option {
            MatchOption::Type => Ok(MatchRecord::Type(resolve(arg, invert)?)),
            MatchOption::TypeRange if invert => Err(MatchRecordError::InvertNotSupported(option)),
            MatchOption::TypeRange => Ok(MatchRecord::Range(parse_range(arg)?)),
        }
    }

    /// 識別子
    pub fn option(&self) -> MatchOption {
        match self {
            MatchRecord::Type(_) => MatchOption::Type,
            MatchRecord::Range(_) => MatchOption::TypeRange,
        }
    }

    /// 有効な方の表示形式
    pub fn display(&self, numeric: bool) -> String {
        match self {
            MatchRecord::Type(spec) => spec.display(numeric).to_string(),
            MatchRecord::Range(range) => range.display().to_string(),
        }
    }

    /// 有効な方の保存形式
    pub fn save(&self) -> String {
        match self {
            MatchRecord::Type(spec) => spec.save().to_string(),
            MatchRecord::Range(range) => range.save().to_string(),
        }
    }

    /// ルール一覧用の表示形式（マッチ名付き）
    pub fn print(&self, numeric: bool) -> String {
        format!(" {MATCH_NAME}{}", self.display(numeric))
    }
}

impl Default for MatchRecord {
    fn default() -> Self {
        MatchRecord::Type(TypeSpec::default())
    }
}

impl TryFromBytes for MatchRecord {
    type Error = MatchRecordError;

    fn try_from_bytes(value: impl AsRef<[u8]>) -> Result<Self, Self::Error> {
        let bytes = value.as_ref();
        if bytes.len() != Self::LENGTH {
            return Err(MatchRecordError::InvalidRecordLength(bytes.len()));
        }

        // 無効な側のフィールドは読み捨てる
        match MatchOption::try_from(bytes[4])? {
            MatchOption::Type => {
                let (min, max) = (bytes[1], bytes[2]);
                if min > max {
                    return Err(MatchRecordError::InvalidRecordCodes { min, max });
                }
                let spec = TypeSpec::new(bytes[0], min, max).with_invert_flags(bytes[3]);
                Ok(MatchRecord::Type(spec))
            }
            MatchOption::TypeRange => {
                let (min, max) = (bytes[5], bytes[6]);
                TypeRange::new(min, max)
                    .map(MatchRecord::Range)
                    .ok_or(MatchRecordError::InvalidRecordRange { min, max })
            }
        }
    }
}

impl TryFrom<&[u8]> for MatchRecord {
    type Error = MatchRecordError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_bytes(value)
    }
}

impl TryFrom<Bytes> for MatchRecord {
    type Error = MatchRecordError;

    fn try_from(value: Bytes) -> Result<Self, Self::Error> {
        Self::try_from_bytes(value)
    }
}

impl From<&MatchRecord> for Bytes {
    fn from(value: &MatchRecord) -> Self {
        let mut bytes = BytesMut::with_capacity(MatchRecord::LENGTH);
        match value {
            MatchRecord::Type(spec) => {
                bytes.put_u8(spec.icmp_type);
                bytes.put_u8(spec.code_min);
                bytes.put_u8(spec.code_max);
                bytes.put_u8(spec.invert_flags());
                bytes.put_u8(MatchOption::Type as u8);
                bytes.put_bytes(0, 2);
            }
            MatchRecord::Range(range) => {
                bytes.put_bytes(0, 4);
                bytes.put_u8(MatchOption::TypeRange as u8);
                bytes.put_u8(range.min_type());
                bytes.put_u8(range.max_type());
            }
        }
        bytes.freeze()
    }
}

impl From<MatchRecord> for Bytes {
    fn from(value: MatchRecord) -> Self {
        Bytes::from(&value)
    }
}

impl From<MatchRecord> for Vec<u8> {
    fn from(value: MatchRecord) -> Self {
        Bytes::from(value).to_vec()
    }
}

/// マッチレコードの構築状態
///
/// オプションは指定された順に適用され、最後のものが有効になる。
/// 解釈に失敗した場合は状態を変更しない
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchRecordBuilder {
    record: Option<MatchRecord>,
}

impl MatchRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// オプションを1つ適用
    pub fn apply(
        &mut self,
        option: MatchOption,
        arg: &str,
        invert: bool,
    ) -> Result<&MatchRecord, MatchRecordError> {
        let record = MatchRecord::parse(option, arg, invert)?;
        Ok(&*self.record.insert(record))
    }

    /// オプションが1つも適用されていないか
    pub fn is_uninitialized(&self) -> bool {
        self.record.is_none()
    }

    /// レコードを確定
    ///
    /// オプションが適用されていなければ全コードにマッチするタイプ0のレコード
    pub fn build(self) -> MatchRecord {
        self.record.unwrap_or_default()
    }
}
