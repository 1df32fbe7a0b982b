use std::fmt::{self, Display};

use crate::name_table::{find_exact, render_help};
use crate::type_range::TypeRange;
use crate::type_spec::TypeSpec;

/// マッチ名
pub const MATCH_NAME: &str = "ipv6-icmp";

/// `--icmpv6-type`オプション名
pub const TYPE_OPTION: &str = "icmpv6-type";

/// `--icmpv6-type-range`オプション名
pub const TYPE_RANGE_OPTION: &str = "icmpv6-type-range";

/// 表示用の`TypeSpec`
///
/// `numeric`が偽の場合は名前テーブルから正式名を探して表示する
#[derive(Debug, Clone, Copy)]
pub struct TypeSpecDisplay<'a> {
    spec: &'a TypeSpec,
    numeric: bool,
}

impl Display for TypeSpecDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.spec;
        let invert = if spec.inverted { "!" } else { "" };

        let entry = if self.numeric {
            None
        } else {
            find_exact(spec.icmp_type, spec.code_min, spec.code_max)
        };
        match entry {
            Some(entry) => write!(f, " {invert}{}", entry.name)?,
            None => {
                write!(f, " {invert}type {}", spec.icmp_type)?;
                if spec.code_min == spec.code_max {
                    write!(f, " code {}", spec.code_min)?;
                } else if !spec.matches_any_code() {
                    write!(f, " codes {}-{}", spec.code_min, spec.code_max)?;
                }
            }
        }

        if spec.unknown_invert_bits != 0 {
            write!(f, " Unknown invflags: 0x{:X}", spec.unknown_invert_bits)?;
        }
        Ok(())
    }
}

/// 保存用の`TypeSpec`
///
/// コード範囲が既定値でない場合は`code_min`を代表値として`/code`を付ける。
/// `code_min != code_max`の場合は上限が失われるため、呼び出し側で保証すること
#[derive(Debug, Clone, Copy)]
pub struct TypeSpecSave<'a> {
    spec: &'a TypeSpec,
}

impl Display for TypeSpecSave<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.spec;
        if spec.inverted {
            write!(f, " !")?;
        }
        write!(f, " --{TYPE_OPTION} {}", spec.icmp_type)?;
        if !spec.matches_any_code() {
            write!(f, "/{}", spec.code_min)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TypeRangeDisplay<'a> {
    range: &'a TypeRange,
}

impl Display for TypeRangeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " type range {}-{}",
            self.range.min_type(),
            self.range.max_type()
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TypeRangeSave<'a> {
    range: &'a TypeRange,
}

impl Display for TypeRangeSave<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " --{TYPE_RANGE_OPTION} {}:{}",
            self.range.min_type(),
            self.range.max_type()
        )
    }
}

impl TypeSpec {
    /// 表示形式
    pub fn display(&self, numeric: bool) -> TypeSpecDisplay<'_> {
        TypeSpecDisplay {
            spec: self,
            numeric,
        }
    }

    /// 再解釈可能な保存形式
    pub fn save(&self) -> TypeSpecSave<'_> {
        TypeSpecSave { spec: self }
    }
}

impl TypeRange {
    /// 表示形式
    pub fn display(&self) -> TypeRangeDisplay<'_> {
        TypeRangeDisplay { range: self }
    }

    /// 再解釈可能な保存形式
    pub fn save(&self) -> TypeRangeSave<'_> {
        TypeRangeSave { range: self }
    }
}

/// オプションのヘルプとタイプ名一覧
pub fn usage() -> String {
    format!(
        "icmpv6 match options:\n\
         [!] --{TYPE_OPTION} typename\tmatch icmpv6 type\n\
         \t\t\t\t(or numeric type or type/code)\n\
         --{TYPE_RANGE_OPTION} min:max\tmatch icmpv6 type range\n\
         {}",
        render_help()
    )
}
