use std::fmt::Write;

use crate::code::{DestinationUnreachableCode, ParameterProblemCode, TimeExceededCode};
use crate::message_type::ICMPv6MessageType;
use crate::message_type::ICMPv6MessageType as T;

/// 名前テーブルのエントリ
///
/// シンボル名と、それが表す`(type, code_min, code_max)`の組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameTableEntry {
    pub name: &'static str,
    pub icmp_type: u8,
    pub code_min: u8,
    pub code_max: u8,
}

impl NameTableEntry {
    /// タイプの正式名で全てのコードにマッチするエントリ
    const fn canonical(message_type: ICMPv6MessageType) -> Self {
        Self::alias(message_type.name(), message_type)
    }

    /// 正式名と同じ組を表す別名のエントリ
    const fn alias(name: &'static str, message_type: ICMPv6MessageType) -> Self {
        NameTableEntry {
            name,
            icmp_type: message_type as u8,
            code_min: 0,
            code_max: u8::MAX,
        }
    }

    const fn with_code(name: &'static str, message_type: ICMPv6MessageType, code: u8) -> Self {
        NameTableEntry {
            name,
            icmp_type: message_type as u8,
            code_min: code,
            code_max: code,
        }
    }

    const fn unreachable(code: DestinationUnreachableCode) -> Self {
        Self::with_code(code.name(), T::DestinationUnreachable, code as u8)
    }

    const fn time_exceeded(code: TimeExceededCode) -> Self {
        Self::with_code(code.name(), T::TimeExceeded, code as u8)
    }

    const fn parameter_problem(code: ParameterProblemCode) -> Self {
        Self::with_code(code.name(), T::ParameterProblem, code as u8)
    }

    /// 同じ`(type, code_min, code_max)`を表すかどうか
    pub fn same_match(&self, other: &NameTableEntry) -> bool {
        self.icmp_type == other.icmp_type
            && self.code_min == other.code_min
            && self.code_max == other.code_max
    }
}

/// ICMPv6タイプ名テーブル
///
/// 並び順に意味がある:
/// - 名前解決と表示では先に現れたエントリが優先される
/// - 別名は必ず正式名の直後に置く
/// - 同じタイプのコード別エントリはそのタイプの直後にまとめる
pub static NAME_TABLE: &[NameTableEntry] = &[
    NameTableEntry::canonical(T::DestinationUnreachable),
    NameTableEntry::unreachable(DestinationUnreachableCode::NoRouteToDestination),
    NameTableEntry::unreachable(DestinationUnreachableCode::CommunicationProhibited),
    NameTableEntry::unreachable(DestinationUnreachableCode::BeyondScopeOfSourceAddress),
    NameTableEntry::unreachable(DestinationUnreachableCode::AddressUnreachable),
    NameTableEntry::unreachable(DestinationUnreachableCode::PortUnreachable),
    NameTableEntry::unreachable(DestinationUnreachableCode::SourceAddressPolicyViolation),
    NameTableEntry::unreachable(DestinationUnreachableCode::RejectRouteToDestination),
    NameTableEntry::canonical(T::PacketTooBig),
    NameTableEntry::canonical(T::TimeExceeded),
    NameTableEntry::alias("ttl-exceeded", T::TimeExceeded),
    NameTableEntry::time_exceeded(TimeExceededCode::HopLimitExceeded),
    NameTableEntry::time_exceeded(TimeExceededCode::FragmentReassemblyTimeExceeded),
    NameTableEntry::canonical(T::ParameterProblem),
    NameTableEntry::parameter_problem(ParameterProblemCode::ErroneousHeaderField),
    NameTableEntry::parameter_problem(ParameterProblemCode::UnrecognizedNextHeader),
    NameTableEntry::parameter_problem(ParameterProblemCode::UnrecognizedOption),
    NameTableEntry::canonical(T::EchoRequest),
    NameTableEntry::alias("ping", T::EchoRequest),
    NameTableEntry::canonical(T::EchoReply),
    NameTableEntry::alias("pong", T::EchoReply),
    NameTableEntry::canonical(T::RouterSolicitation),
    NameTableEntry::canonical(T::RouterAdvertisement),
    NameTableEntry::canonical(T::NeighborSolicitation),
    NameTableEntry::alias("neighbor-solicitation", T::NeighborSolicitation),
    NameTableEntry::canonical(T::NeighborAdvertisement),
    NameTableEntry::alias("neighbor-advertisement", T::NeighborAdvertisement),
    NameTableEntry::canonical(T::Redirect),
];

/// `(type, code_min, code_max)`が完全一致する最初のエントリを検索
///
/// 別名は正式名より後ろにあるため、見つかるのは常に正式名
pub fn find_exact(icmp_type: u8, code_min: u8, code_max: u8) -> Option<&'static NameTableEntry> {
    NAME_TABLE.iter().find(|entry| {
        entry.icmp_type == icmp_type && entry.code_min == code_min && entry.code_max == code_max
    })
}

/// 名前テーブルの一覧をヘルプ用テキストとして出力
///
/// 直前のエントリと同じタイプの場合:
/// - コード範囲も同じなら別名として同じ行に括弧書きで追加
/// - コード範囲が異なればインデントした行に出力
pub fn render_help() -> String {
    let mut help = String::from("Valid ICMPv6 Types:");
    let mut previous: Option<&NameTableEntry> = None;

    for entry in NAME_TABLE {
        // Stringへの書き込みは失敗しない
        let _ = match previous {
            Some(prev) if prev.icmp_type == entry.icmp_type => {
                if prev.same_match(entry) {
                    write!(help, " ({})", entry.name)
                } else {
                    write!(help, "\n   {}", entry.name)
                }
            }
            _ => write!(help, "\n{}", entry.name),
        };
        previous = Some(entry);
    }
    help.push('\n');

    help
}
