use std::fmt::{self, Display};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ICMPv6MessageTypeError {
    #[error("ICMPv6 type {0} has no entry in the name table")]
    UnnamedType(u8),
}

/// 名前テーブルに正式名を持つICMPv6メッセージタイプ
///
/// 参照:
/// - [RFC 4443 - Internet Control Message Protocol (ICMPv6) for IPv6](https://tools.ietf.org/rfc/rfc4443.txt)
/// - [RFC 4861 - Neighbor Discovery for IP version 6 (IPv6)](https://tools.ietf.org/rfc/rfc4861.txt)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ICMPv6MessageType {
    DestinationUnreachable = 1,
    PacketTooBig = 2,
    TimeExceeded = 3,
    ParameterProblem = 4,
    EchoRequest = 128,
    EchoReply = 129,
    RouterSolicitation = 133,
    RouterAdvertisement = 134,
    NeighborSolicitation = 135,
    NeighborAdvertisement = 136,
    Redirect = 137,
}

impl ICMPv6MessageType {
    /// 名前テーブル上の正式名
    ///
    /// 別名（`ping`、`neighbor-solicitation`など）は名前テーブル側で定義する
    pub const fn name(self) -> &'static str {
        match self {
            Self::DestinationUnreachable => "destination-unreachable",
            Self::PacketTooBig => "packet-too-big",
            Self::TimeExceeded => "time-exceeded",
            Self::ParameterProblem => "parameter-problem",
            Self::EchoRequest => "echo-request",
            Self::EchoReply => "echo-reply",
            Self::RouterSolicitation => "router-solicitation",
            Self::RouterAdvertisement => "router-advertisement",
            Self::NeighborSolicitation => "neighbour-solicitation",
            Self::NeighborAdvertisement => "neighbour-advertisement",
            Self::Redirect => "redirect",
        }
    }

    /// エラーメッセージ（上位ビットが0）かどうか
    pub const fn is_error_message(self) -> bool {
        (self as u8) < 128
    }
}

impl Display for ICMPv6MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            Self::DestinationUnreachable => "Destination Unreachable",
            Self::PacketTooBig => "Packet Too Big",
            Self::TimeExceeded => "Time Exceeded",
            Self::ParameterProblem => "Parameter Problem",
            Self::EchoRequest => "Echo Request",
            Self::EchoReply => "Echo Reply",
            Self::RouterSolicitation => "Router Solicitation",
            Self::RouterAdvertisement => "Router Advertisement",
            Self::NeighborSolicitation => "Neighbor Solicitation",
            Self::NeighborAdvertisement => "Neighbor Advertisement",
            Self::Redirect => "Redirect",
        };
        f.write_str(title)
    }
}

impl TryFrom<u8> for ICMPv6MessageType {
    type Error = ICMPv6MessageTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        [
            Self::DestinationUnreachable,
            Self::PacketTooBig,
            Self::TimeExceeded,
            Self::ParameterProblem,
            Self::EchoRequest,
            Self::EchoReply,
            Self::RouterSolicitation,
            Self::RouterAdvertisement,
            Self::NeighborSolicitation,
            Self::NeighborAdvertisement,
            Self::Redirect,
        ]
        .into_iter()
        .find(|message_type| *message_type as u8 == value)
        .ok_or(ICMPv6MessageTypeError::UnnamedType(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_u8() {
        // [正常系] 名前テーブルに正式名を持つタイプ
        for value in [1u8, 2, 3, 4, 128, 129, 133, 134, 135, 136, 137] {
            let message_type = ICMPv6MessageType::try_from(value).unwrap();
            assert_eq!(message_type as u8, value);
        }

        // [異常系] 名前を持たないタイプ
        assert_eq!(
            ICMPv6MessageType::try_from(0),
            Err(ICMPv6MessageTypeError::UnnamedType(0))
        );
        assert_eq!(
            ICMPv6MessageType::try_from(130),
            Err(ICMPv6MessageTypeError::UnnamedType(130))
        );
    }

    #[test]
    fn test_name_and_title() {
        // [正常系] 正式名と説明
        assert_eq!(ICMPv6MessageType::EchoRequest.name(), "echo-request");
        assert_eq!(
            ICMPv6MessageType::NeighborSolicitation.name(),
            "neighbour-solicitation"
        );
        assert_eq!(
            ICMPv6MessageType::NeighborSolicitation.to_string(),
            "Neighbor Solicitation"
        );
    }

    #[test]
    fn test_is_error_message() {
        assert!(ICMPv6MessageType::DestinationUnreachable.is_error_message());
        assert!(ICMPv6MessageType::ParameterProblem.is_error_message());
        assert!(!ICMPv6MessageType::EchoRequest.is_error_message());
        assert!(!ICMPv6MessageType::Redirect.is_error_message());
    }
}
