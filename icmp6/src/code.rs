use crate::message_type::ICMPv6MessageType;

/// Destination Unreachableのコード
///
/// RFC 4443 3.1節
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationUnreachableCode {
    NoRouteToDestination = 0,
    CommunicationProhibited = 1,
    BeyondScopeOfSourceAddress = 2,
    AddressUnreachable = 3,
    PortUnreachable = 4,
    SourceAddressPolicyViolation = 5,
    RejectRouteToDestination = 6,
}

impl DestinationUnreachableCode {
    pub const fn from_value(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::NoRouteToDestination),
            1 => Some(Self::CommunicationProhibited),
            2 => Some(Self::BeyondScopeOfSourceAddress),
            3 => Some(Self::AddressUnreachable),
            4 => Some(Self::PortUnreachable),
            5 => Some(Self::SourceAddressPolicyViolation),
            6 => Some(Self::RejectRouteToDestination),
            _ => None,
        }
    }

    /// 名前テーブル上の名前
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoRouteToDestination => "no-route",
            Self::CommunicationProhibited => "communication-prohibited",
            Self::BeyondScopeOfSourceAddress => "beyond-scope",
            Self::AddressUnreachable => "address-unreachable",
            Self::PortUnreachable => "port-unreachable",
            Self::SourceAddressPolicyViolation => "failed-policy",
            Self::RejectRouteToDestination => "reject-route",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::NoRouteToDestination => "No route to destination",
            Self::CommunicationProhibited => {
                "Communication with destination administratively prohibited"
            }
            Self::BeyondScopeOfSourceAddress => "Beyond scope of source address",
            Self::AddressUnreachable => "Address unreachable",
            Self::PortUnreachable => "Port unreachable",
            Self::SourceAddressPolicyViolation => "Source address failed ingress/egress policy",
            Self::RejectRouteToDestination => "Reject route to destination",
        }
    }
}

/// Time Exceededのコード
///
/// RFC 4443 3.3節
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeExceededCode {
    HopLimitExceeded = 0,
    FragmentReassemblyTimeExceeded = 1,
}

impl TimeExceededCode {
    pub const fn from_value(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::HopLimitExceeded),
            1 => Some(Self::FragmentReassemblyTimeExceeded),
            _ => None,
        }
    }

    /// 名前テーブル上の名前
    pub const fn name(self) -> &'static str {
        match self {
            Self::HopLimitExceeded => "ttl-zero-during-transit",
            Self::FragmentReassemblyTimeExceeded => "ttl-zero-during-reassembly",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::HopLimitExceeded => "Hop limit exceeded in transit",
            Self::FragmentReassemblyTimeExceeded => "Fragment reassembly time exceeded",
        }
    }
}

/// Parameter Problemのコード
///
/// RFC 4443 3.4節
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterProblemCode {
    ErroneousHeaderField = 0,
    UnrecognizedNextHeader = 1,
    UnrecognizedOption = 2,
}

impl ParameterProblemCode {
    pub const fn from_value(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::ErroneousHeaderField),
            1 => Some(Self::UnrecognizedNextHeader),
            2 => Some(Self::UnrecognizedOption),
            _ => None,
        }
    }

    /// 名前テーブル上の名前
    pub const fn name(self) -> &'static str {
        match self {
            Self::ErroneousHeaderField => "bad-header",
            Self::UnrecognizedNextHeader => "unknown-header-type",
            Self::UnrecognizedOption => "unknown-option",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::ErroneousHeaderField => "Erroneous header field encountered",
            Self::UnrecognizedNextHeader => "Unrecognized Next Header type encountered",
            Self::UnrecognizedOption => "Unrecognized IPv6 option encountered",
        }
    }
}

/// タイプとコードの組から、コードの説明文を取得
///
/// 名前テーブルでコード別のエントリを持つタイプの既知のコードのみ
pub fn code_title(message_type: ICMPv6MessageType, code: u8) -> Option<&'static str> {
    match message_type {
        ICMPv6MessageType::DestinationUnreachable => {
            DestinationUnreachableCode::from_value(code).map(DestinationUnreachableCode::title)
        }
        ICMPv6MessageType::TimeExceeded => {
            TimeExceededCode::from_value(code).map(TimeExceededCode::title)
        }
        ICMPv6MessageType::ParameterProblem => {
            ParameterProblemCode::from_value(code).map(ParameterProblemCode::title)
        }
        _ => None,
    }
}
