use bytes::Bytes;
use icmp6::{
    ICMPv6MessageType, MatchOption, MatchRecord, MatchRecordBuilder, MatchRecordError,
    TryFromBytes, code_title,
};
use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum RuleError {
    #[error("Unknown option `{0}'")]
    UnknownOption(String),
    #[error("Option `--{0}' requires an argument")]
    MissingArgument(MatchOption),
    #[error("`!' must be followed by an option")]
    DanglingInvert,
    #[error("Multiple `!' flags not allowed")]
    MultipleInvert,
    #[error(transparent)]
    MatchRecordError(#[from] MatchRecordError),
    #[error("Record must consist of hex byte pairs, but got `{0}'")]
    InvalidRecordText(String),
}

/// ルールオプションのトークン列を解釈してマッチレコードを作成
///
/// 受け付ける形式:
/// - `[!] --icmpv6-type <name|type|type/code>`
/// - `--icmpv6-type-range <min:max>`
/// - `--<option>=<value>`
pub(crate) fn parse_rule_args(args: &[impl AsRef<str>]) -> Result<MatchRecord, RuleError> {
    let mut builder = MatchRecordBuilder::new();
    let mut invert = false;
    let tokens: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
    let mut tokens = tokens.into_iter();

    while let Some(token) = tokens.next() {
        if token == "!" {
            if invert {
                return Err(RuleError::MultipleInvert);
            }
            invert = true;
            continue;
        }

        let name = token
            .strip_prefix("--")
            .ok_or_else(|| RuleError::UnknownOption(token.to_string()))?;
        let (name, inline_value) = match name.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (name, None),
        };
        let option =
            MatchOption::from_name(name).ok_or_else(|| RuleError::UnknownOption(token.to_string()))?;
        let value = inline_value
            .or_else(|| tokens.next())
            .ok_or(RuleError::MissingArgument(option))?;

        let record = builder.apply(option, value, invert)?;
        debug!("--{option} {value}: {record:?}");
        invert = false;
    }

    if invert {
        return Err(RuleError::DanglingInvert);
    }
    Ok(builder.build())
}

/// 16進数表記のバイナリレコードを解釈
///
/// バイト間の空白と`:`は無視する
pub(crate) fn decode_record(text: &str) -> Result<MatchRecord, RuleError> {
    let digits: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if digits.len() % 2 != 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RuleError::InvalidRecordText(text.to_string()));
    }

    let bytes = (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16))
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| RuleError::InvalidRecordText(text.to_string()))?;

    Ok(MatchRecord::try_from_bytes(bytes)?)
}

/// バイナリレコードを16進数表記で出力
pub(crate) fn encode_record(record: &MatchRecord) -> String {
    Bytes::from(record)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 解釈結果のタイプとコードの説明をログに出力
pub(crate) fn log_record(record: &MatchRecord) {
    match record {
        MatchRecord::Type(spec) => {
            let Ok(message_type) = ICMPv6MessageType::try_from(spec.icmp_type) else {
                info!("type: {} (unassigned in name table)", spec.icmp_type);
                return;
            };
            let class = if message_type.is_error_message() {
                "error"
            } else {
                "informational"
            };
            info!("type: {} {message_type} ({class})", spec.icmp_type);

            if spec.code_min == spec.code_max {
                match code_title(message_type, spec.code_min) {
                    Some(title) => info!("code: {} {title}", spec.code_min),
                    None => info!("code: {}", spec.code_min),
                }
            } else {
                info!("codes: {}-{}", spec.code_min, spec.code_max);
            }
        }
        MatchRecord::Range(range) => {
            info!("type range: {}-{}", range.min_type(), range.max_type());
        }
    }
}
