pub mod code;
pub mod format;
pub mod match_record;
pub mod message_type;
pub mod name_table;
pub mod type_range;
pub mod type_spec;

pub use self::code::{
    DestinationUnreachableCode, ParameterProblemCode, TimeExceededCode, code_title,
};
pub use self::format::{
    MATCH_NAME, TYPE_OPTION, TYPE_RANGE_OPTION, TypeRangeDisplay, TypeRangeSave, TypeSpecDisplay,
    TypeSpecSave, usage,
};
pub use self::match_record::{MatchOption, MatchRecord, MatchRecordBuilder, MatchRecordError};
pub use self::message_type::{ICMPv6MessageType, ICMPv6MessageTypeError};
pub use self::name_table::{NAME_TABLE, NameTableEntry, find_exact, render_help};
pub use self::type_range::{TypeRange, TypeRangeError, parse_range};
pub use self::type_spec::{TypeSpec, TypeSpecError, resolve};

/// バイト列からの変換
pub trait TryFromBytes {
    type Error;

    fn try_from_bytes(value: impl AsRef<[u8]>) -> Result<Self, Self::Error>
    where
        Self: Sized;
}
