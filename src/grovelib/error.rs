use derive_more::Display;

use crate::ring::Value;

#[derive(Debug, Display, PartialEq, Eq, Clone)]
pub enum DecryptError {
    #[display(fmt = "line {}: {:?} is not a signed 64-bit integer", line, text)]
    MalformedInput { line: usize, text: String },
    #[display(
        fmt = "cannot mix a sequence of {} element(s); at least 2 are required",
        len
    )]
    DegenerateSequence { len: usize },
    #[display(fmt = "no element with value 0 in the mixed sequence")]
    MissingZeroElement,
    #[display(fmt = "{} overflows when multiplied by decryption key {}", value, key)]
    KeyOverflow { value: Value, key: Value },
    #[display(fmt = "grove coordinates do not sum within 64 bits")]
    SumOverflow,
}

impl std::error::Error for DecryptError {}
