#![allow(non_snake_case)]

use std::backtrace::Backtrace;
use std::sync::Arc;

use super::exception::{ErrorCode, ErrorCodeBacktrace};

macro_rules! build_exceptions {
    ($($body:ident($code:expr)),*$(,)*) => {
            impl ErrorCode {
                $(
                pub fn $body(display_text: impl Into<String>) -> ErrorCode {
                    let bt = Some(ErrorCodeBacktrace::Origin(Arc::new(Backtrace::capture())));
                    ErrorCode::create(
                        $code,
                        display_text.into(),
                        None,
                        bt,
                    )
                }
                paste::paste! {
                    pub fn [< $body:snake _ code >] ()  -> u16{
                        $code
                    }

                    pub fn [< $body  Code >] ()  -> u16{
                        $code
                    }
                }
                )*
            }
    }
}

// Engine errors [0, 1100).
build_exceptions! {
    Ok(0),
    UnImplement(1001),
    IllegalArgument(1002),
    NotFound(1003),
    Conflict(1004),
    SendEventFailed(1005),
    Deserialization(1006),
}

// Condition evaluation errors [1100, 1200).
build_exceptions! {
    MissingField(1101),
    UnsupportedType(1102),
    UnsupportedOperator(1103),
}

// Routing errors [1200, 1300).
build_exceptions! {
    UnassignedProcessor(1201),
    NoMatchingBranch(1202),
    InvalidGatewayTopology(1203),
    UnimplementedGateway(1204),
}

// Store errors [1300, 1400).
build_exceptions! {
    StoreError(1301),
}

build_exceptions! {
    UnknownException(1999),
}
