//! Domain primitives, errors and ports.
//!
//! Purpose: define the member model, its validation rules and the registry
//! port used by inbound adapters. Types here know nothing about HTTP.
//!
//! Public surface:
//! - `Member`, `MemberName`, `MemberAge`: validated member data.
//! - `MemberValidationFailure`: ordered violations for rejected input.
//! - `Error` / `ErrorCode`: transport agnostic failure payload.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod member;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::member::{
    INVALID_REQUEST_MESSAGE, MINIMUM_AGE, Member, MemberAge, MemberName,
    MemberValidationFailure, MemberViolation, NAME_MIN_CHARS,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
