//! Role strings as issued by the backend.
//!
//! These must match the `role` field returned from `/users/me`; the
//! dashboard gate compares against [`ROLE_ADMIN`] verbatim.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_DOCTOR: &str = "doctor";
pub const ROLE_PATIENT: &str = "patient";
