//! Audit logging system for daystep
//!
//! Records state transitions of the date picker, the tutorial wizard and the
//! token store in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single transition with timestamp, source, action,
//!   subject and optional structured detail.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use daystep::audit::{Action, AuditEntry, AuditLogger, Source};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::new(Source::Picker, Action::Select, "2018-01-17"))?;
//! ```

mod entry;
mod logger;

pub use entry::{Action, AuditEntry, Source};
pub use logger::AuditLogger;
