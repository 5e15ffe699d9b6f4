pub mod config;
pub mod error;
pub mod redactor;
pub mod subscriber;

pub use config::*;
pub use error::*;
pub use redactor::*;
pub use subscriber::*;

// Logging for Splitbill with participant-name redaction
//
// Participant names are the only personal data the ledger handles. When
// redaction is enabled they are replaced in log fields by a short digest, so
// two log lines about the same person still correlate:
//
//     participant added participant_id=1718000000000 name=NAME[3q2+7w0xYk4=]
//
// Level selection follows `RUST_LOG` when set, otherwise the configured level:
//
// ```toml
// [logging]
// level = "debug"
// redaction_enabled = false
// ```
