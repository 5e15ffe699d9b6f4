//! Interactive terminal front end for the Splitbill ledger
//!
//! Each prompt line is one command:
//!
//! ```text
//! splitbill> add Ana
//! splitbill> add Budi
//! splitbill> title Dinner
//! splitbill> amount 150000
//! splitbill> payer 1718000000000
//! splitbill> split
//! splitbill> submit
//! splitbill> summary
//!   Ana   Rp 75.000
//!   Budi  -Rp 75.000
//! ```
//!
//! Participants are cached between sessions; transactions last for the
//! session only.

pub mod commands;
pub mod interactive;
pub mod render;
pub mod shell;

pub use interactive::run_interactive;
pub use shell::{Flow, Shell};
