//! Ledger Service for shared-expense bookkeeping
//!
//! Provides the single-owner state behind a bill-splitting session:
//! - Participant registry with cascading draft updates
//! - Draft transaction editing with equal-split recalculation
//! - Transaction ledger (create, edit, delete)
//! - Balance aggregation and settlement suggestions
//! - Participant persistence over a key-value store
//! - Rupiah display formatting
//!
//! Every derived value (splits, balances, settlements, validation) is a pure
//! function recomputed on each read.

pub mod amount;
pub mod balance;
pub mod currency;
pub mod draft;
pub mod error;
pub mod ids;
pub mod ledger;
pub mod models;
pub mod registry;
pub mod service;
pub mod settlement;
pub mod split;
pub mod state;
pub mod store;
pub mod validation;

pub use amount::*;
pub use balance::*;
pub use currency::*;
pub use error::*;
pub use ids::*;
pub use models::*;
pub use service::*;
pub use settlement::*;
pub use split::*;
pub use state::*;
pub use store::*;
pub use validation::*;
