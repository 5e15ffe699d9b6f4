//! Layered configuration for Splitbill
//!
//! Sources, later ones overriding earlier ones:
//! - Built-in defaults
//! - `splitbill.toml` in the platform configuration directory
//! - An explicit file passed on the command line (TOML or YAML)
//! - `SPLITBILL_`-prefixed environment variables, nested keys split on `__`
//!
//! # Example
//!
//! ```no_run
//! use config_engine::ConfigLoader;
//!
//! let config = ConfigLoader::new()
//!     .with_default_file()
//!     .with_env()
//!     .load()?;
//! println!("storing participants in {:?}", config.storage.path);
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod error;
pub mod providers;
pub mod settings;
pub mod validation;

pub use error::*;
pub use providers::*;
pub use settings::*;
