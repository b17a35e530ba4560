//! # stock_core - Stock Weight Calculation Engine
//!
//! `stock_core` turns the dimensions of steel and polyamide stock (plates,
//! bars, angles, tubes and rolled profiles) into weight per piece, looks up
//! standard profile unit weights, and builds stock-code strings. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless calculators**: Pure functions from measurements to a result
//! - **Absent, not invalid**: A blank or non-positive measurement yields no
//!   result rather than an error
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use stock_core::shapes::{calculate, CalcOptions, ShapeInput};
//! use stock_core::profiles::ProfileFamily;
//! use stock_core::format::format_quantity;
//!
//! let heb = ShapeInput::RolledProfile {
//!     family: ProfileFamily::Heb,
//!     size_mm: 200,
//!     length_mm: 6000.0,
//! };
//! let kg = calculate(&heb, &CalcOptions::default()).unwrap().unwrap();
//! assert_eq!(format_quantity(&kg), "367,800");
//! ```
//!
//! ## Modules
//!
//! - [`profiles`] - Rolled profile coefficient tables and the weight ledger
//! - [`shapes`] - Shape calculators
//! - [`stock_code`] - Finished and semi-finished stock codes
//! - [`modules`] - Panel pages and their field sets
//! - [`session`] - Per-operator form state and row evaluation
//! - [`settings`] - Densities, formula choice and display settings
//! - [`format`] / [`export`] - Display formatting, tables and CSV
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Atomic settings files

pub mod errors;
pub mod export;
pub mod file_io;
pub mod format;
pub mod modules;
pub mod profiles;
pub mod session;
pub mod settings;
pub mod shapes;
pub mod stock_code;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_settings, save_settings};
pub use modules::ModuleId;
pub use profiles::{lookup, ProfileFamily};
pub use session::Session;
pub use settings::PanelSettings;
pub use shapes::{calculate, CalcOptions, CalculationResult, Quantity, ShapeInput};
