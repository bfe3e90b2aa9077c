//! Domain types for BarSim.

pub mod bar;
pub mod fill;
pub mod order;
pub mod portfolio;
pub mod position;

pub use bar::{Bar, BarError};
pub use fill::FillOutcome;
pub use order::{OrderError, OrderKind, OrderRequest, OrderSide};
pub use portfolio::Portfolio;
pub use position::Position;

/// Symbol type alias
pub type Symbol = String;
