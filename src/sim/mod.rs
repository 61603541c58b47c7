pub mod charts;
pub mod controller;
pub mod generators;
pub mod sos;
pub mod state;

pub use controller::{Generator, SimController};
pub use sos::SosHold;
pub use state::{DashboardStats, SimState, View, WearableSnapshot};
