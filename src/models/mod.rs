pub mod ai_model;
pub mod alert;
pub mod comm;
pub mod device;
pub mod geo;
pub mod seed;
pub mod team;

pub use ai_model::AiModel;
pub use alert::{Alert, AlertKind, AlertStatus, Severity};
pub use comm::{CommLog, LogEntry, COMM_LOG_CAPACITY};
pub use device::{BatteryLevel, Device, DeviceStatus};
pub use geo::{GeoPoint, LatLon};
pub use team::{ResponseTeam, TeamStatus};
