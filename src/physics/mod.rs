pub mod assembly;
pub mod field;
pub mod hysteresis;
pub mod rod;
