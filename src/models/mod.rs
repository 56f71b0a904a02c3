pub mod rod;

pub use rod::{FieldSample, RodParameters, RodState};
