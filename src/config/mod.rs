pub mod rod;
