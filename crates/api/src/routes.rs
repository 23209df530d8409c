/// Expert listing route
pub mod experts;
/// Health check routes
pub mod health;
/// Slot discovery route
pub mod slots;
