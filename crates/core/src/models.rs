/// Busy intervals reported by the external calendar source
pub mod busy;
/// Response bodies returned by the slot endpoints
pub mod response;
/// Computed free slots and their display-zone rendering
pub mod slot;
/// The caller-specified search window
pub mod window;
