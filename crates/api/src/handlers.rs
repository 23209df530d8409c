/// Handler for the expert listing endpoint
pub mod experts;
/// Handler for the slot discovery endpoint
pub mod slots;
