//! Navigation state machine - session state, text interpretation,
//! and the controller

pub mod controller;
pub mod input;
pub mod session;

pub use controller::{Navigator, OpenRequest};
pub use input::TextIntent;
pub use session::Session;
