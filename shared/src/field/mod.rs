//! Input field models
//!
//! These types describe the state and render-ready output of the screen's
//! input fields without depending on any UI toolkit:
//!
//! - [`InputField`] - generic labeled text field with externally set errors
//! - [`PasswordField`] - masked field validated through a [`ValidationGate`]

pub mod gate;
pub mod input;
pub mod password;

pub use gate::{GateState, ValidationGate};
pub use input::{FieldStyle, FieldView, InputField};
pub use password::{PasswordField, DEFAULT_MASK_CHAR};
