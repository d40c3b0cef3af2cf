#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod client;
mod error;
mod gate;
pub mod markup;
mod progress;

pub use client::{GeneratedImage, RelayClient};
pub use error::{ClientError, Result};
pub use gate::{Gate, InFlight};
pub use progress::PhraseCycler;
