pub mod flight;
pub use flight::FlightState;

pub mod composition;
pub use composition::CompositionState;
