pub mod flat;
mod flat_details;
#[cfg(feature = "serde")]
mod serde;

pub use flat::Expression;
