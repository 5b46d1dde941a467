mod tables;
mod value_objects;


pub use tables::{emission_factor, frequency_multiplier, known_types, FactorTable};
pub use value_objects::{Category, Frequency};
