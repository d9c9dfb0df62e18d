pub mod dynamics;
pub mod energy;
