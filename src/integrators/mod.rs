pub mod rk4;
pub mod trajectory;

pub use rk4::{Rk4Scheme, RK4};
pub use trajectory::{integrate, integrate_collect, integrate_with_scheme, integrate_with_sink, SampleSink};
