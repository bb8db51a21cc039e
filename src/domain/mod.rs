pub mod body;
pub mod error;
pub mod params;

pub use body::BodyInit;
pub use error::KernelError;
pub use params::SolverParams;
