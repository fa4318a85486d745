pub mod enrollment;
pub mod session;
