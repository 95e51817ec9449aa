pub mod analog;
pub mod shared;
