pub mod create;
pub mod review;
pub mod status;

pub use status::StatusQuery;
