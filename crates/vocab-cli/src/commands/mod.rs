pub mod add;
pub mod dispatch;
pub mod mark_reviewed;
pub mod review;
pub mod schema;
pub mod shared;
pub mod status;
