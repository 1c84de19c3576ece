pub mod dispatch;
pub mod maze;
pub mod paths;
