//! 页面数据状态

mod users;

pub use users::{LoadState, UsersState};
