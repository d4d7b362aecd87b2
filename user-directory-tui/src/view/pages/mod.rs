//! 页面视图

pub mod user_detail;
pub mod user_list;
