//! 测试用数据

use user_directory_core::{Address, Company, UserRecord};

use crate::message::AppMessage;
use crate::model::App;
use crate::update;

/// 示例用户 Leanne Graham
pub fn leanne() -> UserRecord {
    UserRecord {
        id: 1,
        name: "Leanne Graham".to_string(),
        email: "a@b.com".to_string(),
        phone: "555".to_string(),
        website: "leanne.com".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
        },
        company: Company {
            name: "Romaguera-Crona".to_string(),
        },
    }
}

/// 生成 `count` 个用户，id 从 1 开始，名称为 `User <id>`
pub fn sample_users(count: usize) -> Vec<UserRecord> {
    (1..=count as u64)
        .map(|id| UserRecord {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            phone: format!("555-{id:04}"),
            website: format!("user{id}.example.com"),
            address: Address {
                street: format!("{id} Main St"),
                suite: format!("Suite {id}"),
                city: "Springfield".to_string(),
            },
            company: Company {
                name: format!("Company {id}"),
            },
        })
        .collect()
}

/// 已成功加载 `users` 的应用
pub fn loaded_app(users: Vec<UserRecord>) -> App {
    let mut app = App::new();
    update::update(&mut app, AppMessage::UsersLoaded(Ok(users)));
    app
}
