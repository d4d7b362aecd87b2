//! 英文翻译 (en-US)

use super::keys::{CommonTexts, HintTexts, Translations, UsersTexts};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "User Directory",
        loading: "Loading...",
    },

    users: UsersTexts {
        list_title: "Users",
        detail_title: "User Details",
        no_users: "No users found",
        load_failed: "Failed to load user data. Please try again later.",
        email: "Email:",
        phone: "Phone:",
        website: "Website:",
        address: "Address:",
        company: "Company:",
        back_to_list: "← Back to List",
    },

    hints: HintTexts {
        move_cursor: "Move",
        open: "Open",
        back: "Back",
        quit: "Quit",
    },
};
