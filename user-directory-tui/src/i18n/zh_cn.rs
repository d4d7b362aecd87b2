//! 简体中文翻译 (zh-CN)

use super::keys::{CommonTexts, HintTexts, Translations, UsersTexts};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "用户目录",
        loading: "加载中...",
    },

    users: UsersTexts {
        list_title: "用户",
        detail_title: "用户详情",
        no_users: "没有用户",
        load_failed: "用户数据加载失败，请稍后重试。",
        email: "邮箱：",
        phone: "电话：",
        website: "网站：",
        address: "地址：",
        company: "公司：",
        back_to_list: "← 返回列表",
    },

    hints: HintTexts {
        move_cursor: "移动",
        open: "打开",
        back: "返回",
        quit: "退出",
    },
};
