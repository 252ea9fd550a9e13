//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "值班管理",
        cancel: "取消",
        delete: "删除",
        close: "关闭",
        refreshing: "刷新中...",
    },

    hints: HintTexts {
        switch_panel: "切换面板",
        navigate: "导航",
        select: "选择",
        open: "进入",
        view_detail: "查看详情",
        delete: "删除",
        refresh: "刷新",
        switch_day: "切换星期",
        switch_button: "切换按钮",
        confirm: "确认",
        close: "关闭",
        help: "帮助",
        quit: "退出",
    },

    nav: NavTexts {
        title: "菜单",
        home: "主页",
        templates: "排班模板",
    },

    home: HomeTexts {
        title: "主页",
        empty_notice: "如果你看到这里一片空白，不用担心，目前主页没有任何内容 :)",
        subscription_intro:
            "临时将值班日程订阅入口放在这里，这个链接可以直接下载 .ics 日历数据交换标准文件",
        subscription_usage:
            "可以在日历软件中导入，也可以在日历软件中订阅这个链接，推荐在手机原生日历软件导入或订阅",
    },

    templates: TemplatesTexts {
        title: "排班模板",
        empty: "暂无排班模板",
        shift_count_suffix: "个班次",
    },

    modal: ModalTexts {
        detail: DetailModalTexts {
            no_description: "此模板无描述",
            no_shifts: "当天没有班次",
            assistants_suffix: "名助理",
            hidden_shifts_suffix: " 个班次未显示",
        },
        delete: DeleteModalTexts {
            title: "删除排班模板",
            prompt: "确定要删除这个排班模板吗？此操作无法撤销。",
            deleting: "删除中...",
            deleted: "已删除排班模板",
        },
        help: HelpTexts {
            title: "帮助",
            global: "全局快捷键",
            templates: "排班模板页",
            dialogs: "弹窗",
            close_hint: "按 Esc 关闭帮助",
        },
    },

    days: ["周一", "周二", "周三", "周四", "周五", "周六", "周日"],
};
