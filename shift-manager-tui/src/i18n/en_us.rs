//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, DeleteModalTexts, DetailModalTexts, HelpTexts, HintTexts, HomeTexts, ModalTexts,
    NavTexts, TemplatesTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Shift Manager",
        cancel: "Cancel",
        delete: "Delete",
        close: "Close",
        refreshing: "Refreshing...",
    },

    hints: HintTexts {
        switch_panel: "Switch panel",
        navigate: "Navigate",
        select: "Select",
        open: "Open",
        view_detail: "Details",
        delete: "Delete",
        refresh: "Refresh",
        switch_day: "Switch day",
        switch_button: "Switch",
        confirm: "Confirm",
        close: "Close",
        help: "Help",
        quit: "Quit",
    },

    nav: NavTexts {
        title: "Menu",
        home: "Home",
        templates: "Templates",
    },

    home: HomeTexts {
        title: "Home",
        empty_notice: "Nothing here yet. The home page is intentionally empty for now :)",
        subscription_intro:
            "Your duty schedule subscription lives here for now. The link downloads a standard .ics calendar file",
        subscription_usage:
            "Import it into a calendar app or subscribe to the link; the phone's built-in calendar works best",
    },

    templates: TemplatesTexts {
        title: "Schedule templates",
        empty: "No schedule templates",
        shift_count_suffix: " shifts",
    },

    modal: ModalTexts {
        detail: DetailModalTexts {
            no_description: "No description",
            no_shifts: "No shifts on this day",
            assistants_suffix: " assistants",
            hidden_shifts_suffix: " more shifts",
        },
        delete: DeleteModalTexts {
            title: "Delete schedule template",
            prompt: "Delete this schedule template? This cannot be undone.",
            deleting: "Deleting...",
            deleted: "Deleted schedule template",
        },
        help: HelpTexts {
            title: "Help",
            global: "Global shortcuts",
            templates: "Templates page",
            dialogs: "Dialogs",
            close_hint: "Press Esc to close the help",
        },
    },

    days: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
};
