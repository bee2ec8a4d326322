//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, BannerTexts, CommonTexts, FormTexts, HeaderTexts, HintTexts, KeyNames,
    TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Vessels TUI",
        save: "Save",
        cancel: "Cancel",
        edit: "Edit",
        delete: "Delete",
        confirm: "Confirm deletion",
        quit: "Quit",
        refresh: "Reload",
    },

    header: HeaderTexts {
        title: "Vessel Management",
        new_vessel: "New Vessel",
        hide_form: "Cancel",
    },

    form: FormTexts {
        title_new: "New Vessel",
        title_edit: "Edit Vessel",
        name: "Name",
        capacity: "Capacity",
        description: "Description",
        scheduled_date: "Date",
        submitting: "Saving...",
        name_required: "Name is required",
        capacity_invalid: "Capacity must be a number greater than 0",
        description_required: "Description is required",
        date_required: "Date is required",
        date_invalid: "Date must use the YYYY-MM-DD format",
    },

    table: TableTexts {
        title: "Vessel List",
        col_id: "ID",
        col_name: "Name",
        col_capacity: "Capacity",
        col_description: "Description",
        col_date: "Date",
        col_actions: "Actions",
        loading: "Loading vessels...",
        empty: "No vessels registered",
        confirm_delete: "Delete? (y/n)",
        editing: "Editing",
        deleting: "Deleting...",
        saving: "Saving...",
    },

    banner: BannerTexts {
        fetch_failed: "Failed to load vessels",
        create_failed: "Failed to create the vessel",
        delete_failed: "Failed to delete the vessel",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            select: "Select",
            next_field: "Field",
            submit: "Save",
            inline_edit: "Edit row",
            open_in_form: "Edit in form",
            new_vessel: "New",
            focus_form: "Form",
            focus_table: "Table",
        },
    },
};
