//! 西班牙语翻译 (es-ES)

use super::keys::{
    ActionTexts, BannerTexts, CommonTexts, FormTexts, HeaderTexts, HintTexts, KeyNames,
    TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Embarcaciones TUI",
        save: "Guardar",
        cancel: "Cancelar",
        edit: "Editar",
        delete: "Eliminar",
        confirm: "Confirmar eliminación",
        quit: "Salir",
        refresh: "Recargar",
    },

    header: HeaderTexts {
        title: "Gestión de Embarcaciones",
        new_vessel: "Nueva Embarcación",
        hide_form: "Cancelar",
    },

    form: FormTexts {
        title_new: "Nueva Embarcación",
        title_edit: "Editar Embarcación",
        name: "Nombre",
        capacity: "Capacidad",
        description: "Descripción",
        scheduled_date: "Fecha",
        submitting: "Guardando...",
        name_required: "El nombre es requerido",
        capacity_invalid: "La capacidad debe ser un número mayor a 0",
        description_required: "La descripción es requerida",
        date_required: "La fecha es requerida",
        date_invalid: "La fecha debe tener el formato AAAA-MM-DD",
    },

    table: TableTexts {
        title: "Lista de Embarcaciones",
        col_id: "ID",
        col_name: "Nombre",
        col_capacity: "Capacidad",
        col_description: "Descripción",
        col_date: "Fecha",
        col_actions: "Acciones",
        loading: "Cargando embarcaciones...",
        empty: "No hay embarcaciones registradas",
        confirm_delete: "¿Eliminar? (y/n)",
        editing: "Editando",
        deleting: "Eliminando...",
        saving: "Guardando...",
    },

    banner: BannerTexts {
        fetch_failed: "Error al cargar las embarcaciones",
        create_failed: "Error al crear la embarcación",
        delete_failed: "Error al eliminar la embarcación",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            select: "Seleccionar",
            next_field: "Campo",
            submit: "Guardar",
            inline_edit: "Editar fila",
            open_in_form: "Editar en formulario",
            new_vessel: "Nueva",
            focus_form: "Formulario",
            focus_table: "Tabla",
        },
    },
};
