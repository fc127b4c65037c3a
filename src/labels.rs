// seating-chart: language-specific text for the dialog, grid and report

use clap::ValueEnum;

/// Label presets selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// Every user-visible string the chart produces.
///
/// Entries that embed numbers are split into a word and the number is
/// appended by the caller, so a preset is plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub plan_title: &'static str,
    pub tables_heading: &'static str,
    pub seats_heading: &'static str,
    pub table: &'static str,
    pub row: &'static str,
    pub seat: &'static str,
    pub free: &'static str,
    pub assign_title: &'static str,
    pub edit_title: &'static str,
    pub name_placeholder: &'static str,
}

pub const ENGLISH: Labels = Labels {
    plan_title: "Seating plan:",
    tables_heading: "Tables:",
    seats_heading: "Seats:",
    table: "Table",
    row: "Row",
    seat: "Seat",
    free: "Free",
    assign_title: "Assign seat",
    edit_title: "Edit seat",
    name_placeholder: "Enter surname",
};

pub const RUSSIAN: Labels = Labels {
    plan_title: "План рассадки:",
    tables_heading: "Столы:",
    seats_heading: "Места:",
    table: "Стол",
    row: "Ряд",
    seat: "Место",
    free: "Свободно",
    assign_title: "Занять место",
    edit_title: "Изменить данные места",
    name_placeholder: "Введите фамилию",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::En => &ENGLISH,
            Language::Ru => &RUSSIAN,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        ENGLISH
    }
}
