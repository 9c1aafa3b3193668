//! Built-in translation tables and the keys the bundled widgets use.
//!
//! Tables are plain `(key, text)` slices so they can live in `const`s and be
//! turned into a [`Table`](crate::i18n::Table) on demand.

// ==================== Keys ====================

pub const APP_TITLE: &str = "app.title";
pub const GREETING: &str = "greeting";
pub const UNTITLED: &str = "document.untitled";

pub const FILE_MENU: &str = "menu.file";
pub const EDIT_MENU: &str = "menu.edit";
pub const HELP_MENU: &str = "menu.help";
pub const TOOLBAR: &str = "toolbar.name";

pub const NEW_FILE_ACTION: &str = "action.new";
pub const OPEN_FILE_ACTION: &str = "action.open";
pub const SAVE_FILE_ACTION: &str = "action.save";
pub const SAVE_AS_FILE_ACTION: &str = "action.save_as";
pub const CLOSE_FILE_ACTION: &str = "action.close";
pub const EXIT_ACTION: &str = "action.exit";
pub const COPY_ACTION: &str = "action.copy";
pub const CUT_ACTION: &str = "action.cut";
pub const PASTE_ACTION: &str = "action.paste";
pub const DELETE_ACTION: &str = "action.delete";
pub const HR_LANG_ACTION: &str = "action.language_hr";
pub const EN_LANG_ACTION: &str = "action.language_en";
pub const TOGGLE_LANG_ACTION: &str = "action.toggle_language";
pub const ABOUT_ACTION: &str = "action.about";

pub const CHOOSE_FILE_OPEN: &str = "chooser.open";
pub const CHOOSE_FILE_SAVE: &str = "chooser.save";

pub const ABOUT_TITLE: &str = "about.title";
pub const ABOUT_TEXT: &str = "about.text";

// ==================== English ====================

/// English table (canonical)
pub const ENGLISH_TABLE: &[(&str, &str)] = &[
    (APP_TITLE, "Notepad"),
    (GREETING, "Hello"),
    (UNTITLED, "untitled"),
    (FILE_MENU, "File"),
    (EDIT_MENU, "Edit"),
    (HELP_MENU, "Help"),
    (TOOLBAR, "Tools"),
    (NEW_FILE_ACTION, "New"),
    (OPEN_FILE_ACTION, "Open"),
    (SAVE_FILE_ACTION, "Save"),
    (SAVE_AS_FILE_ACTION, "Save as"),
    (CLOSE_FILE_ACTION, "Close"),
    (EXIT_ACTION, "Exit"),
    (COPY_ACTION, "Copy"),
    (CUT_ACTION, "Cut"),
    (PASTE_ACTION, "Paste"),
    (DELETE_ACTION, "Delete"),
    (HR_LANG_ACTION, "Croatian"),
    (EN_LANG_ACTION, "English"),
    (TOGGLE_LANG_ACTION, "Switch language"),
    (ABOUT_ACTION, "About"),
    (CHOOSE_FILE_OPEN, "Open file"),
    (CHOOSE_FILE_SAVE, "Save file"),
    (ABOUT_TITLE, "About Notepad"),
    (ABOUT_TEXT, "A small editor whose every label follows the active language."),
];

// ==================== Croatian ====================

pub const CROATIAN_TABLE: &[(&str, &str)] = &[
    (APP_TITLE, "Bilježnica"),
    (GREETING, "Bok"),
    (UNTITLED, "bez naslova"),
    (FILE_MENU, "Datoteka"),
    (EDIT_MENU, "Uredi"),
    (HELP_MENU, "Pomoć"),
    (TOOLBAR, "Alati"),
    (NEW_FILE_ACTION, "Novo"),
    (OPEN_FILE_ACTION, "Otvori"),
    (SAVE_FILE_ACTION, "Spremi"),
    (SAVE_AS_FILE_ACTION, "Spremi kao"),
    (CLOSE_FILE_ACTION, "Zatvori"),
    (EXIT_ACTION, "Izlaz"),
    (COPY_ACTION, "Kopiraj"),
    (CUT_ACTION, "Izreži"),
    (PASTE_ACTION, "Zalijepi"),
    (DELETE_ACTION, "Obriši"),
    (HR_LANG_ACTION, "Hrvatski"),
    (EN_LANG_ACTION, "Engleski"),
    (TOGGLE_LANG_ACTION, "Promijeni jezik"),
    (ABOUT_ACTION, "O programu"),
    (CHOOSE_FILE_OPEN, "Otvori datoteku"),
    (CHOOSE_FILE_SAVE, "Spremi datoteku"),
    (ABOUT_TITLE, "O Bilježnici"),
    (ABOUT_TEXT, "Mali uređivač čije sve oznake prate odabrani jezik."),
];
