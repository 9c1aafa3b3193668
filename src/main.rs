use anyhow::{Context, Result};
use live_localization::config::Config;
use live_localization::i18n::strings::{
    ABOUT_ACTION, APP_TITLE, CHOOSE_FILE_OPEN, EDIT_MENU, EN_LANG_ACTION, EXIT_ACTION, FILE_MENU,
    HELP_MENU, HR_LANG_ACTION, OPEN_FILE_ACTION, SAVE_FILE_ACTION, TOGGLE_LANG_ACTION, TOOLBAR,
};
use live_localization::i18n::{
    Action, DirectoryTables, FileChooser, Frame, LocalizationMetrics, LocalizationProvider, Menu,
    ToolBar,
};
use std::rc::Rc;
use tracing::{error, info};

/// Headless notepad window: every visible string is a localized property.
struct Notepad {
    frame: Frame,
    menus: Vec<Menu>,
    toolbar: ToolBar,
    actions: Vec<Action>,
    toggle: Action,
    chooser: FileChooser,
}

impl Notepad {
    fn new(provider: &Rc<LocalizationProvider>, languages: &[String]) -> Self {
        let frame = Frame::new(APP_TITLE, provider.clone());
        let local = frame.provider();

        let menus = [FILE_MENU, EDIT_MENU, HELP_MENU]
            .into_iter()
            .map(|key| Menu::new(key, local.clone()))
            .collect();

        let switch_to = |key: &str, language: &'static str| {
            let provider = Rc::downgrade(provider);
            Action::new(key, local.clone(), move || {
                if let Some(provider) = provider.upgrade() {
                    if let Err(e) = provider.set_language(language) {
                        error!(error = %e, "Language switch failed");
                    }
                }
            })
        };

        let toggle = {
            let provider = Rc::downgrade(provider);
            let languages = languages.to_vec();
            Action::new(TOGGLE_LANG_ACTION, local.clone(), move || {
                if let Some(provider) = provider.upgrade() {
                    let languages: Vec<&str> = languages.iter().map(String::as_str).collect();
                    if let Err(e) = provider.cycle_language(&languages) {
                        error!(error = %e, "Language switch failed");
                    }
                }
            })
        };

        let actions = vec![
            Action::new(OPEN_FILE_ACTION, local.clone(), || info!("Open requested")),
            Action::new(SAVE_FILE_ACTION, local.clone(), || info!("Save requested")),
            Action::new(EXIT_ACTION, local.clone(), || info!("Exit requested")),
            switch_to(HR_LANG_ACTION, "hr"),
            switch_to(EN_LANG_ACTION, "en"),
            Action::new(ABOUT_ACTION, local.clone(), || info!("About requested")),
        ];

        Self {
            toolbar: ToolBar::new(TOOLBAR, local.clone()),
            chooser: FileChooser::new(CHOOSE_FILE_OPEN, local),
            frame,
            menus,
            actions,
            toggle,
        }
    }

    fn log_texts(&self, stage: &str) {
        let menus: Vec<String> = self.menus.iter().map(Menu::text).collect();
        let actions: Vec<String> = self.actions.iter().map(Action::name).collect();
        info!(
            stage,
            open = self.frame.is_open(),
            title = %self.frame.title(),
            toolbar = %self.toolbar.name(),
            chooser = %self.chooser.dialog_title(),
            menus = ?menus,
            actions = ?actions,
            toggle = %self.toggle.name(),
            "Window texts"
        );
    }
}

fn build_provider(config: &Config) -> Result<Rc<LocalizationProvider>> {
    let provider = match &config.tables_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Loading translation tables from directory");
            LocalizationProvider::new(DirectoryTables::new(dir), &config.default_language)
                .with_context(|| format!("failed to load tables from {}", dir.display()))?
        }
        None => {
            let provider =
                LocalizationProvider::builtin().context("failed to load built-in tables")?;
            provider
                .set_language(&config.default_language)
                .context("default language has no built-in table")?;
            provider
        }
    };

    Ok(LocalizationProvider::install(provider)?)
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("live_localization=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let provider = build_provider(&config)?;

    let notepad = Notepad::new(&provider, &config.demo_languages);
    notepad.log_texts("created");

    notepad.frame.open();
    for _ in 0..config.demo_languages.len() {
        notepad.toggle.trigger();
        info!(language = %provider.current_language(), "Language toggled");
        notepad.log_texts("open");
    }

    notepad.frame.close();
    provider.cycle_language(
        &config
            .demo_languages
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>(),
    )?;
    info!(
        language = %provider.current_language(),
        registrations = provider.listener_count(),
        "Language switched after close"
    );
    notepad.log_texts("closed");

    let report = LocalizationMetrics::global().report();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
