use std::collections::hash_map::Entry;

use crate::app::constants::DEFAULT_ENTRY_NAME;
use crate::app::errors::{AppError, AppResult};
use crate::app::logger::{self, LogCallback, LogLevel, LogOptions, LOGGER};
use crate::app::registry;
use crate::app::types::{
    deep_equal_config, deep_equal_options, get_default_app_config, FirebaseApp, FirebaseAppConfig,
    FirebaseAppSettings, FirebaseOptions,
};
use crate::component::ComponentContainer;

pub static SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

fn normalize_name(settings: &FirebaseAppSettings) -> AppResult<String> {
    let name = settings
        .name
        .clone()
        .unwrap_or_else(|| DEFAULT_ENTRY_NAME.to_string());
    if name.trim().is_empty() {
        return Err(AppError::BadAppName { app_name: name });
    }
    Ok(name)
}

fn ensure_options(options: FirebaseOptions) -> AppResult<FirebaseOptions> {
    if options.is_defined() {
        return Ok(options);
    }
    get_default_app_config().ok_or(AppError::NoOptions)
}

/// Creates and registers a [`FirebaseApp`].
///
/// Calling this again with the same name, options and settings returns the registered app
/// instead of creating a second one. Reusing a name with different options fails with
/// [`AppError::DuplicateApp`]. Empty options fall back to the environment-provided defaults.
pub fn initialize_app(
    options: FirebaseOptions,
    settings: Option<FirebaseAppSettings>,
) -> AppResult<FirebaseApp> {
    let settings = settings.unwrap_or_default();
    let name = normalize_name(&settings)?;
    let automatic = settings.automatic_data_collection_enabled.unwrap_or(true);
    let options = ensure_options(options)?;
    let config = FirebaseAppConfig::new(name.clone(), automatic);

    let mut apps = registry::apps_guard();
    let slot = match apps.entry(name) {
        Entry::Occupied(existing) => {
            let existing = existing.get();
            if deep_equal_options(&options, &existing.options())
                && deep_equal_config(&config, &existing.config())
            {
                return Ok(existing.clone());
            }
            return Err(AppError::DuplicateApp {
                app_name: existing.name().to_owned(),
            });
        }
        Entry::Vacant(slot) => slot,
    };

    let container = ComponentContainer::new(slot.key().clone());
    let app = FirebaseApp::new(options, config, container);
    for component in registry::registered_components() {
        registry::add_component(&app, &component);
    }

    LOGGER.debug(format!("Initialized Firebase App '{}'", app.name()));
    Ok(slot.insert(app).clone())
}

/// Returns the app registered under `name`, or the default app when `name` is `None`.
pub fn get_app(name: Option<&str>) -> AppResult<FirebaseApp> {
    let lookup = name.unwrap_or(DEFAULT_ENTRY_NAME);
    registry::apps_guard()
        .get(lookup)
        .cloned()
        .ok_or_else(|| AppError::NoApp {
            app_name: lookup.to_string(),
        })
}

/// Returns every registered app.
pub fn get_apps() -> Vec<FirebaseApp> {
    registry::apps_guard().values().cloned().collect()
}

/// Removes the app from the registry and releases the services it owns.
///
/// The handle stays usable as a value but [`FirebaseApp::check_destroyed`] reports it as deleted.
pub fn delete_app(app: &FirebaseApp) -> AppResult<()> {
    let removed = {
        let mut apps = registry::apps_guard();
        match apps.get(app.name()) {
            Some(registered) if registered.ptr_eq(app) => apps.remove(app.name()),
            _ => None,
        }
    };

    if removed.is_some() {
        let container = app.container();
        for provider in container.get_providers() {
            provider.delete();
        }
        container.detach_root_service();
        app.set_is_deleted(true);
        LOGGER.debug(format!("Deleted Firebase App '{}'", app.name()));
    }

    Ok(())
}

/// Forwards log records from every SDK logger to `callback`; `None` removes the callback.
pub fn on_log(callback: Option<LogCallback>, options: Option<LogOptions>) -> AppResult<()> {
    logger::set_user_log_handler(callback, options);
    Ok(())
}

pub fn set_log_level(level: LogLevel) {
    logger::apply_log_level(level);
}
