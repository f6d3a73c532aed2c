//! Behavioural tests for configuration layering.

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::Lazy;
use ortho_config::OrthoConfig;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

use bangbot_config::{
    ChatTarget, Config, default_debug_chat, default_log_filter, default_log_format,
    default_long_message_limit, default_remove_command_on_error,
};

const DEBUG_CHAT_ENV: &str = "BANGBOT_DEBUG_CHAT";
const REMOVE_COMMAND_ENV: &str = "BANGBOT_REMOVE_COMMAND_ON_ERROR";

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct Harness {
    temp_dir: TempDir,
    cli_args: RefCell<Vec<OsString>>,
    env_overrides: RefCell<Vec<(String, Option<OsString>)>>,
    loaded: RefCell<Option<Config>>,
    error: RefCell<Option<String>>,
    _env_guard: MutexGuard<'static, ()>,
}

impl Harness {
    fn new() -> Self {
        let env_guard = ENV_MUTEX
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp_dir = match TempDir::new() {
            Ok(dir) => dir,
            Err(error) => panic!("failed to create temporary directory: {error}"),
        };
        Self {
            temp_dir,
            cli_args: RefCell::new(vec![OsString::from("bangbot")]),
            env_overrides: RefCell::new(Vec::new()),
            loaded: RefCell::new(None),
            error: RefCell::new(None),
            _env_guard: env_guard,
        }
    }

    fn write_config(&self, debug_chat: &str) {
        let path = self.temp_dir.path().join("bangbot.toml");
        let toml = format!("debug_chat = \"{debug_chat}\"\nremove_command_on_error = false\n");

        if let Err(error) = fs::write(&path, toml) {
            panic!("failed to write configuration: {error}");
        }

        let mut args = self.cli_args.borrow_mut();
        args.push(OsString::from("--config-path"));
        args.push(path.into_os_string());
    }

    fn set_env(&self, key: &str, value: &str) {
        let previous = std::env::var_os(key);
        // Environment mutation is `unsafe` in edition 2024; the harness holds
        // `ENV_MUTEX` and restores overrides in `Drop`.
        unsafe { std::env::set_var(key, value) };
        self.env_overrides
            .borrow_mut()
            .push((key.to_owned(), previous));
    }

    fn push_cli_arg(&self, arg: impl Into<OsString>) {
        self.cli_args.borrow_mut().push(arg.into());
    }

    fn load(&self) {
        if self.loaded.borrow().is_some() || self.error.borrow().is_some() {
            return;
        }

        let args = self.cli_args.borrow().clone();
        match Config::load_from_iter(args) {
            Ok(config) => {
                *self.loaded.borrow_mut() = Some(config);
            }
            Err(error) => {
                *self.error.borrow_mut() = Some(error.to_string());
            }
        }
    }

    fn loaded_config(&self) -> Config {
        self.load();

        if let Some(error) = self.error.borrow().as_ref() {
            panic!("configuration failed to load: {error}");
        }

        match self.loaded.borrow().as_ref() {
            Some(config) => config.clone(),
            None => panic!("configuration was not loaded"),
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let mut overrides = self.env_overrides.borrow_mut();
        while let Some((key, value)) = overrides.pop() {
            if let Some(os_value) = value {
                unsafe { std::env::set_var(&key, os_value) };
            } else {
                unsafe { std::env::remove_var(&key) };
            }
        }
    }
}

#[fixture]
fn harness() -> Harness {
    Harness::new()
}

#[given("a configuration file setting the debug chat to \"{chat}\"")]
fn given_configuration_file(harness: &Harness, chat: String) {
    harness.write_config(&chat);
}

#[given("the environment overrides the debug chat to \"{chat}\"")]
fn given_environment_override(harness: &Harness, chat: String) {
    harness.set_env(DEBUG_CHAT_ENV, &chat);
}

#[given("the environment keeps failed commands")]
fn given_environment_keeps_commands(harness: &Harness) {
    harness.set_env(REMOVE_COMMAND_ENV, "false");
}

#[when("the CLI sets the debug chat to \"{chat}\"")]
fn when_cli_override(harness: &Harness, chat: String) {
    harness.push_cli_arg("--debug-chat");
    harness.push_cli_arg(OsString::from(&chat));
}

#[when("the configuration loads without overrides")]
fn when_load_without_overrides(harness: &Harness) {
    harness.load();
}

#[then("loading the configuration resolves the debug chat to \"{chat}\"")]
fn then_resolved_debug_chat(harness: &Harness, chat: String) {
    let config = harness.loaded_config();
    assert_eq!(config.debug_chat(), ChatTarget::parse(&chat));
    assert!(
        !config.remove_command_on_error(),
        "file-level settings should survive higher-priority overrides"
    );
}

#[then("loading the configuration applies the built-in defaults")]
fn then_defaults_applied(harness: &Harness) {
    let config = harness.loaded_config();

    assert_eq!(config.debug_chat(), ChatTarget::parse(default_debug_chat()));
    assert_eq!(config.log_filter(), default_log_filter());
    assert_eq!(config.log_format(), default_log_format());
    assert_eq!(config.remove_command_on_error, None);
    assert_eq!(
        config.remove_command_on_error(),
        default_remove_command_on_error()
    );
    assert_eq!(config.long_message_limit(), default_long_message_limit());
}

#[then("loading the configuration keeps failed commands")]
fn then_commands_kept(harness: &Harness) {
    let config = harness.loaded_config();
    assert_eq!(config.remove_command_on_error, Some(false));
    assert!(!config.remove_command_on_error());
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "Built-in defaults apply without overrides"
)]
fn applies_built_in_defaults(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "The environment can keep failed commands"
)]
fn environment_keeps_failed_commands(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "A configuration file overrides the defaults"
)]
fn file_overrides_defaults(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "The environment overrides the configuration file"
)]
fn environment_overrides_file(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[scenario(
    path = "tests/features/configuration_precedence.feature",
    name = "Command-line flags override the environment"
)]
fn cli_overrides_environment(#[from(harness)] harness: Harness) {
    let _ = harness;
}
