//! Subprocess execution with a forced neutral locale and a bounded timeout.

pub mod command;

pub use command::{
    execute, minimal_env, minimal_env_with, neutral_locale_env, CommandOptions, CommandResult,
    ENV_ALLOW_LIST, NEUTRAL_LOCALE,
};
