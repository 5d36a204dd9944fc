// mods ~ cross-platforms modules (core/bundler file)

pub mod clap_localization;
pub mod display;
pub mod error;
pub mod locale;
pub mod object_output;
pub mod panic;
