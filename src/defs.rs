// procname constants

// TASK_COMM_LEN, terminator included
pub const KERNEL_NAME_LEN: usize = 16;
pub const KERNEL_NAME_MAX: usize = KERNEL_NAME_LEN - 1;

// Points Config::load_default at a TOML file
pub const CONFIG_ENV_VAR: &str = "PROCNAME_CONFIG";

pub const LOG_TARGET: &str = "procname";
