/// Lines starting with this are console commands; anything else is sent to the engine.
pub const COMMAND_PREFIX: char = ':';

pub const CMD_ADD: &str = "add";
pub const CMD_RUN: &str = "run";
pub const CMD_LOAD: &str = "load";
pub const CMD_INPUT: &str = "input";
pub const CMD_RESET: &str = "reset";
pub const CMD_CLEAR: &str = "clear";
pub const CMD_REPORTS: &str = "reports";
pub const CMD_REFRESH: &str = "refresh";
pub const CMD_CLOSE: &str = "close";
pub const CMD_VIEW: &str = "view";
pub const CMD_DOWNLOAD: &str = "download";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: &str = "quit";
