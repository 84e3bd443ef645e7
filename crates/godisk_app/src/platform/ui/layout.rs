use super::constants::*;

pub fn banner_lines(engine_url: &str) -> Vec<String> {
    vec![
        "GoDisk console".to_string(),
        format!("Engine: {engine_url}"),
        format!(
            "Type {COMMAND_PREFIX}{CMD_HELP} for console commands; other lines run immediately."
        ),
    ]
}

pub fn help_lines() -> Vec<String> {
    const ROWS: [(&str, &str, &str); 13] = [
        (CMD_ADD, "<line>", "append a line to the script input"),
        (CMD_LOAD, "<file.mia>", "replace the script input with a script file"),
        (CMD_RUN, "", "execute the whole script input as one batch"),
        (CMD_INPUT, "", "show the script input"),
        (CMD_RESET, "", "empty the script input"),
        (CMD_CLEAR, "", "clear the transcript"),
        (CMD_REPORTS, "", "open the report browser"),
        (CMD_REFRESH, "", "reload the report list"),
        (CMD_CLOSE, "", "close the report browser"),
        (CMD_VIEW, "<name|#>", "show where a report can be opened"),
        (CMD_DOWNLOAD, "<name|#>", "save a report to the download directory"),
        (CMD_HELP, "", "show this help"),
        (CMD_QUIT, "", "exit"),
    ];
    ROWS.iter()
        .map(|(name, args, text)| {
            let usage = format!("{COMMAND_PREFIX}{name} {args}");
            format!("  {usage:<22}{text}")
        })
        .collect()
}
