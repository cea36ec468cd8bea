//! Chat command parsing

/// Runs the command and keeps the chat line visible
pub const PUBLIC_TRIGGER: char = '!';

/// Runs the command and hides the chat line
pub const SILENT_TRIGGER: char = '/';

/// Strip a leading trigger, returning `(silent, rest)`
pub fn split_trigger(message: &str) -> Option<(bool, &str)> {
    if let Some(rest) = message.strip_prefix(PUBLIC_TRIGGER) {
        Some((false, rest))
    } else {
        message.strip_prefix(SILENT_TRIGGER).map(|rest| (true, rest))
    }
}

/// Split a command line into its lowercase name and all arguments
///
/// The returned arguments include the name (in its original case) at index 0.
pub fn parse_command_line(text: &str) -> (String, Vec<String>) {
    let args: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    let name = args.first().map(|s| s.to_lowercase()).unwrap_or_default();
    (name, args)
}
