pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Browsing:
  ↑ / ↓         Move selection
  Enter         Open directory / choose file
  Backspace     Parent directory
  e             Type a file path instead

File:
  a             Analyze the selected file
  c             Clear the selected file

Results:
  ↑ / ↓         Scroll the report
  n             Analyze another file

General:
  ?             Toggle this help
  E             Show latest error details
  Esc           Close popup / cancel path entry
  Ctrl + Q      Quit

Mouse:
  Scroll        Move selection / scroll the report
"#
        .to_string()
    }
}
