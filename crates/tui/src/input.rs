#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Browse,
    PathEntry,
}

pub struct InputState {
    pub buffer: String,
    pub mode: InputMode,
    cursor_position: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            mode: InputMode::Browse,
            cursor_position: 0,
        }
    }

    pub fn start_path_entry(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
        self.mode = InputMode::PathEntry;
    }

    pub fn handle_char(&mut self, c: char) {
        self.buffer.push(c);
        self.cursor_position = self.buffer.len();
    }

    pub fn handle_backspace(&mut self) {
        if !self.buffer.is_empty() {
            self.buffer.pop();
            self.cursor_position = self.buffer.len();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
        self.mode = InputMode::Browse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_entry_collects_typed_characters() {
        let mut input = InputState::new();
        input.start_path_entry();
        assert_eq!(input.mode, InputMode::PathEntry);

        for c in "/tmp/a.xlsx".chars() {
            input.handle_char(c);
        }
        assert_eq!(input.buffer, "/tmp/a.xlsx");

        input.handle_backspace();
        assert_eq!(input.buffer, "/tmp/a.xls");
    }

    #[test]
    fn clear_returns_to_browse_mode() {
        let mut input = InputState::new();
        input.start_path_entry();
        input.handle_char('x');
        input.clear();
        assert_eq!(input.mode, InputMode::Browse);
        assert!(input.buffer.is_empty());
    }
}
