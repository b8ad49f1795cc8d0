use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => Ok(false),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if self.input.mode == InputMode::PathEntry {
            match key.code {
                KeyCode::Enter => self.submit_path_entry(),
                KeyCode::Esc => self.input.clear(),
                KeyCode::Backspace => self.input.handle_backspace(),
                KeyCode::Char(c) => self.input.handle_char(c),
                _ => {}
            }
            return Ok(false);
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return Ok(false);
        }

        if self.show_error_details {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('E')) {
                self.show_error_details = false;
            }
            return Ok(false);
        }

        if key.code == KeyCode::Char('E') && self.last_error.is_some() {
            self.show_error_details = true;
            return Ok(false);
        }

        match self.phase {
            Phase::Idle => self.handle_idle_key(key),
            // Busy: only the global keys above respond while analyzing.
            Phase::Analyzing => {}
            Phase::Done => self.handle_done_key(key),
        }

        Ok(false)
    }

    fn handle_idle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.picker.move_up(),
            KeyCode::Down => self.picker.move_down(),
            KeyCode::Backspace => self.picker.ascend(),
            KeyCode::Enter => {
                if let Some(path) = self.picker.enter() {
                    self.admit_file(path);
                }
            }
            KeyCode::Char('e') => self.input.start_path_entry(),
            KeyCode::Char('c') => self.clear_selected_file(),
            KeyCode::Char('a') => self.start_analysis(),
            _ => {}
        }
    }

    fn handle_done_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.scroll_up(),
            KeyCode::Down => self.scroll_down(),
            KeyCode::Char('n') => self.reset(),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<bool> {
        match mouse.kind {
            MouseEventKind::ScrollUp => match self.phase {
                Phase::Idle => self.picker.move_up(),
                Phase::Analyzing => {}
                Phase::Done => self.scroll_up(),
            },
            MouseEventKind::ScrollDown => match self.phase {
                Phase::Idle => self.picker.move_down(),
                Phase::Analyzing => {}
                Phase::Done => self.scroll_down(),
            },
            _ => {}
        }
        Ok(false)
    }
}
