use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Directory browser backing the capture phase. Selection state lives here;
/// admission of a chosen file is the caller's job.
pub struct FilePicker {
    pub cwd: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub selected: usize,
}

impl FilePicker {
    pub fn new(start: PathBuf) -> Self {
        let mut picker = Self {
            cwd: start,
            entries: Vec::new(),
            selected: 0,
        };
        picker.refresh();
        picker
    }

    /// Re-reads the current directory. Unreadable entries are skipped and a
    /// completely unreadable directory lists as empty.
    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected = 0;

        let Ok(read) = fs::read_dir(&self.cwd) else {
            tracing::warn!(dir = %self.cwd.display(), "could not read directory");
            return;
        };

        for entry in read.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                continue;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            self.entries.push(PickerEntry { name, is_dir });
        }

        sort_entries(&mut self.entries);
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    /// Descends into a directory, or hands back a file path for admission.
    pub fn enter(&mut self) -> Option<PathBuf> {
        let entry = self.entries.get(self.selected)?;
        let path = self.cwd.join(&entry.name);
        if entry.is_dir {
            self.cwd = path;
            self.refresh();
            None
        } else {
            Some(path)
        }
    }

    pub fn ascend(&mut self) {
        if let Some(parent) = self.cwd.parent() {
            self.cwd = parent.to_path_buf();
            self.refresh();
        }
    }
}

pub(crate) fn sort_entries(entries: &mut [PickerEntry]) {
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool) -> PickerEntry {
        PickerEntry {
            name: name.to_string(),
            is_dir,
        }
    }

    #[test]
    fn directories_sort_before_files() {
        let mut entries = vec![
            entry("b.xlsx", false),
            entry("reports", true),
            entry("a.xls", false),
            entry("archive", true),
        ];
        sort_entries(&mut entries);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["archive", "reports", "a.xls", "b.xlsx"]);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut picker = FilePicker {
            cwd: PathBuf::from("/tmp"),
            entries: vec![entry("a.xls", false), entry("b.xls", false)],
            selected: 0,
        };

        picker.move_up();
        assert_eq!(picker.selected, 0);

        picker.move_down();
        picker.move_down();
        picker.move_down();
        assert_eq!(picker.selected, 1);
    }

    #[test]
    fn enter_on_a_file_returns_its_path() {
        let mut picker = FilePicker {
            cwd: PathBuf::from("/tmp"),
            entries: vec![entry("ventas.xlsx", false)],
            selected: 0,
        };

        assert_eq!(picker.enter(), Some(PathBuf::from("/tmp/ventas.xlsx")));
    }

    #[test]
    fn enter_on_an_empty_listing_is_a_noop() {
        let mut picker = FilePicker {
            cwd: PathBuf::from("/tmp"),
            entries: Vec::new(),
            selected: 0,
        };

        assert_eq!(picker.enter(), None);
    }
}
