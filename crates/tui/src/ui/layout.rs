use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

#[derive(Default)]
pub struct LayoutState {
    cached_panels: Vec<Panel>,
}

impl LayoutState {
    pub fn calculate_layout(&mut self, area: Rect) -> &[Panel] {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::Header,
                rect: rows[0],
            },
            Panel {
                panel_type: PanelType::Content,
                rect: rows[1],
            },
            Panel {
                panel_type: PanelType::StatusBar,
                rect: rows[2],
            },
        ];

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }
}
