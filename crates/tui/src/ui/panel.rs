use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelType {
    Header,
    Content,
    StatusBar,
}

#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub panel_type: PanelType,
    pub rect: Rect,
}
