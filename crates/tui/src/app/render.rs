use super::*;

use crate::markdown;
use crate::ui::panel::PanelType;
use datainsight_analysis::report::split_report;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.layout.calculate_layout(area);
        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Header => self.render_header(frame, panel.rect),
                PanelType::Content => self.render_content(frame, panel.rect),
                PanelType::StatusBar => self.render_status_bar(frame, panel.rect),
            }
        }

        if self.show_help {
            self.render_help(frame, area);
        }

        if self.show_error_details {
            self.render_error_details(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::Paragraph;

        let phase = match self.phase {
            Phase::Idle => "[seleccionar]",
            Phase::Analyzing => "[analizando]",
            Phase::Done => "[resultados]",
        };

        let text = format!(" ● DataInsight AI   {}   [?] ayuda", phase);
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Magenta)),
            area,
        );
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.phase {
            Phase::Idle => self.render_picker(frame, area),
            Phase::Analyzing => self.render_analyzing(frame, area),
            Phase::Done => self.render_results(frame, area),
        }
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect) {
        use ratatui::layout::{Constraint, Direction, Layout};
        use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);

        let items: Vec<ListItem> = self
            .picker
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let prefix = if i == self.picker.selected { "> " } else { "  " };
                if entry.is_dir {
                    ListItem::new(format!("{}{}/", prefix, entry.name))
                        .style(Style::default().fg(Color::Blue))
                } else {
                    ListItem::new(format!("{}{}", prefix, entry.name))
                }
            })
            .collect();

        frame.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.picker.cwd.display())),
            ),
            rows[0],
        );

        let (text, style, title) = if self.input.mode == InputMode::PathEntry {
            (
                format!(" {}_", self.input.buffer),
                Style::default(),
                " Escribe la ruta del archivo ",
            )
        } else if let Some(ref file) = self.selected_file {
            (
                format!(" ✔ {}   [a] analizar   [c] cambiar", file.name),
                Style::default().fg(Color::Green),
                " Archivo seleccionado ",
            )
        } else {
            (
                " Soporta archivos .xlsx y .xls".to_string(),
                Style::default().fg(Color::DarkGray),
                " Sube tu archivo Excel ",
            )
        };

        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .block(Block::default().borders(Borders::ALL).title(title)),
            rows[1],
        );
    }

    fn render_analyzing(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph};

        let elapsed = self
            .analyzing_since
            .map(|since| since.elapsed().as_millis())
            .unwrap_or(0);
        let spinner = SPINNER_FRAMES[(elapsed / 120) as usize % SPINNER_FRAMES.len()];

        let text = format!(
            "\n\n  {} Analizando tus datos\n\n  La IA está procesando tu archivo...\n",
            spinner
        );
        frame.render_widget(
            Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL).title(" análisis "))
                .centered(),
            area,
        );
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph};

        let Some(ref result) = self.result else {
            return;
        };

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                format!(
                    " ✔ Análisis completado — {}",
                    result.received_at.format("%H:%M:%S")
                ),
                Style::default().fg(Color::Green),
            )),
            Line::default(),
        ];

        // Segments are derived from the raw report on every frame.
        for segment in split_report(&result.report) {
            let icons: String = segment
                .icons
                .iter()
                .map(|icon| icon.symbol())
                .collect::<Vec<_>>()
                .join(" ");

            let mut head = vec![Span::styled(
                format!(" {} ", icons),
                Style::default().fg(Color::Magenta),
            )];
            if let Some(ref title) = segment.title {
                head.push(Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(head));

            lines.extend(markdown::render_markdown(&segment.body));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            " [n] Analizar otro archivo",
            Style::default().fg(Color::DarkGray),
        )));

        let visible = area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Resultados del Análisis "),
                )
                .scroll((self.scroll_offset as u16, 0)),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::Paragraph;

        if let Some(ref error) = self.last_error {
            frame.render_widget(
                Paragraph::new(format!(" ✖ {}   [E] detalles", error))
                    .style(Style::default().fg(Color::Red)),
                area,
            );
            return;
        }

        let hint = match self.phase {
            Phase::Idle => {
                " [↑↓] mover   [Enter] abrir/elegir   [e] ruta   [a] analizar   [Ctrl+Q] salir"
            }
            Phase::Analyzing => " Analizando…   [Ctrl+Q] salir",
            Phase::Done => " [↑↓] desplazar   [n] analizar otro archivo   [Ctrl+Q] salir",
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};

        let popup_area = self.centered_rect(60, 70, area);
        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(self.keybinds.help_text()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press ? to close "),
            ),
            popup_area,
        );
    }

    fn render_error_details(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

        let error = self.last_error.as_deref().unwrap_or("(sin error)");
        let detail = self.last_error_detail.as_deref().unwrap_or("(sin detalle)");
        let text = format!("\n  {}\n\n  Detalle: {}\n\n  [Esc] cerrar\n", error, detail);

        let popup_area = self.centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Error ")),
            popup_area,
        );
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        use ratatui::layout::{Constraint, Direction, Layout};

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vertical[1])[1]
    }
}
