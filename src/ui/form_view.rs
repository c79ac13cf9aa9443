use crate::export::PayloadSink;
use crate::form::FieldId;
use crate::model::FieldGroup;
use crate::ui::app::{mode_name, App, FormRow};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
        Wrap,
    },
    Frame,
};

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565
const BRAND_RED: Color = Color::Rgb(0xA8, 0x3F, 0x3F); // #a83f3f

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);

pub fn draw_form<S: PayloadSink>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Form + preview
        Constraint::Length(3), // Status
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);

    let main = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_fields(frame, main[0], app);
    draw_preview(frame, main[1], app);

    draw_status(frame, chunks[2], app);
    draw_footer(
        frame,
        chunks[3],
        " ↑↓ Field | ←→ Type | Space Toggle | F2/F3 Add/Remove void | F4 Mode | F5 Generate | Esc Quit ",
    );
}

fn draw_header<S: PayloadSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let state = app.controller.state();
    let element_type = if state.element_type.is_empty() {
        "-"
    } else {
        state.element_type.as_str()
    };
    let title = format!(
        " IFC Wall Form | Element: {} | Voids: {} | Mode: {} ",
        element_type,
        if state.has_void { state.voids().len() } else { 0 },
        mode_name(app.controller.mode())
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_fields<S: PayloadSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let rows = app.rows();

    // Subtract 3 for borders and header
    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.focused >= visible_rows {
        app.focused - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["Field", "Value"]).style(HEADER_STYLE).height(1);

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, row)| {
            let is_focused = i == app.focused;
            let style = if is_focused {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            Row::new(vec![row_label(*row), row_value(app, *row, is_focused)]).style(style)
        })
        .collect();

    let widths = [Constraint::Percentage(40), Constraint::Percentage(60)];

    let visibility = app.controller.visibility();
    let mut shown = Vec::new();
    if visibility.is_shown(FieldGroup::Wall) {
        shown.push(FieldGroup::Wall.container_id());
    }
    if visibility.is_shown(FieldGroup::Void) {
        shown.push(FieldGroup::Void.container_id());
    }
    let title = if shown.is_empty() {
        " Form ".to_string()
    } else {
        format!(" Form ({}) ", shown.join(", "))
    };

    let table = Table::new(table_rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BRAND_ORANGE)),
    );
    frame.render_widget(table, area);

    // Scrollbar needs room for both arrows and a track below the header
    if rows.len() > visible_rows && area.height >= 6 && area.width > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(rows.len()).position(app.focused);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 2,
            width: 1,
            height: area.height.saturating_sub(3),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn row_label(row: FormRow) -> String {
    match row {
        FormRow::ElementType => "Element Type".to_string(),
        FormRow::Field(FieldId::Wall(field)) => field.label().to_string(),
        FormRow::Field(FieldId::HasVoid) => "Has Void".to_string(),
        FormRow::Field(FieldId::Void { index, field }) => {
            format!("Void {} {}", index + 1, field.suffix())
        }
        FormRow::Generate => String::new(),
    }
}

fn row_value<S: PayloadSink>(app: &App<S>, row: FormRow, is_focused: bool) -> String {
    let state = app.controller.state();
    match row {
        FormRow::ElementType => {
            if state.element_type.is_empty() {
                "< Select element type >".to_string()
            } else {
                format!("< {} >", state.element_type)
            }
        }
        FormRow::Field(FieldId::HasVoid) => {
            let mark = if state.has_void { "[x]" } else { "[ ]" };
            mark.to_string()
        }
        FormRow::Field(id) => {
            let text = state.field(id).unwrap_or_default();
            if is_focused {
                format!("{text}▏")
            } else {
                text.to_string()
            }
        }
        FormRow::Generate => "[ Generate IFC data ]".to_string(),
    }
}

fn draw_preview<S: PayloadSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let text = match &app.last_payload {
        Some(json) => json.clone(),
        None => "Press F5 to generate wall data".to_string(),
    };
    let style = if app.last_payload.is_some() {
        Style::default()
    } else {
        Style::default().fg(BRAND_MUTED)
    };

    let preview = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Wall Data ").borders(Borders::ALL));
    frame.render_widget(preview, area);
}

fn draw_status<S: PayloadSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let line = match &app.status {
        Some(status) => {
            let color = if status.is_error { BRAND_RED } else { BRAND_GREEN };
            Line::from(Span::styled(
                format!(" {} ", status.message),
                Style::default().fg(color),
            ))
        }
        None => Line::from(""),
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormController, VoidField, WallField};
    use crate::model::WallDataPayload;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App<Vec<WallDataPayload>>) -> String {
        render_sized(app, 140, 30)
    }

    fn render_sized(app: &App<Vec<WallDataPayload>>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw_form(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn labels_void_rows_by_number() {
        assert_eq!(
            row_label(FormRow::Field(FieldId::Void {
                index: 1,
                field: VoidField::Width
            })),
            "Void 2 Width"
        );
        assert_eq!(
            row_label(FormRow::Field(FieldId::Wall(WallField::StrengthClass))),
            "Strength Class"
        );
    }

    #[test]
    fn renders_wall_fields_once_selected() {
        let mut controller = FormController::new(Vec::new());
        let hidden = render(&App::new(FormController::new(Vec::new())));
        assert!(!hidden.contains("Thickness"));

        controller.element_type_changed("IfcWall");
        let shown = render(&App::new(controller));
        assert!(shown.contains("Thickness"));
        assert!(shown.contains("wallFields"));
    }

    #[test]
    fn tiny_terminals_render_without_panicking() {
        let mut controller = FormController::new(Vec::new());
        controller.element_type_changed("IfcWall");
        controller.void_toggled(true);
        let app = App::new(controller);

        for (width, height) in [(80, 2), (80, 1), (1, 40), (3, 20), (80, 14)] {
            render_sized(&app, width, height);
        }
    }
}
