//! 船只表格组件

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use embarcacion_core::types::{Vessel, VesselField};
use embarcacion_core::validation::{DATE_FORMAT, format_number};

use crate::i18n::t;
use crate::model::{App, RowEdit};
use crate::view::pages::vessels::banner_text;
use crate::view::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let block = Block::default()
        .title(format!(
            " {} ({}) ",
            texts.table.title,
            app.vessels.vessels.len()
        ))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_table()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 加载中 → 错误 → 空列表 → 表格
    let notice = if app.vessels.is_loading() {
        Some((texts.table.loading, Styles::muted()))
    } else if let Some(banner) = app.vessels.banner {
        Some((banner_text(banner.kind), Styles::error()))
    } else if app.vessels.vessels.is_empty() {
        Some((texts.table.empty, Styles::muted()))
    } else {
        None
    };

    match notice {
        Some((text, style)) => render_notice(frame, inner, text, style),
        None => render_rows(app, frame, inner),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let content = vec![Line::from(""), Line::styled(format!("  {text}"), style)];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_rows(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let table_state = &app.table;
    let dated = app.schema.has_scheduled_date();

    let mut header = vec![
        texts.table.col_id,
        texts.table.col_name,
        texts.table.col_capacity,
        texts.table.col_description,
    ];
    if dated {
        header.push(texts.table.col_date);
    }
    header.push(texts.table.col_actions);

    let rows: Vec<Row> = app
        .vessels
        .vessels
        .iter()
        .map(|vessel| match table_state.editing.as_ref() {
            Some(edit) if edit.id == vessel.id => edit_row(edit, dated),
            _ => view_row(
                vessel,
                dated,
                table_state.is_confirming_row(vessel.id),
                table_state.deleting,
            ),
        })
        .collect();

    let mut widths = vec![
        Constraint::Length(6),
        Constraint::Percentage(22),
        Constraint::Length(11),
        Constraint::Percentage(30),
    ];
    if dated {
        widths.push(Constraint::Length(12));
    }
    widths.push(Constraint::Min(18));

    let table = Table::new(rows, widths)
        .header(
            Row::new(header).style(
                Style::default()
                    .fg(colors().muted)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(table_state.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn view_row(vessel: &Vessel, dated: bool, confirming: bool, deleting: bool) -> Row<'static> {
    let texts = t();
    let mut cells = vec![
        Line::from(vessel.id.to_string()),
        Line::from(vessel.name.clone()),
        Line::from(format_number(vessel.capacity)),
        Line::from(vessel.description.clone()),
    ];
    if dated {
        cells.push(Line::from(
            vessel
                .scheduled_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        ));
    }

    let actions = if confirming && deleting {
        Line::styled(texts.table.deleting, Styles::muted())
    } else if confirming {
        Line::styled(
            texts.table.confirm_delete,
            Style::default()
                .fg(colors().warning)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::from(vec![
            Span::styled("e ", Styles::hint_key()),
            Span::styled(texts.common.edit, Styles::muted()),
            Span::raw("  "),
            Span::styled("d ", Styles::hint_key()),
            Span::styled(texts.common.delete, Styles::muted()),
        ])
    };
    cells.push(actions);
    Row::new(cells)
}

fn edit_row(edit: &RowEdit, dated: bool) -> Row<'static> {
    let texts = t();
    let cell = |field: VesselField| {
        let text = edit.text(field).to_string();
        if field == edit.field && !edit.submitting {
            Line::styled(
                format!("{text}▏"),
                Style::default().add_modifier(Modifier::UNDERLINED),
            )
        } else {
            Line::from(text)
        }
    };

    let mut cells = vec![
        Line::from(edit.id.to_string()),
        cell(VesselField::Name),
        cell(VesselField::Capacity),
        cell(VesselField::Description),
    ];
    if dated {
        cells.push(cell(VesselField::ScheduledDate));
    }
    cells.push(if edit.submitting {
        Line::styled(texts.table.saving, Styles::muted())
    } else {
        Line::styled(texts.table.editing, Style::default().fg(colors().warning))
    });

    Row::new(cells).style(Style::default().bg(colors().editing_bg))
}
