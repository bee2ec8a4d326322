//! 创建表单组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use embarcacion_core::types::RecordSchema;

use crate::i18n::{field_error_text, field_label, t};
use crate::model::App;
use crate::view::theme::{Styles, colors};

const LABEL_WIDTH: usize = 14;
const MARKER: &str = "› ";

/// 表单高度：边框 + 每个字段两行（值、错误）+ 提示行
pub fn height(schema: RecordSchema) -> u16 {
    let fields = u16::try_from(schema.fields().len()).unwrap_or(u16::MAX / 4);
    fields * 2 + 3
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let form = &app.form;
    let focused = app.focus.is_form();
    let disabled = app.vessels.is_loading();

    let title = if app.vessels.editing.is_some() {
        texts.form.title_edit
    } else {
        texts.form.title_new
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value_style = if disabled {
        Styles::muted()
    } else {
        Style::default().fg(colors().fg)
    };

    let mut lines = Vec::new();
    let mut cursor = None;
    for (row, field) in form.schema.fields().iter().copied().enumerate() {
        let is_current = field == form.focus;
        let value = form.draft.get(field);
        let label = format!("{:<LABEL_WIDTH$}", field_label(field));

        let style = if is_current && focused {
            value_style.add_modifier(Modifier::UNDERLINED)
        } else {
            value_style
        };
        lines.push(Line::from(vec![
            Span::styled(if is_current { MARKER } else { "  " }, Styles::hint_key()),
            Span::styled(label.clone(), Styles::muted()),
            Span::styled(value.to_string(), style),
        ]));

        match form.errors.get(field) {
            Some(error) => lines.push(Line::styled(
                format!("  {:LABEL_WIDTH$}{}", "", field_error_text(field, error)),
                Styles::error(),
            )),
            None => lines.push(Line::from("")),
        }

        if is_current && focused && !disabled {
            let x = MARKER.width() + label.width() + value.width();
            cursor = Some((x, row * 2));
        }
    }

    let footer = if form.is_submitting() {
        Line::styled(format!("  {}", texts.form.submitting), Styles::muted())
    } else {
        let keys = &texts.hints.keys;
        Line::from(vec![
            Span::raw("  "),
            Span::styled(keys.enter, Styles::hint_key()),
            Span::raw(" "),
            Span::styled(texts.common.save, Styles::muted()),
            Span::raw("  "),
            Span::styled(keys.esc, Styles::hint_key()),
            Span::raw(" "),
            Span::styled(texts.common.cancel, Styles::muted()),
            Span::raw("  "),
            Span::styled(keys.tab, Styles::hint_key()),
            Span::raw(" "),
            Span::styled(texts.hints.actions.next_field, Styles::muted()),
        ])
    };
    lines.push(footer);

    frame.render_widget(Paragraph::new(lines), inner);

    if let Some((x, y)) = cursor {
        let x = inner.x.saturating_add(u16::try_from(x).unwrap_or(u16::MAX));
        let y = inner.y.saturating_add(u16::try_from(y).unwrap_or(u16::MAX));
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}
