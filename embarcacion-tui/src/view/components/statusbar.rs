//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::{App, RowMode};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mode = app.table.selected_mode(&app.vessels.vessels);
    let mut hints = Vec::new();

    if app.focus.is_form() && app.vessels.show_form {
        hints.push((keys.tab, actions.next_field));
        hints.push((keys.enter, actions.submit));
        hints.push((keys.esc, texts.common.cancel));
        hints.push((DefaultKeymap::FOCUS_TABLE.label, actions.focus_table));
    } else if mode == RowMode::ConfirmDelete {
        hints.push(("y", texts.common.confirm));
        hints.push(("n", texts.common.cancel));
    } else if mode == RowMode::Edit {
        hints.push((keys.tab, actions.next_field));
        hints.push((keys.enter, texts.common.save));
        hints.push((keys.esc, texts.common.cancel));
    } else {
        hints.push((keys.arrows_ud, actions.select));
        hints.push(("e", actions.inline_edit));
        hints.push(("d", texts.common.delete));
        hints.push((DefaultKeymap::BEGIN_EDIT.label, actions.open_in_form));
        hints.push((DefaultKeymap::TOGGLE_FORM.label, actions.new_vessel));
        if app.vessels.show_form {
            hints.push((DefaultKeymap::FOCUS_FORM.label, actions.focus_form));
        }
    }

    hints.push((DefaultKeymap::REFRESH.label, texts.common.refresh));
    hints.push((DefaultKeymap::QUIT.label, texts.common.quit));
    hints
}
