//! 船只管理页面

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use embarcacion_core::types::OperationKind;

use crate::event::keymap::DefaultKeymap;
use crate::i18n::t;
use crate::model::App;
use crate::view::components;
use crate::view::theme::{Styles, colors};

/// 横幅文案；更新失败不会产生横幅
pub fn banner_text(kind: OperationKind) -> &'static str {
    let texts = &t().banner;
    match kind {
        OperationKind::Fetch | OperationKind::Update => texts.fetch_failed,
        OperationKind::Create => texts.create_failed,
        OperationKind::Delete => texts.delete_failed,
    }
}

/// 渲染船只管理页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let banner_height = u16::from(app.vessels.banner.is_some());
    let form_height = if app.vessels.show_form {
        components::form::height(app.schema)
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Length(1), // 表单开关
            Constraint::Length(form_height),
            Constraint::Min(3),
        ])
        .split(area);

    if let Some(banner) = app.vessels.banner {
        let line = Line::from(vec![
            Span::styled(" ✗ ", Styles::error().add_modifier(Modifier::BOLD)),
            Span::styled(banner_text(banner.kind), Styles::error()),
        ]);
        frame.render_widget(Paragraph::new(line), rows[0]);
    }

    render_toggle(app, frame, rows[1]);

    if app.vessels.show_form {
        components::form::render(app, frame, rows[2]);
    }

    components::vessel_table::render(app, frame, rows[3]);
}

/// “Nueva Embarcación / Cancelar”，加载中置灰
fn render_toggle(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let label = if app.vessels.show_form {
        texts.header.hide_form
    } else {
        texts.header.new_vessel
    };
    let style = if app.vessels.is_loading() {
        Styles::muted()
    } else {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("[{}]", DefaultKeymap::TOGGLE_FORM.label),
            Styles::hint_key(),
        ),
        Span::raw(" "),
        Span::styled(label, style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
