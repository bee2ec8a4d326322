//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时先排入一次整表获取，然后：
//!
//! loop {
//!
//!     for cmd in app.take_commands() {                // 派发 Update 层排入的远程操作
//!         backend.execute(cmd)                            // tokio::spawn，结果走 mpsc 通道
//!     }
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }
//!     while let Ok(msg) = rx.try_recv() {             // 收取已完成的远程操作
//!         update(&mut app, AppMessage::Backend(msg))
//!     }
//!     if let Some(event) = poll_event(50ms)? {        // 轮询输入，最多等待 50ms
//!         let msg = handle_event(event, &app);
//!         update(&mut app, msg)
//!     }
//! }
//!
//! 主循环从不等待网络；加载状态只影响渲染和表单可用性。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CoreService;
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 输入轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 运行主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &CoreService,
    rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    update::fetch_all(app);

    loop {
        for command in app.take_commands() {
            backend.execute(command);
        }

        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            tracing::info!("Quit requested");
            break;
        }

        while let Ok(msg) = rx.try_recv() {
            update::update(app, AppMessage::Backend(msg));
        }

        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
