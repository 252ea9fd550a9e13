//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     backend.dispatch(app.take_commands())          // 把 update 产生的后台命令交给运行时
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }
//!     while let Some(ev) = backend.try_recv() {      // 收取后台结果
//!         update(&mut app, AppMessage::Backend(ev))
//!     }
//!     update(&mut app, AppMessage::Tick)             // 过期 toast
//!     if let Some(event) = poll_event() {            // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);
//!         update(&mut app, msg)
//!     }
//! }
//!
//! Model 只在这个线程里被修改，后台任务通过 channel 把结果送回来。

use std::time::Duration;

use anyhow::Result;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut CoreService) -> Result<()> {
    loop {
        // 1. 派发后台命令
        for command in app.take_commands() {
            backend.dispatch(command);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 收取后台结果
        while let Some(event) = backend.try_recv() {
            update::update(app, AppMessage::Backend(event));
        }
        update::update(app, AppMessage::Tick);

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    // 退出前取消所有仍在等待的请求
    app.unmount_all();
    Ok(())
}
