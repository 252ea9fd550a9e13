//! 终端的进入与恢复
//!
//! 进入时依次打开原始模式、切到备用屏幕；恢复时反向执行。
//! 恢复的每一步都会尝试，单步失败只记录日志，最后返回第一个错误，
//! 避免终端停留在原始模式。

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 进入原始模式与备用屏幕
///
/// 中途失败时撤销已完成的步骤。
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let entered = execute!(io::stdout(), EnterAlternateScreen)
        .context("failed to enter alternate screen")
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())).context("failed to create terminal"));

    match entered {
        Ok(mut terminal) => {
            terminal.clear()?;
            Ok(terminal)
        }
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e)
        }
    }
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    let steps: [(&str, io::Result<()>); 3] = [
        ("disable raw mode", disable_raw_mode()),
        ("leave alternate screen", execute!(terminal.backend_mut(), LeaveAlternateScreen)),
        ("show cursor", terminal.show_cursor()),
    ];

    let mut first_error = None;
    for (step, result) in steps {
        if let Err(e) = result {
            log::error!("Terminal restore step '{step}' failed: {e}");
            first_error.get_or_insert(anyhow::Error::new(e).context(step));
        }
    }
    first_error.map_or(Ok(()), Err)
}
