use crate::config::Config;
use crate::error::{Error, Result};
use crate::ui::Msg;
use crate::ui::model::{Model, initial_model};
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Duration;

#[derive(Debug)]
struct TickMsg;

// A single tick chain drives the animation: every Tick schedules the next one.
fn tick_after(delay: Duration) -> Cmd {
    bubbletea_rs::tick(delay, |_| Box::new(TickMsg) as bubbletea_rs::event::Msg)
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
struct TeaAdapter {
    inner: Model,
}

impl TeaAdapter {
    fn handle_key(&mut self, km: &KeyMsg) -> Option<Cmd> {
        match &km.key {
            KeyCode::Esc => {
                // Esc stops an animation first and quits only when idle
                if !self.inner.is_busy() {
                    return Some(bubbletea_rs::quit());
                }
                self.inner.update(Msg::KeyEsc);
            }
            KeyCode::Char(ch) => {
                if *ch == '\u{03}' {
                    // Ctrl-C delivered as ETX
                    return Some(bubbletea_rs::quit());
                }
                if km.modifiers.contains(KeyModifiers::CONTROL) {
                    if *ch == 'c' || *ch == 'C' {
                        return Some(bubbletea_rs::quit());
                    }
                    return None;
                }
                self.inner.update(Msg::Rune(*ch));
            }
            _ => { /* ignore other keys */ }
        }
        None
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let mut adapter = TeaAdapter {
            inner: initial_model(Config::default()),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        let first = tick_after(adapter.inner.next_tick_delay());
        (adapter, Some(first))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if msg.downcast_ref::<TickMsg>().is_some() {
            self.inner.update(Msg::Tick);
            return Some(tick_after(self.inner.next_tick_delay()));
        }
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(km);
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Run the visualizer until the user quits.
pub async fn run() -> Result<()> {
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder.build().map_err(|e| Error::Build(format!("{e:?}")))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| Error::Program(format!("{e:?}")))?;
    if let Some(summary) = final_adapter.inner.last_run {
        tracing::debug!(
            algorithm = summary.algorithm.name(),
            steps = summary.steps,
            "exiting after last sort"
        );
    }
    Ok(())
}
