//! 工作台：项目树 + 属性面板 + 提示框，把终端事件翻译成 kernel Action

use ratatui::layout::Rect;
use ratatui::Frame;

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::KeybindingService;
use crate::kernel::{Action as KernelAction, AppState, Effect, FocusTarget, IconVariant, Store};
use crate::models::Schema;
use crate::tui::view::{EventResult, View};

mod input;
mod render;
mod util;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const TREE_WIDTH_PERCENT: u16 = 40;
const TREE_MIN_WIDTH: u16 = 24;

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    theme: UiTheme,
    last_render_area: Option<Rect>,
    last_tree_area: Option<Rect>,
    last_panel_area: Option<Rect>,
}

impl Workbench {
    pub fn new(schema: Schema, icon_variant: IconVariant) -> Self {
        Self {
            store: Store::new(AppState::new(schema, icon_variant)),
            keybindings: KeybindingService::new(),
            theme: UiTheme::for_variant(icon_variant),
            last_render_area: None,
            last_tree_area: None,
            last_panel_area: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    /// Runs one action through the store and performs its effects.
    pub fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            // The terminal panel draws straight from the store's document, so
            // there is no second copy to patch; the message is only traced.
            Effect::PostPanelMessage(message) => match message.to_json() {
                Ok(json) => tracing::debug!(message = %json, "panel update"),
                Err(err) => tracing::warn!(error = %err, "panel message not serializable"),
            },
        }
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
