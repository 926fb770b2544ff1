use log::info;

/// Identifier for every user-facing control on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ManualMode,
    SemiAutoMode,
    AutoMode,
    EngageMode,
    EmergencyStop,
}

impl Control {
    /// The four mode-select buttons, in panel order.
    pub const MODES: [Control; 4] = [
        Control::ManualMode,
        Control::SemiAutoMode,
        Control::AutoMode,
        Control::EngageMode,
    ];

    pub const ALL: [Control; 5] = [
        Control::ManualMode,
        Control::SemiAutoMode,
        Control::AutoMode,
        Control::EngageMode,
        Control::EmergencyStop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::ManualMode => "Manual mode",
            Control::SemiAutoMode => "Semi-autonomous mode",
            Control::AutoMode => "Autonomous mode",
            Control::EngageMode => "Engage mode",
            Control::EmergencyStop => "Emergency stop",
        }
    }
}

/// Handler invoked synchronously on the UI thread when a control is pressed.
pub type Handler = fn(Control);

/// Explicit dispatch table from control to handler.
///
/// The default table only logs presses: no turret command wiring exists yet,
/// and [`CommandTable::bind`] is the seam where real handlers go later.
pub struct CommandTable {
    entries: Vec<(Control, Handler)>,
}

impl Default for CommandTable {
    fn default() -> Self {
        let entries = Control::ALL.map(|control| (control, log_press as Handler));
        Self {
            entries: entries.to_vec(),
        }
    }
}

impl CommandTable {
    /// Replaces the handler for `control`, or adds one if unbound.
    pub fn bind(&mut self, control: Control, handler: Handler) {
        match self.entries.iter_mut().find(|(c, _)| *c == control) {
            Some(entry) => entry.1 = handler,
            None => self.entries.push((control, handler)),
        }
    }

    /// Invokes the bound handler exactly once. Returns whether one was bound.
    pub fn press(&self, control: Control) -> bool {
        match self.entries.iter().find(|(c, _)| *c == control) {
            Some((_, handler)) => {
                handler(control);
                true
            }
            None => false,
        }
    }
}

fn log_press(control: Control) {
    info!("{} pressed", control.label());
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static PRESSES: AtomicUsize = AtomicUsize::new(0);

    fn counting(_: Control) {
        PRESSES.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn every_control_is_bound_by_default() {
        let table = CommandTable::default();
        for control in Control::ALL {
            assert!(table.press(control), "{control:?} has no handler");
        }
    }

    #[test]
    fn press_invokes_handler_exactly_once() {
        let mut table = CommandTable::default();
        table.bind(Control::EmergencyStop, counting);

        let before = PRESSES.load(Ordering::SeqCst);
        assert!(table.press(Control::EmergencyStop));
        assert_eq!(PRESSES.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn bind_replaces_instead_of_duplicating() {
        let mut table = CommandTable::default();
        table.bind(Control::ManualMode, counting);
        table.bind(Control::ManualMode, counting);
        assert_eq!(table.entries.len(), Control::ALL.len());
    }
}
