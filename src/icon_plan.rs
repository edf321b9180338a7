use crate::constants::icons::{APP_ICON_LABEL, APP_ICON_SIZES, SHORTCUTS, SHORTCUT_SIZE};

/// One icon to render: a square canvas of `size` pixels showing `label`,
/// written as `filename` inside the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub label: String,
    pub filename: String,
}

impl IconSpec {
    pub fn new(size: u32, label: impl Into<String>, filename: impl Into<String>) -> Self {
        IconSpec {
            size,
            label: label.into(),
            filename: filename.into(),
        }
    }
}

/// App icons, one per manifest size, all with the same label
pub fn app_icons() -> Vec<IconSpec> {
    APP_ICON_SIZES
        .iter()
        .map(|&size| IconSpec::new(size, APP_ICON_LABEL, format!("icon-{}x{}.png", size, size)))
        .collect()
}

pub fn shortcut_icons() -> Vec<IconSpec> {
    SHORTCUTS
        .iter()
        .map(|&(label, filename)| IconSpec::new(SHORTCUT_SIZE, label, filename))
        .collect()
}

/// Full generation order: app icons first, then shortcuts
pub fn icon_plan() -> Vec<IconSpec> {
    let mut plan = app_icons();
    plan.extend(shortcut_icons());
    plan
}
