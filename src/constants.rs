/// Fixed values for the placeholder icon set

pub mod icons {
    /// Square sizes of the app icons listed in the web manifest
    pub const APP_ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

    /// Label drawn on every app icon
    pub const APP_ICON_LABEL: &str = "玉珍";

    /// All shortcut icons share one size
    pub const SHORTCUT_SIZE: u32 = 96;

    /// (label, filename) for each manifest shortcut, in manifest order
    pub const SHORTCUTS: [(&str, &str); 4] = [
        ("AI", "shortcut-chat.png"),
        ("训练", "shortcut-training.png"),
        ("动作", "shortcut-exercise.png"),
        ("进度", "shortcut-progress.png"),
    ];
}

pub mod colors {
    /// Sky blue, #0ea5e9
    pub const BACKGROUND: [u8; 3] = [14, 165, 233];

    /// White
    pub const FOREGROUND: [u8; 3] = [255, 255, 255];
}

pub mod fonts {
    /// Font pixel size as a fraction of the canvas size
    pub const FONT_SIZE_RATIO: f32 = 0.4;

    /// Scalable fonts tried in order before falling back to the built-in bitmap font.
    /// Microsoft YaHei on Windows, PingFang on macOS.
    pub const DEFAULT_CANDIDATES: [&str; 2] = ["msyh.ttc", "/System/Library/Fonts/PingFang.ttc"];

    /// How deep to descend into system font directories when resolving a bare file name
    pub const MAX_SEARCH_DEPTH: usize = 3;
}

pub mod output {
    /// Output directory relative to the crate root
    pub const ICON_DIR: &str = "public/icons";
}
