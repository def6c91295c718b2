/// Crate-wide constants for icon palette, layout, and output targets

pub mod palette {
    /// Flat background fill (#1e40af)
    pub const BACKGROUND: [u8; 4] = [30, 64, 175, 255];

    /// Label glyph color (opaque white)
    pub const LABEL: [u8; 4] = [255, 255, 255, 255];

    /// Maple leaf fill (translucent white)
    pub const LEAF: [u8; 4] = [255, 255, 255, 200];
}

pub mod layout {
    /// Label font size as a fraction of the icon edge
    pub const FONT_SCALE: f32 = 0.3;

    /// Fixed pixel size used when only the first available face can be loaded
    pub const DEFAULT_FONT_PX: f32 = 13.0;

    /// Smallest icon edge that still gets the leaf decoration
    /// Below this the triangle is too small to read
    pub const LEAF_MIN_SIZE: u32 = 72;

    /// Leaf triangle half-base as a divisor of the icon edge
    pub const LEAF_DIVISOR: u32 = 8;
}

pub mod targets {
    /// Launcher icon sizes and their Capacitor/Gradle output locations.
    /// Order is the processing order; paths are relative to the project root.
    pub const LAUNCHER_ICONS: &[(u32, &str)] = &[
        (48, "android/app/src/main/res/mipmap-mdpi/ic_launcher.png"),
        (72, "android/app/src/main/res/mipmap-hdpi/ic_launcher.png"),
        (96, "android/app/src/main/res/mipmap-xhdpi/ic_launcher.png"),
        (144, "android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png"),
        (192, "android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png"),
        (512, "android/app/src/main/ic_launcher-playstore.png"),
    ];
}
