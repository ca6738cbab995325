use raylib::prelude::*;

pub const WINDOW_WIDTH: i32 = 900;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 700;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const CARD_WIDTH: i32 = 640;              // Width of the slide card
pub const CARD_IMAGE_HEIGHT: i32 = 360;       // 16:9 image area inside the card
pub const CARD_PADDING: i32 = 32;             // Inner padding around title/body
pub const CARD_ROUNDNESS: f32 = 0.06;         // Corner roundness of the card

pub const HEADER_FONT_SIZE: i32 = 28;
pub const TITLE_FONT_SIZE: i32 = 30;
pub const BODY_FONT_SIZE: i32 = 20;
pub const BODY_LINE_SPACING: i32 = 8;
pub const INDICATOR_FONT_SIZE: i32 = 22;

pub const BUTTON_SIZE: i32 = 44;              // Square hit area of a nav button
pub const BUTTON_GAP: i32 = 20;               // Gap between buttons and indicator
pub const CONTROLS_MARGIN: i32 = 16;          // Space between card and controls row

// Page palette: gradient background, white card, gray controls
pub const BACKGROUND_TOP: Color = Color::new(239, 246, 255, 255);
pub const BACKGROUND_BOTTOM: Color = Color::new(224, 231, 255, 255);
pub const CARD_COLOR: Color = Color::WHITE;
pub const TITLE_COLOR: Color = Color::new(17, 24, 39, 255);
pub const BODY_COLOR: Color = Color::new(75, 85, 99, 255);
pub const BUTTON_COLOR: Color = Color::new(229, 231, 235, 255);
pub const BUTTON_HOVER_COLOR: Color = Color::new(209, 213, 219, 255);
pub const BUTTON_GLYPH_COLOR: Color = Color::new(31, 41, 55, 255);
pub const PLACEHOLDER_COLOR: Color = Color::new(55, 65, 81, 255);
