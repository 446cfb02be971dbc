/* CONFIG */
pub const CANVAS_WIDTH: usize = 800;
pub const CANVAS_HEIGHT: usize = 600;
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_BACKGROUND_COLOR: (u8, u8, u8) = WHITE;
pub const SCRIPT_COMMENT: &str = "//";

/* COLORS */
pub const WHITE: (u8, u8, u8) = (255, 255, 255);
pub const BLACK: (u8, u8, u8) = (0, 0, 0);
pub const RED: (u8, u8, u8) = (255, 0, 0);
pub const GREEN: (u8, u8, u8) = (0, 128, 0);
pub const BLUE: (u8, u8, u8) = (0, 0, 255);
pub const YELLOW: (u8, u8, u8) = (255, 255, 0);
pub const PURPLE: (u8, u8, u8) = (128, 0, 128);
pub const ORANGE: (u8, u8, u8) = (255, 165, 0);
pub const GRAY: (u8, u8, u8) = (128, 128, 128);

// svg named colors, so the preview matches what a browser would draw
pub const PALETTE: [(&str, (u8, u8, u8)); 9] = [
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("black", BLACK),
    ("white", WHITE),
    ("purple", PURPLE),
    ("orange", ORANGE),
    ("gray", GRAY),
];

/* SYNONYMS */
// order matters: multi-word names go before the single words they contain
pub const COLOR_SYNONYMS: [(&str, &str); 13] = [
    ("navy", "blue"),
    ("sky blue", "blue"),
    ("crimson", "red"),
    ("scarlet", "red"),
    ("forest green", "green"),
    ("lime", "green"),
    ("golden", "yellow"),
    ("ivory", "white"),
    ("silver", "gray"),
    ("grey", "gray"),
    ("magenta", "purple"),
    ("violet", "purple"),
    ("tangerine", "orange"),
];

pub const UNITS: [(&str, u32); 20] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

pub const TENS: [(&str, u32); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];
