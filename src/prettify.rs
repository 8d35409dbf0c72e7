// ANSI escape sequences used to style the console walkthrough.

// Text Styles
pub static RESET: &str = "\x1b[0m";
pub static BOLD: &str = "\x1b[1m";
pub static DIM: &str = "\x1b[2m";

// Bright Text Colors
pub static BRIGHT_RED: &str = "\x1b[91m";
pub static BRIGHT_GREEN: &str = "\x1b[92m";
pub static BRIGHT_YELLOW: &str = "\x1b[93m";
pub static BRIGHT_CYAN: &str = "\x1b[96m";
