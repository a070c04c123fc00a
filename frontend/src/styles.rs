pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-10";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-8 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] max-w-2xl mx-auto";
pub const BUTTON_PRIMARY: &str = "px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 transition-colors";
pub const TEXT_H1: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-center text-gray-700 dark:text-gray-300";
pub const TEXT_SCORE: &str = "mt-4 text-center text-gray-800 dark:text-gray-200";
pub const BOARD_GRID: &str = "grid grid-cols-4 gap-4 w-[320px] h-[320px] mx-auto";
pub const TILE_BASE: &str = "w-[70px] h-[70px] flex items-center justify-center text-xl font-bold rounded";

/// Background and text colours for a tile of the given value.
pub fn tile_class(value: u32) -> &'static str {
    match value {
        2 => "bg-gray-200 dark:bg-gray-700 text-gray-800 dark:text-gray-200",
        4 => "bg-gray-300 dark:bg-gray-600 text-gray-800 dark:text-gray-200",
        8 => "bg-orange-200 text-gray-800",
        16 => "bg-orange-300 text-gray-800",
        32 => "bg-orange-400 text-white",
        64 => "bg-orange-500 text-white",
        128 => "bg-yellow-300 text-gray-800",
        v if v > 128 => "bg-yellow-500 text-white",
        _ => "bg-gray-100 dark:bg-gray-900",
    }
}

/// Text shown inside a tile; empty cells stay blank.
pub fn tile_label(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
