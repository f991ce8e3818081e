/// Side of the Aventureiro board.
pub const BOARD_SIZE: u8 = 10;
/// Side of a Mestre ability pattern.
pub const PATTERN_SIZE: u8 = 5;
/// Length of every ship on the Aventureiro board.
pub const SEGMENT_LEN: usize = 4;
/// Novato ships are one cell shorter.
pub const NOVATO_SHIP_LEN: usize = 3;

/// Value printed for a board cell occupied by a ship.
pub const SHIP_MARK: u8 = 3;
/// Value printed for a pattern cell hit by an ability.
pub const PATTERN_MARK: u8 = 1;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "BATALHA_NAVAL_LOG";
