pub const DEFAULT_SOLC_PATH: &str = "solc";

/// `solc` reads the source from stdin when it is given `-` as the input file,
/// and prefixes every compiled contract name with this marker.
pub const STDIN_UNIT_PREFIX: &str = "<stdin>:";

pub const DEFAULT_RECAPTCHA_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
