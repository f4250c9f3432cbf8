use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Metadata suffixes the compiler appends to the runtime bytecode.
    /// Their content depends on the compilation itself, not on the code,
    /// so they are excluded from comparison.
    static ref METADATA_HASH_PATTERNS: Vec<Regex> = vec![
        // a1 65 "bzzr0" 58 20 <swarm hash> 00 29
        Regex::new("00a165627a7a72305820.*0029$").unwrap(),
    ];
}

/// Removes the trailing metadata hash, if any.
pub fn strip_metadata_hash(bytecode: &str) -> String {
    METADATA_HASH_PATTERNS
        .iter()
        .fold(bytecode.to_string(), |code, pattern| {
            pattern.replace_all(&code, "").into_owned()
        })
}

/// Form in which compiled and deployed bytecodes are compared:
/// no `0x` prefix and no metadata hash.
pub fn canonicalize(bytecode: &str) -> String {
    let bytecode = bytecode.strip_prefix("0x").unwrap_or(bytecode);
    strip_metadata_hash(bytecode)
}
