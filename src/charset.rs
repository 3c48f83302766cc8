pub const DIGITS: &[u8] = b"0123456789";
pub const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SPECIAL: &[u8] = b"!@#$%^";

/// `DIGITS`, `LOWER`, `UPPER` and `SPECIAL`, in that order.
pub const ALL: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!@#$%^";

/// Classes every password must draw at least one character from.
pub const MANDATORY: [&[u8]; 3] = [DIGITS, LOWER, UPPER];

/// Longest allowed run of one repeated character.
pub const MAX_CONSECUTIVE: usize = 2;
