/// Upper bound on a proposal description, in raw UTF-8 bytes.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Namespace tag for vote receipt addresses.
pub const VOTE_SEED: &[u8] = b"vote";
