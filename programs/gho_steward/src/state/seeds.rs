pub const GHO_STEWARD_SEED: &[u8] = b"gho_steward";
