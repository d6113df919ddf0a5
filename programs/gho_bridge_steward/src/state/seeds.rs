pub const GHO_BRIDGE_STEWARD_SEED: &[u8] = b"gho_bridge_steward";
