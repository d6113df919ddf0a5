pub const GSM_CONVERTER_SEED: &[u8] = b"gsm_converter";
