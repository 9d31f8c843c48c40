pub const PROXY: &[u8] = b"proxy";
