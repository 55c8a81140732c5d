pub struct Highlight;

impl Highlight {
    pub const DELIM: &'static [u8; 2] = b"==";
    pub const DELIM_STR: &'static str = "==";
}
