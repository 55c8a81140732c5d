/// Bold inline kind with owned delimiter constant.
pub struct Bold;

impl Bold {
    /// The delimiter that opens and closes a bold span.
    pub const DELIM: &'static [u8; 2] = b"**";
    pub const DELIM_STR: &'static str = "**";
}
