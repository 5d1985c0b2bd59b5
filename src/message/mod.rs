mod nom_parser;
pub mod tags;

pub use self::nom_parser::PAYLOAD_DELIMITER;
pub use self::tags::{parse_tags, unescape_tag_value, TagMap};

pub(crate) use self::nom_parser::split_line;
