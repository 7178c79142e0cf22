mod record_codec;

pub use record_codec::{check_uploads, decode_record, decode_records, encode_record_body};
