pub mod to_json;

pub use to_json::ToJson;
