/// The stylesheet `build.rs` compiles from `public/style.scss`
pub const STYLE: &str = include_str!(concat!(env!("OUT_DIR"), "/style.css"));
