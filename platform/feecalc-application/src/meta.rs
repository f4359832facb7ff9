pub fn tool_name() -> &'static str {
    "feecalc"
}

pub fn tool_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
