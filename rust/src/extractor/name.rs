/// Reduce a possibly qualified identifier to the bare name to look up.
///
/// `middleware.StaticContents` becomes `StaticContents`, and Rust paths such
/// as `crate::point::Point` become `Point`. No resolution happens: the prefix
/// is dropped whatever it is.
pub fn normalize(qualified_name: &str) -> &str {
    let last = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
    last.rsplit("::").next().unwrap_or(last)
}
