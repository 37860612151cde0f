/// Tip record dates are ISO-8601 strings already; they render verbatim in
/// every locale.
#[must_use]
pub fn fmt_date_iso(value: &str) -> String {
    value.to_string()
}
