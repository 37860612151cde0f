//! Deployment base-path helpers.

/// Base path for the router (e.g. `/tips-site` when hosted under a
/// subdirectory). Comes from `PUBLIC_URL` at compile time; `None` means
/// the router anchors at the host root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{router_base, router_base_with_base};

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_trims_trailing_slashes() {
        assert_eq!(
            router_base_with_base("/tips-site/"),
            Some(String::from("/tips-site"))
        );
        assert_eq!(router_base_with_base("/"), None);
    }
}
