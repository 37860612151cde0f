use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/categories")]
    Categories,
    #[at("/tips/:id")]
    TipDetail { id: String },
    #[at("/about")]
    About,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn tip(id: &str) -> Self {
        Self::TipDetail { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn paths_round_trip_through_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/categories"), Some(Route::Categories));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(
            Route::recognize("/tips/alt-text"),
            Some(Route::tip("alt-text"))
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn tip_routes_carry_their_id_in_the_path() {
        assert_eq!(Route::tip("semantic-buttons").to_path(), "/tips/semantic-buttons");
        assert_eq!(Route::Home.to_path(), "/");
    }
}
