// SPDX-License-Identifier: MPL-2.0
//! Client-side route table.
//!
//! Paths are matched exactly (case included). Anything else lands on Home.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Gallery,
    Services,
    Career,
    Products,
    Contact,
    Login,
    InternshipApplication,
    SkillArc,
    Admin,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Home,
        Route::About,
        Route::Gallery,
        Route::Services,
        Route::Career,
        Route::Products,
        Route::Contact,
        Route::Login,
        Route::InternshipApplication,
        Route::SkillArc,
        Route::Admin,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/About",
            Route::Gallery => "/Gallery",
            Route::Services => "/ServicePage",
            Route::Career => "/Career",
            Route::Products => "/Products",
            Route::Contact => "/Contact",
            Route::Login => "/Login",
            Route::InternshipApplication => "/internship-application",
            Route::SkillArc => "/skillarc",
            Route::Admin => "/Admin",
        }
    }

    /// Exact match on the path. Unknown paths fall back to [`Route::Home`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .unwrap_or_else(|| {
                tracing::debug!(path, "unknown route, showing home");
                Route::Home
            })
    }

    /// Whether entering this route plays the page transition.
    #[must_use]
    pub fn is_animated(self) -> bool {
        !matches!(
            self,
            Route::InternshipApplication | Route::SkillArc | Route::Admin
        )
    }

    /// i18n key of the page title, also used for nav links.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Route::Home => "nav-home",
            Route::About => "nav-about",
            Route::Gallery => "nav-gallery",
            Route::Services => "nav-services",
            Route::Career => "nav-career",
            Route::Products => "nav-products",
            Route::Contact => "nav-contact",
            Route::Login => "nav-login",
            Route::InternshipApplication => "nav-internship",
            Route::SkillArc => "nav-skillarc",
            Route::Admin => "nav-admin",
        }
    }
}
