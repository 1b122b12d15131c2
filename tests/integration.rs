// SPDX-License-Identifier: MPL-2.0
use lumbini_site::app::config::{self, Config};
use lumbini_site::app::route::Route;
use lumbini_site::domain::career::{ApplicationForm, SubmissionState};
use lumbini_site::domain::gallery::{Catalog, Category, CategoryFilter, GalleryBrowser};
use lumbini_site::domain::scroll::ScrollLock;
use lumbini_site::i18n::I18n;
use lumbini_site::infrastructure::submission;
use lumbini_site::ui::pages::products;
use lumbini_site::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("en-US".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    settings.general.language = Some("fr".to_string());
    config::save_to_path(&settings, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-home"), "Accueil");
}

#[test]
fn test_cli_language_beats_config() {
    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &settings);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_sectioned_config_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Config::default();
    settings.general.theme_mode = ThemeMode::Dark;
    settings.career.endpoint = Some("https://example.com/apply".to_string());
    settings.gallery.prefetch_cache_entries = Some(8);

    config::save_to_path(&settings, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, settings);
}

#[test]
fn test_every_route_has_a_translated_title() {
    let i18n = I18n::default();
    for route in Route::ALL {
        let title = i18n.tr(route.title_key());
        assert!(!title.starts_with("MISSING"), "{route:?} has no title");
    }
}

#[test]
fn test_gallery_browsing_session() {
    let mut browser = GalleryBrowser::new(Catalog::company().expect("company catalog"));
    let mut lock = ScrollLock::default();
    let total = browser.catalog().len();

    browser.set_search_term("ANNIVERSARY");
    assert_eq!(browser.filtered().len(), 1);

    browser.set_category(CategoryFilter::Only(Category::Office));
    assert!(browser.filtered().is_empty());

    browser.set_search_term("");
    browser.set_category(CategoryFilter::All);
    assert_eq!(browser.filtered().len(), total);

    let id = browser.filtered()[0].id();
    assert!(browser.toggle_favorite(id));
    assert!(browser.is_favorite(id));

    let token = lock.acquire();
    assert!(browser.open(id).is_some());
    assert!(lock.is_locked());
    browser.next_image();
    assert_eq!(browser.selection().map(|s| s.index()), Some(1));

    assert!(browser.close());
    lock.restore(token);
    assert!(!lock.is_locked());
    assert!(browser.is_favorite(id));
}

#[tokio::test]
async fn test_simulated_submission_without_endpoint() {
    let mut career = config::CareerConfig::default();
    career.endpoint = None;
    career.simulated_delay_ms = Some(0);
    let submitter = submission::from_config(&career);

    let form = ApplicationForm {
        name: "Asha Rao".into(),
        email: "asha@example.com".into(),
        phone: "+91 98482 94006".into(),
        ..ApplicationForm::default()
    };
    let application = form.validate().expect("valid form");

    let mut state = SubmissionState::default();
    assert!(state.begin());
    let outcome = submitter.submit(application).await;
    assert!(outcome.is_ok());
    state.finish(outcome);
    assert!(!state.is_in_flight());
}

#[tokio::test]
async fn test_embedded_products_load() {
    let products = products::load_embedded().await.expect("products");
    assert!(products.iter().any(|p| p.name == "SkillArc"));
}
