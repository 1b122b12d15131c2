// SPDX-License-Identifier: MPL-2.0
//! Gallery page: searchable, filterable grid of entries with a slideshow
//! modal.
//!
//! The browser state (filter, favorites, selection) lives in
//! [`GalleryBrowser`]; this component adds image downloads and the page
//! scroll lock held while the modal is open.

mod modal;
mod view;

use crate::app::config::MAX_REMOTE_IMAGE_BYTES;
use crate::domain::gallery::{Catalog, CategoryFilter, EntryId, GalleryBrowser};
use crate::domain::scroll::{LockToken, ScrollLock};
use crate::error::Error;
use crate::i18n::I18n;
use crate::media::{fetch_image, ImageData, ImagePrefetchCache, PrefetchConfig};
use iced::{Element, Task};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Number of cards per grid row.
    pub columns: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ClearSearch,
    CategorySelected(CategoryFilter),
    ToggleFavorite(EntryId),
    Open(EntryId),
    Close,
    NextImage,
    PreviousImage,
    SelectImage(usize),
    /// Opens the current slide in the system browser.
    OpenOriginal,
    /// Copies the current slide URL to the clipboard.
    Share,
    ImageLoaded(String, Result<ImageData, Error>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenUrl(String),
    LinkCopied,
}

pub struct State {
    browser: GalleryBrowser,
    images: ImagePrefetchCache,
    client: Option<reqwest::Client>,
    lock_token: Option<LockToken>,
}

impl State {
    /// `client` is `None` when no HTTP client could be built; every image
    /// then renders as unavailable.
    #[must_use]
    pub fn new(catalog: Catalog, cache: PrefetchConfig, client: Option<reqwest::Client>) -> Self {
        Self {
            browser: GalleryBrowser::new(catalog),
            images: ImagePrefetchCache::new(cache),
            client,
            lock_token: None,
        }
    }

    #[must_use]
    pub fn browser(&self) -> &GalleryBrowser {
        &self.browser
    }

    #[must_use]
    pub fn images(&self) -> &ImagePrefetchCache {
        &self.images
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.browser.is_open()
    }

    /// Starts downloading every cover that is not cached, pending or failed.
    pub fn enter(&mut self) -> Task<Message> {
        let covers: Vec<String> = self
            .browser
            .catalog()
            .entries()
            .iter()
            .map(|entry| entry.cover().to_owned())
            .collect();
        self.fetch(&covers)
    }

    /// Closes the modal and gives the scroll lock back. Called when the page
    /// is left, including while the modal is open.
    pub fn teardown(&mut self, lock: &mut ScrollLock) {
        self.browser.close();
        self.release(lock);
    }

    pub fn update(&mut self, message: Message, lock: &mut ScrollLock) -> (Event, Task<Message>) {
        match message {
            Message::SearchChanged(term) => self.browser.set_search_term(term),
            Message::ClearSearch => self.browser.set_search_term(""),
            Message::CategorySelected(category) => self.browser.set_category(category),
            Message::ToggleFavorite(id) => {
                let favorite = self.browser.toggle_favorite(id);
                tracing::debug!(%id, favorite, "favorite toggled");
            }
            Message::Open(id) => {
                let Some(entry) = self.browser.open(id) else {
                    return (Event::None, Task::none());
                };
                let urls = entry.images().to_vec();
                if self.lock_token.is_none() {
                    self.lock_token = Some(lock.acquire());
                }
                return (Event::None, self.fetch(&urls));
            }
            Message::Close => {
                self.browser.close();
                self.release(lock);
                // Slides may have pushed covers out of the cache.
                return (Event::None, self.enter());
            }
            Message::NextImage => {
                self.browser.next_image();
                return (Event::None, self.fetch_current());
            }
            Message::PreviousImage => {
                self.browser.previous_image();
                return (Event::None, self.fetch_current());
            }
            Message::SelectImage(index) => {
                self.browser.select_image(index);
                return (Event::None, self.fetch_current());
            }
            Message::OpenOriginal => {
                if let Some(slideshow) = self.browser.selection() {
                    return (
                        Event::OpenUrl(slideshow.current_image().to_owned()),
                        Task::none(),
                    );
                }
            }
            Message::Share => {
                if let Some(slideshow) = self.browser.selection() {
                    let url = slideshow.current_image().to_owned();
                    return (Event::LinkCopied, iced::clipboard::write(url));
                }
            }
            Message::ImageLoaded(url, Ok(image)) => {
                let size = image.size_bytes();
                if !self.images.insert(url.clone(), image) {
                    tracing::warn!(%url, size, "gallery image exceeds the cache budget");
                    self.images.mark_failed(url);
                }
            }
            Message::ImageLoaded(url, Err(err)) => {
                tracing::warn!(%url, error = %err, "gallery image failed");
                self.images.mark_failed(url);
            }
        }
        (Event::None, Task::none())
    }

    /// Escape closes the modal. Returns whether it was open.
    pub fn handle_escape(&mut self, lock: &mut ScrollLock) -> bool {
        let was_open = self.browser.close();
        self.release(lock);
        was_open
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::page(self, ctx)
    }

    /// The slideshow dialog, drawn by the parent above everything else.
    pub fn modal<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.browser
            .selection()
            .map(|slideshow| modal::view(self, slideshow, i18n))
    }

    fn release(&mut self, lock: &mut ScrollLock) {
        if let Some(token) = self.lock_token.take() {
            lock.restore(token);
        }
    }

    /// Requests the current slide again if it was evicted.
    fn fetch_current(&mut self) -> Task<Message> {
        let Some(url) = self
            .browser
            .selection()
            .map(|slideshow| slideshow.current_image().to_owned())
        else {
            return Task::none();
        };
        self.fetch(&[url])
    }

    fn fetch<S: AsRef<str>>(&mut self, urls: &[S]) -> Task<Message> {
        let wanted = self.images.claim(urls);
        let Some(client) = &self.client else {
            for url in wanted {
                self.images.mark_failed(url);
            }
            return Task::none();
        };

        Task::batch(wanted.into_iter().map(|url| {
            Task::perform(
                fetch_image(client.clone(), url, MAX_REMOTE_IMAGE_BYTES),
                |(url, result)| Message::ImageLoaded(url, result),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::Category;
    use crate::media::ImageStatus;

    fn state() -> State {
        State::new(
            Catalog::company().expect("company catalog"),
            PrefetchConfig {
                max_bytes: 64 * 1024 * 1024,
                max_images: 16,
            },
            None,
        )
    }

    fn first_id(state: &State) -> EntryId {
        state.browser().catalog().entries()[0].id()
    }

    #[test]
    fn opening_locks_scroll_and_closing_restores() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        let id = first_id(&state);

        state.update(Message::Open(id), &mut lock);
        assert!(lock.is_locked());
        assert!(state.is_modal_open());

        state.update(Message::Close, &mut lock);
        assert!(!lock.is_locked());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn closing_restores_previous_lock_state() {
        let mut state = state();
        let mut lock = ScrollLock::Locked;
        let id = first_id(&state);

        state.update(Message::Open(id), &mut lock);
        state.update(Message::Close, &mut lock);

        assert!(lock.is_locked());
    }

    #[test]
    fn teardown_while_open_releases_lock() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        let id = first_id(&state);
        state.update(Message::Open(id), &mut lock);

        state.teardown(&mut lock);

        assert!(!lock.is_locked());
        assert!(!state.is_modal_open());
    }

    #[test]
    fn reopening_does_not_stack_locks() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        let entries: Vec<EntryId> = state
            .browser()
            .catalog()
            .entries()
            .iter()
            .map(|e| e.id())
            .collect();

        state.update(Message::Open(entries[0]), &mut lock);
        state.update(Message::Open(entries[1]), &mut lock);
        state.update(Message::Close, &mut lock);

        assert!(!lock.is_locked());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        assert!(!state.handle_escape(&mut lock));

        state.update(Message::Open(first_id(&state)), &mut lock);
        assert!(state.handle_escape(&mut lock));
        assert!(!lock.is_locked());
    }

    #[test]
    fn open_requests_every_slide() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        let id = first_id(&state);
        state.update(Message::Open(id), &mut lock);

        // Without a client every claimed slide is marked failed at once.
        let entry = state.browser().catalog().get(id).cloned().expect("entry");
        for url in entry.images() {
            assert!(matches!(state.images().status(url), ImageStatus::Failed));
        }
    }

    #[test]
    fn loaded_images_become_ready() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        let url = "https://example.com/a.jpg".to_owned();
        let image = ImageData::from_rgba(2, 2, vec![0; 16]);

        state.update(Message::ImageLoaded(url.clone(), Ok(image)), &mut lock);

        assert!(matches!(state.images().status(&url), ImageStatus::Ready(_)));
    }

    #[test]
    fn failed_images_are_remembered() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        let url = "https://example.com/missing.jpg".to_owned();

        state.update(
            Message::ImageLoaded(url.clone(), Err(Error::Network("404".into()))),
            &mut lock,
        );

        assert!(matches!(state.images().status(&url), ImageStatus::Failed));
    }

    #[test]
    fn image_over_cache_budget_is_marked_failed() {
        let mut state = State::new(
            Catalog::company().expect("company catalog"),
            PrefetchConfig {
                max_bytes: 1000,
                max_images: 16,
            },
            None,
        );
        let mut lock = ScrollLock::default();
        let url = "https://example.com/huge.jpg".to_owned();
        let image = ImageData::from_rgba(20, 20, vec![0; 20 * 20 * 4]);

        state.update(Message::ImageLoaded(url.clone(), Ok(image)), &mut lock);

        assert!(matches!(state.images().status(&url), ImageStatus::Failed));
    }

    #[test]
    fn closing_requests_evicted_covers_again() {
        let mut state = State::new(
            Catalog::company().expect("company catalog"),
            PrefetchConfig {
                max_bytes: 64 * 1024 * 1024,
                max_images: 1,
            },
            crate::media::image_client().ok(),
        );
        let mut lock = ScrollLock::default();
        let id = first_id(&state);
        let cover = state
            .browser()
            .catalog()
            .get(id)
            .expect("entry")
            .cover()
            .to_owned();

        let _ = state.enter();
        state.update(
            Message::ImageLoaded(cover.clone(), Ok(ImageData::from_rgba(2, 2, vec![0; 16]))),
            &mut lock,
        );
        assert!(matches!(state.images().status(&cover), ImageStatus::Ready(_)));

        state.update(Message::Open(id), &mut lock);
        state.update(
            Message::ImageLoaded(
                "https://example.com/slide.jpg".to_owned(),
                Ok(ImageData::from_rgba(2, 2, vec![0; 16])),
            ),
            &mut lock,
        );
        assert!(matches!(state.images().status(&cover), ImageStatus::Unrequested));

        state.update(Message::Close, &mut lock);

        assert!(matches!(state.images().status(&cover), ImageStatus::Loading));
    }

    #[test]
    fn search_and_category_drive_the_grid() {
        let mut state = state();
        let mut lock = ScrollLock::default();

        state.update(Message::SearchChanged("ANNIVERSARY".into()), &mut lock);
        assert_eq!(state.browser().filtered().len(), 1);

        state.update(Message::ClearSearch, &mut lock);
        state.update(
            Message::CategorySelected(CategoryFilter::Only(Category::Team)),
            &mut lock,
        );
        assert!(state.browser().filtered().is_empty());
    }

    #[test]
    fn card_and_modal_share_favorites() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        let id = first_id(&state);

        state.update(Message::ToggleFavorite(id), &mut lock);
        state.update(Message::Open(id), &mut lock);
        assert!(state.browser().is_favorite(id));

        state.update(Message::ToggleFavorite(id), &mut lock);
        state.update(Message::Close, &mut lock);
        assert!(!state.browser().is_favorite(id));
    }

    #[test]
    fn open_original_points_at_current_slide() {
        let mut state = state();
        let mut lock = ScrollLock::default();
        let id = first_id(&state);
        state.update(Message::Open(id), &mut lock);
        state.update(Message::NextImage, &mut lock);

        let (event, _) = state.update(Message::OpenOriginal, &mut lock);

        let expected = state.browser().catalog().get(id).expect("entry").images()[1].clone();
        assert_eq!(event, Event::OpenUrl(expected));
    }

    #[test]
    fn views_render() {
        let i18n = I18n::default();
        let mut state = state();
        let mut lock = ScrollLock::default();
        let _ = state.view(ViewContext {
            i18n: &i18n,
            columns: 3,
        });
        assert!(state.modal(&i18n).is_none());

        state.update(Message::Open(first_id(&state)), &mut lock);
        assert!(state.modal(&i18n).is_some());

        state.update(Message::SearchChanged("zzz".into()), &mut lock);
        let _ = state.view(ViewContext {
            i18n: &i18n,
            columns: 1,
        });
    }
}
