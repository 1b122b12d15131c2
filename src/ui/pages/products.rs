// SPDX-License-Identifier: MPL-2.0
//! Products page.
//!
//! The product list ships as `assets/content/products.toml` and is parsed the
//! first time the page is entered. Until then a loading indicator is shown;
//! a malformed file renders an error panel with a retry button.

use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::ui::components::{page, StatusPanel, Tone};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::widget::{column, container, row, text, Column};
use iced::{alignment, Element, Length, Task};
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Content;

const PRODUCTS_FILE: &str = "products.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Available,
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub name: String,
    pub tagline: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub availability: Availability,
}

#[derive(Debug, Deserialize)]
struct ProductFile {
    #[serde(rename = "product", default)]
    products: Vec<Product>,
}

/// Parses the TOML product list.
///
/// # Errors
///
/// Returns [`Error::Content`] when the document is malformed.
pub fn parse(source: &str) -> Result<Vec<Product>> {
    let file: ProductFile =
        toml::from_str(source).map_err(|err| Error::Content(err.to_string()))?;
    Ok(file.products)
}

/// Reads and parses the embedded product list.
///
/// # Errors
///
/// Returns [`Error::Content`] when the file is missing or malformed.
pub async fn load_embedded() -> Result<Vec<Product>> {
    let file = Content::get(PRODUCTS_FILE)
        .ok_or_else(|| Error::Content(format!("{PRODUCTS_FILE} is not embedded")))?;
    let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
    parse(&source)
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Product>>),
    Retry,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum State {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<Product>),
    Failed(Error),
}

impl State {
    /// Starts loading unless the list is already loaded or on its way.
    pub fn enter(&mut self) -> Task<Message> {
        match self {
            State::NotLoaded | State::Failed(_) => {
                *self = State::Loading;
                Task::perform(load_embedded(), Message::Loaded)
            }
            State::Loading | State::Loaded(_) => Task::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(products)) => {
                tracing::debug!(count = products.len(), "products loaded");
                *self = State::Loaded(products);
                Task::none()
            }
            Message::Loaded(Err(err)) => {
                tracing::error!(error = %err, "product list unavailable");
                *self = State::Failed(err);
                Task::none()
            }
            Message::Retry => self.enter(),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, State::Loading)
    }

    pub fn view<'a>(
        &'a self,
        i18n: &'a I18n,
        columns: usize,
        spinner_angle: f32,
    ) -> Element<'a, Message> {
        let body: Element<'a, Message> = match self {
            State::NotLoaded | State::Loading => column![
                Spinner::new(palette::PRIMARY_500, spinner_angle).into_element(),
                text(i18n.tr("products-loading")).size(typography::BODY_LG),
            ]
            .spacing(spacing::MD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into(),
            State::Failed(err) => container(
                StatusPanel::new(Tone::Error)
                    .title(i18n.tr("products-error-title"))
                    .message(i18n.tr(err.i18n_key()))
                    .action(i18n.tr("products-retry"), Message::Retry)
                    .view(),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into(),
            State::Loaded(products) => page::grid(
                products.iter().map(|p| product_card(p, i18n)).collect(),
                columns.min(3),
            ),
        };

        Column::new()
            .push(page::hero(
                icons::briefcase(),
                i18n.tr("products-hero-title"),
                i18n.tr("products-hero-subtitle"),
            ))
            .push(page::section(body))
            .into()
    }
}

fn product_card<'a>(product: &'a Product, i18n: &I18n) -> Element<'a, Message> {
    let status = match product.availability {
        Availability::Available => i18n.tr("products-available"),
        Availability::ComingSoon => i18n.tr("products-coming-soon"),
    };

    let features = product.features.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, feature| {
            column.push(
                row![
                    icons::branded(icons::sized(icons::checkmark(), sizing::ICON_SM)),
                    text(feature.as_str()).size(typography::BODY_SM),
                ]
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center),
            )
        },
    );

    container(
        column![
            container(text(status).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge),
            text(product.name.as_str()).size(typography::TITLE_MD),
            text(product.tagline.as_str()).size(typography::BODY_LG),
            text(product.description.as_str()).size(typography::BODY),
            features,
        ]
        .spacing(spacing::SM),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_list_parses() {
        let products = load_embedded().await.expect("embedded products");
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| !p.name.is_empty()));
    }

    #[test]
    fn malformed_list_is_a_content_error() {
        let err = parse("[[product]]\nname = 3").expect_err("malformed");
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn empty_document_has_no_products() {
        assert_eq!(parse("").expect("empty"), Vec::new());
    }

    #[test]
    fn enter_loads_once() {
        let mut state = State::default();
        let _ = state.enter();
        assert!(state.is_loading());

        state.update(Message::Loaded(Ok(Vec::new())));
        let _ = state.enter();
        assert_eq!(state, State::Loaded(Vec::new()));
    }

    #[test]
    fn failure_is_retryable() {
        let mut state = State::default();
        let _ = state.enter();
        state.update(Message::Loaded(Err(Error::Content("bad".into()))));
        assert!(matches!(state, State::Failed(_)));

        let _ = state.update(Message::Retry);
        assert!(state.is_loading());
    }

    #[test]
    fn every_state_renders() {
        let i18n = I18n::default();
        let product = Product {
            name: "Campus Connect".into(),
            tagline: "t".into(),
            description: "d".into(),
            features: vec!["f".into()],
            availability: Availability::ComingSoon,
        };
        for state in [
            State::Loading,
            State::Failed(Error::Content("x".into())),
            State::Loaded(vec![product]),
        ] {
            let _ = state.view(&i18n, 3, 0.0);
        }
    }
}
