// SPDX-License-Identifier: MPL-2.0
//! Admin page. Access control is out of scope; the page only points staff
//! at the sign-in form.

use super::{Link, ViewContext};
use crate::app::route::Route;
use crate::ui::components::{StatusPanel, Tone};
use crate::ui::design_tokens::spacing;
use iced::widget::container;
use iced::{Element, Length};

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Link> {
    let i18n = ctx.i18n;
    let panel = StatusPanel::new(Tone::Info)
        .title(i18n.tr("admin-title"))
        .message(i18n.tr("admin-message"))
        .action(i18n.tr("admin-login"), Link::Navigate(Route::Login))
        .view();

    container(panel)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            columns: 1,
        });
    }
}
