// SPDX-License-Identifier: MPL-2.0
//! Root view.

use super::{App, Message};
use crate::ui::detail::{self, ViewContext};
use iced::Element;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        detail::view(&self.detail, ViewContext { i18n: &self.i18n }).map(Message::Detail)
    }
}
