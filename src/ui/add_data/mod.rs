// SPDX-License-Identifier: MPL-2.0
//! Add Data panel of the My Data tab.
//!
//! Lets the user upload local files or register a hosted file / web service
//! URL as a new catalog item. The panel only holds form state; the catalog
//! services in [`Services`] do the actual work.
//!
//! On a successful add the panel emits [`Event::FileAddFinished`]; the parent
//! applies it to its [`ViewState`](crate::domain::ui::ViewState), which closes
//! the upload view and previews the new item.
//!
//! # Flow
//!
//! ```text
//! FilesSelected ──► upload service ──► FilesAdded ──► Event::FileAddFinished(first)
//! SubmitUrl ──► loader / typed member ──► add member ──► UrlAdded ──► Event::FileAddFinished(item)
//! ```
//!
//! Submissions are not serialized: submitting twice starts two adds.

mod dispatch;
mod messages;
mod state;
mod view;

#[cfg(test)]
mod tests;

pub use dispatch::{add_from_url, upload_files, ADD_DATA_URL_EVENT, CONFIRM_CONVERSION};
pub use messages::{Event, Message};
pub use state::{State, Tab};
pub use view::{view, ViewContext};

use crate::application::port::Services;
use crate::domain::catalog::{AddedMember, SelectedFile};
use iced::Task;
use tracing::{debug, warn};

impl State {
    /// Processes a panel message and returns the event for the parent along
    /// with any service work to run.
    pub fn handle_message(
        &mut self,
        message: Message,
        services: &Services,
    ) -> (Event, Task<Message>) {
        match message {
            Message::SelectLocalOption(option) => {
                self.select_local_option(option);
                (Event::None, Task::none())
            }
            Message::SelectRemoteOption(option) => {
                self.select_remote_option(option);
                (Event::None, Task::none())
            }
            Message::ChangeTab(tab) => {
                self.change_tab(tab);
                (Event::None, Task::none())
            }
            Message::RemoteUrlChanged(url) => {
                self.on_remote_url_change(url);
                (Event::None, Task::none())
            }
            Message::BrowseFiles => {
                let extensions = self
                    .data_types()
                    .accepted_extensions()
                    .into_iter()
                    .map(|ext| ext.trim_start_matches('.').to_string())
                    .collect();
                (Event::BrowseFiles { extensions }, Task::none())
            }
            Message::FilesSelected(files) => {
                (Event::None, self.handle_upload_file(files, services))
            }
            Message::SubmitUrl => (Event::None, self.handle_url(services)),
            Message::FilesAdded(Ok(items)) => match items.into_iter().next() {
                Some(first) => (Event::FileAddFinished(first), Task::none()),
                None => {
                    debug!("upload finished without adding any item");
                    (Event::None, Task::none())
                }
            },
            Message::UrlAdded(Ok(AddedMember::Item(item))) => {
                (Event::FileAddFinished(item), Task::none())
            }
            Message::UrlAdded(Ok(AddedMember::Nothing)) => (Event::None, Task::none()),
            Message::UrlAdded(Ok(AddedMember::Error(err)))
            | Message::FilesAdded(Err(err))
            | Message::UrlAdded(Err(err)) => {
                warn!(%err, "add data failed");
                (Event::AddFailed(err), Task::none())
            }
        }
    }

    fn handle_upload_file(&self, files: Vec<SelectedFile>, services: &Services) -> Task<Message> {
        let pending = upload_files(services.uploader.as_ref(), files, self.local_data_type);
        Task::perform(pending, Message::FilesAdded)
    }

    fn handle_url(&self, services: &Services) -> Task<Message> {
        let pending = add_from_url(services, &self.remote_url, self.remote_data_type);
        Task::perform(pending, Message::UrlAdded)
    }
}
