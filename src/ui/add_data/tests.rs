// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::application::port::{Analytics, BoxFuture, CatalogMembers, FileUploader, PendingItem};
use crate::domain::catalog::{data_types, CatalogError, CatalogItem, DataTypeOption, AUTO_TYPE};
use crate::domain::ui::ViewState;
use futures_util::FutureExt;
use std::sync::{Arc, Mutex};

/// Records every service call; upload and load resolve immediately.
#[derive(Default)]
struct Recorder {
    uploads: Mutex<Vec<(Vec<SelectedFile>, DataTypeOption)>>,
    generic_loads: Mutex<Vec<(String, String, bool)>>,
    typed_creations: Mutex<Vec<String>>,
    loaded: Mutex<Vec<CatalogItem>>,
    events: Mutex<Vec<(String, String)>>,
    upload_result: Mutex<Option<Vec<CatalogItem>>>,
    fail_loads: bool,
}

impl Recorder {
    fn failing() -> Self {
        Self {
            fail_loads: true,
            ..Self::default()
        }
    }

    fn services(self: &Arc<Self>) -> Services {
        Services {
            uploader: self.clone(),
            members: self.clone(),
            analytics: self.clone(),
        }
    }
}

impl FileUploader for Recorder {
    fn add_user_files(
        &self,
        files: Vec<SelectedFile>,
        data_type: DataTypeOption,
    ) -> BoxFuture<'static, Result<Vec<CatalogItem>, CatalogError>> {
        let items = self.upload_result.lock().unwrap().clone().unwrap_or_else(|| {
            files
                .iter()
                .map(|f| CatalogItem::new(data_type.value).with_source(f.name.clone(), "file:///x"))
                .collect()
        });
        self.uploads.lock().unwrap().push((files, data_type));
        async move { Ok(items) }.boxed()
    }
}

impl CatalogMembers for Recorder {
    fn create_catalog_item_from_file_or_url(
        &self,
        url: &str,
        type_hint: &str,
        confirm_conversion: bool,
    ) -> PendingItem {
        self.generic_loads.lock().unwrap().push((
            url.to_string(),
            type_hint.to_string(),
            confirm_conversion,
        ));
        let item = CatalogItem::new("geojson").with_source(url, url);
        async move { Ok(item) }.boxed()
    }

    fn create_catalog_member_from_type(
        &self,
        type_value: &str,
    ) -> Result<CatalogItem, CatalogError> {
        self.typed_creations.lock().unwrap().push(type_value.to_string());
        Ok(CatalogItem::new(type_value))
    }

    fn load(&self, item: CatalogItem) -> PendingItem {
        self.loaded.lock().unwrap().push(item.clone());
        let fail = self.fail_loads;
        async move {
            if fail {
                Err(CatalogError::LoadFailed {
                    name: item.name,
                    reason: "unreachable".into(),
                })
            } else {
                Ok(item)
            }
        }
        .boxed()
    }

    fn add_user_catalog_member(
        &self,
        pending: PendingItem,
    ) -> BoxFuture<'static, Result<AddedMember, CatalogError>> {
        async move {
            Ok(match pending.await {
                Ok(item) => AddedMember::Item(item),
                Err(err) => AddedMember::Error(err),
            })
        }
        .boxed()
    }
}

impl Analytics for Recorder {
    fn log_event(&self, name: &str, payload: &str) {
        self.events
            .lock()
            .unwrap()
            .push((name.to_string(), payload.to_string()));
    }
}

fn remote_option(value: &str) -> DataTypeOption {
    data_types().find_remote(value).expect("registered remote type")
}

fn local_option(value: &str) -> DataTypeOption {
    data_types().find_local(value).expect("registered local type")
}

#[test]
fn initial_state_selects_first_options_on_local_tab() {
    let state = State::new();
    let types = data_types();

    assert_eq!(state.local_data_type, types.local[0]);
    assert_eq!(state.remote_data_type, types.remote[0]);
    assert_eq!(state.active_tab, Tab::Local);
    assert!(state.remote_url.is_empty());
}

#[test]
fn changing_tab_keeps_both_selections() {
    let recorder = Arc::new(Recorder::default());
    let services = recorder.services();
    let mut state = State::new();

    let kml = local_option("kml");
    let wms = remote_option("wms-getCapabilities");
    let _ = state.handle_message(Message::SelectLocalOption(kml), &services);
    let _ = state.handle_message(Message::ChangeTab(Tab::Web), &services);
    let _ = state.handle_message(Message::SelectRemoteOption(wms), &services);

    let (options, selected) = state.settings_section();
    assert_eq!(options, data_types().remote);
    assert_eq!(selected, wms);

    let _ = state.handle_message(Message::ChangeTab(Tab::Local), &services);
    let (options, selected) = state.settings_section();
    assert_eq!(options, data_types().local);
    assert_eq!(selected, kml);
    assert_eq!(state.remote_data_type, wms);
}

#[test]
fn remote_url_follows_input() {
    let services = Arc::new(Recorder::default()).services();
    let mut state = State::new();

    let (event, _) = state.handle_message(
        Message::RemoteUrlChanged("https://example.com/data.csv".into()),
        &services,
    );

    assert_eq!(event, Event::None);
    assert_eq!(state.remote_url, "https://example.com/data.csv");
}

#[test]
fn browse_requests_dialog_with_local_extensions() {
    let services = Arc::new(Recorder::default()).services();
    let mut state = State::new();

    let (event, _) = state.handle_message(Message::BrowseFiles, &services);

    match event {
        Event::BrowseFiles { extensions } => {
            assert!(extensions.contains(&"geojson".to_string()));
            assert!(extensions.contains(&"kmz".to_string()));
            assert!(extensions.iter().all(|ext| !ext.starts_with('.')));
        }
        other => panic!("expected BrowseFiles, got {other:?}"),
    }
}

#[test]
fn selected_files_call_upload_once_with_local_type() {
    let recorder = Arc::new(Recorder::default());
    let services = recorder.services();
    let mut state = State::new();
    let csv = local_option("csv");
    let _ = state.handle_message(Message::SelectLocalOption(csv), &services);

    let files = vec![
        SelectedFile::from_path("/data/a.csv"),
        SelectedFile::from_path("/data/b.csv"),
    ];
    let (event, _task) = state.handle_message(Message::FilesSelected(files.clone()), &services);

    assert_eq!(event, Event::None);
    let uploads = recorder.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, files);
    assert_eq!(uploads[0].1, csv);
}

#[test]
fn upload_result_finishes_with_first_item_only() {
    let services = Arc::new(Recorder::default()).services();
    let mut state = State::new();
    let first = CatalogItem::new("csv").with_source("a.csv", "file:///a.csv");
    let second = CatalogItem::new("csv").with_source("b.csv", "file:///b.csv");

    let (event, _) = state.handle_message(
        Message::FilesAdded(Ok(vec![first.clone(), second])),
        &services,
    );

    assert_eq!(event, Event::FileAddFinished(first));
}

#[test]
fn empty_upload_result_does_not_finish() {
    let services = Arc::new(Recorder::default()).services();
    let mut state = State::new();

    let (event, _) = state.handle_message(Message::FilesAdded(Ok(Vec::new())), &services);

    assert_eq!(event, Event::None);
}

#[test]
fn rejected_upload_reports_failure() {
    let services = Arc::new(Recorder::default()).services();
    let mut state = State::new();
    let err = CatalogError::UnsupportedFileType("notes.txt".into());

    let (event, _) = state.handle_message(Message::FilesAdded(Err(err.clone())), &services);

    assert_eq!(event, Event::AddFailed(err));
}

#[test]
fn submit_with_auto_uses_generic_loader() {
    let recorder = Arc::new(Recorder::default());
    let services = recorder.services();
    let mut state = State::new();
    let _ = state.handle_message(Message::ChangeTab(Tab::Web), &services);
    let _ = state.handle_message(
        Message::RemoteUrlChanged("https://example.com/roads.geojson".into()),
        &services,
    );

    let (event, _task) = state.handle_message(Message::SubmitUrl, &services);

    assert_eq!(event, Event::None);
    assert_eq!(
        *recorder.generic_loads.lock().unwrap(),
        vec![(
            "https://example.com/roads.geojson".to_string(),
            AUTO_TYPE.to_string(),
            CONFIRM_CONVERSION
        )]
    );
    assert!(recorder.typed_creations.lock().unwrap().is_empty());
}

#[test]
fn submit_with_explicit_type_names_member_after_url() {
    let recorder = Arc::new(Recorder::default());
    let services = recorder.services();
    let mut state = State::new();
    let url = "https://example.com/wms";
    let _ = state.handle_message(
        Message::SelectRemoteOption(remote_option("wms-getCapabilities")),
        &services,
    );
    let _ = state.handle_message(Message::RemoteUrlChanged(url.into()), &services);

    let _ = state.handle_message(Message::SubmitUrl, &services);

    assert_eq!(
        *recorder.typed_creations.lock().unwrap(),
        vec!["wms-getCapabilities".to_string()]
    );
    let loaded = recorder.loaded.lock().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, url);
    assert_eq!(loaded[0].url.as_deref(), Some(url));
    assert!(recorder.generic_loads.lock().unwrap().is_empty());
}

#[test]
fn every_submission_logs_analytics_event() {
    let recorder = Arc::new(Recorder::default());
    let services = recorder.services();
    let mut state = State::new();
    let _ = state.handle_message(Message::RemoteUrlChanged("https://a".into()), &services);

    let _ = state.handle_message(Message::SubmitUrl, &services);
    let _ = state.handle_message(Message::SubmitUrl, &services);

    let events = recorder.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|(name, payload)| name == ADD_DATA_URL_EVENT && payload == "https://a"));
}

#[test]
fn error_sentinel_skips_finish() {
    let services = Arc::new(Recorder::default()).services();
    let mut state = State::new();
    let err = CatalogError::LoadFailed {
        name: "https://bad".into(),
        reason: "timeout".into(),
    };

    let (event, _) = state.handle_message(
        Message::UrlAdded(Ok(AddedMember::Error(err.clone()))),
        &services,
    );

    assert_eq!(event, Event::AddFailed(err));
}

#[test]
fn nothing_added_is_silent() {
    let services = Arc::new(Recorder::default()).services();
    let mut state = State::new();

    let (event, _) = state.handle_message(Message::UrlAdded(Ok(AddedMember::Nothing)), &services);

    assert_eq!(event, Event::None);
}

#[tokio::test]
async fn typed_submission_resolves_to_added_item() {
    let recorder = Arc::new(Recorder::default());
    let services = recorder.services();
    let url = "https://example.com/arcgis/rest/services/Roads/MapServer";

    let added = add_from_url(&services, url, remote_option("esri-mapServer"))
        .await
        .expect("add succeeds");

    let item = added.into_item().expect("item added");
    assert_eq!(item.type_value, "esri-mapServer");
    assert_eq!(item.name, url);
    assert_eq!(item.url.as_deref(), Some(url));
}

#[tokio::test]
async fn failed_load_resolves_to_error_sentinel() {
    let recorder = Arc::new(Recorder::failing());
    let services = recorder.services();

    let added = add_from_url(&services, "https://bad", remote_option("wfs-getCapabilities"))
        .await
        .expect("add future itself succeeds");

    assert!(matches!(added, AddedMember::Error(CatalogError::LoadFailed { .. })));
}

#[tokio::test]
async fn upload_then_finish_previews_first_item() {
    let recorder = Arc::new(Recorder::default());
    *recorder.upload_result.lock().unwrap() = Some(vec![
        CatalogItem::new("geojson").with_source("a.geojson", "file:///a.geojson"),
        CatalogItem::new("geojson").with_source("b.geojson", "file:///b.geojson"),
    ]);
    let services = recorder.services();
    let mut state = State::new();
    let mut view_state = ViewState::new();

    let result = upload_files(
        services.uploader.as_ref(),
        vec![SelectedFile::from_path("/data/a.geojson")],
        state.local_data_type,
    )
    .await;
    let (event, _) = state.handle_message(Message::FilesAdded(result), &services);

    let Event::FileAddFinished(item) = event else {
        panic!("expected FileAddFinished, got {event:?}");
    };
    view_state.on_file_add_finished(item);

    assert!(!view_state.my_data_is_upload_view);
    let previewed = view_state.previewed_item.expect("previewed item");
    assert_eq!(previewed.name, "a.geojson");
}
