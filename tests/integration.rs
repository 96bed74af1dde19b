// SPDX-License-Identifier: MPL-2.0
use iced_catalog::application::port::Services;
use iced_catalog::config::{self, Config};
use iced_catalog::domain::catalog::{data_types, AddedMember, CatalogError, SelectedFile};
use iced_catalog::domain::ui::ViewState;
use iced_catalog::i18n::fluent::I18n;
use iced_catalog::infrastructure::{default_services, UserCatalog};
use iced_catalog::ui::add_data::{self, add_from_url, upload_files, Event, Message, State};
use std::fs;
use tempfile::tempdir;

fn services() -> (Services, UserCatalog) {
    default_services(false)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.tr("add-data-url-button"), "Add");

    let mut updated = loaded.clone();
    updated.general.language = Some("fr".to_string());
    config::save_to_path(&updated, &config_path).expect("Failed to write updated config file");
    let reloaded = config::load_from_path(&config_path).expect("Failed to reload config");
    let i18n = I18n::new(None, None, &reloaded);
    assert_eq!(i18n.tr("add-data-url-button"), "Ajouter");
}

#[test]
fn every_key_exists_in_every_locale() {
    let keys = [
        "window-title",
        "add-data-tab-local",
        "add-data-tab-web",
        "add-data-local-label",
        "add-data-browse-button",
        "add-data-accepted-types",
        "add-data-url-label",
        "add-data-url-placeholder",
        "add-data-settings-label",
        "my-data-add-button",
        "language-name-en-US",
        "language-name-fr",
        "preview-type",
        "notification-add-data-success",
        "notification-config-load-error",
        "error-add-data-unsupported-type",
        "error-add-data-invalid-url",
        "error-add-data-unknown-type",
        "error-add-data-io",
        "error-add-data-load-failed",
    ];
    // Every variable used by any message; Fluent ignores the extra ones.
    let args = [
        ("name", "roads.geojson"),
        ("url", "https://example.com"),
        ("type", "csv"),
        ("types", ".csv"),
        ("reason", "denied"),
    ];
    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.into()), None, &Config::default());
        for key in keys {
            assert!(
                !i18n.tr_with_args(key, &args).starts_with("MISSING"),
                "{key} missing in {locale}"
            );
        }
    }
}

#[test]
fn add_data_labels_use_panel_wording() {
    let i18n = I18n::new(Some("en-US".into()), None, &Config::default());

    assert_eq!(i18n.tr("add-data-local-label"), "Add local data file:");
    assert_eq!(i18n.tr("add-data-url-label"), "Add hosted file or web service [URL]:");
    assert_eq!(i18n.tr("add-data-url-placeholder"), "e.g. http://data.gov.au/geoserver/wms");
    assert_eq!(i18n.tr("add-data-settings-label"), "Settings");
}

#[tokio::test]
async fn uploading_local_files_previews_first_added_item() {
    let dir = tempdir().expect("temp dir");
    let roads = dir.path().join("roads.geojson");
    let parks = dir.path().join("parks.kml");
    fs::write(&roads, "{}").expect("write geojson");
    fs::write(&parks, "<kml/>").expect("write kml");

    let (services, catalog) = services();
    let mut state = State::new();
    let mut view_state = ViewState::new();

    let result = upload_files(
        services.uploader.as_ref(),
        vec![SelectedFile::from_path(&roads), SelectedFile::from_path(&parks)],
        state.local_data_type,
    )
    .await;
    let (event, _) = state.handle_message(Message::FilesAdded(result), &services);

    let Event::FileAddFinished(item) = event else {
        panic!("expected FileAddFinished, got {event:?}");
    };
    assert_eq!(item.name, "roads.geojson");
    assert_eq!(item.type_value, "geojson");
    view_state.on_file_add_finished(item.clone());

    assert!(!view_state.my_data_is_upload_view);
    assert!(view_state.is_previewed(&item));
    assert_eq!(catalog.len(), 2);
}

#[tokio::test]
async fn unknown_local_extension_with_auto_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "hello").expect("write txt");

    let (services, catalog) = services();
    let mut state = State::new();

    let result = upload_files(
        services.uploader.as_ref(),
        vec![SelectedFile::from_path(&notes)],
        state.local_data_type,
    )
    .await;
    let (event, _) = state.handle_message(Message::FilesAdded(result), &services);

    assert_eq!(
        event,
        Event::AddFailed(CatalogError::UnsupportedFileType("notes.txt".into()))
    );
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn auto_url_is_detected_and_added() {
    let (services, catalog) = services();
    let auto = data_types().default_remote();

    let added = add_from_url(
        &services,
        "https://example.com/geoserver/wms?service=WMS&request=GetCapabilities",
        auto,
    )
    .await
    .expect("add resolves");

    let item = added.into_item().expect("item added");
    assert_eq!(item.type_value, "wms-getCapabilities");
    assert_eq!(catalog.items(), vec![item]);
}

#[tokio::test]
async fn typed_url_keeps_url_as_name() {
    let (services, catalog) = services();
    let csv = data_types().find_remote("csv").expect("csv registered");
    let url = "https://example.com/stations.csv";

    let item = add_from_url(&services, url, csv)
        .await
        .expect("add resolves")
        .into_item()
        .expect("item added");

    assert_eq!(item.name, url);
    assert_eq!(item.url.as_deref(), Some(url));
    assert_eq!(catalog.len(), 1);
}

#[tokio::test]
async fn invalid_url_resolves_to_error_and_skips_finish() {
    let (services, catalog) = services();
    let mut state = State::new();
    let _ = state.handle_message(Message::ChangeTab(add_data::Tab::Web), &services);
    let kml = data_types().find_remote("kml").expect("kml registered");

    let added = add_from_url(&services, "not a url", kml)
        .await
        .expect("add resolves");
    assert!(matches!(added, AddedMember::Error(CatalogError::InvalidUrl(_))));

    let (event, _) = state.handle_message(Message::UrlAdded(Ok(added)), &services);
    assert!(matches!(event, Event::AddFailed(_)));
    assert!(catalog.is_empty());
}
