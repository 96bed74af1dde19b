// SPDX-License-Identifier: MPL-2.0
//! Registry of the data types a user can add.
//!
//! Local files and remote URLs have different option lists. The first entry
//! of each list is [`AUTO_TYPE`], which lets the catalog services infer the
//! type from the file name or URL.

use std::fmt;

/// Type value that asks the catalog services to detect the type.
pub const AUTO_TYPE: &str = "auto";

/// Type value that routes the data through the conversion service.
pub const OTHER_TYPE: &str = "other";

/// One entry of the data type dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataTypeOption {
    /// Identifier understood by the catalog services (e.g. `wms-getCapabilities`).
    pub value: &'static str,
    /// Human readable label shown in the dropdown.
    pub name: &'static str,
    /// File extensions (without the leading dot) this type accepts.
    /// Only local types carry extensions.
    pub extensions: Option<&'static [&'static str]>,
}

impl DataTypeOption {
    const fn new(value: &'static str, name: &'static str) -> Self {
        Self {
            value,
            name,
            extensions: None,
        }
    }

    const fn with_extensions(
        value: &'static str,
        name: &'static str,
        extensions: &'static [&'static str],
    ) -> Self {
        Self {
            value,
            name,
            extensions: Some(extensions),
        }
    }

    /// Returns `true` if this option asks for type detection.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.value == AUTO_TYPE
    }

    /// Returns `true` if this type accepts the given extension (case-insensitive).
    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .is_some_and(|exts| exts.iter().any(|e| e.eq_ignore_ascii_case(extension)))
    }
}

impl fmt::Display for DataTypeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const LOCAL_DATA_TYPES: &[DataTypeOption] = &[
    DataTypeOption::new(AUTO_TYPE, "Auto-detect (recommended)"),
    DataTypeOption::with_extensions("geojson", "GeoJSON", &["geojson"]),
    DataTypeOption::with_extensions("kml", "KML or KMZ", &["kml", "kmz"]),
    DataTypeOption::with_extensions("csv", "CSV", &["csv"]),
    DataTypeOption::with_extensions("czml", "CZML", &["czml"]),
    DataTypeOption::with_extensions("gpx", "GPX", &["gpx"]),
    DataTypeOption::with_extensions("json", "Catalog file", &["json", "json5"]),
    DataTypeOption::with_extensions("shp", "Shapefile (zip)", &["zip"]),
    DataTypeOption::new(OTHER_TYPE, "Other (use conversion service)"),
];

const REMOTE_DATA_TYPES: &[DataTypeOption] = &[
    DataTypeOption::new(AUTO_TYPE, "Auto-detect (recommended)"),
    DataTypeOption::new("wms-getCapabilities", "Web Map Service (WMS) Server"),
    DataTypeOption::new("wmts-getCapabilities", "Web Map Tile Service (WMTS) Server"),
    DataTypeOption::new("wfs-getCapabilities", "Web Feature Service (WFS) Server"),
    DataTypeOption::new("esri-group", "Esri ArcGIS Server"),
    DataTypeOption::new("esri-mapServer", "Esri ArcGIS MapServer (single layer)"),
    DataTypeOption::new("esri-featureServer", "Esri ArcGIS FeatureServer (single layer)"),
    DataTypeOption::new("open-street-map", "Open Street Map Server"),
    DataTypeOption::new("geojson", "GeoJSON"),
    DataTypeOption::new("kml", "KML or KMZ"),
    DataTypeOption::new("csv", "CSV"),
    DataTypeOption::new("czml", "CZML"),
    DataTypeOption::new("gpx", "GPX"),
    DataTypeOption::new(OTHER_TYPE, "Other (use conversion service)"),
];

/// Local and remote option lists, as returned by [`data_types`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataTypes {
    pub local: &'static [DataTypeOption],
    pub remote: &'static [DataTypeOption],
}

/// Returns the static data type registry.
#[must_use]
pub fn data_types() -> DataTypes {
    DataTypes {
        local: LOCAL_DATA_TYPES,
        remote: REMOTE_DATA_TYPES,
    }
}

impl DataTypes {
    /// Default local selection (first entry).
    #[must_use]
    pub fn default_local(&self) -> DataTypeOption {
        self.local[0]
    }

    /// Default remote selection (first entry).
    #[must_use]
    pub fn default_remote(&self) -> DataTypeOption {
        self.remote[0]
    }

    /// Flattens every local type's extensions into `.ext` entries, in
    /// registry order. Types without extensions contribute nothing.
    #[must_use]
    pub fn accepted_extensions(&self) -> Vec<String> {
        self.local
            .iter()
            .filter_map(|option| option.extensions)
            .flat_map(|exts| exts.iter().map(|ext| format!(".{ext}")))
            .collect()
    }

    /// The accepted extensions joined with `,`, in the form file inputs expect.
    #[must_use]
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions().join(",")
    }

    /// Finds the local type that accepts an extension (with or without the dot).
    #[must_use]
    pub fn find_local_by_extension(&self, extension: &str) -> Option<DataTypeOption> {
        let extension = extension.trim_start_matches('.');
        self.local
            .iter()
            .find(|option| option.accepts_extension(extension))
            .copied()
    }

    /// Looks up a local type by its value.
    #[must_use]
    pub fn find_local(&self, value: &str) -> Option<DataTypeOption> {
        self.local.iter().find(|o| o.value == value).copied()
    }

    /// Looks up a remote type by its value.
    #[must_use]
    pub fn find_remote(&self, value: &str) -> Option<DataTypeOption> {
        self.remote.iter().find(|o| o.value == value).copied()
    }
}
