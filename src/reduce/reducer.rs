use std::path::Path;

use geojson::{JsonObject, JsonValue};

use crate::{
    error::ReduceError,
    geofile::{
        feature::{features_mut, properties_mut},
        geojson::{file_size, read_geojson_document, write_geojson_document},
    },
};

use super::{
    allow_list::{AllowList, NEEDED_PROPERTY_KEYS},
    report::SizeReport,
};

/// Counts gathered while reducing a document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReductionStats {
    pub num_features: usize,
    pub num_dropped_properties: usize,
}

/// Strips every property not in its allow-list from the features of a GeoJSON document.
pub struct PropertyReducer {
    allow_list: AllowList,
}

impl Default for PropertyReducer {
    fn default() -> Self {
        Self::new(NEEDED_PROPERTY_KEYS)
    }
}

impl PropertyReducer {
    pub fn new(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    pub fn allow_list(&self) -> AllowList {
        self.allow_list
    }

    /// Build a new mapping with only the allowed keys, in their original order.
    pub fn reduce_properties(&self, properties: &JsonObject) -> JsonObject {
        properties
            .iter()
            .filter(|(key, _)| self.allow_list.contains(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Replace the properties of every feature in the document with their reduced version.
    ///
    /// Fails on the first feature that has no `properties` object. Features before it are already
    /// reduced at that point.
    pub fn reduce_document(&self, document: &mut JsonValue) -> Result<ReductionStats, ReduceError> {
        let mut stats = ReductionStats::default();
        for (index, feature) in features_mut(document)?.iter_mut().enumerate() {
            let properties = properties_mut(feature, index)?;
            let reduced_properties = self.reduce_properties(properties);
            log::debug!(
                "Feature {}: kept {} of {} properties",
                index,
                reduced_properties.len(),
                properties.len()
            );
            stats.num_dropped_properties += properties.len() - reduced_properties.len();
            *properties = reduced_properties;
            stats.num_features += 1;
        }
        Ok(stats)
    }

    /// Reduce the geofile at `filepath` in place and report the size difference.
    ///
    /// Nothing is written unless the whole document was read and reduced successfully.
    pub fn reduce(&self, filepath: &Path) -> Result<SizeReport, ReduceError> {
        let size_before = file_size(filepath)?;
        log::info!("Reading {:?} ({} bytes)", filepath, size_before);
        let mut document = read_geojson_document(filepath)?;

        let stats = self.reduce_document(&mut document)?;
        log::info!(
            "Dropped {} properties from {} features",
            stats.num_dropped_properties,
            stats.num_features
        );

        log::info!("Writing reduced GeoJSON to {:?}", filepath);
        write_geojson_document(&document, filepath)?;
        let size_after = file_size(filepath)?;

        Ok(SizeReport {
            filepath: filepath.to_path_buf(),
            retained_keys: self.allow_list,
            size_before,
            size_after,
            num_features: stats.num_features,
            num_dropped_properties: stats.num_dropped_properties,
        })
    }
}
