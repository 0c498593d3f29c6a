//! Loading facilities from every dataset, with fallback.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::Facility;
use crate::normalize::{Normalizer, RandomRating, RatingSource};

use super::client::DatasetSource;
use super::datasets::{Dataset, NYC_DATASETS};
use super::fallback::FallbackDataset;

/// Where a set of facilities came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    Fallback,
}

/// The result of one load.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub facilities: Vec<Facility>,
    pub origin: DataOrigin,
    pub loaded_at: DateTime<Utc>,
}

/// Fetches and normalizes every dataset.
///
/// A dataset that fails to fetch is logged and counts as empty. When no
/// dataset yields a valid facility, the fallback dataset is used instead.
pub struct FacilityLoader<S, R = RandomRating> {
    source: S,
    normalizer: Normalizer<R>,
    datasets: Vec<Dataset>,
    fallback: FallbackDataset,
    fallback_only: bool,
}

impl<S: DatasetSource> FacilityLoader<S, RandomRating> {
    /// Loader over the NYC datasets with random ratings.
    pub fn new(source: S, fallback: FallbackDataset) -> Self {
        Self::with_normalizer(source, Normalizer::new(), fallback)
    }
}

impl<S: DatasetSource, R: RatingSource> FacilityLoader<S, R> {
    /// Loader with a custom normalizer.
    pub fn with_normalizer(source: S, normalizer: Normalizer<R>, fallback: FallbackDataset) -> Self {
        Self {
            source,
            normalizer,
            datasets: NYC_DATASETS.to_vec(),
            fallback,
            fallback_only: false,
        }
    }

    /// Replace the dataset list.
    pub fn with_datasets(mut self, datasets: Vec<Dataset>) -> Self {
        self.datasets = datasets;
        self
    }

    /// Skip the network and always serve the fallback dataset.
    pub fn fallback_only(mut self, enabled: bool) -> Self {
        self.fallback_only = enabled;
        self
    }

    /// Load a fresh set of facilities.
    ///
    /// Every call renormalizes, so ratings and open status are recomputed.
    pub async fn load(&self) -> LoadOutcome {
        if self.fallback_only {
            info!("live data disabled, using fallback dataset");
            return self.fallback_outcome();
        }

        let facilities = self.load_live().await;
        if facilities.is_empty() {
            warn!("no facilities from live datasets, falling back");
            return self.fallback_outcome();
        }

        info!(count = facilities.len(), "loaded facilities");
        LoadOutcome {
            facilities,
            origin: DataOrigin::Live,
            loaded_at: Utc::now(),
        }
    }

    async fn load_live(&self) -> Vec<Facility> {
        let fetches = self.datasets.iter().map(|dataset| async move {
            (dataset, self.source.fetch_dataset(dataset).await)
        });

        let mut facilities = Vec::new();
        for (dataset, result) in join_all(fetches).await {
            match result {
                Ok(raws) => {
                    let batch = self.normalizer.normalize_batch(&raws, dataset.facility_type);
                    info!(
                        dataset = dataset.id,
                        received = raws.len(),
                        valid = batch.facilities.len(),
                        "fetched dataset"
                    );
                    facilities.extend(batch.facilities);
                }
                Err(e) => {
                    warn!(dataset = dataset.id, error = %e, "failed to fetch dataset");
                }
            }
        }
        facilities
    }

    fn fallback_outcome(&self) -> LoadOutcome {
        let facilities: Vec<Facility> = self
            .datasets
            .iter()
            .flat_map(|dataset| {
                self.normalizer
                    .normalize_batch(self.fallback.records(dataset.facility_type), dataset.facility_type)
                    .facilities
            })
            .collect();

        LoadOutcome {
            facilities,
            origin: DataOrigin::Fallback,
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FacilityType;
    use crate::normalize::{FieldTable, FixedRating};
    use crate::opendata::OpenDataError;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory dataset source keyed by dataset id.
    #[derive(Default)]
    struct StaticSource {
        datasets: HashMap<&'static str, Result<Vec<Value>, u16>>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn with(mut self, id: &'static str, records: Vec<Value>) -> Self {
            self.datasets.insert(id, Ok(records));
            self
        }

        fn failing(mut self, id: &'static str, status: u16) -> Self {
            self.datasets.insert(id, Err(status));
            self
        }
    }

    impl DatasetSource for StaticSource {
        async fn fetch_dataset(&self, dataset: &Dataset) -> Result<Vec<Value>, OpenDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.datasets.get(dataset.id) {
                Some(Ok(records)) => Ok(records.clone()),
                Some(Err(status)) => Err(OpenDataError::Api {
                    status: *status,
                    message: "unavailable".into(),
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    fn loader(source: StaticSource) -> FacilityLoader<StaticSource, FixedRating> {
        FacilityLoader::with_normalizer(
            source,
            Normalizer::with_parts(FieldTable::nyc_open_data(), FixedRating(4.0)),
            FallbackDataset::bundled().unwrap(),
        )
    }

    #[tokio::test]
    async fn live_data_tagged_by_dataset() {
        let source = StaticSource::default()
            .with("vzrx-zg6z", vec![json!({"latitude": "40.75", "longitude": "-73.98"})])
            .with("uzgy-xh4j", vec![json!({"lat": 40.74, "lon": -73.99})])
            .with(
                "hjae-yuav",
                vec![
                    json!({"the_geom": {"coordinates": [-73.97, 40.78]}}),
                    json!({"latitude": 0, "longitude": 0}),
                ],
            );
        let outcome = loader(source).load().await;

        assert_eq!(outcome.origin, DataOrigin::Live);
        let types: Vec<_> = outcome.facilities.iter().map(|f| f.facility_type).collect();
        assert_eq!(
            types,
            vec![FacilityType::Public, FacilityType::Apt, FacilityType::Park]
        );
    }

    #[tokio::test]
    async fn failed_dataset_is_skipped() {
        let source = StaticSource::default()
            .with("vzrx-zg6z", vec![json!({"latitude": 40.75, "longitude": -73.98})])
            .failing("uzgy-xh4j", 500);
        let outcome = loader(source).load().await;

        assert_eq!(outcome.origin, DataOrigin::Live);
        assert_eq!(outcome.facilities.len(), 1);
    }

    #[tokio::test]
    async fn falls_back_when_nothing_valid() {
        let source = StaticSource::default()
            .with("vzrx-zg6z", vec![json!({"latitude": 0, "longitude": 0})])
            .failing("hjae-yuav", 503);
        let outcome = loader(source).load().await;

        assert_eq!(outcome.origin, DataOrigin::Fallback);
        assert_eq!(
            outcome.facilities.len(),
            FallbackDataset::bundled().unwrap().len()
        );
    }

    #[tokio::test]
    async fn fallback_only_skips_network() {
        let loader = loader(StaticSource::default()).fallback_only(true);
        let outcome = loader.load().await;

        assert_eq!(outcome.origin, DataOrigin::Fallback);
        assert!(!outcome.facilities.is_empty());
        assert_eq!(loader.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetches_every_dataset() {
        let loader = loader(StaticSource::default());
        loader.load().await;
        assert_eq!(loader.source.calls.load(Ordering::SeqCst), NYC_DATASETS.len());
    }

    #[tokio::test]
    async fn fallback_respects_dataset_list() {
        let loader = loader(StaticSource::default())
            .with_datasets(vec![crate::opendata::datasets::PARKS])
            .fallback_only(true);
        let outcome = loader.load().await;
        assert!(
            outcome
                .facilities
                .iter()
                .all(|f| f.facility_type == FacilityType::Park)
        );
    }
}
