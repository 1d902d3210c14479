//! Summary file creation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tracing::{info, instrument};

use crate::constants::SUMMARIES_DIR;
use crate::error::CitySummaryError;
use crate::formatters::{format_city_summary, summary_file_name};
use crate::models::CityName;
use crate::provider::{SummaryProvider, WeatherProvider};

/// Writes `<root>/city_summaries/<city>.txt` from the two providers
#[derive(Clone)]
pub struct SummaryFileWriter {
    weather: Arc<dyn WeatherProvider>,
    summaries: Arc<dyn SummaryProvider>,
    root: PathBuf,
}

impl SummaryFileWriter {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        summaries: Arc<dyn SummaryProvider>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            weather,
            summaries,
            root: root.into(),
        }
    }

    pub fn summaries_dir(&self) -> PathBuf {
        self.root.join(SUMMARIES_DIR)
    }

    /// Path the summary for `city` is written to
    pub fn summary_path(&self, city: &CityName) -> PathBuf {
        self.summaries_dir().join(summary_file_name(city))
    }

    /// Fetches the temperature and summary for `city` and writes them to the
    /// city's summary file, replacing any previous content.
    ///
    /// Nothing is written unless both lookups succeed. Returns the path of the
    /// written file.
    #[instrument(skip(self))]
    pub async fn create_summary_file(&self, city: &str) -> Result<PathBuf, CitySummaryError> {
        let city = CityName::parse(city)?;
        let path = self.summary_path(&city);

        let dir = self.summaries_dir();
        fs::create_dir_all(&dir)
            .await
            .map_err(|source| io_error(&dir, source))?;

        let temperature = self.weather.fetch_temperature(&city).await?;
        let summary = self.summaries.fetch_summary(&city).await?;
        let content = format_city_summary(&summary, &city, temperature);

        fs::write(&path, content)
            .await
            .map_err(|source| io_error(&path, source))?;

        info!(path = %path.display(), "Summary file written");
        Ok(path)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> CitySummaryError {
    CitySummaryError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed;

    #[async_trait]
    impl WeatherProvider for Fixed {
        async fn fetch_temperature(&self, _city: &CityName) -> Result<f64, CitySummaryError> {
            Ok(22.0)
        }
    }

    #[async_trait]
    impl SummaryProvider for Fixed {
        async fn fetch_summary(&self, city: &CityName) -> Result<String, CitySummaryError> {
            Ok(format!("A summary about the {}", city))
        }
    }

    #[test]
    fn test_summary_path() {
        let writer = SummaryFileWriter::new(Arc::new(Fixed), Arc::new(Fixed), "/work");
        let city = CityName::parse("New York").unwrap();
        assert_eq!(
            writer.summary_path(&city),
            PathBuf::from("/work/city_summaries/new_york.txt")
        );
    }

    #[tokio::test]
    async fn test_create_summary_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SummaryFileWriter::new(Arc::new(Fixed), Arc::new(Fixed), dir.path());

        let path = writer.create_summary_file("Zagreb").await.unwrap();

        assert_eq!(path, dir.path().join("city_summaries").join("zagreb.txt"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "A summary about the Zagreb \n \nCurrent temperature in Zagreb is 22 degrees Celsius."
        );
    }

    #[tokio::test]
    async fn test_unwritable_root_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("city_summaries");
        std::fs::write(&blocker, "not a directory").unwrap();

        let writer = SummaryFileWriter::new(Arc::new(Fixed), Arc::new(Fixed), dir.path());
        let err = writer.create_summary_file("Zagreb").await.unwrap_err();
        assert!(matches!(err, CitySummaryError::Io { .. }));
    }
}
