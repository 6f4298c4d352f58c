use crate::data::error::RentalDataError;
use crate::data::schema::DataSource;
use crate::dataset::RentalDataset;
use crate::types::frames::daily_frame::DailyLazyFrame;
use crate::types::frames::hourly_frame::HourlyLazyFrame;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use crate::RentalError;
use bon::bon;
use log::{info, warn};
use polars::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::{fs, task};

/// Reads the hourly and daily rental CSVs into a [`RentalDataset`].
///
/// Both files use the Bike Sharing column layout (`dteday`, `hr`, `yr`,
/// `temp`, `weathersit`, `season`, `workingday`, `cnt`, ...). Only the columns
/// the aggregations need are kept, renamed and typed; `dteday` is parsed as a
/// real date.
///
/// With a cache directory the normalized tables are stored as parquet, one file
/// per source CSV path, and reused until that CSV is modified again.
///
/// # Examples
///
/// ```no_run
/// # use bikeshare::{RentalDataLoader, RentalError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), RentalError> {
/// let loader = RentalDataLoader::builder()
///     .data_dir("data")
///     .daily_file("main_data.csv")
///     .cache_dir("/tmp/bikeshare")
///     .build();
/// let dataset = loader.load().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RentalDataLoader {
    data_dir: PathBuf,
    hourly_file: String,
    daily_file: String,
    cache_dir: Option<PathBuf>,
}

#[bon]
impl RentalDataLoader {
    /// `hourly_file` defaults to `hour.csv`, `daily_file` to `day.csv`; both are
    /// relative to `data_dir`. Without `cache_dir` every load parses the CSVs.
    #[builder]
    pub fn new(
        #[builder(into)] data_dir: PathBuf,
        #[builder(into)] hourly_file: Option<String>,
        #[builder(into)] daily_file: Option<String>,
        #[builder(into)] cache_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            data_dir,
            hourly_file: hourly_file
                .unwrap_or_else(|| DataSource::Hourly.default_file_name().to_string()),
            daily_file: daily_file
                .unwrap_or_else(|| DataSource::Daily.default_file_name().to_string()),
            cache_dir,
        }
    }

    /// Loader for `data_dir` with default file names, caching in the system cache directory.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::CacheDirResolution`] if the system cache directory is unknown and
    /// [`RentalDataError::CacheDirCreation`] if it cannot be created.
    pub async fn with_default_cache(data_dir: impl Into<PathBuf>) -> Result<Self, RentalError> {
        let cache_dir = get_cache_dir().map_err(RentalError::CacheDirResolution)?;
        ensure_cache_dir_exists(&cache_dir)
            .await
            .map_err(|e| RentalDataError::CacheDirCreation(cache_dir.clone(), e))?;
        Ok(Self::builder()
            .data_dir(data_dir)
            .cache_dir(cache_dir)
            .build())
    }

    pub fn csv_path(&self, data_source: DataSource) -> PathBuf {
        match data_source {
            DataSource::Hourly => self.data_dir.join(&self.hourly_file),
            DataSource::Daily => self.data_dir.join(&self.daily_file),
        }
    }

    /// Loads both tables.
    ///
    /// # Errors
    ///
    /// [`RentalError::Data`] when a CSV is missing, unreadable or lacks a required
    /// column, or when the parquet cache cannot be written or scanned.
    pub async fn load(&self) -> Result<RentalDataset, RentalError> {
        if let Some(cache_dir) = &self.cache_dir {
            ensure_cache_dir_exists(cache_dir)
                .await
                .map_err(|e| RentalDataError::CacheDirCreation(cache_dir.clone(), e))?;
        }
        let hourly = self.get_frame(DataSource::Hourly).await?;
        let daily = self.get_frame(DataSource::Daily).await?;
        info!("Loaded rental data from {:?}", self.data_dir);
        Ok(RentalDataset::new(
            HourlyLazyFrame::new(hourly),
            DailyLazyFrame::new(daily),
        ))
    }

    /// Returns a LazyFrame in the normalized schema, going through the parquet cache when configured.
    async fn get_frame(&self, data_source: DataSource) -> Result<LazyFrame, RentalDataError> {
        let csv_path = self.csv_path(data_source);
        let Some(cache_dir) = &self.cache_dir else {
            return Ok(Self::read_csv(csv_path, data_source).await?.lazy());
        };

        let cache_key = fs::canonicalize(&csv_path)
            .await
            .unwrap_or_else(|_| csv_path.clone());
        let parquet_path = cache_dir.join(data_source.cache_file_name(&cache_key));
        if Self::cache_is_fresh(&csv_path, &parquet_path).await? {
            info!(
                "Cache hit for {} data at {:?}",
                data_source, parquet_path
            );
        } else {
            warn!(
                "Cache miss for {} data, parsing {:?}",
                data_source, csv_path
            );
            let df = Self::read_csv(csv_path, data_source).await?;
            Self::cache_dataframe(df, &parquet_path).await?;
            info!("Cached {} data to {:?}", data_source, parquet_path);
        }

        LazyFrame::scan_parquet(&parquet_path, Default::default())
            .map_err(|e| RentalDataError::ParquetScan(parquet_path.clone(), e))
    }

    /// True when the parquet file exists and is not older than the CSV.
    async fn cache_is_fresh(csv_path: &Path, parquet_path: &Path) -> Result<bool, RentalDataError> {
        let cached = match fs::metadata(parquet_path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(RentalDataError::MetadataRead(parquet_path.to_path_buf(), e)),
        };
        let source = fs::metadata(csv_path)
            .await
            .map_err(|e| RentalDataError::MetadataRead(csv_path.to_path_buf(), e))?;

        let cached_at = cached
            .modified()
            .map_err(|e| RentalDataError::MetadataRead(parquet_path.to_path_buf(), e))?;
        let source_at = source
            .modified()
            .map_err(|e| RentalDataError::MetadataRead(csv_path.to_path_buf(), e))?;
        Ok(cached_at >= source_at)
    }

    /// Parses a CSV with header and normalizes it, on a blocking task.
    async fn read_csv(path: PathBuf, data_source: DataSource) -> Result<DataFrame, RentalDataError> {
        task::spawn_blocking(move || {
            let raw = CsvReadOptions::default()
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(path.clone()))
                .and_then(|reader| reader.finish())
                .map_err(|e| RentalDataError::CsvRead {
                    path: path.clone(),
                    data_source,
                    source: e,
                })?;

            if let Some(column) = data_source
                .source_columns()
                .iter()
                .find(|name| raw.column(name).is_err())
            {
                warn!("{} CSV {:?} has no '{}' column", data_source, path, column);
                return Err(RentalDataError::MissingColumn {
                    path,
                    data_source,
                    column: column.to_string(),
                });
            }

            let df = raw
                .lazy()
                .select(data_source.normalize_exprs())
                .collect()
                .map_err(|e| RentalDataError::Normalize {
                    path: path.clone(),
                    data_source,
                    source: e,
                })?;
            info!("Parsed {} {} rows from {:?}", df.height(), data_source, path);
            Ok(df)
        })
        .await?
    }

    /// Writes a DataFrame to a temporary file next to `path`, then moves it into place.
    async fn cache_dataframe(mut df: DataFrame, path: &Path) -> Result<(), RentalDataError> {
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || {
            let dir = path_buf
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            let mut temp_file = NamedTempFile::new_in(&dir)
                .map_err(|e| RentalDataError::ParquetWriteIo(path_buf.clone(), e))?;
            ParquetWriter::new(temp_file.as_file_mut())
                .with_compression(ParquetCompression::Snappy)
                .finish(&mut df)
                .map_err(|e| RentalDataError::ParquetWritePolars(path_buf.clone(), e))?;
            temp_file
                .persist(&path_buf)
                .map_err(|e| RentalDataError::ParquetWriteIo(path_buf.clone(), e.error))?;
            Ok::<(), RentalDataError>(())
        })
        .await??;
        Ok(())
    }
}
