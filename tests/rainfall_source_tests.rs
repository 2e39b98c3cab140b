use httpmock::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

use slurry_wizard::adapters::{FileSource, HttpSource};
use slurry_wizard::{RainfallLimits, RainfallSource, RainfallTable};

const RAINFALL_CSV: &str = "\
grid_reference,jan,feb,mar,apr,may,jun,jul,aug,sep,oct,nov,dec
SJ1267,100,90,80,70,60,50,60,70,80,90,100,110
DEFAULT,70,60,60,55,55,60,65,70,70,85,90,85
";

#[tokio::test]
async fn file_source_loads_rainfall_table() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(RAINFALL_CSV.as_bytes()).unwrap();

    let source = FileSource::new(file.path());
    let raw = source.fetch().await.unwrap();
    let table = RainfallTable::from_csv(&raw).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.annual_total("SJ1267"), 960.0);
}

#[tokio::test]
async fn file_source_missing_file_is_an_error() {
    let source = FileSource::new("/nonexistent/rainfall_data.csv");
    assert!(source.fetch().await.is_err());
}

#[tokio::test]
async fn http_source_loads_rainfall_table() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/rainfall_data.csv");
        then.status(200)
            .header("Content-Type", "text/csv")
            .body(RAINFALL_CSV);
    });

    let source = HttpSource::new(server.url("/rainfall_data.csv"));
    let raw = source.fetch().await.unwrap();
    let table = RainfallTable::from_csv(&raw).unwrap();

    mock.assert();
    assert_eq!(table.len(), 2);
    assert_eq!(table.profile("unknown")[0], 70.0);
}

#[tokio::test]
async fn http_source_propagates_server_errors() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/rainfall_data.csv");
        then.status(500);
    });

    let source = HttpSource::new(server.url("/rainfall_data.csv"));
    assert!(source.fetch().await.is_err());
    mock.assert();
}

#[tokio::test]
async fn settings_file_overrides_limits() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"setting_name,setting_value\nupper_rainfall_limit,95\nlower_rainfall_limit,45\n")
        .unwrap();

    let source = FileSource::new(file.path());
    let raw = source.fetch().await.unwrap();
    let limits = RainfallLimits::from_csv(&raw).unwrap();

    assert_eq!(limits.upper_mm, 95.0);
    assert_eq!(limits.lower_mm, 45.0);
}
