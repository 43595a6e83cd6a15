use std::path::Path;

use footmap_heatmap::{HeatmapError, HeatmapParams};

use crate::FootmapError;

/// Read [`HeatmapParams`] from a JSON file.
///
/// Missing keys fall back to their defaults, so `{}` is a valid config.
/// The result is validated before it is returned.
pub fn load_params(path: impl AsRef<Path>) -> Result<HeatmapParams, FootmapError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let params: HeatmapParams = serde_json::from_str(&text)?;
    params.validate().map_err(HeatmapError::InvalidParams)?;
    log::debug!("loaded params from {}: {params:?}", path.as_ref().display());
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_json(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write");
        file
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_json(r#"{ "grid_size": 12, "edge_threshold": 45.0 }"#);
        let params = load_params(file.path()).expect("params");
        assert_eq!(params.grid_size, 12);
        assert_eq!(params.edge_threshold, 45.0);
        assert_eq!(params.cluster_radius, HeatmapParams::default().cluster_radius);
        assert_eq!(params.bbox_padding(), 30);
    }

    #[test]
    fn malformed_json_is_reported() {
        let file = write_json("{ grid_size: ");
        let err = load_params(file.path()).unwrap_err();
        assert!(matches!(err, FootmapError::Json(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = write_json(r#"{ "percentile_low": 80.0, "percentile_high": 20.0 }"#);
        let err = load_params(file.path()).unwrap_err();
        assert!(matches!(
            err,
            FootmapError::Heatmap(HeatmapError::InvalidParams(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("dir");
        let err = load_params(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FootmapError::Io(_)));
    }
}
