use line_grapher::config::GraphConfig;
use std::path::Path;

#[test]
fn defaults_match_the_classic_graph() {
    let config = GraphConfig::default();
    assert_eq!(config.surface_size(), (500.0, 500.0));
    assert_eq!(config.pixels_per_unit, 10.0);
    assert_eq!(config.grid_spacing, 50.0);
    assert_eq!(config.point_radius, 20.0);
    assert_eq!(config.slope_step, 0.1);
    assert_eq!(config.intercept_step, 1.0);
    assert_eq!(config.palette.first_point, [0xFB, 0x8B, 0x24]);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_toml_fills_in_defaults() {
    let config = GraphConfig::from_toml(
        r#"
        point_radius = 12.0
        slope_step = 0.5

        [palette]
        line = [255, 0, 0]
        "#,
    )
    .expect("valid config");
    assert_eq!(config.point_radius, 12.0);
    assert_eq!(config.slope_step, 0.5);
    assert_eq!(config.palette.line, [255, 0, 0]);
    assert_eq!(config.palette.grid, [255, 255, 255]);
    assert_eq!(config.surface_width, 500);
}

#[test]
fn round_trips_through_toml() {
    let config = GraphConfig::default();
    let text = toml::to_string_pretty(&config).expect("serializable");
    assert_eq!(GraphConfig::from_toml(&text).expect("parseable"), config);
}

#[test]
fn rejects_non_positive_values() {
    let err = GraphConfig::from_toml("pixels_per_unit = 0.0").unwrap_err();
    assert!(err.to_string().contains("pixels_per_unit"));
    assert!(GraphConfig::from_toml("surface_width = 0").is_err());
    assert!(GraphConfig::from_toml("intercept_step = -1.0").is_err());
}

#[test]
fn rejects_malformed_toml() {
    let err = GraphConfig::from_toml("surface_width = \"wide\"").unwrap_err();
    assert!(format!("{err:#}").contains("invalid graph config"));
}

#[test]
fn missing_file_yields_defaults() {
    let path = Path::new("does/not/exist/line_grapher.toml");
    let config = GraphConfig::load(path).expect("defaults");
    assert_eq!(config, GraphConfig::default());
}

#[test]
fn rejects_grid_spacing_below_one_pixel() {
    let err = GraphConfig::from_toml("grid_spacing = 0.000001").unwrap_err();
    assert!(err.to_string().contains("grid_spacing"));
    assert!(GraphConfig::from_toml("grid_spacing = 1.0").is_ok());
}

#[test]
fn rejects_oversized_surface() {
    assert!(GraphConfig::from_toml("surface_width = 4097").is_err());
    assert!(GraphConfig::from_toml("surface_height = 4000000").is_err());
    assert!(GraphConfig::from_toml("surface_width = 4096").is_ok());
}
