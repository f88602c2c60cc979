//! Integration tests for the public API and the command line glue

use std::fs;

use approx::assert_abs_diff_eq;

use geobound::commands::{
    cli, BoundCommand, BoundSource, CommandFactory, DistanceCommand, EncodeCommand, GeoboundCommandFactory,
};
use geobound::config::OutputFormat;
use geobound::utils::logger::Logger;
use geobound::utils::query_utils::to_intersects_condition;
use geobound::{Bound, DistanceMode, GeoConfig, GeoError, MapTile, Point};

fn bound_command<'a>(args: &[&str], config: &GeoConfig, logger: &'a Logger) -> Result<BoundCommand<'a>, GeoError> {
    let argv: Vec<&str> = ["geobound", "bound"].iter().chain(args.iter()).copied().collect();
    let matches = cli().try_get_matches_from(argv).unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    BoundCommand::new(sub, config, logger)
}

#[test]
fn test_bound_workflow() {
    let mut bound = Bound::from_geohash("9q8yyk8y").unwrap();
    let sf = Point::from_lng_lat(-122.4194, 37.7749);
    assert!(bound.contains(&sf));

    bound.geo_pad(1_000.0);
    assert!(bound.geo_height() > 2_000.0);
    assert!(bound.geo_width(DistanceMode::Haversine) > 2_000.0);

    let tile = Bound::from_tile(&MapTile::from_point(&sf, 12).unwrap());
    assert!(tile.intersects(&bound));
    assert!(bound.intersects(&tile));

    let mut both = tile;
    both.union(&bound);
    assert!(both.contains(&bound.north_west()));
    assert!(both.contains(&tile.south_east()));

    assert_eq!(
        to_intersects_condition(&Bound::new(0.0, 1.0, 0.0, 1.0), "geom"),
        "INTERSECTS(geom, GEOMFROMTEXT('POLYGON((0.000000 0.000000, 0.000000 1.000000, \
         1.000000 1.000000, 1.000000 0.000000, 0.000000 0.000000))'))"
    );
}

#[test]
fn test_construction_errors() {
    assert!(matches!(Bound::around_point(&Point::new(0.0, 0.0), -5.0), Err(GeoError::InvalidArgument(_))));
    assert!(matches!(Bound::from_map_tile(8, 0, 3), Err(GeoError::OutOfRange(_))));
    assert!(matches!(Bound::from_geohash("9q8i"), Err(GeoError::InvalidEncoding { character: 'i', position: 3 })));
}

#[test]
fn test_bound_command_sources() {
    let config = GeoConfig::default();
    let logger = Logger::stdout();

    let command = bound_command(&["--tile", "0,0,0"], &config, &logger).unwrap();
    let bound = command.bound().unwrap();
    assert_eq!(bound.south_west().lng(), -180.0);
    assert_abs_diff_eq!(bound.north_east().lat(), 85.05112878, epsilon = 1e-8);

    let command = bound_command(&["--point", "-122.4194,37.7749", "--radius", "500"], &config, &logger).unwrap();
    assert!(command.bound().unwrap().contains(&Point::new(-122.4194, 37.7749)));

    let command = bound_command(&["--corners", "2,4,-1,-3", "--pad", "-0.5"], &config, &logger).unwrap();
    assert_eq!(command.bound().unwrap(), Bound::new(-0.5, 1.5, -2.5, 3.5));

    let command = bound_command(&["--geohash-int", "0", "--bits", "2"], &config, &logger).unwrap();
    assert_eq!(command.bound().unwrap(), Bound::new(-180.0, 0.0, -90.0, 0.0));
}

#[test]
fn test_bound_command_rejects_bad_sources() {
    let config = GeoConfig::default();
    let logger = Logger::stdout();

    assert!(matches!(bound_command(&[], &config, &logger), Err(GeoError::Parse(_))));
    assert!(matches!(
        bound_command(&["--geohash", "9q", "--bbox", "0,1,0,1"], &config, &logger),
        Err(GeoError::Parse(_))
    ));
    assert!(matches!(bound_command(&["--point", "1,2"], &config, &logger), Err(GeoError::Parse(_))));
    assert!(matches!(bound_command(&["--tile", "2,0,1"], &config, &logger), Err(GeoError::OutOfRange(_))));

    let command = bound_command(&["--point", "0,0", "--radius", "-1"], &config, &logger).unwrap();
    assert!(matches!(command.bound(), Err(GeoError::InvalidArgument(_))));
}

#[test]
fn test_bound_command_output_formats() {
    let config: GeoConfig = "[output]\nformat = \"intersects\"\ncolumn = \"area\"".parse().unwrap();
    assert_eq!(config.output_format, OutputFormat::Intersects);
    let logger = Logger::stdout();

    let command = bound_command(&["--bbox", "-10,10,-5,5"], &config, &logger).unwrap();
    let bound = command.bound().unwrap();
    assert_eq!(
        command.render(&bound),
        vec!["INTERSECTS(area, GEOMFROMTEXT('POLYGON((-10.000000 -5.000000, -10.000000 5.000000, \
              10.000000 5.000000, 10.000000 -5.000000, -10.000000 -5.000000))'))"
            .to_string()]
    );

    let command = bound_command(&["--bbox", "-10,10,-5,5", "--format", "text"], &config, &logger).unwrap();
    let lines = command.render(&bound);
    assert_eq!(lines[0], "[[-10.000000, 10.000000], [-5.000000, 5.000000]]");
    assert_eq!(lines[1], "center: [0.000000, 0.000000]");
    assert_eq!(lines.last().unwrap(), "empty: false");

    assert!(matches!(
        bound_command(&["--bbox", "0,1,0,1", "--format", "svg"], &config, &logger),
        Err(GeoError::Config(_))
    ));
}

#[test]
fn test_bound_source_build() {
    let source = BoundSource::GeoHash("s".to_string());
    assert_eq!(source.build().unwrap(), Bound::new(0.0, 45.0, 0.0, 45.0));
}

#[test]
fn test_distance_command_mode() {
    let config = GeoConfig::default();
    let logger = Logger::stdout();

    let matches = cli()
        .try_get_matches_from(["geobound", "distance", "--from", "0,0", "--to", "1,0", "--haversine"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    let command = DistanceCommand::new(sub, &config, &logger).unwrap();

    let expected = Point::new(0.0, 0.0).geo_distance_from(&Point::new(1.0, 0.0), DistanceMode::Haversine);
    assert_eq!(command.distance(), expected);
}

#[test]
fn test_encode_command_precision() {
    let config = GeoConfig::default();
    let logger = Logger::stdout();
    let encode = |args: &[&str]| {
        let argv: Vec<&str> = ["geobound", "encode", "--point", "0,0"].iter().chain(args.iter()).copied().collect();
        let matches = cli().try_get_matches_from(argv).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        EncodeCommand::new(sub, &config, &logger)
    };

    let command = encode(&[]).unwrap();
    assert_eq!((command.precision(), command.bits()), (12, 60));

    let command = encode(&["--precision", "24"]).unwrap();
    assert_eq!(command.bits(), 64);

    let huge = usize::MAX.to_string();
    assert!(matches!(encode(&["--precision", huge.as_str()]), Err(GeoError::InvalidArgument(_))));
    assert!(matches!(encode(&["--precision", "25"]), Err(GeoError::InvalidArgument(_))));
}

#[test]
fn test_factory_executes_with_transcript() {
    let path = std::env::temp_dir().join(format!("geobound-transcript-{}.log", std::process::id()));
    let path_str = path.to_str().unwrap().to_string();

    let config = GeoConfig::default();
    let logger = Logger::new(&path_str).unwrap();
    let factory = GeoboundCommandFactory::new();

    let matches = cli()
        .try_get_matches_from(["geobound", "encode", "--point", "-122.4194,37.7749", "--precision", "12"])
        .unwrap();
    let command = factory.create_command(&matches, &config, &logger).unwrap();
    command.execute().unwrap();

    let transcript = fs::read_to_string(&path).unwrap();
    assert!(transcript.contains("geohash: 9q8yyk8ytpxr"));
    assert!(transcript.contains("geohash int (60 bits): 349344481866995639"));

    fs::remove_file(&path).ok();
}
