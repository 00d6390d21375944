use pretty_assertions::assert_eq;
use rlelife::*;

const GLIDER: &str = "tests/fixtures/glider.rle";

#[test]
fn zero_iterations_round_trip() {
  assert_eq!(play_file(GLIDER, Some(0)).unwrap(), "bob$2bo$3o!");
}

#[test]
fn multi_simulate() {
  let glider_1 = "obo$b2o$bo!";
  let glider_2 = "2bo$obo$b2o!";
  let glider_3 = "o2b$b2o$2o!";

  assert_eq!(play_file(GLIDER, Some(1)).unwrap(), glider_1);
  assert_eq!(play_file(GLIDER, Some(2)).unwrap(), glider_2);
  assert_eq!(play_file(GLIDER, Some(170)).unwrap(), glider_2);
  assert_eq!(play_file(GLIDER, Some(171)).unwrap(), glider_3);
}

#[test]
fn pipeline_by_hand() {
  let lines = read_pattern_text(GLIDER).unwrap();
  let pattern = rle::read(lines.join("\n")).unwrap();
  assert_eq!((pattern.width, pattern.height), (3, 3));
  assert_eq!(pattern.body, "bob$2bo$3o!");

  let grid = rle::decode(&pattern.body).unwrap();
  let padded = pad(&grid);
  assert_eq!((padded.width(), padded.height()), (5, 5));
  assert_eq!(crop(&padded), grid);

  let next = crop(&evolve_once(&padded));
  assert_eq!(rle::encode(&next), "obo$b2o$bo!");
}

#[test]
fn crlf_line_endings() {
  assert_eq!(
    play_file("tests/fixtures/glider_crlf.rle", Some(2)).unwrap(),
    "2bo$obo$b2o!"
  );
}

#[test]
fn missing_iterations() {
  let err = play_file(GLIDER, None).unwrap_err();
  assert!(matches!(err, Error::Argument(ArgumentError::MissingIterations)));
}

#[test]
fn negative_iterations() {
  let err = play_file(GLIDER, Some(-1)).unwrap_err();
  assert!(matches!(err, Error::Argument(ArgumentError::NegativeIterations(-1))));
}

#[test]
fn nonexistent_file() {
  let err = play_file("nonExistent", Some(1)).unwrap_err();
  match err {
    Error::Io { path, source } => {
      assert_eq!(path.to_str(), Some("nonExistent"));
      assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }
    other => panic!("expected an I/O error, got {:?}", other),
  }
}

#[test]
fn missing_header_data() {
  let err = play_file("tests/fixtures/glider_missing_data.rle", Some(1)).unwrap_err();
  assert!(matches!(err, Error::Format(FormatError::InvalidHeader(_))));
}
