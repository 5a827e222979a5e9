//! FileToFile / FileToFolder rules.

use copy_syntax::syntax::{
    Capabilities, Disposition, Kind, Location, Operation, OperationRequest, Shape, Validator,
};
use copy_syntax::SyntaxError;

fn loc(path: &str, kind: Kind) -> Location {
    Location::with_separator(path, kind, '/')
}

fn request(sources: Vec<Location>, target: Location) -> OperationRequest {
    OperationRequest::new(sources, target, Operation::Copy).expect("non-empty sources")
}

fn validator() -> Validator {
    Validator::new(Capabilities::default())
}

#[test]
fn file_to_file_accepts_regular_source() {
    let req = request(vec![loc("/a.txt", Kind::File)], loc("/b.txt", Kind::Missing));
    let plan = validator().validate(&req, Shape::FileToFile).expect("accepted");
    assert_eq!(plan.shape, Shape::FileToFile);
    assert_eq!(plan.sources.len(), 1);
    assert_eq!(plan.sources[0].url, "/a.txt");
    assert_eq!(plan.sources[0].disposition, Disposition::Transfer);
    assert_eq!(plan.target, "/b.txt");
    assert!(plan.retention.is_none());
}

#[test]
fn file_to_file_rejects_directory_source() {
    let req = request(vec![loc("/dir", Kind::Directory)], loc("/b.txt", Kind::Missing));
    let err = validator().validate(&req, Shape::FileToFile).unwrap_err();
    assert_eq!(err, SyntaxError::SourceNotRegular { path: "/dir".into() });
    assert_eq!(err.offending(), Some("/dir"));
    assert!(err.to_string().contains("is not a file"));
}

#[test]
fn file_to_file_rejects_missing_source() {
    let req = request(vec![loc("/gone.txt", Kind::Missing)], loc("/b.txt", Kind::Missing));
    let err = validator().validate(&req, Shape::FileToFile).unwrap_err();
    assert_eq!(err.kind(), "source_not_regular");
}

#[test]
fn file_shapes_require_exactly_one_source() {
    let req = request(
        vec![loc("/a.txt", Kind::File), loc("/b.txt", Kind::File)],
        loc("/out", Kind::Directory),
    );
    for shape in [Shape::FileToFile, Shape::FileToFolder] {
        let err = validator().validate(&req, shape).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::InvalidArgumentCount {
                expected: "1",
                got: 2
            }
        );
    }
}

#[test]
fn file_to_folder_accepts_existing_folder_and_missing_target() {
    for target in [loc("/out", Kind::Directory), loc("/new", Kind::Missing)] {
        let req = request(vec![loc("/a.txt", Kind::File)], target);
        assert!(validator().validate(&req, Shape::FileToFolder).is_ok());
    }
}

#[test]
fn file_to_folder_rejects_file_target() {
    let req = request(vec![loc("/a.txt", Kind::File)], loc("/b.txt", Kind::File));
    let err = validator().validate(&req, Shape::FileToFolder).unwrap_err();
    assert_eq!(err, SyntaxError::TargetNotFolder { path: "/b.txt".into() });
}

#[test]
fn empty_source_list_cannot_be_built() {
    let err = OperationRequest::new(vec![], loc("/t", Kind::Directory), Operation::Move).unwrap_err();
    assert_eq!(err.kind(), "invalid_argument_count");
}
